use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONTACT_EMAIL;
use crate::i18n::use_language;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let language = use_language();
    let font = language.arabic_font();
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content container-premium">
                <div class="footer-brand">
                    <img src="/assets/logo.jpg" alt="Alpha Core Solutions" />
                    <p class={classes!(font)}>
                        {language.pick(
                            "Advanced physical security solutions for the Kingdom's critical infrastructure.",
                            "حلول أمنية متقدمة لحماية البنية التحتية الحيوية في المملكة.",
                        )}
                    </p>
                </div>
                <div class="footer-links">
                    <h4 class={classes!(font)}>{language.pick("Quick Links", "روابط سريعة")}</h4>
                    <Link<Route> to={Route::Home} classes={classes!(font)}>{language.pick("Home", "الرئيسية")}</Link<Route>>
                    <Link<Route> to={Route::Projects} classes={classes!(font)}>{language.pick("Projects", "المشاريع")}</Link<Route>>
                    <Link<Route> to={Route::Contact} classes={classes!(font)}>{language.pick("Contact", "اتصل بنا")}</Link<Route>>
                </div>
                <div class="footer-links">
                    <h4 class={classes!(font)}>{language.pick("Legal", "قانوني")}</h4>
                    <Link<Route> to={Route::PrivacyPolicy} classes={classes!(font)}>{language.pick("Privacy Policy", "سياسة الخصوصية")}</Link<Route>>
                    <Link<Route> to={Route::CookiePolicy} classes={classes!(font)}>{language.pick("Cookie Policy", "سياسة ملفات تعريف الارتباط")}</Link<Route>>
                </div>
                <div class="footer-links">
                    <h4 class={classes!(font)}>{language.pick("Contact", "تواصل")}</h4>
                    <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                    <span class={classes!(font)}>{language.pick("Riyadh, Kingdom of Saudi Arabia", "الرياض، المملكة العربية السعودية")}</span>
                </div>
            </div>
            <div class={classes!("footer-bottom", font)}>
                {format!("© {} {}", year, language.pick("Alpha Core Solutions. All rights reserved.", "ألفا كور سوليوشنز. جميع الحقوق محفوظة."))}
            </div>
            <style>
                {r#"
                .site-footer {
                    position: relative;
                    z-index: 1;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                    padding: 4rem 0 2rem;
                    background: #0a0a0a;
                }
                .footer-content {
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 1fr;
                    gap: 2rem;
                }
                .footer-brand img {
                    height: 48px;
                    border-radius: 6px;
                    margin-bottom: 1rem;
                }
                .footer-brand p {
                    color: #a1a1aa;
                    max-width: 24rem;
                }
                .footer-links {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .footer-links h4 {
                    color: #fff;
                    margin-bottom: 0.5rem;
                }
                .footer-links a, .footer-links span {
                    color: #a1a1aa;
                    text-decoration: none;
                }
                .footer-links a:hover {
                    color: #dc2626;
                }
                .footer-bottom {
                    text-align: center;
                    color: #71717a;
                    font-size: 0.875rem;
                    margin-top: 3rem;
                }
                @media (max-width: 768px) {
                    .footer-content {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
