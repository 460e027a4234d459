use yew::prelude::*;

use crate::catalog::Text;
use crate::components::contact_form::ContactSection;
use crate::components::layout::{use_document_title, PageLayout};
use crate::config::CONTACT_EMAIL;
use crate::i18n::use_language;

const MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d463877.0745971073!2d46.49574169843749!3d24.725338799999997!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3e2f03890d489399%3A0xba974d1c98e79fd5!2sRiyadh%20Saudi%20Arabia!5e0!3m2!1sen!2sus!4v1704067200000!5m2!1sen!2sus";

const HERO_TITLE: Text = Text::new("Get In Touch", "تواصل معنا");
const HERO_SUBTITLE: Text = Text::new(
    "Ready to secure your facility? Let's start a conversation.",
    "هل أنت مستعد لتأمين منشأتك؟ دعنا نبدأ محادثة.",
);
const ADDRESS: Text = Text::new("Riyadh, Kingdom of Saudi Arabia", "الرياض، المملكة العربية السعودية");
const HOURS: Text = Text::new(
    "Sunday - Thursday: 8:00 AM - 6:00 PM",
    "الأحد - الخميس: 8:00 صباحاً - 6:00 مساءً",
);
const EMERGENCY: Text = Text::new("24/7 Emergency Support Available", "دعم الطوارئ متاح 24/7");

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let language = use_language();
    let font = language.arabic_font();

    use_document_title(
        language
            .pick("Contact Us | Alpha Core Solutions", "اتصل بنا | ألفا كور سوليوشنز")
            .to_string(),
    );

    html! {
        <PageLayout main_class={classes!("page-top")}>
            <section class="section-padding page-hero">
                <div class="container-premium center">
                    <span class={classes!("eyebrow", font)}>{language.pick("CONTACT US", "تواصل معنا")}</span>
                    <h1 class={classes!("text-hero", language.font("font-display"))}>{HERO_TITLE.get(language)}</h1>
                    <p class={classes!("lead", font)}>{HERO_SUBTITLE.get(language)}</p>
                </div>
            </section>

            <section class="info-section">
                <div class="container-premium grid-3">
                    <div class="glass-card card-pad center">
                        <div class="icon-tile"><img src="/assets/icons/map-pin.svg" alt="" /></div>
                        <h3 class={classes!("card-title", font)}>{language.pick("Address", "العنوان")}</h3>
                        <p class={classes!("muted", font)}>{ADDRESS.get(language)}</p>
                    </div>
                    <div class="glass-card card-pad center">
                        <div class="icon-tile"><img src="/assets/icons/mail.svg" alt="" /></div>
                        <h3 class={classes!("card-title", font)}>{language.pick("Email", "البريد الإلكتروني")}</h3>
                        <a class="accent-link" href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                    </div>
                    <div class="glass-card card-pad center">
                        <div class="icon-tile"><img src="/assets/icons/clock.svg" alt="" /></div>
                        <h3 class={classes!("card-title", font)}>{language.pick("Working Hours", "ساعات العمل")}</h3>
                        <p class={classes!("muted", font)}>{HOURS.get(language)}</p>
                        <p class={classes!("accent", "tiny", font)}>{EMERGENCY.get(language)}</p>
                    </div>
                </div>
            </section>

            <ContactSection />

            <section class="map-section">
                <div class="container-premium">
                    <div class="glass-card map-frame">
                        <iframe
                            src={MAP_EMBED}
                            width="100%"
                            height="400"
                            style="border: 0;"
                            allowfullscreen=true
                            loading="lazy"
                            referrerpolicy="no-referrer-when-downgrade"
                            title="Alpha Core Solutions Location - Riyadh, Saudi Arabia"
                        />
                    </div>
                </div>
            </section>
            <style>
                {r#"
                .info-section, .map-section {
                    padding: 4rem 0;
                }
                .accent-link {
                    color: #dc2626;
                }
                .accent-link:hover {
                    text-decoration: underline;
                }
                .map-frame {
                    padding: 0.5rem;
                    overflow: hidden;
                    border-radius: 1rem;
                }
                .map-frame iframe {
                    border-radius: 0.75rem;
                }
                "#}
            </style>
        </PageLayout>
    }
}
