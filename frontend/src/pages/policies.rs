use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::Text;
use crate::components::layout::{use_document_title, PageLayout};
use crate::config::CONTACT_EMAIL;
use crate::i18n::use_language;
use crate::Route;

#[derive(Properties, PartialEq)]
struct LegalPageProps {
    title: Text,
    sections: Vec<(Text, Text)>,
}

#[function_component(LegalPage)]
fn legal_page(props: &LegalPageProps) -> Html {
    let language = use_language();
    let font = language.arabic_font();

    use_document_title(format!("{} | {}", props.title.get(language), language.pick("Alpha Core Solutions", "ألفا كور سوليوشنز")));

    html! {
        <PageLayout main_class={classes!("page-top")}>
            <div class="legal-content">
                <div>
                    <h1 class={classes!(language.font("font-display"))}>{props.title.get(language)}</h1>
                    { for props.sections.iter().map(|(heading, body)| html! {
                        <section>
                            <h2 class={classes!(font)}>{heading.get(language)}</h2>
                            <p class={classes!(font)}>{body.get(language)}</p>
                        </section>
                    }) }
                    <p class={classes!("legal-contact", font)}>
                        {language.pick("Questions? Write to ", "لأي استفسار راسلنا على ")}
                        <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                    </p>
                </div>
            </div>
            <style>
                {r#"
                .legal-content {
                    padding: 4rem 2rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .legal-content > div {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(220, 38, 38, 0.15);
                    border-radius: 16px;
                    padding: 3rem;
                    max-width: 800px;
                    backdrop-filter: blur(10px);
                }
                .legal-content h1 {
                    font-size: 2rem;
                    margin-bottom: 2rem;
                }
                .legal-content section {
                    background: rgba(0, 0, 0, 0.2);
                    border-radius: 12px;
                    padding: 1.5rem 2rem;
                    margin: 1.25rem 0;
                }
                .legal-content h2 {
                    color: #dc2626;
                    font-size: 1.25rem;
                    margin-bottom: 0.75rem;
                }
                .legal-content p {
                    color: #d4d4d8;
                    line-height: 1.7;
                }
                .legal-contact a {
                    color: #dc2626;
                }
                "#}
            </style>
        </PageLayout>
    }
}

#[function_component(CookiePolicy)]
pub fn cookie_policy() -> Html {
    let sections = vec![
        (
            Text::new("What we store", "ما الذي نخزنه"),
            Text::new(
                "This site stores two small values in your browser's local storage: your cookie choice and your preferred language. Nothing is sent to our servers.",
                "يخزن هذا الموقع قيمتين صغيرتين في التخزين المحلي لمتصفحك: اختيارك بشأن ملفات تعريف الارتباط ولغتك المفضلة. لا يتم إرسال أي منها إلى خوادمنا.",
            ),
        ),
        (
            Text::new("Strictly necessary", "الضرورية فقط"),
            Text::new(
                "Choosing \"Strictly Necessary Only\" keeps the site working with no analytics or marketing technologies.",
                "اختيار \"الضرورية فقط\" يُبقي الموقع يعمل دون أي تقنيات تحليلية أو تسويقية.",
            ),
        ),
        (
            Text::new("Accept all", "قبول الكل"),
            Text::new(
                "Choosing \"Accept All\" allows the embedded map and similar third-party services to set their own cookies.",
                "اختيار \"قبول الكل\" يسمح للخريطة المضمنة والخدمات المماثلة من أطراف ثالثة بتعيين ملفات تعريف الارتباط الخاصة بها.",
            ),
        ),
        (
            Text::new("Changing your mind", "تغيير اختيارك"),
            Text::new(
                "Clear this site's data in your browser settings and the consent banner will appear again on your next visit.",
                "امسح بيانات هذا الموقع من إعدادات متصفحك وسيظهر شريط الموافقة مرة أخرى في زيارتك التالية.",
            ),
        ),
    ];

    html! {
        <LegalPage title={Text::new("Cookie Policy", "سياسة ملفات تعريف الارتباط")} sections={sections} />
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    let sections = vec![
        (
            Text::new("Information you send us", "المعلومات التي ترسلها إلينا"),
            Text::new(
                "When you use the contact form we receive your name, email, and optionally your phone number, company and the service you are interested in, together with your message.",
                "عند استخدام نموذج التواصل نستلم اسمك وبريدك الإلكتروني، واختيارياً رقم هاتفك وشركتك والخدمة التي تهمك، إلى جانب رسالتك.",
            ),
        ),
        (
            Text::new("How we use it", "كيف نستخدمها"),
            Text::new(
                "Inquiries are forwarded to our sales team by email and used only to answer your request.",
                "تُحوّل الاستفسارات إلى فريق المبيعات عبر البريد الإلكتروني وتُستخدم فقط للرد على طلبك.",
            ),
        ),
        (
            Text::new("Retention", "مدة الاحتفاظ"),
            Text::new(
                "We keep inquiry emails for as long as needed to serve the request and meet our legal obligations.",
                "نحتفظ برسائل الاستفسارات طوال المدة اللازمة لخدمة الطلب والوفاء بالتزاماتنا القانونية.",
            ),
        ),
    ];

    html! {
        <LegalPage title={Text::new("Privacy Policy", "سياسة الخصوصية")} sections={sections} />
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let language = use_language();
    use_document_title(language.pick("Page Not Found | Alpha Core Solutions", "الصفحة غير موجودة | ألفا كور سوليوشنز").to_string());

    html! {
        <PageLayout main_class={classes!("page-top")}>
            <section class="section-padding">
                <div class="container-premium center">
                    <h1 class={classes!("text-hero", language.font("font-display"))}>{"404"}</h1>
                    <p class={classes!("lead", language.arabic_font())}>
                        {language.pick("This page does not exist.", "هذه الصفحة غير موجودة.")}
                    </p>
                    <Link<Route> to={Route::Home} classes={classes!("btn-premium", language.arabic_font())}>
                        {language.pick("Back to Home", "العودة للرئيسية")}
                    </Link<Route>>
                </div>
            </section>
        </PageLayout>
    }
}
