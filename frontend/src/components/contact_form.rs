use gloo_net::http::Request;
use log::{error, info};
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::catalog::{service_by_id, SERVICES};
use crate::config::{self, CONTACT_EMAIL};
use crate::i18n::{use_language, Language};

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub message: String,
    pub language: String,
}

#[derive(Deserialize)]
struct InquiryReceipt {
    id: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormError {
    NameLength,
    InvalidEmail,
    InvalidPhone,
    DetailTooLong,
    MessageLength,
}

const MAX_DETAIL_LEN: usize = 200;

impl FormError {
    pub fn message(&self, language: Language) -> &'static str {
        match self {
            FormError::NameLength => language.pick(
                "Please enter your full name.",
                "يرجى إدخال اسمك الكامل.",
            ),
            FormError::InvalidEmail => language.pick(
                "Please enter a valid email address.",
                "يرجى إدخال بريد إلكتروني صحيح.",
            ),
            FormError::InvalidPhone => language.pick(
                "Phone numbers may only contain digits, spaces and + - ( ).",
                "يجب أن يحتوي رقم الهاتف على أرقام ومسافات و + - ( ) فقط.",
            ),
            FormError::DetailTooLong => language.pick(
                "Company and service must be 200 characters or fewer.",
                "يجب ألا يتجاوز اسم الشركة والخدمة 200 حرف.",
            ),
            FormError::MessageLength => language.pick(
                "Please tell us a little more (at least 10 characters).",
                "يرجى كتابة تفاصيل أكثر (10 أحرف على الأقل).",
            ),
        }
    }
}

pub fn looks_like_email(email: &str) -> bool {
    if email.len() > 254 || email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Same rules the backend enforces, checked before anything is sent.
pub fn validate_inquiry(inquiry: &ContactInquiry) -> Result<(), FormError> {
    let name_len = inquiry.name.trim().chars().count();
    if !(2..=100).contains(&name_len) {
        return Err(FormError::NameLength);
    }
    if !looks_like_email(inquiry.email.trim()) {
        return Err(FormError::InvalidEmail);
    }
    if let Some(phone) = &inquiry.phone {
        let valid = phone.chars().count() <= 32
            && phone.chars().all(|c| c.is_ascii_digit() || " +-()".contains(c));
        if !valid {
            return Err(FormError::InvalidPhone);
        }
    }
    for detail in [&inquiry.company, &inquiry.service].into_iter().flatten() {
        if detail.trim().chars().count() > MAX_DETAIL_LEN {
            return Err(FormError::DetailTooLong);
        }
    }
    let message_len = inquiry.message.trim().chars().count();
    if !(10..=5000).contains(&message_len) {
        return Err(FormError::MessageLength);
    }
    Ok(())
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Clone, Debug, PartialEq)]
enum SubmitStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let language = use_language();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let company = use_state(String::new);
    let service = use_state(String::new);
    let message = use_state(String::new);
    let status = use_state(|| SubmitStatus::Idle);

    let on_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            handle.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };
    let on_service = {
        let service = service.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            service.set(select.value());
        })
    };

    let onsubmit = {
        let (name, email, phone, company, service, message, status) = (
            name.clone(),
            email.clone(),
            phone.clone(),
            company.clone(),
            service.clone(),
            message.clone(),
            status.clone(),
        );
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == SubmitStatus::Sending {
                return;
            }

            let inquiry = ContactInquiry {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                phone: optional(&phone),
                company: optional(&company),
                service: optional(&service).filter(|id| service_by_id(id).is_some()),
                message: message.trim().to_string(),
                language: language.code().to_string(),
            };
            if let Err(err) = validate_inquiry(&inquiry) {
                status.set(SubmitStatus::Failed(err.message(language).to_string()));
                return;
            }

            status.set(SubmitStatus::Sending);
            let (name, email, phone, company, service, message, status) = (
                name.clone(),
                email.clone(),
                phone.clone(),
                company.clone(),
                service.clone(),
                message.clone(),
                status.clone(),
            );
            spawn_local(async move {
                let url = format!("{}/api/contact", config::get_backend_url());
                let result = match Request::post(&url).json(&inquiry) {
                    Ok(request) => request.send().await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(response) if response.ok() => {
                        if let Ok(receipt) = response.json::<InquiryReceipt>().await {
                            info!("Inquiry {} received", receipt.id);
                        }
                        for field in [&name, &email, &phone, &company, &service, &message] {
                            field.set(String::new());
                        }
                        status.set(SubmitStatus::Sent);
                    }
                    Ok(response) => {
                        error!("Contact request rejected with status {}", response.status());
                        let text = if response.status() == 429 {
                            language.pick(
                                "Too many requests. Please try again in a minute.",
                                "طلبات كثيرة جداً. يرجى المحاولة بعد دقيقة.",
                            )
                        } else {
                            language.pick(
                                "We could not send your message. Please email us directly.",
                                "تعذر إرسال رسالتك. يرجى مراسلتنا عبر البريد الإلكتروني مباشرة.",
                            )
                        };
                        status.set(SubmitStatus::Failed(text.to_string()));
                    }
                    Err(e) => {
                        error!("Contact request failed: {}", e);
                        status.set(SubmitStatus::Failed(
                            language
                                .pick(
                                    "Network error. Please try again.",
                                    "خطأ في الشبكة. يرجى المحاولة مرة أخرى.",
                                )
                                .to_string(),
                        ));
                    }
                }
            });
        })
    };

    let font = language.arabic_font();
    let sending = *status == SubmitStatus::Sending;

    html! {
        <section id="contact" class="section-padding contact-section">
            <div class="container-premium contact-grid">
                <div class="contact-intro">
                    <span class={classes!("eyebrow", font)}>{language.pick("GET IN TOUCH", "تواصل معنا")}</span>
                    <h2 class={classes!("text-section", language.font("font-display"))}>
                        {language.pick("Let's Secure Your Facility", "لنؤمّن منشأتك معاً")}
                    </h2>
                    <p class={classes!("muted", font)}>
                        {language.pick(
                            "Tell us about your site and our engineers will prepare a tailored security assessment.",
                            "أخبرنا عن موقعك وسيعدّ مهندسونا تقييماً أمنياً مخصصاً لك.",
                        )}
                    </p>
                    <a class="contact-mail" href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                </div>

                <form class="glass-card contact-form" {onsubmit}>
                    <div class="form-row">
                        <input type="text" placeholder={language.pick("Full name *", "الاسم الكامل *")}
                            class={classes!(font)} value={(*name).clone()} oninput={on_input(&name)} />
                        <input type="email" placeholder={language.pick("Email *", "البريد الإلكتروني *")}
                            value={(*email).clone()} oninput={on_input(&email)} />
                    </div>
                    <div class="form-row">
                        <input type="tel" placeholder={language.pick("Phone", "رقم الهاتف")}
                            value={(*phone).clone()} oninput={on_input(&phone)} />
                        <input type="text" placeholder={language.pick("Company", "الشركة")}
                            class={classes!(font)} value={(*company).clone()} oninput={on_input(&company)} />
                    </div>
                    <select class={classes!(font)} onchange={on_service}>
                        <option value="" selected={service.is_empty()}>
                            {language.pick("Service of interest", "الخدمة المطلوبة")}
                        </option>
                        { for SERVICES.iter().map(|s| html! {
                            <option value={s.id} selected={*service == s.id}>{s.title.get(language)}</option>
                        }) }
                    </select>
                    <textarea rows="5" placeholder={language.pick("How can we help? *", "كيف يمكننا مساعدتك؟ *")}
                        class={classes!(font)} value={(*message).clone()} oninput={on_message} />
                    {
                        match &*status {
                            SubmitStatus::Sent => html! {
                                <p class={classes!("form-success", font)}>
                                    {language.pick("Thank you! We will contact you shortly.", "شكراً لك! سنتواصل معك قريباً.")}
                                </p>
                            },
                            SubmitStatus::Failed(text) => html! {
                                <p class={classes!("form-error", font)}>{text.clone()}</p>
                            },
                            _ => html! {},
                        }
                    }
                    <button type="submit" class={classes!("btn-premium", font)} disabled={sending}>
                        {
                            if sending {
                                language.pick("Sending...", "جارٍ الإرسال...")
                            } else {
                                language.pick("Send Message", "إرسال الرسالة")
                            }
                        }
                    </button>
                </form>
            </div>
            <style>
                {r#"
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1.2fr;
                    gap: 3rem;
                    align-items: start;
                }
                .contact-mail {
                    display: inline-block;
                    margin-top: 1.5rem;
                    color: #dc2626;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 2rem;
                }
                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .contact-form input, .contact-form select, .contact-form textarea {
                    width: 100%;
                    padding: 0.8rem 1rem;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 0.75rem;
                    color: #fff;
                    font: inherit;
                }
                .form-success {
                    color: #4ade80;
                }
                .form-error {
                    color: #f87171;
                }
                @media (max-width: 900px) {
                    .contact-grid, .form-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inquiry() -> ContactInquiry {
        ContactInquiry {
            name: "Faisal Al-Harbi".to_string(),
            email: "faisal@example.sa".to_string(),
            phone: Some("+966 55 123 4567".to_string()),
            company: None,
            service: Some("cctv".to_string()),
            message: "We need cameras for a new warehouse.".to_string(),
            language: "en".to_string(),
        }
    }

    #[test]
    fn accepts_a_complete_inquiry() {
        assert_eq!(validate_inquiry(&inquiry()), Ok(()));
    }

    #[test]
    fn rejects_each_bad_field() {
        let mut bad = inquiry();
        bad.name = " A ".to_string();
        assert_eq!(validate_inquiry(&bad), Err(FormError::NameLength));

        let mut bad = inquiry();
        bad.email = "faisal@example".to_string();
        assert_eq!(validate_inquiry(&bad), Err(FormError::InvalidEmail));

        let mut bad = inquiry();
        bad.phone = Some("call me".to_string());
        assert_eq!(validate_inquiry(&bad), Err(FormError::InvalidPhone));

        let mut bad = inquiry();
        bad.company = Some("c".repeat(201));
        assert_eq!(validate_inquiry(&bad), Err(FormError::DetailTooLong));

        let mut bad = inquiry();
        bad.message = "Hi".to_string();
        assert_eq!(validate_inquiry(&bad), Err(FormError::MessageLength));
    }

    #[test]
    fn company_at_the_length_limit_is_accepted() {
        let mut edge = inquiry();
        edge.company = Some("c".repeat(200));
        assert_eq!(validate_inquiry(&edge), Ok(()));
    }

    #[test]
    fn email_shape_checks() {
        assert!(looks_like_email("info@alphacs.sa"));
        assert!(!looks_like_email("info@@alphacs.sa"));
        assert!(!looks_like_email("@alphacs.sa"));
        assert!(!looks_like_email("info@.sa"));
        assert!(!looks_like_email("info @alphacs.sa"));
    }

    #[test]
    fn blank_optional_fields_are_dropped() {
        assert_eq!(optional("   "), None);
        assert_eq!(optional(" Acme "), Some("Acme".to_string()));

        let mut plain = inquiry();
        plain.phone = None;
        let json = serde_json::to_value(&plain).unwrap();
        assert!(json.get("phone").is_none());
        assert!(json.get("company").is_none());
    }

    #[test]
    fn error_messages_are_localized() {
        assert_ne!(
            FormError::InvalidEmail.message(Language::En),
            FormError::InvalidEmail.message(Language::Ar)
        );
    }
}
