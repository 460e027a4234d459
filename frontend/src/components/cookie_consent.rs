use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::consent::gate::{ConsentGate, GateAction};
use crate::consent::record::{load_consent, ConsentChoice};
use crate::consent::record_choice;
use crate::i18n::{use_language, Language};
use crate::storage::BrowserStorage;
use crate::Route;

struct BannerCopy {
    title: &'static str,
    description: &'static str,
    accept_all: &'static str,
    essential_only: &'static str,
    consent_settings: &'static str,
    learn_more: &'static str,
    privacy_policy: &'static str,
}

fn banner_copy(language: Language) -> BannerCopy {
    match language {
        Language::En => BannerCopy {
            title: "Consent for Data Processing",
            description: "This website uses cookies and similar technologies (\"Technologies\") that enable us to provide you with optimized online experiences and enable content to your interests. By clicking \"Accept All\", you consent that these Technologies may be used and personal information may be transmitted to and stored by our service providers.",
            accept_all: "Accept All",
            essential_only: "Strictly Necessary Only",
            consent_settings: "Consent Settings",
            learn_more: "Learn more about our Cookie Policy",
            privacy_policy: "Privacy Policy",
        },
        Language::Ar => BannerCopy {
            title: "موافقة على معالجة البيانات",
            description: "يستخدم هذا الموقع ملفات تعريف الارتباط والتقنيات المماثلة (\"التقنيات\") التي تمكننا من تزويدك بتجارب محسّنة عبر الإنترنت وتمكين المحتوى الذي يناسب اهتماماتك. بالنقر على \"قبول الكل\"، فإنك توافق على استخدام هذه التقنيات ونقل المعلومات الشخصية وتخزينها بواسطة مزودي الخدمة لدينا.",
            accept_all: "قبول الكل",
            essential_only: "الضرورية فقط",
            consent_settings: "إعدادات الموافقة",
            learn_more: "تعرف على سياسة ملفات تعريف الارتباط",
            privacy_policy: "سياسة الخصوصية",
        },
    }
}

#[function_component(CookieConsent)]
pub fn cookie_consent() -> Html {
    let gate = use_reducer(|| ConsentGate::new(load_consent(&BrowserStorage)));
    let language = use_language();

    // One timeout per phase. Dropping it in the cleanup cancels it when the
    // phase moves on or the page unmounts.
    {
        let dispatcher = gate.dispatcher();
        use_effect_with_deps(
            move |gate: &ConsentGate| {
                let timeout = gate.pending_timer().map(|(timer, delay)| {
                    Timeout::new(delay, move || dispatcher.dispatch(GateAction::Fire(timer)))
                });
                move || drop(timeout)
            },
            *gate,
        );
    }

    let on_choice = |choice: ConsentChoice| {
        let gate = gate.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Cookie consent chosen: {:?}", choice);
            let action = record_choice(&BrowserStorage, &gate, choice);
            gate.dispatch(action);
        })
    };
    let accept_all = on_choice(ConsentChoice::AcceptAll);
    let accept_essential = on_choice(ConsentChoice::AcceptEssential);
    let open_settings = {
        let gate = gate.clone();
        Callback::from(move |_: MouseEvent| gate.dispatch(GateAction::OpenSettings))
    };

    let banner = gate.banner();
    if !banner.mounted {
        return html! {};
    }

    let copy = banner_copy(language);
    let font = language.arabic_font();

    html! {
        <div class={classes!("consent-banner", banner.visible.then(|| "visible"))}>
            <div class="consent-bar">
                <div class="consent-inner">
                    <div class="consent-text">
                        <h3 class={classes!("consent-title", font)}>{copy.title}</h3>
                        <p class={classes!("consent-description", font)}>{copy.description}</p>
                        <div class="consent-links">
                            <Link<Route> to={Route::CookiePolicy} classes={classes!("consent-link", font)}>
                                {copy.learn_more}
                            </Link<Route>>
                            <Link<Route> to={Route::PrivacyPolicy} classes={classes!("consent-link", font)}>
                                {copy.privacy_policy}
                            </Link<Route>>
                        </div>
                    </div>
                    <div class="consent-actions">
                        <button class={classes!("consent-button", "secondary", font)} onclick={open_settings}>
                            {copy.consent_settings}
                        </button>
                        <button class={classes!("consent-button", "secondary", font)} onclick={accept_essential}>
                            {copy.essential_only}
                        </button>
                        <button class={classes!("consent-button", "primary", font)} onclick={accept_all}>
                            {copy.accept_all}
                        </button>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .consent-banner {
                    position: fixed;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    z-index: 10000;
                    padding: 1rem;
                    opacity: 0;
                    transform: translateY(100%);
                    transition: all 0.5s ease-out;
                }
                .consent-banner.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .consent-bar {
                    width: 100%;
                    background: rgba(26, 26, 26, 0.98);
                    backdrop-filter: blur(12px);
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .consent-inner {
                    max-width: 1400px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .consent-text {
                    flex: 1;
                }
                .consent-title {
                    font-size: 1rem;
                    font-weight: 700;
                    color: #fff;
                    margin-bottom: 0.5rem;
                }
                .consent-description {
                    font-size: 0.875rem;
                    color: #a1a1aa;
                    line-height: 1.6;
                    margin-bottom: 0.75rem;
                    max-width: 56rem;
                }
                .consent-links {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .consent-link {
                    font-size: 0.75rem;
                    color: #dc2626;
                }
                .consent-link:hover {
                    text-decoration: underline;
                }
                .consent-actions {
                    display: flex;
                    gap: 0.5rem;
                }
                .consent-button {
                    padding: 0.625rem 1rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #fff;
                    border: none;
                    border-radius: 4px;
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .consent-button.secondary {
                    background: #3a7d44;
                }
                .consent-button.secondary:hover {
                    background: #2d6236;
                }
                .consent-button.primary {
                    padding: 0.625rem 1.5rem;
                    font-weight: 600;
                    background: #dc2626;
                }
                .consent-button.primary:hover {
                    background: #b91c1c;
                    transform: scale(1.02);
                }
                @media (max-width: 1024px) {
                    .consent-inner {
                        flex-direction: column;
                        align-items: flex-start;
                        padding: 1rem;
                    }
                    .consent-actions {
                        width: 100%;
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </div>
    }
}
