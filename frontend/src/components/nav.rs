use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::LanguageContext;
use crate::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let context = use_context::<LanguageContext>();
    let language = context.as_ref().map(|ctx| ctx.language).unwrap_or_default();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::<dyn Fn()>::new(move || {
                if let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                    is_scrolled.set(scroll_y > 50.0);
                }
            });

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let toggle_language = {
        let context = context.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(ctx) = &context {
                ctx.set_language.emit(ctx.language.toggled());
            }
        })
    };

    let font = language.arabic_font();
    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src="/assets/logo.jpg" alt="Alpha Core Solutions" />
                    <span class={classes!(font)}>{language.pick("Alpha Core Solutions", "ألفا كور سوليوشنز")}</span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes={classes!("nav-link", font)}>
                            {language.pick("Home", "الرئيسية")}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Projects} classes={classes!("nav-link", font)}>
                            {language.pick("Projects", "المشاريع")}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes={classes!("nav-cta", font)}>
                            {language.pick("Contact Us", "تواصل معنا")}
                        </Link<Route>>
                    </div>
                    <button class="nav-language" onclick={toggle_language}>
                        {language.pick("العربية", "English")}
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1.25rem 0;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    padding: 0.75rem 0;
                    background: rgba(10, 10, 10, 0.95);
                    backdrop-filter: blur(16px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                }
                .nav-content {
                    max-width: 1400px;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #fff;
                    font-weight: 700;
                    text-decoration: none;
                }
                .nav-logo img {
                    height: 40px;
                    width: auto;
                    border-radius: 6px;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: #d4d4d8;
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .nav-link:hover {
                    color: #fff;
                }
                .nav-cta {
                    padding: 0.5rem 1.25rem;
                    border-radius: 0.75rem;
                    background: linear-gradient(135deg, #dc2626, #991b1b);
                    color: #fff;
                    text-decoration: none;
                }
                .nav-language {
                    background: transparent;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    color: #fff;
                    padding: 0.4rem 0.9rem;
                    border-radius: 0.5rem;
                    cursor: pointer;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1.5rem;
                        background: rgba(10, 10, 10, 0.98);
                    }
                }
                "#}
            </style>
        </nav>
    }
}
