use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod catalog;
mod i18n;
mod storage;
mod consent;
mod components {
    pub mod background_pattern;
    pub mod contact_form;
    pub mod cookie_consent;
    pub mod footer;
    pub mod layout;
    pub mod nav;
    pub mod reveal;
}
mod pages {
    pub mod home;
    pub mod projects;
    pub mod contact;
    pub mod policies;
}

use i18n::LanguageProvider;
use pages::{
    home::Home,
    projects::ProjectsPage,
    contact::ContactPage,
    policies::{CookiePolicy, PrivacyPolicy, NotFound},
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/projects")]
    Projects,
    #[at("/contact")]
    Contact,
    #[at("/cookie-policy")]
    CookiePolicy,
    #[at("/privacy-policy")]
    PrivacyPolicy,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Projects => {
            info!("Rendering Projects page");
            html! { <ProjectsPage /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        },
        Route::CookiePolicy => {
            info!("Rendering Cookie Policy page");
            html! { <CookiePolicy /> }
        },
        Route::PrivacyPolicy => {
            info!("Rendering Privacy Policy page");
            html! { <PrivacyPolicy /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <LanguageProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
            <style>
                {r#"
                :root {
                    color-scheme: dark;
                }
                body {
                    margin: 0;
                    background: #0a0a0a;
                    color: #fafafa;
                    font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                }
                * {
                    box-sizing: border-box;
                }
                .page {
                    min-height: 100vh;
                    position: relative;
                }
                .page > main {
                    position: relative;
                    z-index: 1;
                }
                .page-top {
                    padding-top: 6rem;
                }
                .font-display {
                    font-family: "Space Grotesk", "Inter", sans-serif;
                }
                .font-arabic {
                    font-family: "Cairo", "Tajawal", sans-serif;
                }
                .container-premium {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 2rem;
                }
                .section-padding {
                    padding: 6rem 0;
                }
                .page-hero {
                    background: linear-gradient(180deg, rgba(39, 39, 42, 0.3), transparent);
                }
                .center {
                    text-align: center;
                }
                .eyebrow {
                    display: inline-block;
                    font-size: 0.875rem;
                    font-weight: 600;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: #dc2626;
                    margin-bottom: 1rem;
                }
                .text-hero {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    font-weight: 700;
                    line-height: 1.1;
                    margin: 0 0 1.5rem;
                }
                .text-section {
                    font-size: clamp(2rem, 4vw, 3rem);
                    font-weight: 700;
                    margin: 0 0 1rem;
                }
                .section-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .lead {
                    font-size: 1.25rem;
                    color: #a1a1aa;
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .muted {
                    color: #a1a1aa;
                }
                .tiny {
                    font-size: 0.75rem;
                }
                .accent {
                    color: #dc2626;
                }
                .gradient-text {
                    background: linear-gradient(135deg, #ef4444, #f97316);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .glass-card {
                    background: rgba(24, 24, 27, 0.6);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 1rem;
                    backdrop-filter: blur(12px);
                }
                .card-pad {
                    padding: 1.5rem;
                }
                .card-title {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin: 0 0 0.75rem;
                }
                .card-hover {
                    transition: transform 0.3s, box-shadow 0.3s;
                }
                .card-hover:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 20px 40px rgba(220, 38, 38, 0.15);
                }
                .icon-tile {
                    width: 56px;
                    height: 56px;
                    border-radius: 0.75rem;
                    background: linear-gradient(135deg, #dc2626, #991b1b);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin: 0 auto 1rem;
                }
                .icon-tile img {
                    width: 28px;
                    height: 28px;
                }
                .btn-premium, .btn-outline {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.9rem 2rem;
                    border-radius: 0.75rem;
                    font-weight: 600;
                    text-decoration: none;
                    cursor: pointer;
                    border: none;
                }
                .btn-premium {
                    background: linear-gradient(135deg, #dc2626, #991b1b);
                    color: #fff;
                }
                .btn-premium:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                .btn-outline {
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    color: #fff;
                }
                .grid-2, .grid-3, .grid-4 {
                    display: grid;
                    gap: 2rem;
                }
                .grid-2 { grid-template-columns: repeat(2, 1fr); }
                .grid-3 { grid-template-columns: repeat(3, 1fr); }
                .grid-4 { grid-template-columns: repeat(4, 1fr); }
                .reveal {
                    transition: all 0.7s ease-out;
                }
                .opacity-0 { opacity: 0; }
                .opacity-100 { opacity: 1; }
                .translate-y-0 { transform: translateY(0); }
                .translate-y-10 { transform: translateY(2.5rem); }
                .translate-y-20 { transform: translateY(5rem); }
                .stats-band {
                    padding: 4rem 0;
                    border-top: 1px solid rgba(255, 255, 255, 0.06);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.06);
                }
                .stat {
                    text-align: center;
                }
                .stat-value {
                    font-size: 3rem;
                    font-weight: 700;
                    margin: 0;
                }
                .filter-row {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-bottom: 3rem;
                }
                .filter-tab {
                    padding: 0.625rem 1.25rem;
                    border-radius: 0.75rem;
                    border: none;
                    font-size: 0.875rem;
                    font-weight: 500;
                    cursor: pointer;
                    color: #a1a1aa;
                    background: rgba(39, 39, 42, 0.5);
                    transition: all 0.3s;
                }
                .filter-tab:hover {
                    color: #fff;
                    background: rgba(39, 39, 42, 1);
                }
                .filter-tab.active {
                    color: #fff;
                    background: linear-gradient(135deg, #dc2626, #991b1b);
                    box-shadow: 0 0 24px rgba(220, 38, 38, 0.35);
                }
                .project-card {
                    border-radius: 1rem;
                    overflow: hidden;
                    background: #18181b;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                }
                .project-image {
                    position: relative;
                    height: 14rem;
                    overflow: hidden;
                }
                .project-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s;
                }
                .project-card:hover .project-image img {
                    transform: scale(1.1);
                }
                .project-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(0deg, #18181b, rgba(24, 24, 27, 0.5), transparent);
                }
                .project-badge {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    padding: 0.375rem 0.75rem;
                    border-radius: 999px;
                    font-size: 0.75rem;
                    color: #dc2626;
                    background: rgba(220, 38, 38, 0.2);
                    border: 1px solid rgba(220, 38, 38, 0.3);
                }
                .project-body {
                    padding: 1.5rem;
                }
                .project-location {
                    color: #dc2626;
                    font-size: 0.875rem;
                    margin-bottom: 0.5rem;
                }
                .project-stats {
                    display: flex;
                    gap: 1rem;
                }
                .project-stat {
                    text-align: center;
                }
                .stat-small {
                    font-size: 1.125rem;
                    font-weight: 700;
                    margin: 0;
                }
                .partner-row {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }
                .partner {
                    padding: 1rem 2rem;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    color: #d4d4d8;
                    font-weight: 600;
                }
                [dir="rtl"] .project-badge {
                    right: auto;
                    left: 1rem;
                }
                @media (max-width: 1024px) {
                    .grid-3, .grid-4 { grid-template-columns: repeat(2, 1fr); }
                }
                @media (max-width: 768px) {
                    .grid-2, .grid-3, .grid-4 { grid-template-columns: 1fr; }
                    .section-padding { padding: 4rem 0; }
                }
                "#}
            </style>
        </LanguageProvider>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
