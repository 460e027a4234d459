use web_sys::window;
use yew::prelude::*;

use crate::components::background_pattern::BackgroundPattern;
use crate::components::cookie_consent::CookieConsent;
use crate::components::footer::Footer;
use crate::components::nav::Navbar;

/// Keeps `document.title` in sync with `title`.
#[hook]
pub fn use_document_title(title: String) {
    use_effect_with_deps(
        move |title: &String| {
            if let Some(document) = window().and_then(|w| w.document()) {
                document.set_title(title);
            }
            || ()
        },
        title,
    );
}

#[derive(Properties, PartialEq)]
pub struct PageLayoutProps {
    #[prop_or_default]
    pub main_class: Classes,
    pub children: Children,
}

/// Navbar, footer and consent banner around a page's main content.
#[function_component(PageLayout)]
pub fn page_layout(props: &PageLayoutProps) -> Html {
    html! {
        <div class="page">
            <BackgroundPattern />
            <Navbar />
            <main class={props.main_class.clone()}>
                { for props.children.iter() }
            </main>
            <Footer />
            <CookieConsent />
        </div>
    }
}
