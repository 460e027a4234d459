use log::info;
use web_sys::window;
use yew::prelude::*;

use crate::storage::{set_or_warn, BrowserStorage, KeyValueStore};

pub const LANGUAGE_KEY: &str = "language";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("ar") => Language::Ar,
            _ => Language::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn is_arabic(&self) -> bool {
        matches!(self, Language::Ar)
    }

    pub fn dir(&self) -> &'static str {
        if self.is_arabic() { "rtl" } else { "ltr" }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    /// Picks between the two translations of a string.
    pub fn pick<'a>(&self, en: &'a str, ar: &'a str) -> &'a str {
        match self {
            Language::En => en,
            Language::Ar => ar,
        }
    }

    pub fn arabic_font(&self) -> Option<&'static str> {
        self.is_arabic().then_some("font-arabic")
    }

    /// `font-arabic` for Arabic text, otherwise `fallback`.
    pub fn font<'a>(&self, fallback: &'a str) -> &'a str {
        if self.is_arabic() { "font-arabic" } else { fallback }
    }
}

pub fn load_language(store: &impl KeyValueStore) -> Language {
    Language::from_code(store.get(LANGUAGE_KEY).as_deref())
}

pub fn save_language(store: &impl KeyValueStore, language: Language) {
    set_or_warn(store, LANGUAGE_KEY, language.code());
}

#[derive(Clone, PartialEq)]
pub struct LanguageContext {
    pub language: Language,
    pub set_language: Callback<Language>,
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    pub children: Children,
}

#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let language = use_state(|| load_language(&BrowserStorage));

    {
        use_effect_with_deps(
            move |language: &Language| {
                let root = window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element());
                if let Some(root) = root {
                    let _ = root.set_attribute("lang", language.code());
                    let _ = root.set_attribute("dir", language.dir());
                }
                || ()
            },
            *language,
        );
    }

    let set_language = {
        let language = language.clone();
        Callback::from(move |next: Language| {
            info!("Switching language to {}", next.code());
            save_language(&BrowserStorage, next);
            language.set(next);
        })
    };

    let context = LanguageContext {
        language: *language,
        set_language,
    };

    html! {
        <ContextProvider<LanguageContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<LanguageContext>>
    }
}

/// Current language, `en` when rendered outside a provider.
#[hook]
pub fn use_language() -> Language {
    use_context::<LanguageContext>()
        .map(|ctx| ctx.language)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn unknown_codes_fall_back_to_english() {
        assert_eq!(Language::from_code(None), Language::En);
        assert_eq!(Language::from_code(Some("fr")), Language::En);
        assert_eq!(Language::from_code(Some("ar")), Language::Ar);
    }

    #[test]
    fn arabic_is_right_to_left_with_arabic_font() {
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::Ar.font("font-display"), "font-arabic");
        assert_eq!(Language::En.font("font-display"), "font-display");
        assert_eq!(Language::En.arabic_font(), None);
    }

    #[test]
    fn saved_language_survives_reload() {
        let storage = MemoryStorage::new();
        assert_eq!(load_language(&storage), Language::En);

        save_language(&storage, Language::En.toggled());
        assert_eq!(load_language(&storage), Language::Ar);
    }
}
