use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of a section that has to be on screen before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Turns true the first time `node` scrolls into view and stays true.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let in_view = use_state(|| false);

    {
        let setter = in_view.setter();
        use_effect_with_deps(
            move |_| {
                let mut observer: Option<IntersectionObserver> = None;
                let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                    move |entries: js_sys::Array, observer: IntersectionObserver| {
                        let seen = entries
                            .iter()
                            .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
                            .any(|entry| entry.is_intersecting());
                        if seen {
                            setter.set(true);
                            observer.disconnect();
                        }
                    },
                );

                if let Some(element) = node.cast::<Element>() {
                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(threshold));
                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                        Ok(created) => {
                            created.observe(&element);
                            observer = Some(created);
                        }
                        Err(e) => log::warn!("IntersectionObserver unavailable: {:?}", e),
                    }
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    *in_view
}

/// Classes for an element that slides up into place once revealed.
pub fn reveal_classes(revealed: bool, offset: &'static str) -> Classes {
    if revealed {
        classes!("opacity-100", "translate-y-0")
    } else {
        classes!("opacity-0", offset)
    }
}

pub fn stagger_style(base_ms: u32, index: usize) -> String {
    format!("transition-delay: {}ms", base_ms as usize + index * 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_adds_100ms_per_card() {
        assert_eq!(stagger_style(300, 0), "transition-delay: 300ms");
        assert_eq!(stagger_style(300, 2), "transition-delay: 500ms");
        assert_eq!(stagger_style(0, 1), "transition-delay: 100ms");
    }

    #[test]
    fn hidden_sections_keep_their_offset() {
        assert_eq!(reveal_classes(false, "translate-y-20"), classes!("opacity-0", "translate-y-20"));
        assert_eq!(reveal_classes(true, "translate-y-20"), classes!("opacity-100", "translate-y-0"));
    }
}
