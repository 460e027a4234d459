use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BackgroundPatternProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Faint tiled logo behind the page content.
#[function_component(BackgroundPattern)]
pub fn background_pattern(props: &BackgroundPatternProps) -> Html {
    html! {
        <div
            class={classes!("background-pattern", props.class.clone())}
            style="background-image: url(/assets/logo.jpg); background-repeat: repeat; background-size: 200px 200px; opacity: 0.03; filter: blur(1px);"
        >
            <style>
                {r#"
                .background-pattern {
                    position: fixed;
                    inset: 0;
                    pointer-events: none;
                    z-index: 0;
                }
                "#}
            </style>
        </div>
    }
}
