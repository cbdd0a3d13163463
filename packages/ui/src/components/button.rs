use dioxus::prelude::*;

/// Outlined button. Defaults to `type="button"` so it only submits a form
/// when asked to.
#[component]
pub fn Button(
    #[props(default)] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    children: Element,
) -> Element {
    let kind = r#type;

    rsx! {
        button {
            class: "button {class}",
            r#type: "{kind}",
            disabled: disabled,
            {children}
        }
    }
}
