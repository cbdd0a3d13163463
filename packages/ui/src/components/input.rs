use dioxus::prelude::*;

/// Controlled text input. The caller owns the value and updates it from
/// `oninput`.
#[component]
pub fn Input(
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] name: String,
    #[props(default)] placeholder: String,
    value: String,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let kind = r#type;

    rsx! {
        input {
            class: "input {class}",
            r#type: "{kind}",
            name: "{name}",
            placeholder: "{placeholder}",
            value: "{value}",
            required: required,
            disabled: disabled,
            oninput: move |evt| oninput.call(evt),
        }
    }
}
