use dioxus::prelude::*;

/// Landing page after a successful registration.
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div {
            class: "page",

            h1 {
                class: "page-title",
                "Dashboard"
            }

            p {
                class: "page-subtitle",
                "Your account has been created."
            }
        }
    }
}
