//! Login page placeholder. Signing in is handled by the accounts service.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Login() -> Element {
    rsx! {
        div {
            class: "page",

            h1 {
                class: "page-title",
                "Log in"
            }

            p {
                class: "page-subtitle",
                "Signing in is handled by your accounts service."
            }

            p {
                class: "login-link",
                "Need an account? "
                Link {
                    class: "link",
                    to: Route::Register {},
                    "register"
                }
            }
        }
    }
}
