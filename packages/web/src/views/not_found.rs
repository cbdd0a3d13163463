use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "page",

            h1 {
                class: "page-title",
                "Page not found"
            }

            p {
                class: "page-subtitle",
                "Nothing lives at /{path}."
            }

            Link {
                class: "link",
                to: Route::Register {},
                "Back to registration"
            }
        }
    }
}
