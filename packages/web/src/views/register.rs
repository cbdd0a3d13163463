//! Registration page view.

use dioxus::prelude::*;
use ui::RegisterForm;

use crate::Route;

/// Register page component. Sends the user to the dashboard once the
/// registration is accepted.
#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        RegisterForm {
            login_href: "/login",
            on_registered: move |_| {
                tracing::info!("Registration complete, opening dashboard");
                nav.push(Route::Dashboard {});
            },
        }
    }
}
