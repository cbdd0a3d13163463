//! Registration form component.

use api::{ClientSettings, FormField, HttpRegistrationClient, RegisterError, RegistrationClient};
use dioxus::prelude::*;

use crate::components::{Button, Input};
use crate::register::{RegisterState, SubmitOutcome};

/// Collects name, email, password, phone and address and submits them to the
/// configured registration endpoint.
///
/// `on_registered` fires once the server accepts the registration; the host
/// decides where to navigate.
#[component]
pub fn RegisterForm(
    on_registered: EventHandler<()>,
    #[props(default = "/login".to_string())] login_href: String,
) -> Element {
    let mut state = use_signal(RegisterState::new);
    let client = use_hook(build_client);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        // Validation happens synchronously so an incomplete form never spawns
        // a request.
        let Some(form) = state.write().begin_submit() else {
            return;
        };

        let client = client.clone();
        spawn(async move {
            let result = match client {
                Ok(client) => client.register(&form).await,
                Err(e) => Err(e),
            };
            if state.write().finish_submit(result) == SubmitOutcome::Registered {
                on_registered.call(());
            }
        });
    };

    let current = state();
    let greeting = current.form.greeting();
    let submit_label = current.submit_label();
    let inputs: Vec<_> = FormField::ALL
        .into_iter()
        .map(|field| {
            (
                field,
                field.input_type(),
                field.label(),
                current.form.get(field).to_string(),
            )
        })
        .collect();

    rsx! {
        div {
            class: "page",

            div {
                class: "register-card",

                h1 {
                    class: "page-title",
                    "{greeting}"
                }

                h3 {
                    class: "page-subtitle",
                    "Please fill in all fields to register"
                }

                form {
                    class: "register-form",
                    onsubmit: handle_submit,

                    for (field, kind, label, value) in inputs {
                        Input {
                            key: "{field}",
                            class: "register-input",
                            r#type: "{kind}",
                            name: "{field}",
                            placeholder: "{label}",
                            value: value,
                            required: field.is_required(),
                            disabled: current.submitting,
                            oninput: move |evt: FormEvent| state.write().update(field, evt.value()),
                        }
                    }

                    Button {
                        class: "register-submit",
                        r#type: "submit",
                        disabled: current.submitting,
                        "{submit_label}"
                    }
                }

                if let Some(message) = current.message.clone() {
                    p {
                        class: "success-message",
                        "{message}"
                    }
                }

                if let Some(error) = current.error.clone() {
                    p {
                        class: "error-message",
                        "{error}"
                    }
                }

                p {
                    class: "login-link",
                    "Already have an account? "
                    a {
                        class: "link",
                        href: "{login_href}",
                        "login"
                    }
                }
            }
        }
    }
}

fn build_client() -> Result<HttpRegistrationClient, RegisterError> {
    let settings = ClientSettings::load().unwrap_or_else(|e| {
        tracing::warn!("Falling back to default registration settings: {}", e);
        ClientSettings::default()
    });
    tracing::info!(endpoint = %settings.endpoint, "Registration client ready");
    HttpRegistrationClient::new(&settings)
}
