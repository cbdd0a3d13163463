//! # Registration controller
//!
//! [`RegisterState`] is the working memory of the registration screen and the
//! rules for moving it along. It knows nothing about rendering, so the
//! component in [`crate::register_form`] only has to forward events into it.
//!
//! A submission is split in two so the UI never holds its state borrowed
//! across the network call:
//!
//! - [`RegisterState::begin_submit`] validates and hands back the snapshot to
//!   send, or `None` when nothing should be sent.
//! - [`RegisterState::finish_submit`] applies the server's answer.
//!
//! [`RegisterState::submit`] chains both around a [`RegistrationClient`] for
//! callers that own the state outright.

use api::{FormField, RegisterError, RegistrationClient, RegistrationForm, RegistrationReply};

/// What a submit attempt led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was sent: a required field was empty or a request was already
    /// in flight.
    Invalid,
    /// The server accepted the registration. Navigate away.
    Registered,
    /// The server or the network refused. The form keeps its values.
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterState {
    pub form: RegistrationForm,
    /// Success message from the server.
    pub message: Option<String>,
    /// Validation or remote error, shown inline.
    pub error: Option<String>,
    pub submitting: bool,
}

impl RegisterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Start a submission. Returns the record to send, if any.
    pub fn begin_submit(&mut self) -> Option<RegistrationForm> {
        if self.submitting {
            tracing::debug!("Registration already in flight, ignoring submit");
            return None;
        }

        self.message = None;
        self.error = None;

        if let Err(e) = self.form.validate() {
            tracing::debug!("Registration form incomplete: {:?}", e);
            self.error = Some(e.to_string());
            return None;
        }

        self.submitting = true;
        Some(self.form.clone())
    }

    /// Apply the result of the request started by [`Self::begin_submit`].
    pub fn finish_submit(
        &mut self,
        result: Result<RegistrationReply, RegisterError>,
    ) -> SubmitOutcome {
        self.submitting = false;
        match result {
            Ok(reply) => {
                self.message = Some(reply.message).filter(|m| !m.is_empty());
                self.form.clear();
                SubmitOutcome::Registered
            }
            Err(e) => {
                self.error = Some(e.to_string());
                SubmitOutcome::Failed
            }
        }
    }

    /// Label of the submit button.
    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Registering..."
        } else {
            "Register"
        }
    }

    /// Validate, send at most one request through `client`, and apply the
    /// answer.
    pub async fn submit<C: RegistrationClient>(&mut self, client: &C) -> SubmitOutcome {
        let Some(form) = self.begin_submit() else {
            return SubmitOutcome::Invalid;
        };
        let result = client.register(&form).await;
        self.finish_submit(result)
    }
}
