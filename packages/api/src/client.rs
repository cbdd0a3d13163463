//! # Registration client
//!
//! [`RegistrationClient`] is the single collaborator of the registration
//! screen: hand it a [`RegistrationForm`] and it answers with either the
//! server's success message or a [`RegisterError`] whose `Display` is the text
//! to put in front of the user.
//!
//! [`HttpRegistrationClient`] is the production implementation. It issues one
//! `POST` with the form as JSON and never retries.
//!
//! Registration services are loose about payload shapes, so both success and
//! error bodies are read leniently (see [`decode_payload`]):
//!
//! | Body | Shown text |
//! |------|------------|
//! | `"Registered"` (JSON string) | `Registered` |
//! | `null` | nothing |
//! | `{"message": "..."}` / `{"error": "..."}` | the member's value |
//! | `{"error": null}` or any other non-string member | nothing |
//! | anything else | the raw body, trimmed |
//!
//! An error that decodes to nothing is shown as [`FALLBACK_ERROR`].

use std::future::Future;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::RegistrationForm;
use crate::settings::ClientSettings;

/// Shown when a failure carries no usable payload.
pub const FALLBACK_ERROR: &str = "Registration failed!";

/// Success payload returned by the registration endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationReply {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    /// The server answered with a non-success status and this payload.
    #[error("{}", non_empty_or_fallback(.0))]
    Rejected(String),
    /// No response was received at all.
    #[error("{}", FALLBACK_ERROR)]
    Transport(String),
}

fn non_empty_or_fallback(payload: &str) -> &str {
    if payload.is_empty() {
        FALLBACK_ERROR
    } else {
        payload
    }
}

/// Submits registrations to the backend.
pub trait RegistrationClient {
    fn register(
        &self,
        form: &RegistrationForm,
    ) -> impl Future<Output = Result<RegistrationReply, RegisterError>>;
}

/// [`RegistrationClient`] that POSTs JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRegistrationClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpRegistrationClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, RegisterError> {
        #[cfg(not(target_arch = "wasm32"))]
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| RegisterError::Transport(e.to_string()))?;
        #[cfg(target_arch = "wasm32")]
        let http = reqwest::Client::new();

        Ok(Self {
            http,
            endpoint: settings.endpoint.clone(),
        })
    }
}

impl RegistrationClient for HttpRegistrationClient {
    async fn register(&self, form: &RegistrationForm) -> Result<RegistrationReply, RegisterError> {
        tracing::debug!(endpoint = %self.endpoint, email = %form.email, "Submitting registration");

        let response = self
            .http
            .post(&self.endpoint)
            .json(form)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Registration request failed: {}", e);
                RegisterError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::warn!("Failed to read registration response: {}", e);
            RegisterError::Transport(e.to_string())
        })?;

        if status.is_success() {
            tracing::info!(%status, email = %form.email, "Registration accepted");
            Ok(RegistrationReply {
                message: decode_payload(&body, &["message", "error"]),
            })
        } else {
            let payload = decode_payload(&body, &["error", "message"]);
            tracing::warn!(%status, "Registration rejected: {}", payload);
            Err(RegisterError::Rejected(payload))
        }
    }
}

/// Extract display text from a response body, looking up `keys` in order
/// when the body is a JSON object.
///
/// The first key present wins. A present member that is not a string carries
/// no text.
pub fn decode_payload(body: &str, keys: &[&str]) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(text)) => text,
        Ok(Value::Null) => String::new(),
        Ok(Value::Object(map)) => match keys.iter().find_map(|key| map.get(*key)) {
            Some(Value::String(text)) => text.clone(),
            Some(_) => String::new(),
            None => body.trim().to_string(),
        },
        _ => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FormField;
    use httpmock::prelude::*;

    fn form() -> RegistrationForm {
        RegistrationForm::new()
            .with(FormField::Name, "Ada")
            .with(FormField::Email, "ada@example.com")
            .with(FormField::Password, "hunter22")
            .with(FormField::Phone, "555-0100")
            .with(FormField::Address, "1 Main St")
    }

    fn client_for(server: &MockServer) -> HttpRegistrationClient {
        let settings = ClientSettings::default().with_endpoint(server.url("/register"));
        HttpRegistrationClient::new(&settings).unwrap()
    }

    #[test]
    fn test_decode_payload() {
        let keys = ["message", "error"];
        assert_eq!(decode_payload("\"Registered\"", &keys), "Registered");
        assert_eq!(decode_payload(r#"{"message":"Welcome aboard"}"#, &keys), "Welcome aboard");
        assert_eq!(decode_payload(r#"{"error":"Email taken"}"#, &keys), "Email taken");
        assert_eq!(decode_payload("User registered\n", &keys), "User registered");
        assert_eq!(decode_payload(r#"{"ok":true}"#, &keys), r#"{"ok":true}"#);
        assert_eq!(decode_payload("", &keys), "");
    }

    #[test]
    fn test_decode_payload_without_text() {
        let keys = ["error", "message"];
        assert_eq!(decode_payload("null", &keys), "");
        assert_eq!(decode_payload(r#"{"error":null}"#, &keys), "");
        assert_eq!(decode_payload(r#"{"error":42,"message":"ignored"}"#, &keys), "");
        assert_eq!(decode_payload(r#"{"message":false}"#, &keys), "");
        assert_eq!(
            decode_payload(r#"{"error":"Email taken","message":"Bad request"}"#, &keys),
            "Email taken"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            RegisterError::Rejected("Email already registered".into()).to_string(),
            "Email already registered"
        );
        assert_eq!(RegisterError::Rejected(String::new()).to_string(), FALLBACK_ERROR);
        assert_eq!(
            RegisterError::Transport("connection refused".into()).to_string(),
            FALLBACK_ERROR
        );
    }

    #[tokio::test]
    async fn test_posts_form_as_json_once() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/register")
                    .header("content-type", "application/json")
                    .json_body(serde_json::json!({
                        "name": "Ada",
                        "email": "ada@example.com",
                        "password": "hunter22",
                        "phone": "555-0100",
                        "address": "1 Main St",
                    }));
                then.status(201).body("User registered successfully");
            })
            .await;

        let reply = client_for(&server).register(&form()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(reply.message, "User registered successfully");
    }

    #[tokio::test]
    async fn test_json_message_reply() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/register");
                then.status(200)
                    .json_body(serde_json::json!({ "message": "Welcome, Ada" }));
            })
            .await;

        let reply = client_for(&server).register(&form()).await.unwrap();
        assert_eq!(reply.message, "Welcome, Ada");
    }

    #[tokio::test]
    async fn test_server_error_payload_is_surfaced() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/register");
                then.status(400)
                    .json_body(serde_json::json!({ "error": "Email already registered" }));
            })
            .await;

        let err = client_for(&server).register(&form()).await.unwrap_err();

        assert_eq!(mock.hits_async().await, 1);
        assert_eq!(err, RegisterError::Rejected("Email already registered".into()));
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[tokio::test]
    async fn test_empty_error_body_falls_back() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/register");
                then.status(500);
            })
            .await;

        let err = client_for(&server).register(&form()).await.unwrap_err();
        assert_eq!(err.to_string(), FALLBACK_ERROR);
    }

    #[tokio::test]
    async fn test_null_error_body_falls_back() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/register");
                then.status(400).body("null");
            })
            .await;

        let err = client_for(&server).register(&form()).await.unwrap_err();
        assert_eq!(err, RegisterError::Rejected(String::new()));
        assert_eq!(err.to_string(), FALLBACK_ERROR);
    }

    #[tokio::test]
    async fn test_null_error_member_falls_back() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/register");
                then.status(422).json_body(serde_json::json!({ "error": null }));
            })
            .await;

        let err = client_for(&server).register(&form()).await.unwrap_err();
        assert_eq!(err.to_string(), FALLBACK_ERROR);
    }

    #[tokio::test]
    async fn test_empty_success_body_has_no_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/register");
                then.status(200);
            })
            .await;

        let reply = client_for(&server).register(&form()).await.unwrap();
        assert_eq!(reply.message, "");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Port 9 (discard) is not expected to be listening.
        let settings = ClientSettings {
            endpoint: "http://127.0.0.1:9/register".to_string(),
            timeout_secs: 2,
        };
        let client = HttpRegistrationClient::new(&settings).unwrap();

        let err = client.register(&form()).await.unwrap_err();
        assert!(matches!(err, RegisterError::Transport(_)));
        assert_eq!(err.to_string(), FALLBACK_ERROR);
    }
}
