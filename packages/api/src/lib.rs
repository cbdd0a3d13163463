//! # API crate — registration model and client for Signup
//!
//! Everything the registration screen needs to talk to the remote
//! registration service, kept free of any UI framework so it can be tested
//! natively.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | The transient [`RegistrationForm`] record and its fixed set of [`FormField`]s |
//! | [`settings`] | Endpoint and timeout configuration ([`ClientSettings`]) |
//! | [`client`] | The [`RegistrationClient`] seam and its reqwest implementation |

pub mod client;
pub mod models;
pub mod settings;

pub use client::{
    HttpRegistrationClient, RegisterError, RegistrationClient, RegistrationReply,
    FALLBACK_ERROR,
};
pub use models::{FormField, ParseFieldError, RegistrationForm, ValidationError};
pub use settings::{ClientSettings, SettingsError};
