//! Data models for the registration screen.

mod registration;

pub use registration::{FormField, ParseFieldError, RegistrationForm, ValidationError};
