//! # Registration form record
//!
//! [`RegistrationForm`] is the only entity the registration screen owns. It is
//! created empty when the screen loads, mutated one [`FormField`] at a time as
//! the user types, and cleared after a successful submission.
//!
//! The set of keys is fixed: `name`, `email`, `password`, `phone`, `address`.
//! The record serialises to exactly those keys, which is the JSON body the
//! registration endpoint expects.
//!
//! Only `name`, `email` and `password` are required. A field counts as filled
//! as soon as it is non-empty; trimming and format checks are left to the
//! server.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One input of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Password,
    Phone,
    Address,
}

impl FormField {
    /// Every field, in display order.
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Password,
        FormField::Phone,
        FormField::Address,
    ];

    /// JSON key and HTML `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Password => "password",
            FormField::Phone => "phone",
            FormField::Address => "address",
        }
    }

    /// Human-readable label, also used as the input placeholder.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Password => "Password",
            FormField::Phone => "Phone",
            FormField::Address => "Address",
        }
    }

    /// HTML input `type` for this field.
    pub fn input_type(self) -> &'static str {
        match self {
            FormField::Email => "email",
            FormField::Password => "password",
            FormField::Name | FormField::Phone | FormField::Address => "text",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, FormField::Name | FormField::Email | FormField::Password)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string is not one of the form's keys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0}")]
pub struct ParseFieldError(pub String);

impl FromStr for FormField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| ParseFieldError(s.to_string()))
    }
}

/// Local validation failure, raised before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingRequired(Vec<FormField>),
}

/// The registration record, exactly as it is posted to the server.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub address: String,
}

impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("phone", &self.phone)
            .field("address", &self.address)
            .finish()
    }
}

impl RegistrationForm {
    /// An empty form, as shown when the screen loads.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::Phone => &self.phone,
            FormField::Address => &self.address,
        }
    }

    /// Replace the value of a single field, leaving the others alone.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
            FormField::Phone => &mut self.phone,
            FormField::Address => &mut self.address,
        };
        *slot = value.into();
    }

    /// Builder-style variant of [`RegistrationForm::set`].
    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Required fields that are still empty, in display order.
    pub fn missing_required(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.get(*field).is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_required();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingRequired(missing))
        }
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.into_iter().all(|field| self.get(field).is_empty())
    }

    /// Heading shown above the form, personalised once a name is typed.
    pub fn greeting(&self) -> String {
        if self.name.is_empty() {
            "Welcome!".to_string()
        } else {
            format!("Welcome, {}!", self.name)
        }
    }
}
