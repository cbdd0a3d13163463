//! This crate contains the shared registration UI for the workspace.

pub mod components;

mod register;
pub use register::{RegisterState, SubmitOutcome};

mod register_form;
pub use register_form::RegisterForm;
