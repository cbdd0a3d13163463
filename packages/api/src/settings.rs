//! # Client settings — where and how registrations are sent
//!
//! [`ClientSettings`] names the registration endpoint and the request
//! timeout. On native targets they are layered with the `config` crate:
//!
//! 1. built-in defaults (`http://localhost:5000/register`, 30 seconds)
//! 2. an optional `signup.toml` in the working directory
//! 3. `SIGNUP_`-prefixed environment variables, after loading `.env`
//!
//! ```toml
//! endpoint = "https://accounts.example.com/register"
//! timeout_secs = 10
//! ```
//!
//! In the browser there is no filesystem or process environment, so the
//! endpoint is baked in at compile time from `SIGNUP_ENDPOINT` when it is
//! set.

use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/register";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientSettings {
    /// Absolute URL of the registration endpoint.
    pub endpoint: String,
    /// Per-request timeout. Ignored in the browser.
    pub timeout_secs: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Why settings could not be loaded. Web builds cannot fail to load, so
/// the enum is empty there.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("invalid client settings: {0}")]
    Config(#[from] config::ConfigError),
}

impl ClientSettings {
    /// Point the client at a different endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Load settings from defaults, `signup.toml` and the environment.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, SettingsError> {
        use config::{Environment, File, FileFormat};

        dotenvy::dotenv().ok();

        let config = Self::defaults()?
            .add_source(
                File::with_name(Self::filename())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("SIGNUP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Load settings compiled into the web bundle.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, SettingsError> {
        let settings = Self::default();
        Ok(match option_env!("SIGNUP_ENDPOINT") {
            Some(endpoint) => settings.with_endpoint(endpoint),
            None => settings,
        })
    }

    /// Parse settings from a TOML document, on top of the defaults.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_toml(s: &str) -> Result<Self, SettingsError> {
        use config::{File, FileFormat};

        let config = Self::defaults()?
            .add_source(File::from_str(s, FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// The well-known filename for the optional settings file.
    pub fn filename() -> &'static str {
        "signup.toml"
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, SettingsError> {
        Ok(config::Config::builder()
            .set_default("endpoint", DEFAULT_ENDPOINT)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)?)
    }
}
