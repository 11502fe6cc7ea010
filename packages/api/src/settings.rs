//! # Gateway settings
//!
//! The only setting is the backend base URL (it ends with `/api`; endpoint
//! paths such as `/users/login` are appended to it).
//!
//! | Target | Source |
//! |--------|--------|
//! | wasm32 | `LENDING_API_URL` at compile time, else [`DEFAULT_API_URL`]. |
//! | native | [`ApiSettings::load`]: defaults, then an optional `lending.toml`, then `LENDING_*` environment variables (a `.env` file is honoured). |
//!
//! ```toml
//! base_url = "https://books.example.com/api"
//! ```

use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: option_env!("LENDING_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .to_string(),
        }
    }
}

impl ApiSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Parse settings from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// The well-known settings filename, looked up in the working directory.
    pub fn filename() -> &'static str {
        "lending.toml"
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ApiSettings {
    pub fn load() -> Result<Self, config::ConfigError> {
        use config::{Config, Environment, File, FileFormat};

        dotenvy::dotenv().ok();

        let config = Config::builder()
            .set_default("base_url", Self::default().base_url)?
            .add_source(
                File::with_name(Self::filename())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix("LENDING"))
            .build()?;

        config.try_deserialize()
    }
}
