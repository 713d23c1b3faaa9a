//! Purolator connection settings

use crate::settings::{config_error, load};
use config::{Config, Environment, Source};
use serde::{Deserialize, Serialize};
use shipping_core::{Result, Settings};

/// Environment variable prefix (`PUROLATOR_USER_TOKEN`, ...)
pub const ENV_PREFIX: &str = "PUROLATOR";

/// Purolator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurolatorSettings {
    /// Web services key
    pub username: String,
    /// Web services password
    pub password: String,
    /// Billing account number
    pub account_number: String,
    /// User token sent in the request context
    pub user_token: Option<String>,
    /// Request language ("en" or "fr")
    pub language: String,
    /// Configured carrier identifier
    pub carrier_id: String,
    /// Use the development endpoint
    pub test: bool,
}

impl PurolatorSettings {
    /// Load from `PUROLATOR_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    /// Load from any configuration source, applying defaults
    pub fn from_source<S>(source: S) -> Result<Self>
    where
        S: Source + Send + Sync + 'static,
    {
        let defaults = Config::builder()
            .set_default("language", "en")
            .and_then(|b| b.set_default("carrier_id", "purolator"))
            .and_then(|b| b.set_default("test", false))
            .map_err(config_error)?;

        load(defaults, source)
    }
}

impl Settings for PurolatorSettings {
    fn carrier(&self) -> &str {
        &self.carrier_id
    }

    fn carrier_name(&self) -> &str {
        "Purolator"
    }
}
