//! Australia Post connection settings

use crate::settings::{config_error, load};
use config::{Config, Environment, Source};
use serde::{Deserialize, Serialize};
use shipping_core::{Result, Settings};

/// Environment variable prefix (`AUPS_API_KEY`, ...)
pub const ENV_PREFIX: &str = "AUPS";

/// Australia Post settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AustraliaPostSettings {
    /// API key
    pub api_key: String,
    /// API password
    pub password: String,
    /// Charge account number
    pub account_number: String,
    /// Configured carrier identifier
    pub carrier_id: String,
    /// Use the test endpoint
    pub test: bool,
}

impl AustraliaPostSettings {
    /// Load from `AUPS_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    /// Load from any configuration source, applying defaults
    pub fn from_source<S>(source: S) -> Result<Self>
    where
        S: Source + Send + Sync + 'static,
    {
        let defaults = Config::builder()
            .set_default("carrier_id", "aups")
            .and_then(|b| b.set_default("test", false))
            .map_err(config_error)?;

        load(defaults, source)
    }
}

impl Settings for AustraliaPostSettings {
    fn carrier(&self) -> &str {
        &self.carrier_id
    }

    fn carrier_name(&self) -> &str {
        super::CARRIER_NAME
    }
}
