//! Carrier settings loading (environment or any `config` source)

use config::builder::DefaultState;
use config::{ConfigBuilder, Source};
use serde::de::DeserializeOwned;
use shipping_core::{Error, Result};

/// Layer `source` over `defaults` and deserialize the result
pub(crate) fn load<T, S>(defaults: ConfigBuilder<DefaultState>, source: S) -> Result<T>
where
    T: DeserializeOwned,
    S: Source + Send + Sync + 'static,
{
    defaults
        .add_source(source)
        .build()
        .and_then(|config| config.try_deserialize())
        .map_err(|e| Error::Config(e.to_string()))
}

/// Map a `config` error raised while registering defaults
pub(crate) fn config_error(e: config::ConfigError) -> Error {
    Error::Config(e.to_string())
}
