//! Error types for carrier mapping

use thiserror::Error;

/// Result type for mapping operations
pub type Result<T> = std::result::Result<T, Error>;

/// Mapping errors
#[derive(Error, Debug)]
pub enum Error {
    /// Shipper country is not serviced by the carrier
    #[error("Origin country {origin} is not serviced by {carrier_name}")]
    OriginNotServiced {
        /// Offending origin country code
        origin: String,
        /// Carrier name
        carrier_name: String,
    },

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML error
    #[error("XML error: {0}")]
    Xml(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
