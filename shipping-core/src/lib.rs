//! # Shipping Core
//!
//! Unified shipping API shared by every carrier adapter:
//! - Normalized payloads (`RateRequest`, `ShipmentRequest`) and results
//!   (`RateDetails`, `ChargeDetails`, `Message`)
//! - `Serializable` envelopes pairing a carrier-native request with its renderer
//! - A small XML element tree and SOAP envelope helper
//! - Unit lookup tables (`Currency`, `Country`)
//! - Mapper traits implemented per carrier
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐        ┌──────────────────────┐
//! │  Normalized payload  │        │ Carrier-native reply │
//! └──────────┬───────────┘        └──────────┬───────────┘
//!            │ field mapping                 │ field mapping
//! ┌──────────▼───────────┐        ┌──────────▼───────────┐
//! │ Carrier-native object│        │ RateDetails/Message  │
//! └──────────┬───────────┘        └──────────────────────┘
//!            │ Serializable::serialize
//! ┌──────────▼───────────┐
//! │  XML / JSON payload  │
//! └──────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod error;
pub mod mapper;
pub mod serializable;
pub mod soap;
pub mod types;
pub mod units;
pub mod utils;
pub mod xml;

pub use error::{Error, Result};
pub use mapper::{DocumentsMapper, RateMapper, Settings};
pub use serializable::Serializable;
pub use types::*;
