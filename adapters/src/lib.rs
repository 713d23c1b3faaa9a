//! # Carrier Adapters
//!
//! Carrier wire-format mapping layer with:
//! - Purolator Shipping Documents Service (SOAP/XML)
//! - Australia Post Shipping price (JSON)
//! - Settings loading from environment or config files
//! - Per-carrier request/response metrics
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │        Unified shipping API (shipping-core)         │
//! └────────────┬────────────────────────────────────────┘
//!              │
//!     ┌────────┴───────────┐
//!     │                    │
//! ┌───▼────────┐   ┌───────▼──────┐
//! │ Purolator  │   │ Australia    │
//! │ (SOAP/XML) │   │ Post (JSON)  │
//! └───┬────────┘   └───────┬──────┘
//!     │                    │
//!     └────────┬───────────┘
//!              │
//! ┌────────────▼─────────────────────────────────────┐
//! │       Serializable wire payload + metrics        │
//! └──────────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod aups;
pub mod metrics;
pub mod purolator;
mod settings;

pub use shipping_core::{Error, Result};
