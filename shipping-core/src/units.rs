//! Unit lookup tables shared by carriers

use serde::{Deserialize, Serialize};

/// Currency (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Australian dollar
    AUD,
    /// Canadian dollar
    CAD,
    /// Euro
    EUR,
    /// Pound sterling
    GBP,
    /// New Zealand dollar
    NZD,
    /// US dollar
    USD,
}

impl Currency {
    /// ISO code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::AUD => "AUD",
            Currency::CAD => "CAD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::NZD => "NZD",
            Currency::USD => "USD",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Country (ISO 3166-1 alpha-2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    /// Australia
    AU,
    /// Canada
    CA,
    /// United Kingdom
    GB,
    /// New Zealand
    NZ,
    /// United States
    US,
}

impl Country {
    /// ISO code
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::AU => "AU",
            Country::CA => "CA",
            Country::GB => "GB",
            Country::NZ => "NZ",
            Country::US => "US",
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
