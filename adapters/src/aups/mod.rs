//! Australia Post adapter (JSON)

pub mod error;
pub mod models;
pub mod settings;
pub mod shipping_price;
pub mod units;

pub use models::{ShippingPriceRequest, ShippingPriceResponse};
pub use settings::AustraliaPostSettings;
pub use shipping_price::{parse_shipping_price_response, shipping_price_request};

use serde_json::Value;
use shipping_core::{Message, RateDetails, RateMapper, RateRequest, Result, Serializable};

/// Carrier label used for metrics
pub(crate) const CARRIER: &str = "aups";

/// Carrier display name
pub const CARRIER_NAME: &str = "Australia Post";

/// Australia Post mapper
#[derive(Debug, Clone)]
pub struct Mapper {
    settings: AustraliaPostSettings,
}

impl Mapper {
    /// Create new mapper
    pub fn new(settings: AustraliaPostSettings) -> Self {
        Self { settings }
    }

    /// Carrier settings
    pub fn settings(&self) -> &AustraliaPostSettings {
        &self.settings
    }
}

impl RateMapper for Mapper {
    type Request = ShippingPriceRequest;
    type Response = Value;

    fn create_rate_request(&self, payload: &RateRequest) -> Result<Serializable<ShippingPriceRequest>> {
        shipping_price_request(payload)
    }

    fn parse_rate_response(&self, response: &Value) -> Result<(Vec<RateDetails>, Vec<Message>)> {
        parse_shipping_price_response(response, &self.settings)
    }
}
