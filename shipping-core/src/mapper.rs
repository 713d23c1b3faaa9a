//! Carrier mapper interface

use crate::{Message, RateDetails, RateRequest, Result, Serializable, ShipmentRequest};

/// Carrier connection settings
pub trait Settings {
    /// Configured carrier identifier
    fn carrier(&self) -> &str;

    /// Carrier display name
    fn carrier_name(&self) -> &str;
}

/// Rate (quote) mapping
pub trait RateMapper {
    /// Carrier-native rate request
    type Request;
    /// Raw carrier rate response
    type Response: ?Sized;

    /// Build the carrier-native rate request
    fn create_rate_request(&self, payload: &RateRequest) -> Result<Serializable<Self::Request>>;

    /// Parse a carrier rate response into quotes and carrier messages
    fn parse_rate_response(
        &self,
        response: &Self::Response,
    ) -> Result<(Vec<RateDetails>, Vec<Message>)>;
}

/// Shipping document mapping
pub trait DocumentsMapper {
    /// Carrier-native documents request
    type Request;
    /// Raw carrier documents response
    type Response: ?Sized;
    /// Normalized document
    type Document;

    /// Build the carrier-native documents request for a shipment PIN
    fn create_shipping_documents_request(
        &self,
        pin: &str,
        payload: &ShipmentRequest,
    ) -> Result<Serializable<Self::Request>>;

    /// Parse a carrier documents response into documents and carrier messages
    fn parse_shipping_documents_response(
        &self,
        response: &Self::Response,
    ) -> Result<(Vec<Self::Document>, Vec<Message>)>;
}
