//! Purolator adapter (SOAP/XML)

pub mod datatypes;
pub mod documents;
pub mod error;
pub mod settings;
pub mod units;

pub use documents::{
    get_shipping_documents_request, parse_shipping_documents_response, DocumentsEnvelope,
    ShippingDocument,
};
pub use settings::PurolatorSettings;

use shipping_core::{DocumentsMapper, Message, Result, Serializable, ShipmentRequest};

/// Carrier label used for metrics
pub(crate) const CARRIER: &str = "purolator";

/// Purolator mapper
#[derive(Debug, Clone)]
pub struct Mapper {
    settings: PurolatorSettings,
}

impl Mapper {
    /// Create new mapper
    pub fn new(settings: PurolatorSettings) -> Self {
        Self { settings }
    }

    /// Carrier settings
    pub fn settings(&self) -> &PurolatorSettings {
        &self.settings
    }
}

impl DocumentsMapper for Mapper {
    type Request = DocumentsEnvelope;
    type Response = str;
    type Document = ShippingDocument;

    fn create_shipping_documents_request(
        &self,
        pin: &str,
        payload: &ShipmentRequest,
    ) -> Result<Serializable<DocumentsEnvelope>> {
        Ok(get_shipping_documents_request(pin, payload, &self.settings))
    }

    fn parse_shipping_documents_response(
        &self,
        response: &str,
    ) -> Result<(Vec<ShippingDocument>, Vec<Message>)> {
        parse_shipping_documents_response(response, &self.settings)
    }
}
