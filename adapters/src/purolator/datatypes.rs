//! Purolator Shipping Documents Service 1.3 datatypes

use shipping_core::xml::{Element, ToXml};

/// Request context (SOAP header)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Service version
    pub version: String,
    /// Language ("en" or "fr")
    pub language: String,
    /// Group ID
    pub group_id: String,
    /// Caller's reference
    pub request_reference: Option<String>,
    /// Authentication token
    pub user_token: Option<String>,
}

impl ToXml for RequestContext {
    fn to_xml(&self) -> Element {
        Element::new("RequestContext")
            .with_child(Element::text("Version", self.version.as_str()))
            .with_child(Element::text("Language", self.language.as_str()))
            .with_child(Element::text("GroupID", self.group_id.as_str()))
            .with_text_child("RequestReference", self.request_reference.as_deref())
            .with_text_child("UserToken", self.user_token.as_deref())
    }
}

/// GetDocuments request (SOAP body)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetDocumentsRequest {
    /// Output type (print type name)
    pub output_type: String,
    /// Synchronous generation
    pub synchronous: bool,
    /// Document criteria
    pub document_criterium: ArrayOfDocumentCriteria,
}

impl ToXml for GetDocumentsRequest {
    fn to_xml(&self) -> Element {
        Element::new("GetDocumentsRequest")
            .with_child(Element::text("OutputType", self.output_type.as_str()))
            .with_child(Element::text("Synchronous", self.synchronous.to_string()))
            .with_child(self.document_criterium.to_xml())
    }
}

/// DocumentCriterium list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayOfDocumentCriteria {
    /// Criteria
    pub document_criteria: Vec<DocumentCriteria>,
}

impl ToXml for ArrayOfDocumentCriteria {
    fn to_xml(&self) -> Element {
        self.document_criteria
            .iter()
            .fold(Element::new("DocumentCriterium"), |element, criteria| {
                element.with_child(criteria.to_xml())
            })
    }
}

/// Documents requested for one shipment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentCriteria {
    /// Shipment PIN
    pub pin: Pin,
    /// Requested document types
    pub document_types: DocumentTypes,
}

impl ToXml for DocumentCriteria {
    fn to_xml(&self) -> Element {
        Element::new("DocumentCriteria")
            .with_child(self.pin.to_xml())
            .with_child(self.document_types.to_xml())
    }
}

/// Purolator tracking identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pin {
    /// PIN value
    pub value: String,
}

impl ToXml for Pin {
    fn to_xml(&self) -> Element {
        Element::new("PIN").with_child(Element::text("Value", self.value.as_str()))
    }
}

/// Document type list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTypes {
    /// Document types (e.g., "DomesticBillOfLading")
    pub document_type: Vec<String>,
}

impl ToXml for DocumentTypes {
    fn to_xml(&self) -> Element {
        self.document_type
            .iter()
            .fold(Element::new("DocumentTypes"), |element, document_type| {
                element.with_child(Element::text("DocumentType", document_type.as_str()))
            })
    }
}
