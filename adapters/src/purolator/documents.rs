//! Purolator shipping documents (bill of lading) mapping

use super::datatypes::{
    ArrayOfDocumentCriteria, DocumentCriteria, DocumentTypes, GetDocumentsRequest, Pin,
    RequestContext,
};
use super::error::parse_error_response;
use super::settings::PurolatorSettings;
use super::units::PrintType;
use super::CARRIER;
use crate::metrics;
use serde::{Deserialize, Serialize};
use shipping_core::soap::{create_envelope, Envelope, SOAP_ENVELOPE_NS};
use shipping_core::xml::Element;
use shipping_core::{Message, Result, Serializable, ShipmentRequest};
use tracing::{debug, warn};

/// Shipping Documents Service version
pub const SERVICE_VERSION: &str = "1.3";

/// Purolator datatypes namespace
pub const DATATYPES_NS: &str = "http://purolator.com/pws/datatypes/v1";

/// GetDocuments SOAP envelope
pub type DocumentsEnvelope = Envelope<RequestContext, GetDocumentsRequest>;

/// Document returned by Purolator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingDocument {
    /// Shipment PIN
    pub pin: Option<String>,
    /// Document type (e.g., "DomesticBillOfLading")
    pub document_type: Option<String>,
    /// Description
    pub description: Option<String>,
    /// Generation status
    pub status: Option<String>,
    /// Download URL
    pub url: Option<String>,
    /// Inline document (base64)
    pub data: Option<String>,
}

/// Document type requested for a shipment.
///
/// `International`/`Domestic` + `BillOfLading` + `Thermal` for ZPL output,
/// concatenated without separator.
pub fn document_type(payload: &ShipmentRequest, print_type: &str) -> String {
    let is_international = payload.shipper.country_code != payload.recipient.country_code;

    [
        if is_international { "International" } else { "Domestic" },
        "BillOfLading",
        if print_type == PrintType::Zpl.name() { "Thermal" } else { "" },
    ]
    .concat()
}

/// Build a GetDocuments request for the shipment identified by `pin`
pub fn get_shipping_documents_request(
    pin: &str,
    payload: &ShipmentRequest,
    settings: &PurolatorSettings,
) -> Serializable<DocumentsEnvelope> {
    let label_type = PrintType::map(payload.label_type.as_deref());
    let requested_type = document_type(payload, &label_type);

    debug!(
        "Building Purolator {} request for PIN {} ({})",
        requested_type, pin, label_type
    );

    let request = create_envelope(
        RequestContext {
            version: SERVICE_VERSION.to_string(),
            language: settings.language.clone(),
            group_id: String::new(),
            request_reference: payload.reference.clone(),
            user_token: settings.user_token.clone(),
        },
        GetDocumentsRequest {
            output_type: label_type,
            synchronous: true,
            document_criterium: ArrayOfDocumentCriteria {
                document_criteria: vec![DocumentCriteria {
                    pin: Pin {
                        value: pin.to_string(),
                    },
                    document_types: DocumentTypes {
                        document_type: vec![requested_type],
                    },
                }],
            },
        },
    );

    metrics::record_request(CARRIER, "shipping_documents");
    Serializable::new(request, request_serializer)
}

fn request_serializer(envelope: &DocumentsEnvelope) -> Result<String> {
    envelope
        .to_namespaced_xml("soap", "v1")
        .export(&[("soap", SOAP_ENVELOPE_NS), ("v1", DATATYPES_NS)])
}

/// Parse a GetDocuments response into documents and carrier messages
pub fn parse_shipping_documents_response(
    response: &str,
    settings: &PurolatorSettings,
) -> Result<(Vec<ShippingDocument>, Vec<Message>)> {
    let response = Element::parse(response)?;

    let documents: Vec<ShippingDocument> = response
        .find_all("Document")
        .into_iter()
        .flat_map(extract_documents)
        .collect();
    let messages = parse_error_response(&response, settings);

    if !messages.is_empty() {
        warn!(
            "Purolator returned {} error(s) for documents request",
            messages.len()
        );
    }
    metrics::record_response(CARRIER, "shipping_documents", messages.len());

    Ok((documents, messages))
}

fn extract_documents(document: &Element) -> Vec<ShippingDocument> {
    let pin = document
        .child("PIN")
        .and_then(|pin| pin.child_text("Value"))
        .map(str::to_string);

    document
        .find_all("DocumentDetail")
        .into_iter()
        .map(|detail| ShippingDocument {
            pin: pin.clone(),
            document_type: detail.child_text("DocumentType").map(str::to_string),
            description: detail.child_text("Description").map(str::to_string),
            status: detail.child_text("DocumentStatus").map(str::to_string),
            url: detail.child_text("URL").map(str::to_string),
            data: detail.child_text("Data").map(str::to_string),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipping_core::Address;

    fn settings() -> PurolatorSettings {
        PurolatorSettings {
            username: "key".to_string(),
            password: "secret".to_string(),
            account_number: "9999999999".to_string(),
            user_token: Some("token".to_string()),
            language: "en".to_string(),
            carrier_id: "purolator".to_string(),
            test: true,
        }
    }

    fn shipment(shipper: &str, recipient: &str, label_type: Option<&str>) -> ShipmentRequest {
        ShipmentRequest {
            shipper: Address {
                country_code: Some(shipper.to_string()),
                ..Default::default()
            },
            recipient: Address {
                country_code: Some(recipient.to_string()),
                ..Default::default()
            },
            reference: Some("Reference For Shipment".to_string()),
            label_type: label_type.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_document_type() {
        assert_eq!(
            document_type(&shipment("CA", "CA", None), "PDF"),
            "DomesticBillOfLading"
        );
        assert_eq!(
            document_type(&shipment("CA", "US", None), "ZPL"),
            "InternationalBillOfLadingThermal"
        );
    }

    #[test]
    fn test_request_fields() {
        let payload = shipment("CA", "CA", Some("zpl"));
        let request = get_shipping_documents_request("329014521622", &payload, &settings());
        let envelope = request.value();

        let header = envelope.header.as_ref().unwrap();
        assert_eq!(header.version, "1.3");
        assert_eq!(header.group_id, "");
        assert_eq!(header.request_reference.as_deref(), Some("Reference For Shipment"));
        assert_eq!(header.user_token.as_deref(), Some("token"));

        let body = &envelope.body;
        assert_eq!(body.output_type, "ZPL");
        assert!(body.synchronous);
        let criteria = &body.document_criterium.document_criteria;
        assert_eq!(criteria.len(), 1);
        assert_eq!(criteria[0].pin.value, "329014521622");
        assert_eq!(
            criteria[0].document_types.document_type,
            vec!["DomesticBillOfLadingThermal".to_string()]
        );
    }

    #[test]
    fn test_parse_documents() {
        let xml = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
            <s:Body>
                <GetDocumentsResponse xmlns="http://purolator.com/pws/datatypes/v1">
                    <ResponseInformation><Errors/><InformationalMessages/></ResponseInformation>
                    <Documents>
                        <Document>
                            <PIN><Value>329014521622</Value></PIN>
                            <DocumentDetails>
                                <DocumentDetail>
                                    <DocumentType>DomesticBillOfLading</DocumentType>
                                    <Description>Domestic Bill of Lading</Description>
                                    <DocumentStatus>Completed</DocumentStatus>
                                    <URL>https://eshiponline.purolator.com/ShipOnline/PrintServlet?documentId=1</URL>
                                    <Data/>
                                </DocumentDetail>
                            </DocumentDetails>
                        </Document>
                    </Documents>
                </GetDocumentsResponse>
            </s:Body>
        </s:Envelope>"#;

        let (documents, messages) = parse_shipping_documents_response(xml, &settings()).unwrap();

        assert!(messages.is_empty());
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].pin.as_deref(), Some("329014521622"));
        assert_eq!(documents[0].document_type.as_deref(), Some("DomesticBillOfLading"));
        assert_eq!(documents[0].status.as_deref(), Some("Completed"));
        assert!(documents[0].url.as_deref().unwrap().ends_with("documentId=1"));
        assert_eq!(documents[0].data, None);
    }

    #[test]
    fn test_parse_malformed_response() {
        assert!(parse_shipping_documents_response("<Envelope>", &settings()).is_err());
    }
}
