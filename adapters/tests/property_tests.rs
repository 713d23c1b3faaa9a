//! Property-based tests for carrier mapping rules
//!
//! These tests verify properties that must hold for all payloads, not just
//! specific fixtures.

use carrier_adapters::aups;
use carrier_adapters::purolator::{self, PurolatorSettings};
use proptest::prelude::*;
use shipping_core::{Address, Error, RateRequest, ShipmentRequest};

fn settings() -> PurolatorSettings {
    PurolatorSettings {
        username: "key".to_string(),
        password: "secret".to_string(),
        account_number: "9999999999".to_string(),
        user_token: None,
        language: "en".to_string(),
        carrier_id: "purolator".to_string(),
        test: true,
    }
}

fn requested_document_type(shipper: &str, recipient: &str, label_type: &str) -> String {
    let payload = ShipmentRequest {
        shipper: Address {
            country_code: Some(shipper.to_string()),
            ..Default::default()
        },
        recipient: Address {
            country_code: Some(recipient.to_string()),
            ..Default::default()
        },
        label_type: Some(label_type.to_string()),
        ..Default::default()
    };

    let request = purolator::get_shipping_documents_request("329014521622", &payload, &settings());
    request.value().body.document_criterium.document_criteria[0]
        .document_types
        .document_type[0]
        .clone()
}

fn rate_request(origin: Option<String>) -> RateRequest {
    RateRequest {
        shipper: Address {
            country_code: origin,
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Purolator document type
// ============================================================================

proptest! {
    /// Property: same-country shipments request a Domestic document
    #[test]
    fn domestic_when_countries_match(country in "[A-Z]{2}", label in "(PDF|ZPL|pdf|zpl)") {
        let document_type = requested_document_type(&country, &country, &label);
        prop_assert!(document_type.starts_with("DomesticBillOfLading"));
    }

    /// Property: cross-border shipments request an International document
    #[test]
    fn international_when_countries_differ(
        shipper in "[A-Z]{2}",
        recipient in "[A-Z]{2}",
        label in "(PDF|ZPL)",
    ) {
        prop_assume!(shipper != recipient);
        let document_type = requested_document_type(&shipper, &recipient, &label);
        prop_assert!(document_type.starts_with("InternationalBillOfLading"));
    }

    /// Property: the Thermal suffix appears iff the label type is ZPL
    #[test]
    fn thermal_iff_zpl(label in "[A-Za-z]{2,5}") {
        let document_type = requested_document_type("CA", "CA", &label);
        prop_assert_eq!(
            document_type.ends_with("Thermal"),
            label.eq_ignore_ascii_case("ZPL")
        );
    }
}

// ============================================================================
// Australia Post origin
// ============================================================================

proptest! {
    /// Property: any non-AU origin is rejected with that origin
    #[test]
    fn foreign_origin_rejected(origin in "[A-Z]{2}") {
        prop_assume!(origin != "AU");
        match aups::shipping_price_request(&rate_request(Some(origin.clone()))) {
            Err(Error::OriginNotServiced { origin: rejected, .. }) => prop_assert_eq!(rejected, origin),
            other => prop_assert!(false, "unexpected result: {:?}", other.map(|r| r.into_inner())),
        }
    }
}

#[test]
fn au_or_missing_origin_accepted() {
    assert!(aups::shipping_price_request(&rate_request(Some("AU".to_string()))).is_ok());
    assert!(aups::shipping_price_request(&rate_request(Some(String::new()))).is_ok());
    assert!(aups::shipping_price_request(&rate_request(None)).is_ok());
}
