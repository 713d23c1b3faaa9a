//! Australia Post shipping price request/response mapping

use carrier_adapters::aups::{self, AustraliaPostSettings};
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use shipping_core::{Address, Parcel, RateMapper, RateRequest};

fn settings() -> AustraliaPostSettings {
    AustraliaPostSettings {
        api_key: "key".to_string(),
        password: "secret".to_string(),
        account_number: "1234345".to_string(),
        carrier_id: "aups".to_string(),
        test: true,
    }
}

fn rate_request() -> RateRequest {
    RateRequest {
        shipper: Address {
            person_name: Some("John Citizen".to_string()),
            address_line1: Some("1 Main Street".to_string()),
            suburb: Some("MELBOURNE".to_string()),
            state_code: Some("VIC".to_string()),
            postal_code: Some("3000".to_string()),
            country_code: Some("AU".to_string()),
            phone_number: Some("0401234567".to_string()),
            email: Some("john.citizen@example.com".to_string()),
            ..Default::default()
        },
        recipient: Address {
            person_name: Some("Jane Smith".to_string()),
            company_name: Some("Smith Pty Ltd".to_string()),
            address_line1: Some("123 Centre Road".to_string()),
            suburb: Some("Sydney".to_string()),
            state_code: Some("NSW".to_string()),
            postal_code: Some("2000".to_string()),
            country_code: Some("AU".to_string()),
            phone_number: Some("0412345678".to_string()),
            email: Some("jane.smith@smith.com".to_string()),
            ..Default::default()
        },
        parcel: Parcel {
            id: Some("T28S".to_string()),
            reference: Some("XYZ-001-01".to_string()),
            description: Some("Documents".to_string()),
            packaging_type: Some("satchel".to_string()),
            length: Some(10.0),
            width: Some(10.0),
            height: Some(10.0),
            weight: Some(1.0),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[test]
fn test_request_json() {
    let request = aups::shipping_price_request(&rate_request()).unwrap();
    let json: Value = serde_json::from_str(&request.serialize().unwrap()).unwrap();

    assert_eq!(
        json,
        json!({
            "shipments": [{
                "shipment_reference": "XYZ-001-01",
                "email_tracking_enabled": true,
                "from": {
                    "name": "John Citizen",
                    "lines": ["1 Main Street"],
                    "suburb": "MELBOURNE",
                    "state": "VIC",
                    "postcode": "3000",
                    "country": "AU",
                    "phone": "0401234567",
                    "email": "john.citizen@example.com"
                },
                "to": {
                    "name": "Jane Smith",
                    "business_name": "Smith Pty Ltd",
                    "lines": ["123 Centre Road"],
                    "suburb": "Sydney",
                    "state": "NSW",
                    "postcode": "2000",
                    "country": "AU",
                    "phone": "0412345678",
                    "email": "jane.smith@smith.com"
                },
                "items": [{
                    "item_reference": "XYZ-001-01",
                    "product_id": "T28S",
                    "item_description": "Documents",
                    "length": 10.0,
                    "width": 10.0,
                    "height": 10.0,
                    "weight": 1.0,
                    "authority_to_leave": false,
                    "allow_partial_delivery": true,
                    "packaging_type": "SAT"
                }]
            }]
        })
    );
}

#[test]
fn test_serialized_request_matches_its_mapping() {
    let request = aups::shipping_price_request(&rate_request()).unwrap();

    let parsed: Value = serde_json::from_str(&request.serialize().unwrap()).unwrap();
    assert_eq!(parsed, serde_json::to_value(request.value()).unwrap());
}

#[test]
fn test_empty_response() {
    let (rates, messages) =
        aups::parse_shipping_price_response(&json!({ "shipments": [], "errors": [] }), &settings())
            .unwrap();

    assert!(rates.is_empty());
    assert!(messages.is_empty());
}

#[test]
fn test_shipment_summary_breakdown() {
    let response = json!({
        "shipments": [{
            "shipment_summary": {
                "fuel_surcharge": 10.5,
                "security_surcharge": null,
                "transit_cover": 2.0,
                "freight_charge": null,
                "total_cost_ex_gst": 100,
                "total_gst": 10,
                "total_cost": 110,
                "discount": 0
            }
        }]
    });

    let (rates, messages) = aups::parse_shipping_price_response(&response, &settings()).unwrap();

    assert!(messages.is_empty());
    let rate = &rates[0];
    let charges: Vec<(&str, _)> = rate
        .extra_charges
        .iter()
        .map(|charge| (charge.name.as_str(), charge.amount))
        .collect();
    assert_eq!(
        charges,
        vec![("Fuel", Some(dec!(10.5))), ("Transit Cover", Some(dec!(2.0)))]
    );
    assert!(rate.extra_charges.iter().all(|charge| charge.currency == "AUD"));
    assert_eq!(rate.base_charge, Some(dec!(100)));
    assert_eq!(rate.duties_and_taxes, Some(dec!(10)));
    assert_eq!(rate.total_charge, Some(dec!(110)));
    assert_eq!(rate.discount, Some(dec!(0)));
    assert_eq!(rate.currency, "AUD");
    assert_eq!(rate.carrier, "aups");
    assert_eq!(rate.carrier_name, "Australia Post");
}

#[test]
fn test_error_response() {
    let response = json!({
        "errors": [{
            "code": "44003",
            "name": "NO_PRICES_FOUND",
            "message": "No prices found for the requested shipment."
        }]
    });

    let (rates, messages) = aups::parse_shipping_price_response(&response, &settings()).unwrap();

    assert!(rates.is_empty());
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].code.as_deref(), Some("44003"));
}

#[test]
fn test_malformed_response() {
    let response = json!({ "shipments": "not-a-list" });
    let (rates, messages) = aups::parse_shipping_price_response(&response, &settings()).unwrap();
    assert!(rates.is_empty());
    assert!(messages.is_empty());

    assert!(aups::parse_shipping_price_response(&json!(42), &settings()).is_err());
}

#[test]
fn test_mapper_dispatch() {
    let mapper = aups::Mapper::new(settings());

    let request = mapper.create_rate_request(&rate_request()).unwrap();
    assert_eq!(request.value().shipments.len(), 1);

    let (rates, _) = mapper
        .parse_rate_response(&json!({ "shipments": [{ "shipment_summary": { "total_cost": 21.5 } }] }))
        .unwrap();
    assert_eq!(rates[0].total_charge, Some(dec!(21.50)));
}
