//! Australia Post shipping price (rate) mapping

use super::error::parse_error_response;
use super::models::{
    ErrorResponse, Item, ResponseShipment, Shipment, ShipmentFrom, ShipmentTo,
    ShippingPriceRequest, ShippingPriceResponse,
};
use super::settings::AustraliaPostSettings;
use super::units::PackagingType;
use super::{CARRIER, CARRIER_NAME};
use crate::metrics;
use serde::Deserialize;
use serde_json::Value;
use shipping_core::units::{Country, Currency};
use shipping_core::utils::decimal;
use shipping_core::{
    Address, ChargeDetails, Error, Message, RateDetails, RateRequest, Result, Serializable,
    Settings,
};
use tracing::{debug, warn};

/// Parse a shipping price response into quotes and carrier messages.
///
/// Quotes and errors are read independently: a response may carry both.
/// Fields of the wrong type are read as absent. Only a response that is not
/// a JSON object is rejected.
pub fn parse_shipping_price_response(
    response: &Value,
    settings: &AustraliaPostSettings,
) -> Result<(Vec<RateDetails>, Vec<Message>)> {
    let price_response = ShippingPriceResponse::deserialize(response)?;
    let error_response = ErrorResponse::deserialize(response)?;

    let rates: Vec<RateDetails> = price_response
        .shipments
        .iter()
        .flatten()
        .map(|shipment| extract_quote(shipment, settings))
        .collect();
    let messages = parse_error_response(&error_response, settings);

    debug!(
        "Parsed {} Australia Post quote(s), {} message(s)",
        rates.len(),
        messages.len()
    );
    metrics::record_response(CARRIER, "shipping_price", messages.len());

    Ok((rates, messages))
}

fn extract_quote(shipment: &ResponseShipment, settings: &AustraliaPostSettings) -> RateDetails {
    let summary = shipment.shipment_summary.clone().unwrap_or_default();

    let surcharges = [
        ("Fuel", summary.fuel_surcharge),
        ("Security", summary.security_surcharge),
        ("Transit Cover", summary.transit_cover),
        ("Freight Charge", summary.freight_charge),
    ];
    let extra_charges = surcharges
        .into_iter()
        .filter(|(_, amount)| amount.is_some())
        .map(|(name, amount)| ChargeDetails {
            name: name.to_string(),
            amount: decimal(amount),
            currency: Currency::AUD.as_str().to_string(),
        })
        .collect();

    RateDetails {
        carrier: settings.carrier().to_string(),
        carrier_name: settings.carrier_name().to_string(),
        currency: Currency::AUD.as_str().to_string(),
        service: service(shipment),
        base_charge: decimal(summary.total_cost_ex_gst),
        duties_and_taxes: decimal(summary.total_gst),
        total_charge: decimal(summary.total_cost),
        discount: decimal(summary.discount),
        extra_charges,
        transit_days: None,
    }
}

fn service(shipment: &ResponseShipment) -> Option<String> {
    shipment
        .items
        .iter()
        .flatten()
        .find_map(|item| item.product_id.clone())
}

/// Build an Australia Post shipping price request.
///
/// Fails with [`Error::OriginNotServiced`] when the shipper is outside
/// Australia.
pub fn shipping_price_request(payload: &RateRequest) -> Result<Serializable<ShippingPriceRequest>> {
    let origin = payload
        .shipper
        .country_code
        .as_deref()
        .filter(|country| !country.is_empty());
    if let Some(origin) = origin {
        if origin != Country::AU.as_str() {
            warn!("Australia Post does not service origin country {}", origin);
            return Err(Error::OriginNotServiced {
                origin: origin.to_string(),
                carrier_name: CARRIER_NAME.to_string(),
            });
        }
    }

    let packaging_type = payload
        .parcel
        .packaging_type
        .as_deref()
        .and_then(PackagingType::from_name)
        .map(|t| t.code().to_string());

    let request = ShippingPriceRequest {
        shipments: vec![Shipment {
            shipment_reference: payload.parcel.reference.clone(),
            sender_references: None,
            goods_descriptions: None,
            despatch_date: None,
            consolidate: None,
            email_tracking_enabled: payload.shipper.email.is_some(),
            from: ShipmentFrom {
                name: payload.shipper.person_name.clone(),
                kind: None,
                lines: address_lines(&payload.shipper),
                suburb: payload.shipper.suburb.clone(),
                state: payload.shipper.state_code.clone(),
                postcode: payload.shipper.postal_code.clone(),
                country: payload.shipper.country_code.clone(),
                phone: payload.shipper.phone_number.clone(),
                email: payload.shipper.email.clone(),
            },
            to: ShipmentTo {
                name: payload.recipient.person_name.clone(),
                business_name: payload.recipient.company_name.clone(),
                kind: None,
                lines: address_lines(&payload.recipient),
                suburb: payload.recipient.suburb.clone(),
                state: payload.recipient.state_code.clone(),
                postcode: payload.recipient.postal_code.clone(),
                country: payload.recipient.country_code.clone(),
                phone: payload.recipient.phone_number.clone(),
                email: payload.recipient.email.clone(),
                delivery_instructions: None,
            },
            dangerous_goods: None,
            movement_type: None,
            features: None,
            authorisation_number: None,
            items: vec![Item {
                item_reference: payload.parcel.reference.clone(),
                product_id: payload.parcel.id.clone(),
                item_description: payload.parcel.description.clone(),
                length: payload.parcel.length,
                width: payload.parcel.width,
                height: payload.parcel.height,
                cubic_volume: None,
                weight: payload.parcel.weight,
                contains_dangerous_goods: None,
                transportable_by_air: None,
                dangerous_goods_declaration: None,
                authority_to_leave: false,
                reason_for_return: None,
                allow_partial_delivery: true,
                packaging_type,
                atl_number: None,
                features: None,
                tracking_details: None,
                commercial_value: None,
                export_declaration_number: None,
                import_reference_number: None,
                classification_type: None,
                description_of_other: None,
                international_parcel_sender_name: None,
                non_delivery_action: None,
                certificate_number: None,
                licence_number: None,
                invoice_number: None,
                comments: None,
                tariff_concession: None,
                free_trade_applicable: None,
            }],
        }],
    };

    metrics::record_request(CARRIER, "shipping_price");
    Ok(Serializable::new(request, request_serializer))
}

/// Address lines 1 and 2, absent lines dropped
fn address_lines(address: &Address) -> Vec<String> {
    [&address.address_line1, &address.address_line2]
        .into_iter()
        .flatten()
        .cloned()
        .collect()
}

fn request_serializer(request: &ShippingPriceRequest) -> Result<String> {
    let value = serde_json::to_value(request)?;
    Ok(value.to_string())
}
