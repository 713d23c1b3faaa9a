//! Australia Post Shipping and Tracking API models (JSON)

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// =========================================================================
// SHIPPING PRICE REQUEST
// =========================================================================

/// Shipping price request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingPriceRequest {
    /// Shipments to price
    pub shipments: Vec<Shipment>,
}

/// Shipment to price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    /// Shipment reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_reference: Option<String>,
    /// Sender references
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_references: Option<Vec<String>>,
    /// Goods descriptions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goods_descriptions: Option<Vec<String>>,
    /// Despatch date (YYYY-MM-DD)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub despatch_date: Option<String>,
    /// Consolidate with other shipments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consolidate: Option<bool>,
    /// Email tracking notifications
    pub email_tracking_enabled: bool,
    /// Sender
    pub from: ShipmentFrom,
    /// Receiver
    pub to: ShipmentTo,
    /// Dangerous goods declaration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dangerous_goods: Option<Value>,
    /// Movement type (e.g., "DESPATCH")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movement_type: Option<String>,
    /// Shipment features
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Value>,
    /// Authority to leave number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorisation_number: Option<String>,
    /// Items
    pub items: Vec<Item>,
}

/// Sender
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentFrom {
    /// Name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Address type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Address lines
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<String>,
    /// Suburb
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suburb: Option<String>,
    /// State code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Postcode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    /// Country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Receiver
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentTo {
    /// Name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Business name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    /// Address type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Address lines
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<String>,
    /// Suburb
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suburb: Option<String>,
    /// State code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Postcode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    /// Country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Delivery instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_instructions: Option<String>,
}

/// Shipment item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    /// Item reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_reference: Option<String>,
    /// Product (service) code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Item description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_description: Option<String>,
    /// Length (cm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Width (cm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Height (cm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Cubic volume (m³)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cubic_volume: Option<f64>,
    /// Weight (kg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Contains dangerous goods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_dangerous_goods: Option<bool>,
    /// Can travel by air
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transportable_by_air: Option<bool>,
    /// Dangerous goods declaration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dangerous_goods_declaration: Option<String>,
    /// Leave without signature
    pub authority_to_leave: bool,
    /// Return reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_for_return: Option<String>,
    /// Deliver items of the shipment separately
    pub allow_partial_delivery: bool,
    /// Packaging code (e.g., "CTN")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging_type: Option<String>,
    /// Authority to leave number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atl_number: Option<String>,
    /// Item features
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Value>,
    /// Tracking details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_details: Option<Value>,
    /// Item has commercial value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commercial_value: Option<bool>,
    /// Export declaration number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_declaration_number: Option<String>,
    /// Import reference number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_reference_number: Option<String>,
    /// Customs classification (e.g., "GIFT")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification_type: Option<String>,
    /// Description when classification is "OTHER"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_of_other: Option<String>,
    /// Sender name for international parcels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub international_parcel_sender_name: Option<String>,
    /// Action on non-delivery (e.g., "RETURN")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_delivery_action: Option<String>,
    /// Certificate number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_number: Option<String>,
    /// Licence number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub licence_number: Option<String>,
    /// Commercial invoice number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    /// Customs comments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    /// Tariff concession
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tariff_concession: Option<String>,
    /// Free trade agreement applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_trade_applicable: Option<bool>,
}

// =========================================================================
// SHIPPING PRICE RESPONSE
// =========================================================================

/// Shipping price response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingPriceResponse {
    /// Priced shipments (`null` is treated as empty)
    #[serde(deserialize_with = "lenient")]
    pub shipments: Option<Vec<ResponseShipment>>,
}

/// Priced shipment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseShipment {
    /// Shipment reference
    #[serde(deserialize_with = "lenient")]
    pub shipment_reference: Option<String>,
    /// Creation timestamp
    #[serde(deserialize_with = "lenient")]
    pub shipment_creation_date: Option<String>,
    /// Movement type
    #[serde(deserialize_with = "lenient")]
    pub movement_type: Option<String>,
    /// Priced items
    #[serde(deserialize_with = "lenient")]
    pub items: Option<Vec<ResponseItem>>,
    /// Price summary
    #[serde(deserialize_with = "lenient")]
    pub shipment_summary: Option<ShipmentSummary>,
}

/// Priced item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseItem {
    /// Item reference
    #[serde(deserialize_with = "lenient")]
    pub item_reference: Option<String>,
    /// Product (service) code
    #[serde(deserialize_with = "lenient")]
    pub product_id: Option<String>,
}

/// Shipment price summary (AUD)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipmentSummary {
    /// Total cost including GST
    #[serde(deserialize_with = "lenient")]
    pub total_cost: Option<Decimal>,
    /// Total cost excluding GST
    #[serde(deserialize_with = "lenient")]
    pub total_cost_ex_gst: Option<Decimal>,
    /// Fuel surcharge
    #[serde(deserialize_with = "lenient")]
    pub fuel_surcharge: Option<Decimal>,
    /// Security surcharge
    #[serde(deserialize_with = "lenient")]
    pub security_surcharge: Option<Decimal>,
    /// Transit cover
    #[serde(deserialize_with = "lenient")]
    pub transit_cover: Option<Decimal>,
    /// Freight charge
    #[serde(deserialize_with = "lenient")]
    pub freight_charge: Option<Decimal>,
    /// Shipping cost
    #[serde(deserialize_with = "lenient")]
    pub shipping_cost: Option<Decimal>,
    /// Total GST
    #[serde(deserialize_with = "lenient")]
    pub total_gst: Option<Decimal>,
    /// Discount
    #[serde(deserialize_with = "lenient")]
    pub discount: Option<Decimal>,
    /// Status
    #[serde(deserialize_with = "lenient")]
    pub status: Option<String>,
    /// Number of items
    #[serde(deserialize_with = "lenient")]
    pub number_of_items: Option<u32>,
}

// =========================================================================
// ERRORS
// =========================================================================

/// Error envelope carried by any API response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorResponse {
    /// Errors (`null` is treated as empty)
    #[serde(deserialize_with = "lenient")]
    pub errors: Option<Vec<ApiError>>,
}

/// API error
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiError {
    /// Error code (string or number on the wire)
    pub code: Option<Value>,
    /// Error name
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    /// Message
    #[serde(deserialize_with = "lenient")]
    pub message: Option<String>,
    /// Offending request field
    #[serde(deserialize_with = "lenient")]
    pub field: Option<String>,
    /// Error context
    pub context: Option<Value>,
}

/// Read an optional response field; a value of the wrong type is treated as
/// absent
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| T::deserialize(value).ok()))
}
