//! Unified shipping API types (carrier-agnostic payloads and results)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =========================================================================
// REQUEST PAYLOADS
// =========================================================================

/// Postal address and contact of a shipper or recipient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    /// Postal code
    pub postal_code: Option<String>,
    /// City
    pub city: Option<String>,
    /// Contact person
    pub person_name: Option<String>,
    /// Company name
    pub company_name: Option<String>,
    /// Country code (ISO 3166-1 alpha-2)
    pub country_code: Option<String>,
    /// Email
    pub email: Option<String>,
    /// Phone number
    pub phone_number: Option<String>,
    /// State or province code
    pub state_code: Option<String>,
    /// Suburb
    pub suburb: Option<String>,
    /// Residential address flag
    pub residential: Option<bool>,
    /// Address line 1
    pub address_line1: Option<String>,
    /// Address line 2
    pub address_line2: Option<String>,
}

/// Parcel description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parcel {
    /// Parcel or product identifier
    pub id: Option<String>,
    /// Weight
    pub weight: Option<f64>,
    /// Width
    pub width: Option<f64>,
    /// Height
    pub height: Option<f64>,
    /// Length
    pub length: Option<f64>,
    /// Packaging type name (carrier lookup key)
    pub packaging_type: Option<String>,
    /// Description
    pub description: Option<String>,
    /// Content
    pub content: Option<String>,
    /// Document-only parcel
    pub is_document: bool,
    /// Weight unit (e.g., "KG")
    pub weight_unit: Option<String>,
    /// Dimension unit (e.g., "CM")
    pub dimension_unit: Option<String>,
    /// Reference
    pub reference: Option<String>,
}

/// Rate request (quote)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateRequest {
    /// Shipper
    pub shipper: Address,
    /// Recipient
    pub recipient: Address,
    /// Parcel
    pub parcel: Parcel,
    /// Requested services
    pub services: Vec<String>,
    /// Reference
    pub reference: Option<String>,
}

/// Shipment request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipmentRequest {
    /// Service code
    pub service: Option<String>,
    /// Shipper
    pub shipper: Address,
    /// Recipient
    pub recipient: Address,
    /// Parcel
    pub parcel: Parcel,
    /// Reference
    pub reference: Option<String>,
    /// Requested label format (e.g., "PDF", "ZPL")
    pub label_type: Option<String>,
}

// =========================================================================
// RESULTS
// =========================================================================

/// Itemized charge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeDetails {
    /// Charge name (e.g., "Fuel")
    pub name: String,
    /// Amount
    pub amount: Option<Decimal>,
    /// ISO 4217 currency code
    pub currency: String,
}

/// Rate quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateDetails {
    /// Carrier identifier (configured)
    pub carrier: String,
    /// Carrier name
    pub carrier_name: String,
    /// ISO 4217 currency code
    pub currency: String,
    /// Service code
    pub service: Option<String>,
    /// Base charge (excluding taxes)
    pub base_charge: Option<Decimal>,
    /// Duties and taxes
    pub duties_and_taxes: Option<Decimal>,
    /// Total charge
    pub total_charge: Option<Decimal>,
    /// Discount
    pub discount: Option<Decimal>,
    /// Itemized surcharges
    pub extra_charges: Vec<ChargeDetails>,
    /// Transit days
    pub transit_days: Option<u32>,
}

/// Carrier message (usually an error reported by the carrier)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Carrier identifier (configured)
    pub carrier: String,
    /// Carrier name
    pub carrier_name: String,
    /// Carrier error code
    pub code: Option<String>,
    /// Human readable message
    pub message: Option<String>,
    /// Extra carrier details
    pub details: Option<serde_json::Value>,
}
