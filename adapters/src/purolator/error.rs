//! Purolator SOAP error parsing

use serde_json::json;
use shipping_core::xml::Element;
use shipping_core::{Message, Settings};

/// Collect every `Error` element of a parsed Purolator response
pub fn parse_error_response(response: &Element, settings: &impl Settings) -> Vec<Message> {
    response
        .find_all("Error")
        .into_iter()
        .map(|error| Message {
            carrier: settings.carrier().to_string(),
            carrier_name: settings.carrier_name().to_string(),
            code: error.child_text("Code").map(str::to_string),
            message: error.child_text("Description").map(str::to_string),
            details: error
                .child_text("AdditionalInformation")
                .map(|info| json!({ "additional_information": info })),
        })
        .collect()
}
