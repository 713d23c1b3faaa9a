//! Australia Post error parsing

use super::models::{ApiError, ErrorResponse};
use serde_json::{Map, Value};
use shipping_core::{Message, Settings};

/// Convert the `errors` of an API response into carrier messages
pub fn parse_error_response(response: &ErrorResponse, settings: &impl Settings) -> Vec<Message> {
    response
        .errors
        .iter()
        .flatten()
        .map(|error| extract_message(error, settings))
        .collect()
}

fn extract_message(error: &ApiError, settings: &impl Settings) -> Message {
    let code = error.code.as_ref().and_then(|code| match code {
        Value::String(code) => Some(code.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    });

    let mut details = Map::new();
    if let Some(ref name) = error.name {
        details.insert("name".to_string(), Value::String(name.clone()));
    }
    if let Some(ref field) = error.field {
        details.insert("field".to_string(), Value::String(field.clone()));
    }
    if let Some(ref context) = error.context {
        details.insert("context".to_string(), context.clone());
    }

    Message {
        carrier: settings.carrier().to_string(),
        carrier_name: settings.carrier_name().to_string(),
        code,
        message: error.message.clone(),
        details: (!details.is_empty()).then_some(Value::Object(details)),
    }
}
