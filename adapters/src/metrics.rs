//! Adapter metrics

use prometheus::{register_int_counter_vec, IntCounterVec};

lazy_static::lazy_static! {
    /// Carrier-native requests built, by carrier and operation
    pub static ref MAPPER_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "carrier_mapper_requests_total",
        "Carrier-native requests built",
        &["carrier", "operation"]
    )
    .unwrap();

    /// Carrier responses parsed, by carrier and operation
    pub static ref MAPPER_RESPONSES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "carrier_mapper_responses_total",
        "Carrier responses parsed",
        &["carrier", "operation"]
    )
    .unwrap();

    /// Carrier error messages, by carrier
    pub static ref CARRIER_MESSAGES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "carrier_messages_total",
        "Carrier error messages collected from responses",
        &["carrier"]
    )
    .unwrap();
}

/// Record a built request
pub fn record_request(carrier: &str, operation: &str) {
    MAPPER_REQUESTS_TOTAL
        .with_label_values(&[carrier, operation])
        .inc();
}

/// Record a parsed response and the carrier messages it carried
pub fn record_response(carrier: &str, operation: &str, messages: usize) {
    MAPPER_RESPONSES_TOTAL
        .with_label_values(&[carrier, operation])
        .inc();
    CARRIER_MESSAGES_TOTAL
        .with_label_values(&[carrier])
        .inc_by(messages as u64);
}
