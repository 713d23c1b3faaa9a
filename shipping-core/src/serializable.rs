//! Serializable envelope: a carrier-native request bound to its renderer

use crate::Result;

/// Renders a carrier-native request into its wire payload
pub type Serializer<T> = fn(&T) -> Result<String>;

/// Carrier-native request paired with the only serializer that may render it
pub struct Serializable<T> {
    value: T,
    serializer: Serializer<T>,
}

impl<T> Serializable<T> {
    /// Bind a request to its serializer
    pub fn new(value: T, serializer: Serializer<T>) -> Self {
        Self { value, serializer }
    }

    /// Constructed carrier-native request
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Render the wire payload
    pub fn serialize(&self) -> Result<String> {
        (self.serializer)(&self.value)
    }

    /// Take back the carrier-native request
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Clone> Clone for Serializable<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            serializer: self.serializer,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Serializable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Serializable")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
