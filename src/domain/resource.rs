//! The shared contract of the four resource collections.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{FactoryError, FactoryResult};

/// A resource kind exposed as a list/create collection.
///
/// Implementors are flat records whose field schema doubles as the
/// documentation schema. The catalog is rebuilt on every call, so nothing
/// is shared between requests.
pub trait Resource: Serialize + DeserializeOwned + Sized {
    /// Human label used in response messages.
    const LABEL: &'static str;

    /// Lower-case kind, used as the key of the create envelope.
    const KEY: &'static str;

    /// The fixed example records returned by the list endpoint.
    fn catalog() -> Vec<Self>;

    /// Message returned alongside an accepted payload.
    fn created_message() -> String {
        format!("{} created successfully", Self::LABEL)
    }

    /// Decode a raw payload into the strict record type.
    ///
    /// Required fields must be present and every field must have its
    /// declared type. Unknown fields are ignored.
    fn validate(payload: &Value) -> FactoryResult<Self> {
        serde_json::from_value(payload.clone()).map_err(|e| {
            FactoryError::Validation(format!("Invalid {} payload: {}", Self::KEY, e))
        })
    }
}
