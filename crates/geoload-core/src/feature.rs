//! GeoJSON feature values as handed to the renderer.
//!
//! A feature is kept as the raw JSON value it arrived as; only the `type`
//! discriminator is ever looked at.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A GeoJSON object taken from the payload, geometry and properties untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feature(Value);

/// Ordered features, in the order the payload listed them.
pub type FeatureList = Vec<Feature>;

impl Feature {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// The `id` member, if any.
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }
}

/// True if `value` is an object whose `type` member is the string `"Feature"`.
pub fn is_feature(value: &Value) -> bool {
    type_tag(value) == Some("Feature")
}

/// The `type` member of an object, when it is a string.
fn type_tag(value: &Value) -> Option<&str> {
    value.get("type").and_then(Value::as_str)
}

/// Wraps features back into a `FeatureCollection` document.
pub fn to_feature_collection(features: &[Feature]) -> Value {
    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}
