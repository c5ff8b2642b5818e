//! Parsed JSON → feature list.
//!
//! Three shapes are accepted: a `FeatureCollection` with a `features` array,
//! a single `Feature`, or a bare array of features. Arrays are filtered
//! quietly while other objects are rejected outright.

use crate::error::FormatError;
use crate::feature::{is_feature, Feature, FeatureList};
use serde_json::{Map, Value};

enum ObjectShape {
    Collection,
    Feature,
    Unsupported,
}

fn object_shape(map: &Map<String, Value>) -> ObjectShape {
    match map.get("type").and_then(Value::as_str) {
        Some("FeatureCollection") if matches!(map.get("features"), Some(Value::Array(_))) => {
            ObjectShape::Collection
        }
        Some("Feature") => ObjectShape::Feature,
        _ => ObjectShape::Unsupported,
    }
}

/// JSON values that count as "nothing here": `null`, `false`, `0`, `""`.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Normalizes a parsed payload into its features.
pub fn normalize(value: Value) -> Result<FeatureList, FormatError> {
    if is_blank(&value) {
        return Ok(Vec::new());
    }
    match value {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter(is_feature)
            .map(Feature::new)
            .collect()),
        Value::Object(mut map) => match object_shape(&map) {
            ObjectShape::Collection => match map.remove("features") {
                Some(Value::Array(features)) => Ok(features.into_iter().map(Feature::new).collect()),
                _ => Err(FormatError::UnsupportedShape),
            },
            ObjectShape::Feature => Ok(vec![Feature::new(Value::Object(map))]),
            ObjectShape::Unsupported => {
                tracing::debug!("rejecting GeoJSON object with type {:?}", map.get("type"));
                Err(FormatError::UnsupportedShape)
            }
        },
        _ => Err(FormatError::UnsupportedShape),
    }
}

/// Like `normalize`, with a missing value treated as empty.
pub fn normalize_optional(value: Option<Value>) -> Result<FeatureList, FormatError> {
    value.map_or_else(|| Ok(Vec::new()), normalize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(features: FeatureList) -> Vec<Value> {
        features.into_iter().map(Feature::into_value).collect()
    }

    #[test]
    fn collection_yields_features_as_is() {
        let features = json!([
            {"type": "Feature", "id": "a"},
            {"type": "Feature", "id": "b"},
            {"type": "Feature", "id": "c"}
        ]);
        let fc = json!({"type": "FeatureCollection", "features": features.clone()});
        assert_eq!(Value::Array(raw(normalize(fc).unwrap())), features);
    }

    #[test]
    fn collection_entries_are_not_filtered() {
        let fc = json!({"type": "FeatureCollection", "features": [{"type": "Point"}, 3]});
        assert_eq!(normalize(fc).unwrap().len(), 2);
    }

    #[test]
    fn empty_collection() {
        let fc = json!({"type": "FeatureCollection", "features": []});
        assert!(normalize(fc).unwrap().is_empty());
    }

    #[test]
    fn collection_without_features_array_is_unsupported() {
        let fc = json!({"type": "FeatureCollection", "features": {"0": {}}});
        assert!(matches!(normalize(fc), Err(FormatError::UnsupportedShape)));
        let fc = json!({"type": "FeatureCollection"});
        assert!(matches!(normalize(fc), Err(FormatError::UnsupportedShape)));
    }

    #[test]
    fn single_feature_yields_one() {
        let f = json!({"type": "Feature", "geometry": {"type": "Point", "coordinates": [1, 2]}, "properties": null});
        assert_eq!(raw(normalize(f.clone()).unwrap()), vec![f]);
    }

    #[test]
    fn array_keeps_only_features_in_order() {
        let arr = json!([
            {"type": "Feature", "id": 1},
            {"type": "Point", "coordinates": [0, 0]},
            {"type": "Feature", "id": 2},
            null,
            "Feature"
        ]);
        let out = raw(normalize(arr).unwrap());
        assert_eq!(
            out,
            vec![json!({"type": "Feature", "id": 1}), json!({"type": "Feature", "id": 2})]
        );
    }

    #[test]
    fn array_without_features_is_empty_not_error() {
        let arr = json!([{"type": "Point"}, 1, "x"]);
        assert!(normalize(arr).unwrap().is_empty());
        assert!(normalize(json!([])).unwrap().is_empty());
    }

    #[test]
    fn null_and_missing_are_empty() {
        assert!(normalize(Value::Null).unwrap().is_empty());
        assert!(normalize_optional(None).unwrap().is_empty());
        assert!(normalize_optional(Some(Value::Null)).unwrap().is_empty());
    }

    #[test]
    fn blank_scalars_are_empty() {
        assert!(normalize(json!(false)).unwrap().is_empty());
        assert!(normalize(json!(0)).unwrap().is_empty());
        assert!(normalize(json!(0.0)).unwrap().is_empty());
        assert!(normalize(json!("")).unwrap().is_empty());
    }

    #[test]
    fn other_shapes_are_unsupported() {
        for v in [
            json!({"type": "Point", "coordinates": [0, 0]}),
            json!({"features": []}),
            json!({}),
            json!(true),
            json!(42),
            json!("FeatureCollection"),
        ] {
            assert!(
                matches!(normalize(v.clone()), Err(FormatError::UnsupportedShape)),
                "expected unsupported for {v}"
            );
        }
    }
}
