use serde_json::{Number, Value};

use crate::{
    document::path::NodePath,
    foundation::error::{CheckError, CheckResult},
};

/// `type` value of a container node.
pub const FEATURE_COLLECTION: &str = "FeatureCollection";
/// `type` value of a leaf node.
pub const FEATURE: &str = "Feature";

/// A parsed JSON value viewed as one of the node kinds the checker understands.
#[derive(Clone, Copy, Debug)]
pub enum Node<'a> {
    /// `FeatureCollection`: children in document order.
    Collection(&'a [Value]),
    /// `Feature`: a leaf carrying `properties.count`.
    Feature(Feature<'a>),
    /// Anything else (geometries, foreign members, scalars). Skipped.
    Unrecognized,
}

impl<'a> Node<'a> {
    /// Classify `value` by its `type` discriminant.
    ///
    /// Recognized kinds must carry the fields the checker reads; unrecognized
    /// values are never an error.
    pub fn classify(value: &'a Value, path: &NodePath) -> CheckResult<Self> {
        match value.get("type").and_then(Value::as_str) {
            Some(FEATURE_COLLECTION) => {
                let features = value
                    .get("features")
                    .and_then(Value::as_array)
                    .ok_or_else(|| {
                        CheckError::structure(path, "FeatureCollection has no `features` array")
                    })?;
                Ok(Self::Collection(features.as_slice()))
            }
            Some(FEATURE) => Feature::from_value(value, path).map(Node::Feature),
            _ => Ok(Self::Unrecognized),
        }
    }
}

/// A `Feature` node borrowed from the document.
#[derive(Clone, Copy, Debug)]
pub struct Feature<'a> {
    raw: &'a Value,
    count: Option<&'a Number>,
}

impl<'a> Feature<'a> {
    fn from_value(value: &'a Value, path: &NodePath) -> CheckResult<Self> {
        let properties = value
            .get("properties")
            .and_then(Value::as_object)
            .ok_or_else(|| CheckError::structure(path, "Feature has no `properties` object"))?;

        let count = match properties.get("count") {
            None => None,
            Some(Value::Number(n)) => Some(n),
            Some(other) => {
                return Err(CheckError::structure(
                    path,
                    format!(
                        "`properties.count` must be a number, found {}",
                        json_kind(other)
                    ),
                ));
            }
        };

        Ok(Self { raw: value, count })
    }

    /// The whole feature node as it appeared in the document.
    pub fn raw(&self) -> &'a Value {
        self.raw
    }

    /// `properties.count`, or `None` when the key is absent.
    pub fn count(&self) -> Option<&'a Number> {
        self.count
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/model.rs"]
mod tests;
