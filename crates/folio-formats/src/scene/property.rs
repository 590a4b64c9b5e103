//! Recursive property values

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A renderer-specific block attribute
///
/// Properties form arbitrarily nested maps of primitives; resource
/// references are ordinary strings holding a resource path. The recursive
/// [`rewrite_strings`](Self::rewrite_strings) walk is the single place such
/// references get rewritten during a merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// JSON null
    Null,
    /// Boolean primitive
    Bool(bool),
    /// Integer primitive
    Int(i64),
    /// Floating-point primitive
    Float(f64),
    /// String primitive, possibly a resource reference
    Text(String),
    /// Ordered list of values
    List(Vec<PropertyValue>),
    /// Nested map of values
    Map(BTreeMap<String, PropertyValue>),
}

impl PropertyValue {
    /// Recursively rewrite string values
    ///
    /// Calls `rewrite` for every string in the value tree; a `Some` result
    /// replaces the string in place, `None` leaves it untouched. Map keys
    /// are never rewritten, only values.
    pub fn rewrite_strings<F>(&mut self, rewrite: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        match self {
            Self::Text(text) => {
                if let Some(replacement) = rewrite(text) {
                    *text = replacement;
                }
            }
            Self::List(items) => {
                for item in items {
                    item.rewrite_strings(rewrite);
                }
            }
            Self::Map(map) => {
                for value in map.values_mut() {
                    value.rewrite_strings(rewrite);
                }
            }
            Self::Null | Self::Bool(_) | Self::Int(_) | Self::Float(_) => {}
        }
    }

    /// Recursively visit every string value
    pub fn visit_strings<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a str),
    {
        match self {
            Self::Text(text) => visit(text),
            Self::List(items) => {
                for item in items {
                    item.visit_strings(visit);
                }
            }
            Self::Map(map) => {
                for value in map.values() {
                    value.visit_strings(visit);
                }
            }
            Self::Null | Self::Bool(_) | Self::Int(_) | Self::Float(_) => {}
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn nested_sample() -> PropertyValue {
        let json = r#"{
            "fill": { "image": "resources/img.png", "opacity": 0.5 },
            "tags": ["resources/img.png", "plain text"],
            "visible": true,
            "z": 3
        }"#;
        serde_json::from_str(json).expect("Operation should succeed")
    }

    #[test]
    fn test_untagged_deserialization() {
        let value = nested_sample();
        let PropertyValue::Map(map) = &value else {
            panic!("Expected map");
        };

        assert_eq!(map["visible"], PropertyValue::Bool(true));
        assert_eq!(map["z"], PropertyValue::Int(3));

        let PropertyValue::Map(fill) = &map["fill"] else {
            panic!("Expected nested map");
        };
        assert_eq!(fill["opacity"], PropertyValue::Float(0.5));
        assert_eq!(
            fill["image"],
            PropertyValue::Text("resources/img.png".to_string())
        );
    }

    #[test]
    fn test_rewrite_strings_nested() {
        let mut value = nested_sample();
        value.rewrite_strings(&|text| {
            (text == "resources/img.png").then(|| "resources/0_img.png".to_string())
        });

        let mut seen = Vec::new();
        value.visit_strings(&mut |text| seen.push(text.to_string()));
        seen.sort();
        assert_eq!(
            seen,
            vec![
                "plain text".to_string(),
                "resources/0_img.png".to_string(),
                "resources/0_img.png".to_string(),
            ]
        );
    }

    #[test]
    fn test_rewrite_leaves_non_matching_strings() {
        let mut value = PropertyValue::Text("plain text".to_string());
        value.rewrite_strings(&|_| None);
        assert_eq!(value, PropertyValue::Text("plain text".to_string()));
    }

    #[test]
    fn test_json_round_trip() {
        let value = nested_sample();
        let json = serde_json::to_string(&value).expect("Operation should succeed");
        let parsed: PropertyValue =
            serde_json::from_str(&json).expect("Operation should succeed");
        assert_eq!(value, parsed);
    }

    #[test]
    fn test_null_round_trip() {
        let parsed: PropertyValue =
            serde_json::from_str("null").expect("Operation should succeed");
        assert_eq!(parsed, PropertyValue::Null);
        assert_eq!(
            serde_json::to_string(&parsed).expect("Operation should succeed"),
            "null"
        );
    }
}
