//! Affordance records
//!
//! An affordance describes one thing an observer can do with an inspected
//! object. The API does not tag them; the renderer recognises them by shape.
//! Deserialization is lenient so a malformed record still renders as a card.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::json_display;

/// One action/target/capabilities/... record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Affordance {
    #[serde(deserialize_with = "lenient_string")]
    pub action: String,
    #[serde(deserialize_with = "lenient_string")]
    pub target: String,
    #[serde(deserialize_with = "lenient_strings")]
    pub required_capabilities: Vec<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub preconditions: Vec<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub constraints: Vec<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub expected_outcome: String,
    #[serde(deserialize_with = "lenient_strings")]
    pub possible_failure_modes: Vec<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub confidence_level: String,
}

impl Affordance {
    /// Build from any JSON value. Non-objects produce an empty record.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::deserialize(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    pub fn confidence(&self) -> ConfidenceLevel {
        ConfidenceLevel::from(self.confidence_level.as_str())
    }
}

/// Confidence attached to an affordance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
    /// Anything the API sends that is not one of the three known levels
    Other(String),
}

impl ConfidenceLevel {
    pub fn as_str(&self) -> &str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Other(level) => level,
        }
    }
}

impl From<&str> for ConfidenceLevel {
    fn from(level: &str) -> Self {
        match level {
            "high" => ConfidenceLevel::High,
            "medium" => ConfidenceLevel::Medium,
            "low" => ConfidenceLevel::Low,
            other => ConfidenceLevel::Other(other.to_string()),
        }
    }
}

/// Accept any JSON value where a string is expected
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        other => json_display(&other),
    })
}

/// Accept any JSON value where a list of strings is expected
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.iter().map(json_display).collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_record() {
        let affordance = Affordance::from_value(&json!({
            "action": "Open",
            "target": "chest",
            "required_capabilities": ["hands"],
            "preconditions": ["chest is unlocked"],
            "constraints": ["heavy lid"],
            "expected_outcome": "The chest opens",
            "possible_failure_modes": ["lid jams"],
            "confidence_level": "high"
        }));

        assert_eq!(affordance.action, "Open");
        assert_eq!(affordance.target, "chest");
        assert_eq!(affordance.required_capabilities, vec!["hands"]);
        assert_eq!(affordance.expected_outcome, "The chest opens");
        assert_eq!(affordance.confidence(), ConfidenceLevel::High);
    }

    #[test]
    fn test_missing_and_malformed_fields() {
        let affordance = Affordance::from_value(&json!({
            "action": 7,
            "preconditions": "not a list",
            "constraints": [1, null, "dry"],
            "target": null
        }));

        assert_eq!(affordance.action, "7");
        assert_eq!(affordance.target, "");
        assert!(affordance.preconditions.is_empty());
        assert_eq!(affordance.constraints, vec!["1", "null", "dry"]);
        assert!(affordance.possible_failure_modes.is_empty());
        assert_eq!(affordance.confidence(), ConfidenceLevel::Other(String::new()));
    }

    #[test]
    fn test_non_object_is_empty() {
        assert_eq!(Affordance::from_value(&json!("Open")), Affordance::default());
        assert_eq!(Affordance::from_value(&Value::Null), Affordance::default());
    }

    #[test]
    fn test_confidence_levels() {
        assert_eq!(ConfidenceLevel::from("medium"), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from("low"), ConfidenceLevel::Low);
        assert_eq!(
            ConfidenceLevel::from("High"),
            ConfidenceLevel::Other("High".to_string())
        );
        assert_eq!(ConfidenceLevel::from("certain").as_str(), "certain");
    }
}
