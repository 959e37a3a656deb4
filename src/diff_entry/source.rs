use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque attribution tag of a diff entry, e.g. which side of a merge
/// produced it. Any JSON value is accepted and kept as it was received.
/// Sources are only ever compared for equality and carried over to the
/// produced entries.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source(Value);

impl Source {
    #[must_use]
    pub fn new(value: impl Into<Value>) -> Self { Source(value.into()) }

    #[must_use]
    pub fn value(&self) -> &Value { &self.0 }
}

impl Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

impl From<Value> for Source {
    fn from(value: Value) -> Self { Source(value) }
}

impl From<i64> for Source {
    fn from(value: i64) -> Self { Source(value.into()) }
}

impl From<String> for Source {
    fn from(value: String) -> Self { Source(value.into()) }
}

impl From<&str> for Source {
    fn from(value: &str) -> Self { Source(value.into()) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_display_renders_json() {
        assert_eq!(Source::from("local").to_string(), r#""local""#);
        assert_eq!(Source::from(3_i64).to_string(), "3");
        assert_eq!(
            Source::new(json!({"decision": 2, "action": "local"})).to_string(),
            r#"{"action":"local","decision":2}"#
        );
    }

    #[test]
    fn test_sources_are_compared_by_value() {
        assert_eq!(Source::from("local"), Source::new(json!("local")));
        assert_ne!(Source::from(1_i64), Source::new(json!(1.5)));
        assert_ne!(Source::from("1"), Source::from(1_i64));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_any_json_value_round_trips() {
        let json = r#"[3,"local",-1,1.5,true,null,{"action":"local","decision":0},["a"]]"#;
        let sources: Vec<Source> = serde_json::from_str(json).unwrap();

        assert_eq!(sources[1], Source::from("local"));
        assert_eq!(sources[3].value(), &json!(1.5));
        assert_eq!(serde_json::to_string(&sources).unwrap(), json);
    }
}
