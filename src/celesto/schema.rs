//! # Response Schema
//!
//! The provider is asked to answer with JSON matching [`ideas_schema`]. Strict
//! structured-output endpoints only accept an object at the root, so the idea
//! array travels inside an envelope:
//!
//! ```text
//! { "ideas": [ { "title": ..., "metrics": [ { ... } ] }, ... ] }
//! ```
//!
//! Whatever the provider claims about conformance, the answer is validated
//! here again by deserializing into [`Idea`]. Missing fields or wrong types are
//! rejected; unknown extra fields are ignored.

use crate::error::{CelestoError, Result};
use crate::model::Idea;
use serde::Deserialize;
use serde_json::{json, Value};

/// Name under which the schema is registered with the provider.
pub const SCHEMA_NAME: &str = "celesto_ideas";

fn string_array() -> Value {
    json!({ "type": "array", "items": { "type": "string" } })
}

fn metric_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "totalAddressableMarket": { "type": "string" },
            "serviceableAddressableMarket": { "type": "string" },
            "serviceableObtainableMarket": { "type": "string" },
            "customerAcquisitionCost": { "type": "string" },
            "lifetimeValue": { "type": "string" }
        },
        "required": [
            "totalAddressableMarket",
            "serviceableAddressableMarket",
            "serviceableObtainableMarket",
            "customerAcquisitionCost",
            "lifetimeValue"
        ],
        "additionalProperties": false
    })
}

/// JSON schema for a single [`Idea`].
pub fn idea_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "title": { "type": "string" },
            "description": { "type": "string" },
            "market": { "type": "string" },
            "implementation": { "type": "string" },
            "assets": string_array(),
            "potentialChallenges": string_array(),
            "potentialSolutions": string_array(),
            "potentialRisks": string_array(),
            "potentialMitigations": string_array(),
            "potentialMarketSize": { "type": "string" },
            "metrics": { "type": "array", "items": metric_schema() }
        },
        "required": [
            "title",
            "description",
            "market",
            "implementation",
            "assets",
            "potentialChallenges",
            "potentialSolutions",
            "potentialRisks",
            "potentialMitigations",
            "potentialMarketSize",
            "metrics"
        ],
        "additionalProperties": false
    })
}

/// JSON schema for a full response: `{ "ideas": [Idea, ...] }`.
pub fn ideas_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "ideas": { "type": "array", "items": idea_schema() }
        },
        "required": ["ideas"],
        "additionalProperties": false
    })
}

#[derive(Deserialize)]
struct Envelope {
    ideas: Vec<Idea>,
}

/// Validates a provider answer and returns the ideas it carries.
pub fn parse_ideas(text: &str) -> Result<Vec<Idea>> {
    let value: Value = serde_json::from_str(text.trim())
        .map_err(|e| CelestoError::InvalidResponse(format!("response is not JSON: {}", e)))?;
    parse_ideas_value(value)
}

/// Same as [`parse_ideas`] for an already decoded JSON value.
pub fn parse_ideas_value(value: Value) -> Result<Vec<Idea>> {
    let decoded = if value.is_array() {
        serde_json::from_value::<Vec<Idea>>(value)
    } else if value.get("ideas").is_some() {
        serde_json::from_value::<Envelope>(value).map(|envelope| envelope.ideas)
    } else {
        return Err(CelestoError::InvalidResponse(format!(
            "expected an array of ideas or an object with an \"ideas\" field, got {}",
            json_kind(&value)
        )));
    };

    decoded.map_err(|e| {
        CelestoError::InvalidResponse(format!("response does not match the idea schema: {}", e))
    })
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
mod tests {
    use super::*;
    use crate::test_utils::{sample_idea, sample_ideas};

    #[test]
    fn schema_requires_every_idea_field() {
        let schema = idea_schema();
        let props = schema["properties"].as_object().unwrap();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(props.len(), 11);
        for key in props.keys() {
            assert!(required.contains(&key.as_str()), "{} not required", key);
        }
    }

    #[test]
    fn schema_matches_serialized_idea_keys() {
        let value = serde_json::to_value(sample_idea("X")).unwrap();
        let schema = idea_schema();
        let props = schema["properties"].as_object().unwrap();
        for key in value.as_object().unwrap().keys() {
            assert!(props.contains_key(key), "schema missing {}", key);
        }
    }

    #[test]
    fn parses_envelope() {
        let ideas = sample_ideas();
        let text = serde_json::to_string(&json!({ "ideas": ideas })).unwrap();
        assert_eq!(parse_ideas(&text).unwrap(), ideas);
    }

    #[test]
    fn parses_bare_array() {
        let ideas = sample_ideas();
        let text = serde_json::to_string(&ideas).unwrap();
        assert_eq!(parse_ideas(&text).unwrap(), ideas);
    }

    #[test]
    fn ignores_unknown_fields() {
        let mut value = serde_json::to_value(sample_idea("Extra")).unwrap();
        value["confidence"] = json!("high");
        let ideas = parse_ideas_value(json!([value])).unwrap();
        assert_eq!(ideas[0].title, "Extra");
    }

    #[test]
    fn rejects_missing_field() {
        let text = r#"[{"title": "AI-Powered Health Monitor", "description": "d", "market": "m", "implementation": "i"}]"#;
        let err = parse_ideas(text).unwrap_err();
        assert!(matches!(err, CelestoError::InvalidResponse(_)));
        assert!(err.to_string().contains("assets"), "{}", err);
    }

    #[test]
    fn rejects_wrong_type() {
        let mut value = serde_json::to_value(sample_idea("Typed")).unwrap();
        value["assets"] = json!("not a list");
        let err = parse_ideas_value(json!({ "ideas": [value] })).unwrap_err();
        assert!(matches!(err, CelestoError::InvalidResponse(_)));
    }

    #[test]
    fn rejects_non_json() {
        let err = parse_ideas("Sure! Here are five ideas:").unwrap_err();
        assert!(err.is_provider_error());
    }

    #[test]
    fn rejects_object_without_ideas() {
        let err = parse_ideas(r#"{"answer": []}"#).unwrap_err();
        assert!(err.to_string().contains("an object"), "{}", err);
    }
}
