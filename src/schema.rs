//! The performance-report contract: JSON schema and local validation.
//!
//! The schema lives in exactly one place. It is handed to the reasoning
//! engine for structured mode and used verbatim for local validation, so
//! a payload the engine claims is conformant is still checked here before
//! anything downstream trusts it.

use serde_json::{json, Value};
use std::fmt;

/// Allowed values for the `recommendation` field, in contract order.
pub const RECOMMENDATIONS: [&str; 3] = ["Proceed", "Follow-up", "Do not proceed"];

/// The four topic keys every report must score.
pub const TOPIC_KEYS: [&str; 4] = ["formulas", "pivot_tables", "charts", "data_cleaning"];

/// JSON schema for the structured summary (draft-07).
pub fn report_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": "ExcelInterviewSummary",
        "type": "object",
        "properties": {
            "candidate_id": {
                "type": "string",
                "description": "Unique identifier for the candidate"
            },
            "overall_score": {
                "type": "integer",
                "minimum": 0,
                "maximum": 100,
                "description": "Overall performance score (0-100)"
            },
            "topic_breakdown": {
                "type": "object",
                "properties": {
                    "formulas": {"type": "integer", "minimum": 0, "maximum": 10},
                    "pivot_tables": {"type": "integer", "minimum": 0, "maximum": 10},
                    "charts": {"type": "integer", "minimum": 0, "maximum": 10},
                    "data_cleaning": {"type": "integer", "minimum": 0, "maximum": 10}
                },
                "required": ["formulas", "pivot_tables", "charts", "data_cleaning"]
            },
            "key_themes": {
                "type": "array",
                "items": {"type": "string"}
            },
            "summary": {"type": "string"},
            "strengths": {
                "type": "array",
                "items": {"type": "string"}
            },
            "weaknesses": {
                "type": "array",
                "items": {"type": "string"}
            },
            "recommendation": {
                "type": "string",
                "enum": RECOMMENDATIONS
            },
            "questions_asked": {"type": "integer", "minimum": 0},
            "questions_answered": {"type": "integer", "minimum": 0}
        },
        "required": [
            "candidate_id",
            "overall_score",
            "topic_breakdown",
            "key_themes",
            "summary",
            "strengths",
            "weaknesses",
            "recommendation"
        ]
    })
}

/// A single way a payload can fail the report contract.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The payload is not a JSON object at all.
    NotAnObject { got: String },

    /// A required field is missing.
    MissingField { field: String },

    /// Field value has the wrong type.
    TypeMismatch {
        field: String,
        expected: &'static str,
        got: String,
    },

    /// An integer field is outside its declared range.
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        value: i64,
    },

    /// `recommendation` is not one of the allowed values.
    EnumInvalid { field: String, value: String },

    /// `topic_breakdown` carries a key outside the four scored topics.
    UnknownTopic { key: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject { got } => {
                write!(f, "Expected a JSON object, got {got}")
            }
            Self::MissingField { field } => {
                write!(f, "Missing required field '{field}'")
            }
            Self::TypeMismatch {
                field,
                expected,
                got,
            } => {
                write!(f, "Field '{field}' has wrong type: expected {expected}, got {got}")
            }
            Self::OutOfRange {
                field,
                min,
                max,
                value,
            } => {
                write!(f, "Field '{field}' is {value}, outside [{min}, {max}]")
            }
            Self::EnumInvalid { field, value } => {
                write!(
                    f,
                    "Field '{field}' has invalid value '{value}'. Allowed values: {}",
                    RECOMMENDATIONS.join(", ")
                )
            }
            Self::UnknownTopic { key } => {
                write!(f, "topic_breakdown has unknown key '{key}'")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a structured payload against the report contract.
///
/// Collects every violation rather than stopping at the first, so a log
/// line can show the whole story of a rejected payload.
pub fn validate_report(value: &Value) -> Result<(), Vec<ValidationError>> {
    let obj = match value.as_object() {
        Some(obj) => obj,
        None => {
            return Err(vec![ValidationError::NotAnObject {
                got: value_type_name(value),
            }]);
        }
    };

    let mut errors = Vec::new();

    check_string(obj, "candidate_id", &mut errors);
    check_int_in_range(obj, "overall_score", 0, 100, &mut errors);
    check_topic_breakdown(obj, &mut errors);
    check_string_array(obj, "key_themes", &mut errors);
    check_string(obj, "summary", &mut errors);
    check_string_array(obj, "strengths", &mut errors);
    check_string_array(obj, "weaknesses", &mut errors);
    check_recommendation(obj, &mut errors);

    // Counters are optional but must be non-negative integers when present.
    for field in ["questions_asked", "questions_answered"] {
        if let Some(v) = obj.get(field) {
            if v.as_u64().is_none() {
                errors.push(ValidationError::TypeMismatch {
                    field: field.to_string(),
                    expected: "non-negative integer",
                    got: value_type_name(v),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_string(
    obj: &serde_json::Map<String, Value>,
    field: &str,
    errors: &mut Vec<ValidationError>,
) {
    match obj.get(field) {
        None => errors.push(ValidationError::MissingField {
            field: field.to_string(),
        }),
        Some(v) if !v.is_string() => errors.push(ValidationError::TypeMismatch {
            field: field.to_string(),
            expected: "string",
            got: value_type_name(v),
        }),
        Some(_) => {}
    }
}

fn check_string_array(
    obj: &serde_json::Map<String, Value>,
    field: &str,
    errors: &mut Vec<ValidationError>,
) {
    match obj.get(field) {
        None => errors.push(ValidationError::MissingField {
            field: field.to_string(),
        }),
        Some(Value::Array(items)) => {
            for (i, item) in items.iter().enumerate() {
                if !item.is_string() {
                    errors.push(ValidationError::TypeMismatch {
                        field: format!("{field}[{i}]"),
                        expected: "string",
                        got: value_type_name(item),
                    });
                }
            }
        }
        Some(v) => errors.push(ValidationError::TypeMismatch {
            field: field.to_string(),
            expected: "array of strings",
            got: value_type_name(v),
        }),
    }
}

fn check_int_in_range(
    obj: &serde_json::Map<String, Value>,
    field: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<ValidationError>,
) {
    match obj.get(field) {
        None => errors.push(ValidationError::MissingField {
            field: field.to_string(),
        }),
        Some(v) => match v.as_i64() {
            Some(n) if n >= min && n <= max => {}
            Some(n) => errors.push(ValidationError::OutOfRange {
                field: field.to_string(),
                min,
                max,
                value: n,
            }),
            None => errors.push(ValidationError::TypeMismatch {
                field: field.to_string(),
                expected: "integer",
                got: value_type_name(v),
            }),
        },
    }
}

fn check_topic_breakdown(
    obj: &serde_json::Map<String, Value>,
    errors: &mut Vec<ValidationError>,
) {
    let topics = match obj.get("topic_breakdown") {
        None => {
            errors.push(ValidationError::MissingField {
                field: "topic_breakdown".to_string(),
            });
            return;
        }
        Some(Value::Object(topics)) => topics,
        Some(v) => {
            errors.push(ValidationError::TypeMismatch {
                field: "topic_breakdown".to_string(),
                expected: "object",
                got: value_type_name(v),
            });
            return;
        }
    };

    for key in TOPIC_KEYS {
        match topics.get(key) {
            None => errors.push(ValidationError::MissingField {
                field: format!("topic_breakdown.{key}"),
            }),
            Some(v) => match v.as_i64() {
                Some(n) if (0..=10).contains(&n) => {}
                Some(n) => errors.push(ValidationError::OutOfRange {
                    field: format!("topic_breakdown.{key}"),
                    min: 0,
                    max: 10,
                    value: n,
                }),
                None => errors.push(ValidationError::TypeMismatch {
                    field: format!("topic_breakdown.{key}"),
                    expected: "integer",
                    got: value_type_name(v),
                }),
            },
        }
    }

    for key in topics.keys() {
        if !TOPIC_KEYS.contains(&key.as_str()) {
            errors.push(ValidationError::UnknownTopic { key: key.clone() });
        }
    }
}

fn check_recommendation(
    obj: &serde_json::Map<String, Value>,
    errors: &mut Vec<ValidationError>,
) {
    match obj.get("recommendation") {
        None => errors.push(ValidationError::MissingField {
            field: "recommendation".to_string(),
        }),
        Some(v) => match v.as_str() {
            Some(s) if RECOMMENDATIONS.contains(&s) => {}
            Some(s) => errors.push(ValidationError::EnumInvalid {
                field: "recommendation".to_string(),
                value: s.to_string(),
            }),
            None => errors.push(ValidationError::TypeMismatch {
                field: "recommendation".to_string(),
                expected: "string",
                got: value_type_name(v),
            }),
        },
    }
}

fn value_type_name(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "integer".to_string()
            } else {
                "number".to_string()
            }
        }
        Value::String(_) => "string".to_string(),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}
