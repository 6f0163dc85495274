use std::fmt;

use serde::{Deserialize, Serialize};

/// The small shared type vocabulary both JSON-Schema types and HTML input
/// types are normalized into for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalType {
    String,
    Number,
    Boolean,
    Array,
    Object,
    Null,
    Any,
}

impl fmt::Display for CanonicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CanonicalType::String => "string",
            CanonicalType::Number => "number",
            CanonicalType::Boolean => "boolean",
            CanonicalType::Array => "array",
            CanonicalType::Object => "object",
            CanonicalType::Null => "null",
            CanonicalType::Any => "any",
        };
        write!(f, "{}", name)
    }
}

/// JSON-Schema primitive name → canonical type.
/// Unknown names resolve to `any` rather than erroring.
pub fn canonical_from_schema(name: &str) -> CanonicalType {
    match name {
        "string" => CanonicalType::String,
        "number" | "integer" => CanonicalType::Number,
        "boolean" => CanonicalType::Boolean,
        "array" => CanonicalType::Array,
        "object" => CanonicalType::Object,
        "null" => CanonicalType::Null,
        _ => CanonicalType::Any,
    }
}

/// HTML input type name → canonical type.
/// Unknown names resolve to `string` rather than erroring.
pub fn canonical_from_input(name: &str) -> CanonicalType {
    match name {
        "text" | "email" | "url" | "tel" | "password" | "search" | "textarea" | "date" | "time"
        | "datetime-local" | "month" | "week" | "color" | "file" => CanonicalType::String,
        "number" | "range" => CanonicalType::Number,
        "checkbox" => CanonicalType::Boolean,
        "radio" | "select" | "select-one" => CanonicalType::String,
        "select-multiple" => CanonicalType::Array,
        _ => CanonicalType::String,
    }
}

/// `any` on either side is always compatible.
pub fn compatible(expected: CanonicalType, actual: CanonicalType) -> bool {
    expected == CanonicalType::Any || actual == CanonicalType::Any || expected == actual
}
