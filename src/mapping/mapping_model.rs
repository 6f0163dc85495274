use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::extract::ElementType;

// ============================================================================
// Tool schema — declared contract of a callable backend operation
// ============================================================================

/// The declared name, server, and JSON-Schema-like parameter contract of a
/// callable backend operation. Deserializable from JSON and YAML; absent
/// or partial schema fields mean "no constraint".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSchema {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_schema: Option<InputSchema>,

    pub server_name: String,
}

impl ToolSchema {
    /// Names the tool requires a bound value for. Missing schema → none.
    pub fn required_parameters(&self) -> &[String] {
        self.input_schema
            .as_ref()
            .and_then(|s| s.required.as_deref())
            .unwrap_or(&[])
    }

    /// Declared type name for a parameter, if any.
    pub fn parameter_type(&self, name: &str) -> Option<&str> {
        self.input_schema
            .as_ref()
            .and_then(|s| s.properties.as_ref())
            .and_then(|p| p.get(name))
            .and_then(|p| p.property_type.as_deref())
    }

    pub fn declares_properties(&self) -> bool {
        self.input_schema
            .as_ref()
            .and_then(|s| s.properties.as_ref())
            .is_some_and(|p| !p.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSchema {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, PropertySchema>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySchema {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<serde_json::Value>>,
}

// ============================================================================
// Parameter sources
// ============================================================================

/// Where a bound parameter's runtime value comes from.
///
/// Wire shape: `{ "sourceType": "form", "sourceValue": "email" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "sourceType", content = "sourceValue", rename_all = "lowercase")]
pub enum ParameterSource {
    /// A literal value.
    Static(String),
    /// A referenced HTML field (element or field id).
    Form(String),
    /// An agent-supplied template placeholder name.
    Agent(String),
    /// A prior tool's result path. Declared but not yet resolvable;
    /// validation downgrades it to a warning.
    Tool(String),
}

impl ParameterSource {
    pub fn value(&self) -> &str {
        match self {
            ParameterSource::Static(v)
            | ParameterSource::Form(v)
            | ParameterSource::Agent(v)
            | ParameterSource::Tool(v) => v,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ParameterSource::Static(_) => "static",
            ParameterSource::Form(_) => "form",
            ParameterSource::Agent(_) => "agent",
            ParameterSource::Tool(_) => "tool",
        }
    }
}

// ============================================================================
// Action mapping — one element → one tool invocation
// ============================================================================

/// A binding from one detected UI element to one tool invocation, with one
/// `ParameterSource` per tool parameter.
///
/// `ui_element_id` should reference a `DetectedElement` present in the
/// current HTML, but the model does not enforce this at construction
/// time; only validation catches drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionMapping {
    pub id: String,

    pub ui_element_id: String,

    pub ui_element_type: ElementType,

    pub tool_name: String,

    pub server_name: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameter_sources: BTreeMap<String, ParameterSource>,

    /// Legacy binding form: parameter name → literal or `"field:<id>"`.
    /// Superseded by `parameter_sources` when both are present.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameter_bindings: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_handler: Option<String>,
}

impl ActionMapping {
    /// Whether any source (new or legacy) binds the parameter with a
    /// non-empty value.
    pub fn binds(&self, parameter: &str) -> bool {
        if let Some(source) = self.parameter_sources.get(parameter) {
            if !source.value().is_empty() {
                return true;
            }
        }
        self.parameter_bindings
            .get(parameter)
            .is_some_and(|binding| !binding.is_empty())
    }
}
