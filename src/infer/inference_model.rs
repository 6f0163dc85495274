use serde::{Deserialize, Serialize};

use crate::mapping::ActionMapping;
use crate::typemap::CanonicalType;

/// Broad implementation category a synthesized tool would plausibly have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImplementationType {
    Database,
    ApiCall,
    Email,
    FileOperation,
    Calculation,
    Custom,
}

/// One parameter of an inferred tool signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferredParameter {
    pub name: String,

    #[serde(rename = "type")]
    pub param_type: CanonicalType,

    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A heuristically generated candidate tool signature, produced directly
/// from HTML structure with no existing tool declaration. A signature and
/// hints, never an executable implementation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInference {
    pub tool_name: String,

    pub description: String,

    pub purpose: String,

    pub implementation_type: ImplementationType,

    pub parameters: Vec<InferredParameter>,

    /// Prose hint for whoever implements the tool.
    pub suggested_implementation: String,

    /// Fixed per inference kind: 0.9 forms, 0.7 buttons, 0.8 data regions.
    pub confidence: f32,

    pub related_elements: Vec<String>,
}

/// Everything one `analyze` pass produced. All candidates: the caller
/// may accept, discard, or hand them to the validation engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub inferred_tools: Vec<ToolInference>,

    pub suggested_mappings: Vec<ActionMapping>,

    pub warnings: Vec<String>,

    pub insights: Vec<String>,
}
