use std::collections::BTreeMap;
use std::collections::HashSet;

use crate::extract::{DetectedElement, ElementType, extract_with_nodes};
use crate::html::{self, DocumentModel, NodeId};
use crate::infer::inference_model::{
    AnalysisResult, ImplementationType, InferredParameter, ToolInference,
};
use crate::infer::rules::{FormSignals, match_button_rule, match_form_rule};
use crate::mapping::{ActionMapping, ParameterSource};
use crate::typemap::{CanonicalType, canonical_from_input};

// ============================================================================
// Tool inference engine
//
// Proposes tool signatures and default action mappings purely from HTML
// structure. Everything it returns is a candidate; it never mutates or
// requires the validation engine.
// ============================================================================

const FORM_CONFIDENCE: f32 = 0.9;
const BUTTON_CONFIDENCE: f32 = 0.7;
const DATA_CONFIDENCE: f32 = 0.8;

/// Analyze an HTML snapshot and propose tools plus default mappings.
pub fn analyze(html: &str) -> AnalysisResult {
    let doc = html::parse(html);
    let elements = extract_with_nodes(&doc);

    let mut result = AnalysisResult::default();
    let mut used_names: HashSet<String> = HashSet::new();
    let mut form_count = 0usize;
    let mut button_count = 0usize;
    let mut auth_detected = false;

    for (node, element) in &elements {
        match element.element_type {
            ElementType::Form => {
                if infer_form_tool(element, &mut used_names, &mut result) {
                    form_count += 1;
                    if element
                        .fields()
                        .iter()
                        .any(|f| f.field_type == "password")
                    {
                        auth_detected = true;
                    }
                }
            }
            ElementType::Button | ElementType::Input => {
                if doc.ancestor_with_tag(*node, "form").is_some() {
                    continue; // claimed by the enclosing form's submit tool
                }
                if infer_button_tool(element, &mut used_names, &mut result) {
                    button_count += 1;
                }
            }
            _ => {}
        }
    }

    let data_count = infer_data_tools(&doc, &mut used_names, &mut result);

    if form_count + button_count + data_count > 0 {
        result.insights.push(format!(
            "Inferred {} tool(s): {} from forms, {} from buttons, {} from data regions",
            result.inferred_tools.len(),
            form_count,
            button_count,
            data_count
        ));
    }
    if auth_detected {
        result
            .insights
            .push("A password field suggests this page performs authentication".to_string());
    }

    result
}

// ============================================================================
// Forms → submit_{formId}
// ============================================================================

fn infer_form_tool(
    element: &DetectedElement,
    used_names: &mut HashSet<String>,
    result: &mut AnalysisResult,
) -> bool {
    let fields = element.fields();
    if fields.is_empty() {
        result.warnings.push(format!(
            "Form '{}' has no referenceable fields; no tool inferred",
            element.id
        ));
        return false;
    }

    let field_names: Vec<&str> = fields.iter().map(|f| f.id.as_str()).collect();
    let field_types: Vec<&str> = fields.iter().map(|f| f.field_type.as_str()).collect();
    let signals = FormSignals::new(&element.id, &field_names, &field_types);
    let rule = match_form_rule(&signals);

    let tool_name = unique_name(
        format!("submit_{}", sanitize_identifier(&element.id)),
        used_names,
        &mut result.warnings,
    );

    let parameters: Vec<InferredParameter> = fields
        .iter()
        .map(|f| InferredParameter {
            name: f.id.clone(),
            param_type: canonical_from_input(&f.field_type),
            required: f.required,
            description: None,
        })
        .collect();

    let sources: BTreeMap<String, ParameterSource> = fields
        .iter()
        .map(|f| (f.id.clone(), ParameterSource::Form(f.id.clone())))
        .collect();

    result.suggested_mappings.push(default_mapping(
        &tool_name,
        &element.id,
        element.element_type,
        sources,
    ));

    result.inferred_tools.push(ToolInference {
        tool_name,
        description: format!(
            "Handle submission of form '{}' ({} fields)",
            element.id,
            fields.len()
        ),
        purpose: rule.purpose.to_string(),
        implementation_type: rule.implementation_type,
        parameters,
        suggested_implementation: rule.suggested_implementation.to_string(),
        confidence: FORM_CONFIDENCE,
        related_elements: vec![element.id.clone()],
    });

    true
}

// ============================================================================
// Standalone buttons → handle_{buttonId}
// ============================================================================

fn infer_button_tool(
    element: &DetectedElement,
    used_names: &mut HashSet<String>,
    result: &mut AnalysisResult,
) -> bool {
    // Inputs reaching here are button-like (type=button|submit) or opted
    // in via data-action.
    let mut haystack = element.id.clone();
    if let Some(text) = &element.text {
        haystack.push(' ');
        haystack.push_str(text);
    }

    // Not every button is a tool trigger: no recognizable purpose, no tool.
    let rule = match match_button_rule(&haystack) {
        Some(r) => r,
        None => return false,
    };

    let tool_name = unique_name(
        format!("handle_{}", sanitize_identifier(&element.id)),
        used_names,
        &mut result.warnings,
    );

    let mut sources = BTreeMap::new();
    sources.insert(
        "context".to_string(),
        ParameterSource::Static("{}".to_string()),
    );
    result.suggested_mappings.push(default_mapping(
        &tool_name,
        &element.id,
        element.element_type,
        sources,
    ));

    result.inferred_tools.push(ToolInference {
        tool_name,
        description: format!(
            "Handle activation of '{}'",
            element.text.as_deref().unwrap_or(&element.id)
        ),
        purpose: rule.purpose.to_string(),
        implementation_type: rule.implementation_type,
        parameters: vec![InferredParameter {
            name: "context".to_string(),
            param_type: CanonicalType::Object,
            required: false,
            description: Some("Invocation context supplied by the page".to_string()),
        }],
        suggested_implementation: rule.suggested_implementation.to_string(),
        confidence: BUTTON_CONFIDENCE,
        related_elements: vec![element.id.clone()],
    });

    true
}

// ============================================================================
// Data regions → fetch_{elementId}_data
// ============================================================================

const DATA_ATTRIBUTES: &[&str] = &["data-source", "data-fetch", "data-endpoint"];

fn infer_data_tools(
    doc: &DocumentModel,
    used_names: &mut HashSet<String>,
    result: &mut AnalysisResult,
) -> usize {
    let mut count = 0usize;
    let mut fallback_index = 0usize;

    for node in doc.elements() {
        let tag = match doc.tag(node) {
            Some(t) => t,
            None => continue,
        };

        let is_data_region = DATA_ATTRIBUTES.iter().any(|a| doc.has_attr(node, a))
            || (tag == "table" && doc.attr(node, "id").is_some_and(|id| !id.is_empty()));
        if !is_data_region {
            continue;
        }

        let element_id = data_region_id(doc, node, tag, &mut fallback_index);
        let tool_name = unique_name(
            format!("fetch_{}_data", sanitize_identifier(&element_id)),
            used_names,
            &mut result.warnings,
        );

        result.suggested_mappings.push(default_mapping(
            &tool_name,
            &element_id,
            ElementType::from_tag(tag),
            BTreeMap::new(),
        ));

        result.inferred_tools.push(ToolInference {
            tool_name,
            description: format!("Fetch the data displayed in '{}'", element_id),
            purpose: format!("Load the records rendered by element '{}'", element_id),
            implementation_type: ImplementationType::Database,
            parameters: Vec::new(),
            suggested_implementation:
                "Query the backing data store and return the rows this element renders"
                    .to_string(),
            confidence: DATA_CONFIDENCE,
            related_elements: vec![element_id],
        });

        count += 1;
    }

    count
}

fn data_region_id(
    doc: &DocumentModel,
    node: NodeId,
    tag: &str,
    fallback_index: &mut usize,
) -> String {
    for attr in ["id", "data-action-id", "name"] {
        if let Some(value) = doc.attr(node, attr) {
            if !value.is_empty() {
                return value.to_string();
            }
        }
    }
    let index = *fallback_index;
    *fallback_index += 1;
    format!("{}-{}", tag, index)
}

// ============================================================================
// Shared helpers
// ============================================================================

fn default_mapping(
    tool_name: &str,
    element_id: &str,
    element_type: ElementType,
    sources: BTreeMap<String, ParameterSource>,
) -> ActionMapping {
    ActionMapping {
        id: format!("map-{}", tool_name),
        ui_element_id: element_id.to_string(),
        ui_element_type: element_type,
        tool_name: tool_name.to_string(),
        server_name: "inferred".to_string(),
        parameter_sources: sources,
        parameter_bindings: BTreeMap::new(),
        response_handler: None,
    }
}

/// Replace characters that cannot appear in a tool identifier.
pub fn sanitize_identifier(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Tool names must be unique across one analysis pass; collisions get a
/// numeric suffix and a warning.
fn unique_name(
    candidate: String,
    used_names: &mut HashSet<String>,
    warnings: &mut Vec<String>,
) -> String {
    if used_names.insert(candidate.clone()) {
        return candidate;
    }

    let mut suffix = 2usize;
    loop {
        let alternative = format!("{}_{}", candidate, suffix);
        if used_names.insert(alternative.clone()) {
            warnings.push(format!(
                "Duplicate tool name '{}' renamed to '{}'",
                candidate, alternative
            ));
            return alternative;
        }
        suffix += 1;
    }
}
