use std::collections::HashSet;

use crate::extract::{
    DetectedElement, extract_elements, field_canonical_type, resolve_element, resolve_field,
};
use crate::html;
use crate::mapping::{ActionMapping, ParameterSource, ToolSchema};
use crate::typemap::{CanonicalType, canonical_from_schema, compatible};
use crate::validate::validation_model::{TypeMismatch, ValidationStatus};

// ============================================================================
// Validation engine
// ============================================================================

/// Cross-check a set of action mappings against the current HTML, the
/// declared tool schemas, and the declared template placeholders.
///
/// Pure function of its four inputs: identical inputs always produce a
/// structurally identical `ValidationStatus`. Every problem found is
/// collected; nothing is thrown.
pub fn validate_action_mappings(
    mappings: &[ActionMapping],
    html: &str,
    tools: &[ToolSchema],
    template_placeholders: Option<&[String]>,
) -> ValidationStatus {
    let doc = html::parse(html);
    let elements = extract_elements(&doc);
    let mut status = ValidationStatus::default();
    let mut claimed: HashSet<String> = HashSet::new();

    for mapping in mappings {
        // 1. The mapped element must still exist in the HTML.
        let element = match resolve_element(&elements, &mapping.ui_element_id) {
            Some(el) => el,
            None => {
                status.missing_mappings.push(format!(
                    "Mapping '{}': element '{}' not found in current HTML",
                    mapping.id, mapping.ui_element_id
                ));
                continue;
            }
        };
        claimed.insert(element.id.clone());

        // 2. The mapped tool must be declared.
        let tool = match resolve_tool(tools, mapping) {
            Some(t) => t,
            None => {
                status.missing_mappings.push(format!(
                    "Mapping '{}': tool '{}' on server '{}' is not declared",
                    mapping.id, mapping.tool_name, mapping.server_name
                ));
                continue;
            }
        };

        // 3. Every required parameter needs a non-empty source.
        for required in tool.required_parameters() {
            if !mapping.binds(required) {
                status.missing_mappings.push(format!(
                    "Mapping '{}': required parameter '{}' of tool '{}' has no source",
                    mapping.id, required, mapping.tool_name
                ));
            }
        }

        // 4. Each declared source must be individually satisfiable.
        for (parameter, source) in &mapping.parameter_sources {
            check_source(
                mapping,
                tool,
                parameter,
                source,
                template_placeholders,
                &elements,
                &mut status,
            );
        }

        // 5. Legacy fallback: only when the mapping declares no sources
        //    at all and the tool has typed properties.
        if mapping.parameter_sources.is_empty() && tool.declares_properties() {
            for (parameter, binding) in &mapping.parameter_bindings {
                check_legacy_binding(mapping, tool, parameter, binding, &elements, &mut status);
            }
        }
    }

    // Unmapped interactive elements are a hint, not a defect.
    for element in &elements {
        if !claimed.contains(&element.id) {
            status.warnings.push(format!(
                "Interactive element '{}' ({}) has no action mapping",
                element.id, element.tag_name
            ));
        }
    }

    status
}

fn resolve_tool<'a>(tools: &'a [ToolSchema], mapping: &ActionMapping) -> Option<&'a ToolSchema> {
    tools
        .iter()
        .find(|t| t.name == mapping.tool_name && t.server_name == mapping.server_name)
}

// ============================================================================
// Per-source checks
// ============================================================================

fn check_source(
    mapping: &ActionMapping,
    tool: &ToolSchema,
    parameter: &str,
    source: &ParameterSource,
    template_placeholders: Option<&[String]>,
    elements: &[DetectedElement],
    status: &mut ValidationStatus,
) {
    match source {
        ParameterSource::Static(value) => {
            if value.is_empty() {
                status.missing_mappings.push(format!(
                    "Mapping '{}': parameter '{}' has an empty static value",
                    mapping.id, parameter
                ));
            }
        }

        ParameterSource::Form(reference) => {
            if resolve_field(elements, reference).is_none()
                && resolve_element(elements, reference).is_none()
            {
                status.missing_mappings.push(format!(
                    "Mapping '{}': parameter '{}' references field '{}' which does not exist",
                    mapping.id, parameter, reference
                ));
                return;
            }
            check_field_type(mapping, tool, parameter, reference, elements, status);
        }

        ParameterSource::Agent(placeholder) => {
            if placeholder.is_empty() {
                status.missing_mappings.push(format!(
                    "Mapping '{}': parameter '{}' has no placeholder name",
                    mapping.id, parameter
                ));
                return;
            }
            if let Some(declared) = template_placeholders {
                if !declared.iter().any(|p| p == placeholder) {
                    status.missing_mappings.push(format!(
                        "Mapping '{}': parameter '{}' uses placeholder '{{{{{}}}}}' which is not declared in the template",
                        mapping.id, parameter, placeholder
                    ));
                }
            }
        }

        ParameterSource::Tool(path) => {
            // Chained-tool values are not resolvable yet.
            status.warnings.push(format!(
                "Mapping '{}': parameter '{}' is bound to tool result '{}' — chained tool values are not resolvable yet",
                mapping.id, parameter, path
            ));
        }
    }
}

/// Legacy `parameter_bindings` entries are evaluated like form sources:
/// `"field:<id>"` references type-check against the live field; anything
/// else is a literal checked for non-emptiness.
fn check_legacy_binding(
    mapping: &ActionMapping,
    tool: &ToolSchema,
    parameter: &str,
    binding: &str,
    elements: &[DetectedElement],
    status: &mut ValidationStatus,
) {
    match binding.strip_prefix("field:") {
        Some(reference) => {
            if resolve_field(elements, reference).is_none()
                && resolve_element(elements, reference).is_none()
            {
                status.missing_mappings.push(format!(
                    "Mapping '{}': parameter '{}' references field '{}' which does not exist",
                    mapping.id, parameter, reference
                ));
                return;
            }
            check_field_type(mapping, tool, parameter, reference, elements, status);
        }
        None => {
            if binding.is_empty() {
                status.missing_mappings.push(format!(
                    "Mapping '{}': parameter '{}' has an empty binding",
                    mapping.id, parameter
                ));
            }
        }
    }
}

/// Compare the tool-declared canonical type against the HTML-derived one.
/// A mismatch is only reported when the declared side is a real
/// constraint (not `any`).
fn check_field_type(
    mapping: &ActionMapping,
    tool: &ToolSchema,
    parameter: &str,
    reference: &str,
    elements: &[DetectedElement],
    status: &mut ValidationStatus,
) {
    let expected = match tool.parameter_type(parameter) {
        Some(name) => canonical_from_schema(name),
        None => CanonicalType::Any,
    };
    if expected == CanonicalType::Any {
        return;
    }

    let actual = field_canonical_type(elements, reference);
    if !compatible(expected, actual) {
        status.type_mismatches.push(TypeMismatch {
            field: format!("{}.{}", mapping.ui_element_id, parameter),
            expected,
            actual,
        });
    }
}
