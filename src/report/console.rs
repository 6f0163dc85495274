use crate::extract::DetectedElement;
use crate::infer::AnalysisResult;
use crate::validate::ValidationStatus;

// ============================================================================
// Console reporters — formatted terminal output
// ============================================================================

/// Format a detected-element inventory for terminal output.
///
/// Produces output like:
/// ```text
/// === Interactive Elements (3) ===
///
/// [form]    login — "Login form" (2 fields)
///     email (email, required)
///     password (password, required)
/// [button]  refresh — "Refresh"
/// ```
pub fn format_elements_report(elements: &[DetectedElement]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== Interactive Elements ({}) ===\n\n",
        elements.len()
    ));

    for element in elements {
        let type_tag = format!("[{}]", element.tag_name);
        let label = element
            .text
            .as_deref()
            .map(|t| format!(" — \"{}\"", t))
            .unwrap_or_default();

        match &element.form_fields {
            Some(fields) => {
                out.push_str(&format!(
                    "{:<9} {}{} ({} fields)\n",
                    type_tag,
                    element.id,
                    label,
                    fields.len()
                ));
                for field in fields {
                    let required = if field.required { ", required" } else { "" };
                    out.push_str(&format!(
                        "    {} ({}{})\n",
                        field.id, field.field_type, required
                    ));
                }
            }
            None => {
                out.push_str(&format!("{:<9} {}{}\n", type_tag, element.id, label));
            }
        }
    }

    out
}

/// Format a validation pass for terminal output.
///
/// ```text
/// === Validation: FAIL ===
///
/// Missing (2):
///   ✗ Mapping 'm1': ...
/// Type mismatches (1):
///   ✗ f.email: expected number, found string
/// Warnings (1):
///   ! Interactive element 'help' (a) has no action mapping
/// ```
pub fn format_validation_report(status: &ValidationStatus) -> String {
    let mut out = String::new();

    let verdict = if status.is_valid() {
        "\u{2713} PASS"
    } else {
        "\u{2717} FAIL"
    };
    out.push_str(&format!("=== Validation: {} ===\n\n", verdict));

    if !status.missing_mappings.is_empty() {
        out.push_str(&format!("Missing ({}):\n", status.missing_mappings.len()));
        for entry in &status.missing_mappings {
            out.push_str(&format!("  \u{2717} {}\n", entry));
        }
    }

    if !status.type_mismatches.is_empty() {
        out.push_str(&format!(
            "Type mismatches ({}):\n",
            status.type_mismatches.len()
        ));
        for mismatch in &status.type_mismatches {
            out.push_str(&format!(
                "  \u{2717} {}: expected {}, found {}\n",
                mismatch.field, mismatch.expected, mismatch.actual
            ));
        }
    }

    if !status.warnings.is_empty() {
        out.push_str(&format!("Warnings ({}):\n", status.warnings.len()));
        for warning in &status.warnings {
            out.push_str(&format!("  ! {}\n", warning));
        }
    }

    if status.is_valid() && status.warnings.is_empty() {
        out.push_str("All mappings resolve cleanly.\n");
    }

    out
}

/// Format an inference pass for terminal output.
pub fn format_analysis_report(result: &AnalysisResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== Inferred Tools ({}) ===\n\n",
        result.inferred_tools.len()
    ));

    for tool in &result.inferred_tools {
        out.push_str(&format!(
            "{} [{}] (confidence {:.1})\n",
            tool.tool_name,
            implementation_name(tool),
            tool.confidence
        ));
        out.push_str(&format!("    {}\n", tool.purpose));
        for parameter in &tool.parameters {
            let required = if parameter.required { ", required" } else { "" };
            out.push_str(&format!(
                "    - {}: {}{}\n",
                parameter.name, parameter.param_type, required
            ));
        }
    }

    if !result.suggested_mappings.is_empty() {
        out.push_str(&format!(
            "\n{} suggested mapping(s) ready for review\n",
            result.suggested_mappings.len()
        ));
    }

    for insight in &result.insights {
        out.push_str(&format!("  * {}\n", insight));
    }
    for warning in &result.warnings {
        out.push_str(&format!("  ! {}\n", warning));
    }

    out
}

fn implementation_name(tool: &crate::infer::ToolInference) -> &'static str {
    use crate::infer::ImplementationType::*;

    match tool.implementation_type {
        Database => "database",
        ApiCall => "api-call",
        Email => "email",
        FileOperation => "file-operation",
        Calculation => "calculation",
        Custom => "custom",
    }
}
