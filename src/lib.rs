use crate::extract::{DetectedElement, resolve_element};
use crate::infer::AnalysisResult;
use crate::typemap::CanonicalType;

pub mod cli;
pub mod extract;
pub mod html;
pub mod infer;
pub mod mapping;
pub mod report;
pub mod schedule;
pub mod trace;
pub mod typemap;
pub mod validate;

pub use mapping::extract_template_placeholders;
pub use validate::validate_action_mappings;

/// Parse HTML and return its interactive elements.
///
/// Malformed markup never fails: it degrades to whatever elements were
/// recoverable, down to an empty list.
pub fn parse_interactive_elements(html: &str) -> Vec<DetectedElement> {
    let doc = html::parse(html);
    extract::extract_elements(&doc)
}

/// Whether an element reference (id, `data-action-id`, or `name`, in that
/// order) resolves against the current HTML.
pub fn validate_element_exists(html: &str, element_id: &str) -> bool {
    let elements = parse_interactive_elements(html);
    resolve_element(&elements, element_id).is_some()
}

/// Canonical type of a referenced form field in the current HTML.
/// Unresolvable references yield `any`.
pub fn get_field_canonical_type(html: &str, field_id: &str) -> CanonicalType {
    let elements = parse_interactive_elements(html);
    extract::field_canonical_type(&elements, field_id)
}

/// Propose tool signatures and default mappings from HTML structure.
pub fn analyze_for_tools(html: &str) -> AnalysisResult {
    infer::analyze(html)
}
