use crate::extract::element_model::{DetectedElement, FormField};
use crate::typemap::{CanonicalType, canonical_from_input};

// ============================================================================
// Element and field resolution
// ============================================================================

/// Resolve an element reference against an extracted inventory.
///
/// Matches by `id` attribute, then `data-action-id`, then `name`, in that
/// order, and finally by the synthesized element id so positional
/// fallbacks stay addressable.
pub fn resolve_element<'a>(
    elements: &'a [DetectedElement],
    reference: &str,
) -> Option<&'a DetectedElement> {
    if reference.is_empty() {
        return None;
    }

    for attr in ["id", "data-action-id", "name"] {
        if let Some(el) = elements.iter().find(|el| el.attr(attr) == Some(reference)) {
            return Some(el);
        }
    }

    elements.iter().find(|el| el.id == reference)
}

/// Resolve a field reference: form fields across all forms first (keyed by
/// `id` falling back to `name`), then standalone input-like elements.
pub fn resolve_field<'a>(
    elements: &'a [DetectedElement],
    reference: &str,
) -> Option<&'a FormField> {
    if reference.is_empty() {
        return None;
    }

    elements
        .iter()
        .flat_map(|el| el.fields())
        .find(|field| field.id == reference || field.name == reference)
}

/// Canonical type of a referenced field.
///
/// Falls back to a standalone `input`/`select`/`textarea` element when no
/// form field matches; unresolvable references yield `any` (always
/// compatible) rather than erroring.
pub fn field_canonical_type(elements: &[DetectedElement], reference: &str) -> CanonicalType {
    if let Some(field) = resolve_field(elements, reference) {
        return canonical_from_input(&field.field_type);
    }

    if let Some(el) = resolve_element(elements, reference) {
        if matches!(el.tag_name.as_str(), "input" | "select" | "textarea") {
            let raw = match el.tag_name.as_str() {
                "select" => {
                    if el.attr("multiple").is_some() {
                        "select-multiple"
                    } else {
                        "select"
                    }
                }
                "textarea" => "textarea",
                _ => el.attr("type").unwrap_or("text"),
            };
            return canonical_from_input(raw);
        }
    }

    CanonicalType::Any
}
