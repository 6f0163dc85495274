use std::collections::HashMap;

use crate::extract::element_model::{DetectedElement, ElementType, FormField};
use crate::html::{DocumentModel, NodeId};

// ============================================================================
// Interactive element extraction
// ============================================================================

/// Extract all interactive elements from a parsed document, in document
/// order.
pub fn extract_elements(doc: &DocumentModel) -> Vec<DetectedElement> {
    extract_with_nodes(doc)
        .into_iter()
        .map(|(_, el)| el)
        .collect()
}

/// Extraction variant that keeps the source node handle alongside each
/// element, for callers that need containment queries (the inference
/// engine asks whether a button sits inside a form).
pub fn extract_with_nodes(doc: &DocumentModel) -> Vec<(NodeId, DetectedElement)> {
    let mut out = Vec::new();
    let mut tag_counters: HashMap<String, usize> = HashMap::new();
    let mut type_counters: HashMap<&'static str, usize> = HashMap::new();

    for node in doc.elements() {
        let tag = match doc.tag(node) {
            Some(t) => t.to_string(),
            None => continue,
        };
        if !is_interactive(doc, node, &tag) {
            continue;
        }

        let element_type = ElementType::from_tag(&tag);
        let id = assign_id(doc, node, &tag, &mut tag_counters);
        let text = derive_label(doc, node, element_type, &mut type_counters);

        let form_fields = if element_type == ElementType::Form {
            Some(collect_form_fields(doc, node))
        } else {
            None
        };

        out.push((
            node,
            DetectedElement {
                id,
                element_type,
                tag_name: tag,
                attributes: doc.attributes(node),
                text,
                form_fields,
            },
        ));
    }

    out
}

/// The selection set: buttons, non-navigation links, forms, button-like
/// inputs, selects, and anything opting in via `data-action`.
fn is_interactive(doc: &DocumentModel, node: NodeId, tag: &str) -> bool {
    if doc.has_attr(node, "data-action") {
        return true;
    }

    match tag {
        "button" | "form" | "select" => true,
        "a" => match doc.attr(node, "href") {
            Some(href) => !is_external_navigation(href),
            None => false,
        },
        "input" => matches!(doc.attr(node, "type"), Some("button") | Some("submit")),
        _ => false,
    }
}

/// Links leading off-page are real navigation, not actions.
fn is_external_navigation(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://") || href.starts_with('/')
}

/// ID precedence, first match wins: `id` → `data-action-id` → `name` →
/// synthesized `"{tag}-{index}"` (ordinal within selected elements of the
/// same tag).
fn assign_id(
    doc: &DocumentModel,
    node: NodeId,
    tag: &str,
    tag_counters: &mut HashMap<String, usize>,
) -> String {
    let index = {
        let counter = tag_counters.entry(tag.to_string()).or_insert(0);
        let current = *counter;
        *counter += 1;
        current
    };

    for attr in ["id", "data-action-id", "name"] {
        if let Some(value) = doc.attr(node, attr) {
            if !value.is_empty() {
                return value.to_string();
            }
        }
    }

    format!("{}-{}", tag, index)
}

/// Visible text, else aria-label, else a generated ordinal label.
fn derive_label(
    doc: &DocumentModel,
    node: NodeId,
    element_type: ElementType,
    type_counters: &mut HashMap<&'static str, usize>,
) -> Option<String> {
    let ordinal = {
        let counter = type_counters.entry(element_type.display_name()).or_insert(0);
        *counter += 1;
        *counter
    };

    let text = doc.text_content(node);
    if !text.is_empty() {
        return Some(text);
    }
    // Inputs carry their label in the value attribute
    if doc.tag(node) == Some("input") {
        if let Some(value) = doc.attr(node, "value") {
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    if let Some(aria) = doc.attr(node, "aria-label") {
        if !aria.is_empty() {
            return Some(aria.to_string());
        }
    }

    Some(format!("{} {}", element_type.display_name(), ordinal))
}

// ============================================================================
// Form field collection
// ============================================================================

/// Collect descendant `input|select|textarea` as referenceable fields.
/// A field keys by `id` falling back to `name`; with neither it is
/// dropped.
fn collect_form_fields(doc: &DocumentModel, form: NodeId) -> Vec<FormField> {
    let mut fields = Vec::new();

    for node in doc.descendant_elements(form) {
        let tag = match doc.tag(node) {
            Some(t) => t,
            None => continue,
        };
        if !matches!(tag, "input" | "select" | "textarea") {
            continue;
        }

        let id_attr = doc.attr(node, "id").filter(|v| !v.is_empty());
        let name_attr = doc.attr(node, "name").filter(|v| !v.is_empty());
        let key = match id_attr.or(name_attr) {
            Some(k) => k.to_string(),
            None => continue,
        };

        fields.push(FormField {
            id: key.clone(),
            name: name_attr.unwrap_or(&key).to_string(),
            field_type: raw_field_type(doc, node, tag),
            required: doc.has_attr(node, "required"),
        });
    }

    fields
}

/// The raw HTML type string for a field, before canonicalization.
pub(crate) fn raw_field_type(doc: &DocumentModel, node: NodeId, tag: &str) -> String {
    match tag {
        "select" => {
            if doc.has_attr(node, "multiple") {
                "select-multiple".to_string()
            } else {
                "select".to_string()
            }
        }
        "textarea" => "textarea".to_string(),
        _ => doc
            .attr(node, "type")
            .filter(|t| !t.is_empty())
            .unwrap_or("text")
            .to_ascii_lowercase(),
    }
}
