use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Broad category of an interactive element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Button,
    Form,
    Link,
    Input,
    Select,
    Textarea,
    Custom,
}

impl ElementType {
    pub fn from_tag(tag: &str) -> ElementType {
        match tag {
            "button" => ElementType::Button,
            "form" => ElementType::Form,
            "a" => ElementType::Link,
            "input" => ElementType::Input,
            "select" => ElementType::Select,
            "textarea" => ElementType::Textarea,
            _ => ElementType::Custom,
        }
    }

    /// Display name used for generated ordinal labels ("Button 3").
    pub fn display_name(&self) -> &'static str {
        match self {
            ElementType::Button => "Button",
            ElementType::Form => "Form",
            ElementType::Link => "Link",
            ElementType::Input => "Input",
            ElementType::Select => "Select",
            ElementType::Textarea => "Textarea",
            ElementType::Custom => "Element",
        }
    }
}

/// One interactive element found in the HTML.
///
/// `id` is stable across re-parses as long as the markup's identifying
/// attributes (`id`, `data-action-id`, `name`) are unchanged; otherwise it
/// is a positional fallback (`"{tag}-{index}"`) and volatile across edits
/// that insert or remove preceding siblings of the same tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedElement {
    pub id: String,

    #[serde(rename = "type")]
    pub element_type: ElementType,

    pub tag_name: String,

    #[serde(default)]
    pub attributes: BTreeMap<String, String>,

    /// Display label: visible text, else aria-label, else a generated
    /// ordinal label. Never used for identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Present only for `form`-typed elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_fields: Option<Vec<FormField>>,
}

impl DetectedElement {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|v| v.as_str())
    }

    pub fn fields(&self) -> &[FormField] {
        self.form_fields.as_deref().unwrap_or(&[])
    }
}

/// A referenceable field nested under a form element. Fields with neither
/// an `id` nor a `name` attribute are dropped during extraction; they
/// cannot be referenced by a parameter source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub id: String,

    pub name: String,

    /// Raw HTML type string ("email", "select-multiple", "textarea", ...).
    #[serde(rename = "type")]
    pub field_type: String,

    pub required: bool,
}
