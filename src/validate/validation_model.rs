use serde::{Deserialize, Serialize};

use crate::typemap::CanonicalType;

/// One declared-vs-derived type divergence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMismatch {
    /// `"{uiElementId}.{parameter}"`.
    pub field: String,

    /// Canonical type the tool schema declares.
    pub expected: CanonicalType,

    /// Canonical type derived from the HTML field.
    pub actual: CanonicalType,
}

/// Categorized diagnostics from one validation pass.
///
/// Purely derived: recomputed from scratch on every call, never mutated
/// incrementally. Warnings never affect pass/fail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationStatus {
    pub missing_mappings: Vec<String>,

    pub type_mismatches: Vec<TypeMismatch>,

    pub warnings: Vec<String>,
}

impl ValidationStatus {
    pub fn is_valid(&self) -> bool {
        self.missing_mappings.is_empty() && self.type_mismatches.is_empty()
    }
}
