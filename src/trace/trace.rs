use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::validate::ValidationStatus;

/// One watch-mode validation run, as recorded in the JSONL trace.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub run: u64,

    /// What caused this run ("initial", "change", ...).
    pub trigger: String,

    /// SHA-1 of the HTML snapshot that was validated.
    pub html_fingerprint: String,

    pub missing_mappings: usize,
    pub type_mismatches: usize,
    pub warnings: usize,
    pub valid: bool,
}

impl TraceEvent {
    pub fn now(run: u64, trigger: impl ToString) -> Self {
        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);

        Self {
            timestamp_ms,
            run,
            trigger: trigger.to_string(),
            html_fingerprint: String::new(),
            missing_mappings: 0,
            type_mismatches: 0,
            warnings: 0,
            valid: true,
        }
    }

    pub fn with_fingerprint(mut self, fingerprint: impl ToString) -> Self {
        self.html_fingerprint = fingerprint.to_string();
        self
    }

    pub fn with_status(mut self, status: &ValidationStatus) -> Self {
        self.missing_mappings = status.missing_mappings.len();
        self.type_mismatches = status.type_mismatches.len();
        self.warnings = status.warnings.len();
        self.valid = status.is_valid();
        self
    }
}

/// SHA-1 hex digest of a content snapshot, for cheap change detection.
pub fn content_fingerprint(text: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
