//! Human-readable failure rows handed to the rendering layer.

use crate::domain::{FailureChain, FailureRecord};

/// One `(label, message)` line of a report.
///
/// The label is the malformed token, the verb, or the `-short(--long)`
/// signature of an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub label: String,
    pub message: String,
}

impl ReportRow {
    pub fn new(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            message: message.into(),
        }
    }
}

impl From<&FailureRecord> for ReportRow {
    fn from(record: &FailureRecord) -> Self {
        Self::new(record.label(), record.message())
    }
}

pub fn failure_rows(chain: &FailureChain) -> Vec<ReportRow> {
    chain.iter().map(ReportRow::from).collect()
}
