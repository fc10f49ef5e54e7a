//! Binding failures and their ordered accumulation.

use crate::domain::OptionDescriptor;

pub const MISSING_REQUIRED_MESSAGE: &str = "Required option is missing.";

/// One problem found while binding a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureRecord {
    MissingRequiredOption {
        option: OptionDescriptor,
    },
    PropertyConversionFailure {
        option: OptionDescriptor,
        message: String,
    },
}

impl FailureRecord {
    pub fn option(&self) -> &OptionDescriptor {
        match self {
            FailureRecord::MissingRequiredOption { option }
            | FailureRecord::PropertyConversionFailure { option, .. } => option,
        }
    }

    /// `-short(--long)` signature of the failing option.
    pub fn label(&self) -> String {
        self.option().signature()
    }

    pub fn message(&self) -> &str {
        match self {
            FailureRecord::MissingRequiredOption { .. } => MISSING_REQUIRED_MESSAGE,
            FailureRecord::PropertyConversionFailure { message, .. } => message,
        }
    }
}

/// Append-only failures in encounter order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureChain {
    records: Vec<FailureRecord>,
}

impl FailureChain {
    pub fn new(head: FailureRecord) -> Self {
        Self {
            records: vec![head],
        }
    }

    pub fn push(&mut self, record: FailureRecord) {
        self.records.push(record);
    }

    /// Append all of `other` after the current tail.
    pub fn append(&mut self, other: FailureChain) {
        self.records.extend(other.records);
    }

    pub fn head(&self) -> &FailureRecord {
        &self.records[0]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; a chain holds at least its head.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FailureRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[FailureRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a FailureChain {
    type Item = &'a FailureRecord;
    type IntoIter = std::slice::Iter<'a, FailureRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl From<FailureRecord> for FailureChain {
    fn from(record: FailureRecord) -> Self {
        Self::new(record)
    }
}

/// Result of binding so far: nothing wrong yet, or the failures found.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Success,
    Failure(FailureChain),
}

impl Outcome {
    pub fn failure(record: FailureRecord) -> Self {
        Outcome::Failure(FailureChain::new(record))
    }

    /// Combine two outcomes; any failure wins and later failures go to the tail.
    pub fn merge(self, other: Outcome) -> Outcome {
        match (self, other) {
            (Outcome::Success, other) => other,
            (failure @ Outcome::Failure(_), Outcome::Success) => failure,
            (Outcome::Failure(mut chain), Outcome::Failure(tail)) => {
                chain.append(tail);
                Outcome::Failure(chain)
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// `Ok(value)` only when nothing failed; the value is dropped otherwise.
    pub fn into_result<T>(self, value: T) -> Result<T, FailureChain> {
        match self {
            Outcome::Success => Ok(value),
            Outcome::Failure(chain) => Err(chain),
        }
    }
}
