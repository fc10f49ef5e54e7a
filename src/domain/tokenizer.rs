//! Tokenizer: raw argument strings into an option → values multimap.
//!
//! Grammar (verb already removed):
//! - `--<name> <value>...` opens a long-key group
//! - `-<c> <value>...` opens a short-key group, `<c>` is exactly one char
//! - bare tokens extend the most recently opened group

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::domain::error::TokenizeError;

/// Option key → raw values, in encounter order.
///
/// Short and long keys are stored as given; nothing is normalized. A key seen
/// in several groups (`-a 1 -a 2`) maps to the concatenation of their values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArguments {
    values: IndexMap<String, Vec<String>>,
}

impl ParsedArguments {
    /// All values under `key`; empty when the key is absent or had no values.
    pub fn values(&self, key: &str) -> &[String] {
        self.values.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ParsedArguments
where
    K: Into<String>,
    V: IntoIterator,
    V::Item: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values: IndexMap<String, Vec<String>> = IndexMap::new();
        for (key, group) in iter {
            values
                .entry(key.into())
                .or_default()
                .extend(group.into_iter().map(Into::into));
        }
        Self { values }
    }
}

/// Tokenize arguments that follow the verb.
///
/// Single left-to-right scan; the first malformed token aborts the parse.
pub fn tokenize<S: AsRef<str>>(args: &[S]) -> Result<ParsedArguments, TokenizeError> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();

    for arg in args {
        let arg = arg.as_ref();
        if arg.starts_with("--") {
            let key = arg.trim_start_matches('-');
            trace!("tokenize: long key {:?}", key);
            groups.push((key.to_string(), Vec::new()));
        } else if arg.starts_with('-') {
            let key = arg.trim_start_matches('-');
            if key.chars().count() != 1 {
                debug!("tokenize: rejected short option {:?}", arg);
                return Err(TokenizeError::ShortNameTooLong(arg.to_string()));
            }
            trace!("tokenize: short key {:?}", key);
            groups.push((key.to_string(), Vec::new()));
        } else if let Some((_, values)) = groups.last_mut() {
            values.push(arg.to_string());
        } else {
            debug!("tokenize: value {:?} without option", arg);
            return Err(TokenizeError::ValueWithoutOption(arg.to_string()));
        }
    }

    debug!("tokenize: {} option group(s)", groups.len());
    Ok(groups.into_iter().collect())
}
