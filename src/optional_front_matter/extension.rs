use std::collections::HashSet;

use crate::markdown::{normalize_extname, Converter};

/// Snapshot of the extensions a converter claims, taken once per pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionMatcher {
    extensions: HashSet<String>,
}

impl ExtensionMatcher {
    /// Build a matcher from extensions in any spelling (`md`, `.MD`)
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ExtensionMatcher {
            extensions: extensions
                .into_iter()
                .map(|ext| normalize_extname(ext.as_ref()))
                .filter(|ext| !ext.is_empty())
                .collect(),
        }
    }

    pub fn from_converter(converter: &dyn Converter) -> Self {
        Self::new(converter.extensions())
    }

    /// Whether `extname` is markdown-like. Case and the leading dot do not matter.
    pub fn matches(&self, extname: &str) -> bool {
        let ext = normalize_extname(extname);
        !ext.is_empty() && self.extensions.contains(&ext)
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}
