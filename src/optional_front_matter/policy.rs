use std::collections::HashSet;

use crate::builder::site::EntryFilter;
use crate::builder::Page;
use crate::collections::Document;

/// Repository boilerplate that is never promoted unless whitelisted
pub const DEFAULT_BLACKLIST: &[&str] = &[
    "README",
    "LICENSE",
    "LICENCE",
    "COPYING",
    "CONTRIBUTING",
    "CODE_OF_CONDUCT",
    "ISSUE_TEMPLATE",
    "PULL_REQUEST_TEMPLATE",
];

/// Identity the filename policy judges a promotion candidate by
pub trait Candidate {
    /// Path relative to the site source, `/`-separated
    fn relative_path(&self) -> &str;
    /// File name without its extension
    fn basename(&self) -> &str;
}

impl Candidate for Page {
    fn relative_path(&self) -> &str {
        &self.relative_path
    }

    fn basename(&self) -> &str {
        Page::basename(self)
    }
}

impl Candidate for Document {
    fn relative_path(&self) -> &str {
        &self.relative_path
    }

    fn basename(&self) -> &str {
        Document::basename(self)
    }
}

/// Upper-cased base names excluded from promotion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameBlacklist {
    names: HashSet<String>,
}

impl FilenameBlacklist {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        FilenameBlacklist {
            names: names.into_iter().map(|name| name.as_ref().to_uppercase()).collect(),
        }
    }

    /// Case-insensitive membership test on a base name
    pub fn contains(&self, basename: &str) -> bool {
        self.names.contains(&basename.to_uppercase())
    }
}

impl Default for FilenameBlacklist {
    fn default() -> Self {
        Self::new(DEFAULT_BLACKLIST.iter().copied())
    }
}

/// Blacklist by base name, overridden by the `include` whitelist.
///
/// The directory a file sits in never exempts it.
#[derive(Debug, Clone)]
pub struct FilenamePolicy<'a> {
    blacklist: &'a FilenameBlacklist,
    whitelist: EntryFilter,
}

impl<'a> FilenamePolicy<'a> {
    pub fn new(blacklist: &'a FilenameBlacklist, include: &[String]) -> Self {
        FilenamePolicy {
            blacklist,
            whitelist: EntryFilter::new(include, &[]),
        }
    }

    pub fn is_whitelisted<C: Candidate>(&self, candidate: &C) -> bool {
        self.whitelist.included(candidate.relative_path())
    }

    pub fn is_blacklisted<C: Candidate>(&self, candidate: &C) -> bool {
        !self.is_whitelisted(candidate) && self.blacklist.contains(candidate.basename())
    }
}
