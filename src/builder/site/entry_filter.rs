use glob::Pattern;
use log::debug;

use crate::config::Config;
use crate::utils::path::file_name;

/// Decides which source entries a site reads, from `include` and `exclude`.
///
/// A pattern (leading `/` ignored) matches a relative path when it globs
/// the whole path, globs the file name, or names one of its parent
/// directories.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl EntryFilter {
    /// Create a filter from explicit pattern lists
    pub fn new(include: &[String], exclude: &[String]) -> Self {
        EntryFilter {
            include: include.to_vec(),
            exclude: exclude.to_vec(),
        }
    }

    /// Create a filter from the site configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.include, &config.exclude)
    }

    /// Whether the path is listed in `include`
    pub fn included(&self, relative_path: &str) -> bool {
        glob_include(&self.include, relative_path)
    }

    /// Whether the path is listed in `exclude`
    pub fn excluded(&self, relative_path: &str) -> bool {
        glob_include(&self.exclude, relative_path)
    }

    /// Names the site skips unless included: `_`, `.` or `#` prefixed, or `~` suffixed
    pub fn is_special(name: &str) -> bool {
        name.starts_with('_') || name.starts_with('.') || name.starts_with('#') || name.ends_with('~')
    }
}

fn glob_include(patterns: &[String], relative_path: &str) -> bool {
    let entry = relative_path.trim_start_matches('/');
    if entry.is_empty() {
        return false;
    }
    let name = file_name(entry);

    patterns.iter().any(|raw| {
        let pattern = raw.trim_start_matches('/');
        if pattern.is_empty() {
            return false;
        }

        let prefix = pattern.trim_end_matches('/');
        if entry == prefix || entry.starts_with(&format!("{}/", prefix)) {
            return true;
        }

        match Pattern::new(pattern) {
            Ok(glob) => glob.matches(entry) || glob.matches(name),
            Err(e) => {
                debug!("Invalid glob pattern '{}': {}", raw, e);
                false
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_literal_names_match_anywhere() {
        let filter = EntryFilter::new(&patterns(&["README.md"]), &[]);
        assert!(filter.included("README.md"));
        assert!(filter.included("/README.md"));
        assert!(filter.included("docs/README.md"));
        assert!(!filter.included("readme.md"));
        assert!(!filter.included("README.markdown"));
    }

    #[test]
    fn test_directory_prefixes() {
        let filter = EntryFilter::new(&patterns(&["/docs/", "vendor/bundle"]), &[]);
        assert!(filter.included("docs/LICENSE.md"));
        assert!(filter.included("docs"));
        assert!(filter.included("vendor/bundle/gem/README.md"));
        assert!(!filter.included("docsite/README.md"));
        assert!(!filter.included("vendor/README.md"));
    }

    #[test]
    fn test_globs() {
        let filter = EntryFilter::new(&patterns(&["*.md", "_drafts/**"]), &patterns(&["*.tmp"]));
        assert!(filter.included("a/b/CONTRIBUTING.md"));
        assert!(filter.included("_drafts/x/y.txt"));
        assert!(!filter.included("notes.txt"));
        assert!(filter.excluded("cache/build.tmp"));
        assert!(!filter.excluded("cache/build.md"));
    }

    #[test]
    fn test_empty_and_invalid_patterns() {
        let filter = EntryFilter::new(&patterns(&["", "/", "[unclosed"]), &[]);
        assert!(!filter.included("readme.md"));
        assert!(!EntryFilter::default().included("readme.md"));
    }

    #[test]
    fn test_special_names() {
        assert!(EntryFilter::is_special("_articles"));
        assert!(EntryFilter::is_special(".git"));
        assert!(EntryFilter::is_special("#scratch#"));
        assert!(EntryFilter::is_special("notes.md~"));
        assert!(!EntryFilter::is_special("file.md"));
    }
}
