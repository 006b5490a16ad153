use crate::collections::CollectionRegistry;

/// Where a markdown file found in the static inventory belongs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathClass {
    /// Outside any underscore directory
    Page,
    /// Nested under `_<label>/` for a declared collection
    Collection(String),
    /// Underscore-prefixed but not a declared collection. Left as a static file.
    Unclaimed,
}

/// Candidate collection label of a relative path: its first segment
/// without the leading `_`, or `None` when that segment has no `_`.
pub fn collection_name_for(relative_path: &str) -> Option<&str> {
    relative_path.split('/').next()?.strip_prefix('_')
}

/// Sorts relative paths into pages and collection members
#[derive(Debug, Clone, Copy)]
pub struct PathClassifier<'a> {
    collections: &'a CollectionRegistry,
}

impl<'a> PathClassifier<'a> {
    pub fn new(collections: &'a CollectionRegistry) -> Self {
        PathClassifier { collections }
    }

    pub fn classify(&self, relative_path: &str) -> PathClass {
        let name = match collection_name_for(relative_path) {
            Some(name) => name,
            None => return PathClass::Page,
        };

        if !name.is_empty() && relative_path.contains('/') && self.collections.contains(name) {
            PathClass::Collection(name.to_string())
        } else {
            PathClass::Unclaimed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use crate::collections::Collection;
    use crate::config::CollectionConfig;

    fn registry(labels: &[&str]) -> CollectionRegistry {
        let mut registry = CollectionRegistry::new();
        for label in labels {
            let collection = Collection::new(label, &CollectionConfig::default(), Path::new("/site"));
            registry.register(collection).unwrap();
        }
        registry
    }

    #[test]
    fn test_collection_name_for() {
        assert_eq!(collection_name_for("_articles/a.md"), Some("articles"));
        assert_eq!(collection_name_for("_articles/nested/a.md"), Some("articles"));
        assert_eq!(collection_name_for("__double/a.md"), Some("_double"));
        assert_eq!(collection_name_for("_draft.md"), Some("draft.md"));
        assert_eq!(collection_name_for("_/a.md"), Some(""));
        assert_eq!(collection_name_for("docs/_articles/a.md"), None);
        assert_eq!(collection_name_for("file.md"), None);
    }

    #[test]
    fn test_classify() {
        let collections = registry(&["articles"]);
        let classifier = PathClassifier::new(&collections);

        assert_eq!(classifier.classify("file.md"), PathClass::Page);
        assert_eq!(classifier.classify("docs/_articles/a.md"), PathClass::Page);
        assert_eq!(
            classifier.classify("_articles/a.md"),
            PathClass::Collection("articles".to_string())
        );
        assert_eq!(
            classifier.classify("_articles/deep/er/a.md"),
            PathClass::Collection("articles".to_string())
        );
        assert_eq!(classifier.classify("_other/c.md"), PathClass::Unclaimed);
        assert_eq!(classifier.classify("_articles"), PathClass::Unclaimed);
        assert_eq!(classifier.classify("_articles.md"), PathClass::Unclaimed);
        assert_eq!(classifier.classify("_/a.md"), PathClass::Unclaimed);
    }
}
