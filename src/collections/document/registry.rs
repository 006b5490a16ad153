//! Registry of the collections a site declares

use std::collections::HashMap;
use std::path::Path;

use log::debug;

use crate::collections::document::model::Collection;
use crate::config::{CollectionConfig, Config};

/// Label of the collection every site has
pub const POSTS: &str = "posts";

/// Registry of declared collections
#[derive(Debug, Clone, Default)]
pub struct CollectionRegistry {
    /// Collections indexed by label
    collections: HashMap<String, Collection>,
    /// Registration order (for deterministic iteration)
    load_order: Vec<String>,
}

impl CollectionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from configuration: `posts` first, then the
    /// configured collections in declaration order
    pub fn from_config(config: &Config, site_source: &Path) -> Self {
        let mut registry = Self::new();

        let posts_config = config.collections.get(POSTS).cloned().unwrap_or(CollectionConfig {
            output: true,
            permalink: None,
        });
        // Registering into an empty registry cannot collide
        let _ = registry.register(Collection::new(POSTS, &posts_config, site_source));

        for (label, collection_config) in &config.collections.items {
            if label == POSTS {
                continue;
            }
            if let Err(e) = registry.register(Collection::new(label, collection_config, site_source)) {
                debug!("{}", e);
            }
        }

        registry
    }

    /// Register a collection
    pub fn register(&mut self, collection: Collection) -> Result<(), String> {
        let label = collection.label.clone();

        if self.collections.contains_key(&label) {
            return Err(format!("Collection '{}' is already registered", label));
        }

        debug!("Registering collection: {}", label);
        self.load_order.push(label.clone());
        self.collections.insert(label, collection);

        Ok(())
    }

    /// Whether a collection with this label is declared
    pub fn contains(&self, label: &str) -> bool {
        self.collections.contains_key(label)
    }

    /// Get a collection by label
    pub fn get(&self, label: &str) -> Option<&Collection> {
        self.collections.get(label)
    }

    /// Get a collection by label, mutably
    pub fn get_mut(&mut self, label: &str) -> Option<&mut Collection> {
        self.collections.get_mut(label)
    }

    /// Labels in registration order
    pub fn labels(&self) -> &[String] {
        &self.load_order
    }

    /// Collections in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Collection> {
        self.load_order
            .iter()
            .filter_map(move |label| self.collections.get(label))
    }

    /// Drop every document while keeping the declared collections
    pub fn clear_docs(&mut self) {
        for collection in self.collections.values_mut() {
            collection.docs.clear();
        }
    }

    /// Get the number of registered collections
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_operations() {
        let mut registry = CollectionRegistry::new();
        assert!(registry.is_empty());

        let articles = Collection::new("articles", &CollectionConfig::default(), Path::new("/site"));
        assert!(registry.register(articles.clone()).is_ok());
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("articles"));
        assert!(registry.get("articles").is_some());
        assert!(!registry.contains("other"));

        // Try to register duplicate
        assert!(registry.register(articles).is_err());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_from_config_keeps_order_and_adds_posts() {
        let config: Config =
            serde_yaml::from_str("collections:\n  zines: {}\n  articles:\n    output: true\n").unwrap();
        let registry = CollectionRegistry::from_config(&config, Path::new("/site"));

        assert_eq!(registry.labels(), &["posts", "zines", "articles"]);
        assert!(registry.get("posts").unwrap().output);
        assert!(registry.get("articles").unwrap().output);

        let labels: Vec<&str> = registry.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["posts", "zines", "articles"]);
    }

    #[test]
    fn test_configured_posts_are_not_duplicated() {
        let config: Config =
            serde_yaml::from_str("collections:\n  posts:\n    output: false\n  articles: {}\n").unwrap();
        let registry = CollectionRegistry::from_config(&config, Path::new("/site"));

        assert_eq!(registry.labels(), &["posts", "articles"]);
        assert!(!registry.get("posts").unwrap().output);
    }
}
