use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;
use serde_yaml::Value;

use crate::config::defaults;
use crate::config::deserializers::{deserialize_collections, deserialize_extension_list};

/// Site configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Source directory for the site
    #[serde(default = "defaults::default_source")]
    pub source: PathBuf,

    /// Destination directory for generated site
    #[serde(default = "defaults::default_destination")]
    pub destination: PathBuf,

    /// Safe mode (only generators marked safe run)
    #[serde(default, alias = "safe")]
    pub safe_mode: bool,

    /// Exclude patterns (glob patterns of files to exclude)
    #[serde(default = "defaults::default_exclude")]
    pub exclude: Vec<String>,

    /// Include patterns (glob patterns of files that would otherwise be excluded)
    #[serde(default = "defaults::default_include")]
    pub include: Vec<String>,

    /// Collections configuration
    #[serde(default, deserialize_with = "deserialize_collections")]
    pub collections: Collections,

    /// Markdown extensions
    #[serde(
        default = "defaults::default_markdown_ext",
        deserialize_with = "deserialize_extension_list"
    )]
    pub markdown_ext: Vec<String>,

    /// Every other key, including plugin namespaces
    #[serde(flatten)]
    pub custom: HashMap<String, Value>,
}

/// Collections configuration, in declaration order
#[derive(Debug, Clone, Default)]
pub struct Collections {
    /// Individual collections
    pub items: Vec<(String, CollectionConfig)>,
}

impl Collections {
    /// Labels of the declared collections
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|(label, _)| label.as_str())
    }

    /// Look up the options of a collection
    pub fn get(&self, label: &str) -> Option<&CollectionConfig> {
        self.items
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, config)| config)
    }
}

/// Configuration for a collection
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    /// Whether to output the collection files as individual pages
    pub output: bool,

    /// Permalink pattern for the collection
    pub permalink: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: defaults::default_source(),
            destination: defaults::default_destination(),
            safe_mode: false,
            exclude: defaults::default_exclude(),
            include: defaults::default_include(),
            collections: Collections::default(),
            markdown_ext: defaults::default_markdown_ext(),
            custom: HashMap::new(),
        }
    }
}

impl Config {
    /// Read a top-level key that is not one of the typed fields
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.custom.get(key)
    }

    /// Set `section.key`, creating the section mapping when needed
    pub fn set_nested(&mut self, section: &str, key: &str, value: Value) {
        let entry = self
            .custom
            .entry(section.to_string())
            .or_insert_with(|| Value::Mapping(serde_yaml::Mapping::new()));

        if !entry.is_mapping() {
            *entry = Value::Mapping(serde_yaml::Mapping::new());
        }

        if let Value::Mapping(map) = entry {
            map.insert(Value::String(key.to_string()), value);
        }
    }
}
