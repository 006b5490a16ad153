use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::CollectionConfig;
use crate::config::default_collection_permalink;
use crate::front_matter::{extract_front_matter, FrontMatter};
use crate::utils::error::RustyllError;
use crate::utils::fs::read_source;
use crate::utils::path::{file_name, stem, strip_extension};

/// A collection of documents
#[derive(Debug, Clone)]
pub struct Collection {
    /// The name of the collection
    pub label: String,

    /// Whether to output the collection as individual pages
    pub output: bool,

    /// The permalink pattern for this collection
    pub permalink: Option<String>,

    /// The relative directory path for this collection (`_label`)
    pub relative_directory: String,

    /// The absolute directory path for this collection
    pub directory: PathBuf,

    /// Documents in the collection
    pub docs: Vec<Document>,
}

/// A document within a collection
#[derive(Debug, Clone)]
pub struct Document {
    /// Absolute path to the document file
    pub path: PathBuf,

    /// Path relative to the source directory, `/`-separated
    pub relative_path: String,

    /// Label of the collection this document belongs to
    pub collection: String,

    /// Body of the document, markdown until converted
    pub content: String,

    /// Front matter data
    pub front_matter: FrontMatter,

    /// URL for the document, when its collection is output
    pub url: Option<String>,
}

impl Document {
    /// Read a document from disk and attach it to `collection`.
    ///
    /// Front matter is split off when present; files without a header keep
    /// their whole body and an empty mapping.
    pub fn read(
        path: &Path,
        relative_path: impl Into<String>,
        collection: &Collection,
    ) -> Result<Self, RustyllError> {
        let relative_path = relative_path.into();
        let raw = read_source(path)?;
        let (front_matter, content) = extract_front_matter(&raw).map_err(|e| {
            RustyllError::FrontMatter(format!("{} ({})", e, path.display()))
        })?;

        let url = collection.generate_url(&relative_path, &front_matter);

        Ok(Document {
            path: path.to_path_buf(),
            relative_path,
            collection: collection.label.clone(),
            content,
            front_matter,
            url,
        })
    }

    /// File name including extension
    pub fn name(&self) -> &str {
        file_name(&self.relative_path)
    }

    /// File name without extension
    pub fn basename(&self) -> &str {
        stem(self.name())
    }
}

impl Collection {
    /// Create a new collection
    pub fn new(label: &str, config: &CollectionConfig, site_source: &Path) -> Self {
        let relative_directory = format!("_{}", label);
        let directory = site_source.join(&relative_directory);

        Collection {
            label: label.to_string(),
            output: config.output,
            permalink: config.permalink.clone(),
            relative_directory,
            directory,
            docs: Vec::new(),
        }
    }

    /// Whether a document with this relative path is already in the collection
    pub fn contains(&self, relative_path: &str) -> bool {
        self.docs.iter().any(|doc| doc.relative_path == relative_path)
    }

    /// Generate the URL for a document in this collection based on permalink pattern
    pub fn generate_url(&self, relative_path: &str, front_matter: &FrontMatter) -> Option<String> {
        if !self.output {
            return None;
        }

        if let Some(permalink) = front_matter.get("permalink").and_then(|v| v.as_str()) {
            return Some(ensure_leading_slash(permalink));
        }

        let permalink_template = self
            .permalink
            .clone()
            .unwrap_or_else(default_collection_permalink);

        // Path inside the collection directory, without extension
        let inner = relative_path
            .strip_prefix(&self.relative_directory)
            .map(|rest| rest.trim_start_matches('/'))
            .unwrap_or(relative_path);
        let name = stem(file_name(relative_path));

        let mut replacements = HashMap::new();
        replacements.insert(":collection", self.label.clone());
        replacements.insert(":path", strip_extension(inner).to_string());
        replacements.insert(":name", name.to_string());
        replacements.insert(":title", name.to_string());
        replacements.insert(":output_ext", ".html".to_string());

        // Longest placeholders first so `:path` never eats part of another
        let mut placeholders: Vec<_> = replacements.keys().copied().collect();
        placeholders.sort_by_key(|p| std::cmp::Reverse(p.len()));

        let mut url = permalink_template;
        for placeholder in placeholders {
            url = url.replace(placeholder, &replacements[placeholder]);
        }

        // Clean up any empty path segments
        while url.contains("//") {
            url = url.replace("//", "/");
        }

        Some(ensure_leading_slash(&url))
    }
}

fn ensure_leading_slash(url: &str) -> String {
    if url.starts_with('/') {
        url.to_string()
    } else {
        format!("/{}", url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn articles(source: &Path, output: bool) -> Collection {
        let config = CollectionConfig { output, permalink: None };
        Collection::new("articles", &config, source)
    }

    #[test]
    fn test_collection_paths() {
        let collection = articles(Path::new("/site"), true);
        assert_eq!(collection.relative_directory, "_articles");
        assert_eq!(collection.directory, PathBuf::from("/site/_articles"));
        assert!(collection.docs.is_empty());
    }

    #[test]
    fn test_generate_url() {
        let collection = articles(Path::new("/site"), true);
        let fm = FrontMatter::new();
        assert_eq!(
            collection.generate_url("_articles/nested/post.md", &fm),
            Some("/articles/nested/post.html".to_string())
        );

        let hidden = articles(Path::new("/site"), false);
        assert_eq!(hidden.generate_url("_articles/post.md", &fm), None);

        let custom = Collection::new(
            "recipes",
            &CollectionConfig { output: true, permalink: Some("/cook/:name/".to_string()) },
            Path::new("/site"),
        );
        assert_eq!(
            custom.generate_url("_recipes/soup.md", &fm),
            Some("/cook/soup/".to_string())
        );
    }

    #[test]
    fn test_read_document() {
        let dir = TempDir::new().unwrap();
        let collection = articles(dir.path(), true);
        fs::create_dir_all(&collection.directory).unwrap();

        let without = collection.directory.join("article-without-front-matter.md");
        fs::write(&without, "# Article Without Front Matter\n").unwrap();
        let doc = Document::read(&without, "_articles/article-without-front-matter.md", &collection).unwrap();
        assert_eq!(doc.collection, "articles");
        assert_eq!(doc.name(), "article-without-front-matter.md");
        assert_eq!(doc.basename(), "article-without-front-matter");
        assert_eq!(doc.content, "# Article Without Front Matter\n");
        assert!(doc.front_matter.is_empty());
        assert_eq!(doc.url.as_deref(), Some("/articles/article-without-front-matter.html"));

        let with = collection.directory.join("with-fm.md");
        fs::write(&with, "---\ntitle: Hello\n---\nBody\n").unwrap();
        let doc = Document::read(&with, "_articles/with-fm.md", &collection).unwrap();
        assert_eq!(doc.content, "Body\n");
        assert_eq!(doc.front_matter.len(), 1);
    }

    #[test]
    fn test_read_missing_document_propagates() {
        let dir = TempDir::new().unwrap();
        let collection = articles(dir.path(), false);
        let missing = collection.directory.join("gone.md");
        let result = Document::read(&missing, "_articles/gone.md", &collection);
        assert!(matches!(result, Err(RustyllError::File { .. })));
    }
}
