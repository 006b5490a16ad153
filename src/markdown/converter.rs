//! Content converters registered with a site.
//!
//! A converter claims a set of file extensions and turns source text into
//! output text. The site keeps a list of them; generators look the markdown
//! one up at the start of their pass.

use std::fmt;

use comrak::Options;

use crate::config::Config;
use crate::markdown::engine::{create_comrak_options, render_markdown};
use crate::utils::error::RustyllError;

/// Normalize an extension to its lower-case dotted form (`MD` -> `.md`).
/// Blank input yields an empty string.
pub fn normalize_extname(ext: &str) -> String {
    let ext = ext.trim().trim_start_matches('.');
    if ext.is_empty() {
        String::new()
    } else {
        format!(".{}", ext.to_lowercase())
    }
}

/// A content converter
pub trait Converter {
    /// Human readable converter name
    fn name(&self) -> &str;

    /// Extensions this converter handles, in any spelling `normalize_extname` accepts
    fn extensions(&self) -> Vec<String>;

    /// Whether this converter handles the given extension
    fn matches(&self, extname: &str) -> bool {
        let wanted = normalize_extname(extname);
        !wanted.is_empty()
            && self
                .extensions()
                .iter()
                .any(|ext| normalize_extname(ext) == wanted)
    }

    /// Extension of the converted output
    fn output_ext(&self) -> &str;

    /// Convert source content
    fn convert(&self, content: &str) -> Result<String, RustyllError>;

    /// Whether this is the site's markdown converter
    fn is_markdown(&self) -> bool {
        false
    }
}

/// Markdown converter backed by comrak
pub struct MarkdownConverter {
    extensions: Vec<String>,
    options: Options<'static>,
}

impl MarkdownConverter {
    /// Create a markdown converter for the extensions configured in `markdown_ext`
    pub fn new(config: &Config) -> Self {
        Self::with_extensions(config.markdown_ext.clone())
    }

    /// Create a markdown converter for an explicit extension list
    pub fn with_extensions(extensions: Vec<String>) -> Self {
        MarkdownConverter {
            extensions: extensions
                .iter()
                .map(|ext| normalize_extname(ext))
                .filter(|ext| !ext.is_empty())
                .collect(),
            options: create_comrak_options(),
        }
    }
}

impl fmt::Debug for MarkdownConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkdownConverter")
            .field("extensions", &self.extensions)
            .finish()
    }
}

impl Converter for MarkdownConverter {
    fn name(&self) -> &str {
        "markdown"
    }

    fn extensions(&self) -> Vec<String> {
        self.extensions.clone()
    }

    fn output_ext(&self) -> &str {
        ".html"
    }

    fn convert(&self, content: &str) -> Result<String, RustyllError> {
        Ok(render_markdown(content, &self.options))
    }

    fn is_markdown(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_extname() {
        assert_eq!(normalize_extname("md"), ".md");
        assert_eq!(normalize_extname(".MarkDown"), ".markdown");
        assert_eq!(normalize_extname(" .mkd "), ".mkd");
        assert_eq!(normalize_extname(""), "");
        assert_eq!(normalize_extname("."), "");
    }

    #[test]
    fn test_markdown_converter_matches_configured_extensions() {
        let converter = MarkdownConverter::new(&Config::default());
        assert!(converter.matches(".md"));
        assert!(converter.matches(".MD"));
        assert!(converter.matches("markdown"));
        assert!(converter.matches(".mkdn"));
        assert!(!converter.matches(".html"));
        assert!(!converter.matches(""));
        assert!(converter.is_markdown());
    }

    #[test]
    fn test_custom_extension_list() {
        let converter = MarkdownConverter::with_extensions(vec!["txt".to_string()]);
        assert!(converter.matches(".txt"));
        assert!(!converter.matches(".md"));
    }

    #[test]
    fn test_convert_to_html() {
        let converter = MarkdownConverter::new(&Config::default());
        let html = converter.convert("# File\n").unwrap();
        assert!(html.contains("<h1"));
        assert!(html.contains("File"));
        assert_eq!(converter.output_ext(), ".html");
    }
}
