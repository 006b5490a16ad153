use std::path::PathBuf;

/// Jekyll's default markdown extensions
pub const DEFAULT_MARKDOWN_EXT: &str = "markdown,mkdown,mkdn,mkd,md";

/// Default source directory
pub fn default_source() -> PathBuf {
    PathBuf::from(".")
}

/// Default destination directory
pub fn default_destination() -> PathBuf {
    PathBuf::from("_site")
}

/// Default excluded files
pub fn default_exclude() -> Vec<String> {
    vec![
        ".sass-cache".to_string(),
        ".jekyll-cache".to_string(),
        ".rustyll-cache".to_string(),
        "gemfiles".to_string(),
        "Gemfile".to_string(),
        "Gemfile.lock".to_string(),
        "node_modules".to_string(),
        "vendor/bundle/".to_string(),
        "vendor/cache/".to_string(),
        "vendor/gems/".to_string(),
        "vendor/ruby/".to_string(),
    ]
}

/// Default included files (entries that would otherwise be skipped)
pub fn default_include() -> Vec<String> {
    vec![".htaccess".to_string()]
}

/// Default markdown extensions
pub fn default_markdown_ext() -> Vec<String> {
    DEFAULT_MARKDOWN_EXT.split(',').map(|s| s.to_string()).collect()
}

/// Default permalink pattern for collection documents
pub fn default_collection_permalink() -> String {
    "/:collection/:path:output_ext".to_string()
}
