use std::path::PathBuf;

use crate::front_matter::FrontMatter;
use crate::utils::path::strip_extension;

/// Determine the URL of a page from its relative path.
///
/// A `permalink` in front matter wins; `index` files map to their directory.
pub fn determine_url(relative_path: &str, output_ext: &str, front_matter: &FrontMatter) -> String {
    if let Some(permalink) = front_matter.get("permalink").and_then(|v| v.as_str()) {
        return if permalink.starts_with('/') {
            permalink.to_string()
        } else {
            format!("/{}", permalink)
        };
    }

    let without_ext = strip_extension(relative_path);
    if without_ext == "index" {
        return "/".to_string();
    }
    if let Some(dir) = without_ext.strip_suffix("/index") {
        return format!("/{}/", dir);
    }

    format!("/{}{}", without_ext, output_ext)
}

/// Determine the output path for a URL, relative to the destination
pub fn determine_output_path(url: &str) -> PathBuf {
    let path_str = url.trim_start_matches('/');

    // Handle index.html appending
    if path_str.is_empty() || path_str.ends_with('/') {
        PathBuf::from(format!("{}index.html", path_str))
    } else {
        PathBuf::from(path_str)
    }
}
