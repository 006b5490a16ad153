use std::path::Path;

/// Render a relative path with `/` separators, whatever the platform
pub fn to_slash<P: AsRef<Path>>(path: P) -> String {
    let parts: Vec<String> = path
        .as_ref()
        .components()
        .filter_map(|c| match c {
            std::path::Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();
    parts.join("/")
}

/// Get the extension of a file name including its leading dot (`.md`).
/// Dotfiles such as `.htaccess` have no extension.
pub fn extname(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[idx..],
        _ => "",
    }
}

/// Get a file name without its final extension
pub fn stem(name: &str) -> &str {
    &name[..name.len() - extname(name).len()]
}

/// Get the last segment of a `/`-separated path
pub fn file_name(relative_path: &str) -> &str {
    relative_path.rsplit('/').next().unwrap_or(relative_path)
}

/// Strip the extension from the last segment of a `/`-separated path
pub fn strip_extension(relative_path: &str) -> &str {
    let ext = extname(file_name(relative_path));
    &relative_path[..relative_path.len() - ext.len()]
}

/// Join a directory and a file name into a `/`-separated relative path
pub fn join_relative(dir: &str, name: &str) -> String {
    let dir = dir.trim_matches('/');
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", dir, name)
    }
}
