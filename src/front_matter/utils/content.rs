use serde_yaml::Value;

use crate::front_matter::FrontMatter;
use crate::utils::error::RustyllError;

/// Split `---` fenced YAML from the body.
///
/// The opening fence must be the very first line; the closing fence is the
/// next line reading `---` or `...`. Returns `(yaml, body)`.
fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix("---")?;
    let newline = rest.find('\n')?;
    if !rest[..newline].trim().is_empty() {
        return None;
    }

    let yaml_start = 3 + newline + 1;
    let mut offset = yaml_start;
    for line in content[yaml_start..].split_inclusive('\n') {
        let fence = line.trim_end();
        if fence == "---" || fence == "..." {
            return Some((&content[yaml_start..offset], &content[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

/// Check if content has front matter
pub fn has_front_matter(content: &str) -> bool {
    split_front_matter(content).is_some()
}

/// Extract content without front matter
pub fn extract_content(content: &str) -> &str {
    match split_front_matter(content) {
        Some((_, body)) => body,
        None => content,
    }
}

/// Extract front matter and content.
///
/// Content without a header comes back verbatim with an empty mapping.
pub fn extract_front_matter(content: &str) -> Result<(FrontMatter, String), RustyllError> {
    let (yaml, body) = match split_front_matter(content) {
        Some(parts) => parts,
        None => return Ok((FrontMatter::new(), content.to_string())),
    };

    if yaml.trim().is_empty() {
        return Ok((FrontMatter::new(), body.to_string()));
    }

    let value: Value = serde_yaml::from_str(yaml)
        .map_err(|e| RustyllError::FrontMatter(format!("Error parsing front matter: {}", e)))?;

    let front_matter = match value {
        Value::Null => FrontMatter::new(),
        Value::Mapping(map) => map,
        other => {
            return Err(RustyllError::FrontMatter(format!(
                "Front matter must be a mapping, got {:?}",
                other
            )))
        }
    };

    Ok((front_matter, body.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_without_front_matter_is_verbatim() {
        let content = "# File\n\nBody text.\n";
        assert!(!has_front_matter(content));
        assert_eq!(extract_content(content), content);

        let (front_matter, body) = extract_front_matter(content).unwrap();
        assert!(front_matter.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_extract_front_matter() {
        let content = "---\ntitle: With FM\nlayout: default\n---\n# Article\n";
        assert!(has_front_matter(content));

        let (front_matter, body) = extract_front_matter(content).unwrap();
        assert_eq!(front_matter.get("title").and_then(|v| v.as_str()), Some("With FM"));
        assert_eq!(body, "# Article\n");
    }

    #[test]
    fn test_empty_front_matter() {
        let (front_matter, body) = extract_front_matter("---\n---\nHello\n").unwrap();
        assert!(front_matter.is_empty());
        assert_eq!(body, "Hello\n");
    }

    #[test]
    fn test_dots_close_front_matter() {
        let (front_matter, body) = extract_front_matter("---\na: 1\n...\nrest").unwrap();
        assert_eq!(front_matter.len(), 1);
        assert_eq!(body, "rest");
    }

    #[test]
    fn test_unterminated_or_indented_fence_is_not_front_matter() {
        assert!(!has_front_matter("---\ntitle: never closed\n"));
        assert!(!has_front_matter("  ---\ntitle: x\n---\n"));
        assert!(!has_front_matter("--- title\n---\n"));
    }

    #[test]
    fn test_scalar_front_matter_is_rejected() {
        let result = extract_front_matter("---\njust a string\n---\nbody");
        assert!(matches!(result, Err(RustyllError::FrontMatter(_))));
    }
}
