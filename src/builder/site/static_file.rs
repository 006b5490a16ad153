use std::path::{Path, PathBuf};

use crate::utils::path::{extname, join_relative};

/// A file the site copies verbatim: no front matter, no conversion.
///
/// The three parts a page or document is rebuilt from (source root,
/// subdirectory, file name) are all public through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFile {
    base: PathBuf,
    dir: String,
    name: String,
}

impl StaticFile {
    /// Create a static file entry for `base/dir/name`
    pub fn new(base: impl Into<PathBuf>, dir: &str, name: &str) -> Self {
        StaticFile {
            base: base.into(),
            dir: dir.trim_matches('/').to_string(),
            name: name.to_string(),
        }
    }

    /// Source root
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Directory relative to the source root, empty at the top level
    pub fn dir(&self) -> &str {
        &self.dir
    }

    /// File name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `dir/name`, `/`-separated
    pub fn relative_path(&self) -> String {
        join_relative(&self.dir, &self.name)
    }

    /// Extension with its leading dot, or empty
    pub fn extname(&self) -> &str {
        extname(&self.name)
    }

    /// Absolute path of the file
    pub fn path(&self) -> PathBuf {
        self.base.join(&self.dir).join(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_file_parts() {
        let file = StaticFile::new("/site", "/_articles/", "post.md");
        assert_eq!(file.base(), Path::new("/site"));
        assert_eq!(file.dir(), "_articles");
        assert_eq!(file.name(), "post.md");
        assert_eq!(file.relative_path(), "_articles/post.md");
        assert_eq!(file.extname(), ".md");
        assert_eq!(file.path(), PathBuf::from("/site/_articles/post.md"));

        let top = StaticFile::new("/site", "", "logo.png");
        assert_eq!(top.relative_path(), "logo.png");
        assert_eq!(top.extname(), ".png");
    }
}
