use std::path::{Path, PathBuf};

use crate::front_matter::{extract_front_matter, FrontMatter};
use crate::builder::page::utils::{determine_output_path, determine_url};
use crate::utils::error::RustyllError;
use crate::utils::fs::read_source;
use crate::utils::path::{join_relative, stem};

/// A page in the site
#[derive(Debug, Clone)]
pub struct Page {
    /// Source root the page was read from
    pub base: PathBuf,
    /// Directory relative to `base`, `/`-separated, empty at the top level
    pub dir: String,
    /// File name
    pub name: String,
    /// `dir/name`
    pub relative_path: String,
    /// Body, markdown until converted
    pub content: String,
    pub front_matter: FrontMatter,
    /// Extension the rendered page is written with
    pub output_ext: String,
    pub url: String,
}

impl Page {
    /// Read a page from `base/dir/name`, splitting off front matter if present
    pub fn read(base: &Path, dir: &str, name: &str, output_ext: &str) -> Result<Self, RustyllError> {
        let dir = dir.trim_matches('/').to_string();
        let path = base.join(&dir).join(name);
        let raw = read_source(&path)?;
        let (front_matter, content) = extract_front_matter(&raw).map_err(|e| {
            RustyllError::FrontMatter(format!("{} ({})", e, path.display()))
        })?;

        let relative_path = join_relative(&dir, name);
        let url = determine_url(&relative_path, output_ext, &front_matter);

        Ok(Page {
            base: base.to_path_buf(),
            dir,
            name: name.to_string(),
            relative_path,
            content,
            front_matter,
            output_ext: output_ext.to_string(),
            url,
        })
    }

    /// Absolute path of the source file
    pub fn path(&self) -> PathBuf {
        self.base.join(&self.dir).join(&self.name)
    }

    /// File name without extension
    pub fn basename(&self) -> &str {
        stem(&self.name)
    }

    /// Path the page is written to, relative to the destination
    pub fn output_path(&self) -> PathBuf {
        determine_output_path(&self.url)
    }
}
