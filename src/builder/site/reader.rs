//! Walks the source tree and fills the site inventory.
//!
//! Files with a YAML header become pages, or documents when they sit in a
//! declared collection directory. Markdown in `_posts` is always a
//! document. Everything else is a static file.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::{DirEntry, WalkDir};

use crate::builder::page::Page;
use crate::builder::site::entry_filter::EntryFilter;
use crate::builder::site::static_file::StaticFile;
use crate::builder::site::Site;
use crate::collections::document::registry::POSTS;
use crate::collections::Document;
use crate::utils::error::RustyllError;
use crate::utils::fs::has_yaml_header;
use crate::utils::path::{extname, to_slash};

/// Read every entry under the site source into the site
pub fn read_site(site: &mut Site) -> Result<(), RustyllError> {
    let source = site.source.clone();
    let destination = resolve_destination(&source, &site.config.destination);
    let filter = site.entry_filter();
    let collection_dirs: HashSet<String> = site
        .collections
        .iter()
        .map(|collection| collection.relative_directory.clone())
        .collect();

    debug!("Reading site from {}", source.display());

    let walker = WalkDir::new(&source)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| keep_entry(entry, &source, &destination, &filter, &collection_dirs));

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| source.clone());
            RustyllError::file(path, io::Error::from(e))
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let relative = relative_path(entry.path(), &source);
        read_entry(site, &relative, entry.path(), &collection_dirs)?;
    }

    debug!(
        "Read {} pages, {} static files",
        site.pages.len(),
        site.static_files.len()
    );

    Ok(())
}

fn read_entry(
    site: &mut Site,
    relative: &str,
    path: &Path,
    collection_dirs: &HashSet<String>,
) -> Result<(), RustyllError> {
    let (dir, name) = relative.rsplit_once('/').unwrap_or(("", relative));
    let ext = extname(name);

    let label = relative
        .split_once('/')
        .map(|(top, _)| top)
        .filter(|top| collection_dirs.contains(*top))
        .map(|top| top[1..].to_string());

    let is_markdown = site
        .converters()
        .iter()
        .any(|converter| converter.is_markdown() && converter.matches(ext));
    let has_header = has_yaml_header(path).map_err(|e| RustyllError::file(path, e))?;

    match label {
        Some(label) if has_header || (label == POSTS && is_markdown) => {
            let doc = match site.collections.get(&label) {
                Some(collection) => Document::read(path, relative, collection)?,
                None => return Ok(()),
            };
            debug!("Document: {}", relative);
            if let Some(collection) = site.collections.get_mut(&label) {
                collection.docs.push(doc);
            }
        }
        None if has_header => {
            let output_ext = site
                .converters()
                .iter()
                .find(|converter| converter.matches(ext))
                .map(|converter| converter.output_ext().to_string())
                .unwrap_or_else(|| ext.to_string());
            debug!("Page: {}", relative);
            site.pages.push(Page::read(&site.source, dir, name, &output_ext)?);
        }
        _ => {
            site.static_files.push(StaticFile::new(&site.source, dir, name));
        }
    }

    Ok(())
}

fn keep_entry(
    entry: &DirEntry,
    source: &Path,
    destination: &Path,
    filter: &EntryFilter,
    collection_dirs: &HashSet<String>,
) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    if entry.path().starts_with(destination) {
        return false;
    }

    let relative = relative_path(entry.path(), source);
    if filter.included(&relative) {
        return true;
    }

    let name = entry.file_name().to_string_lossy();
    if EntryFilter::is_special(&name) {
        return entry.depth() == 1
            && entry.file_type().is_dir()
            && collection_dirs.contains(&*name);
    }

    !filter.excluded(&relative)
}

fn resolve_destination(source: &Path, destination: &Path) -> PathBuf {
    if destination.is_absolute() {
        destination.to_path_buf()
    } else {
        source.join(destination)
    }
}

fn relative_path(path: &Path, source: &Path) -> String {
    to_slash(path.strip_prefix(source).unwrap_or(path))
}
