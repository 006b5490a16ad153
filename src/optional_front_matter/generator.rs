use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use log::{debug, info};

use super::classifier::{PathClass, PathClassifier};
use super::extension::ExtensionMatcher;
use super::options::ResolvedOptions;
use super::policy::{FilenameBlacklist, FilenamePolicy};
use crate::builder::site::{Site, StaticFile};
use crate::builder::Page;
use crate::collections::Document;
use crate::markdown::Converter;
use crate::plugins::Generator;
use crate::utils::error::{BoxResult, RustyllError};

/// What a single promotion pass did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromotionReport {
    /// Relative paths promoted to pages
    pub pages: Vec<String>,
    /// `(collection, relative path)` of promoted documents
    pub documents: Vec<(String, String)>,
    /// Relative paths held back by the filename policy
    pub skipped: Vec<String>,
    /// Originals dropped from the static inventory
    pub removed: Vec<String>,
}

impl PromotionReport {
    /// Number of pages and documents created
    pub fn promoted(&self) -> usize {
        self.pages.len() + self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.promoted() == 0 && self.skipped.is_empty() && self.removed.is_empty()
    }
}

/// Generator that renders markdown files without front matter
#[derive(Debug, Clone, Default)]
pub struct OptionalFrontMatter {
    blacklist: FilenameBlacklist,
}

/// Per-pass state: resolved once at the start, then passed down
struct Pass<'a> {
    options: ResolvedOptions,
    converter: Arc<dyn Converter>,
    policy: FilenamePolicy<'a>,
}

impl OptionalFrontMatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blacklist(blacklist: FilenameBlacklist) -> Self {
        OptionalFrontMatter { blacklist }
    }

    pub fn blacklist(&self) -> &FilenameBlacklist {
        &self.blacklist
    }

    /// Promote eligible static files of `site` into pages and documents
    pub fn promote(&self, site: &mut Site) -> Result<PromotionReport, RustyllError> {
        let options = ResolvedOptions::resolve(&site.config)?;
        if !options.enabled {
            debug!("Optional front matter is disabled");
            return Ok(PromotionReport::default());
        }

        let converter = site.find_markdown_converter()?;
        let matcher = ExtensionMatcher::from_converter(converter.as_ref());
        let pass = Pass {
            options,
            converter,
            policy: FilenamePolicy::new(&self.blacklist, &site.config.include),
        };

        let mut page_files = Vec::new();
        let mut collection_files: HashMap<String, Vec<StaticFile>> = HashMap::new();
        let classifier = PathClassifier::new(&site.collections);
        for file in site.static_files.iter().filter(|file| matcher.matches(file.extname())) {
            match classifier.classify(&file.relative_path()) {
                PathClass::Page => page_files.push(file.clone()),
                PathClass::Collection(label) if pass.options.collections => {
                    collection_files.entry(label).or_default().push(file.clone());
                }
                PathClass::Collection(_) => {}
                PathClass::Unclaimed => {
                    debug!("Not in a declared collection: {}", file.relative_path());
                }
            }
        }

        let mut report = PromotionReport::default();
        let mut reconciled = HashSet::new();

        promote_pages(site, &pass, page_files, &mut report, &mut reconciled)?;

        let labels = site.collections.labels().to_vec();
        for label in labels {
            if let Some(files) = collection_files.remove(&label) {
                promote_documents(site, &pass, &label, files, &mut report, &mut reconciled)?;
            }
        }

        if pass.options.remove_originals && !reconciled.is_empty() {
            site.static_files.retain(|file| {
                let relative = file.relative_path();
                if reconciled.contains(&relative) {
                    debug!("Removing original: {}", relative);
                    report.removed.push(relative);
                    false
                } else {
                    true
                }
            });
        }

        info!(
            "Optional front matter: {} pages, {} documents promoted, {} originals removed",
            report.pages.len(),
            report.documents.len(),
            report.removed.len()
        );

        Ok(report)
    }
}

fn promote_pages(
    site: &mut Site,
    pass: &Pass<'_>,
    files: Vec<StaticFile>,
    report: &mut PromotionReport,
    reconciled: &mut HashSet<String>,
) -> Result<(), RustyllError> {
    for file in files {
        let relative = file.relative_path();
        let mut page = Page::read(file.base(), file.dir(), file.name(), pass.converter.output_ext())?;

        if pass.policy.is_blacklisted(&page) {
            debug!("Skipping blacklisted file: {}", relative);
            report.skipped.push(relative);
            continue;
        }

        reconciled.insert(relative.clone());
        if site.pages.iter().any(|existing| existing.relative_path == relative) {
            debug!("Already a page: {}", relative);
            continue;
        }

        if pass.options.convert_content {
            page.content = pass.converter.convert(&page.content)?;
        }

        debug!("Promoted page: {}", relative);
        report.pages.push(relative);
        site.pages.push(page);
    }

    Ok(())
}

fn promote_documents(
    site: &mut Site,
    pass: &Pass<'_>,
    label: &str,
    files: Vec<StaticFile>,
    report: &mut PromotionReport,
    reconciled: &mut HashSet<String>,
) -> Result<(), RustyllError> {
    let collection = match site.collections.get_mut(label) {
        Some(collection) => collection,
        None => return Ok(()),
    };

    for file in files {
        let relative = file.relative_path();
        let mut doc = Document::read(&file.path(), relative.clone(), collection)?;

        if pass.policy.is_blacklisted(&doc) {
            debug!("Skipping blacklisted file: {}", relative);
            report.skipped.push(relative);
            continue;
        }

        reconciled.insert(relative.clone());
        if collection.contains(&relative) {
            debug!("Already in {}: {}", label, relative);
            continue;
        }

        if pass.options.convert_content {
            doc.content = pass.converter.convert(&doc.content)?;
        }

        debug!("Promoted document: {} ({})", relative, label);
        report.documents.push((label.to_string(), relative));
        collection.docs.push(doc);
    }

    Ok(())
}

impl Generator for OptionalFrontMatter {
    fn name(&self) -> &str {
        "optional_front_matter"
    }

    fn safe(&self) -> bool {
        true
    }

    fn generate(&self, site: &mut Site) -> BoxResult<()> {
        self.promote(site)?;
        Ok(())
    }
}
