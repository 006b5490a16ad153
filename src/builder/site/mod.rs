mod entry_filter;
mod reader;
mod static_file;

pub use entry_filter::EntryFilter;
pub use reader::read_site;
pub use static_file::StaticFile;

use std::path::PathBuf;
use std::sync::Arc;

use log::debug;

use crate::builder::page::Page;
use crate::collections::CollectionRegistry;
use crate::config::Config;
use crate::markdown::{Converter, MarkdownConverter};
use crate::plugins::{Generator, GeneratorRegistry};
use crate::utils::error::{BoxResult, RustyllError};

/// The site being built: configuration plus everything read from the source
pub struct Site {
    pub config: Config,
    /// Source root, taken from the configuration
    pub source: PathBuf,
    /// Entries copied verbatim
    pub static_files: Vec<StaticFile>,
    pub pages: Vec<Page>,
    pub collections: CollectionRegistry,
    converters: Vec<Arc<dyn Converter>>,
    generators: GeneratorRegistry,
}

impl Site {
    /// Create a site with the markdown converter for `markdown_ext`
    pub fn new(config: Config) -> Self {
        let markdown: Arc<dyn Converter> = Arc::new(MarkdownConverter::new(&config));
        Self::with_converters(config, vec![markdown])
    }

    /// Create a site with an explicit converter list
    pub fn with_converters(config: Config, converters: Vec<Arc<dyn Converter>>) -> Self {
        let source = config.source.clone();
        let collections = CollectionRegistry::from_config(&config, &source);

        Site {
            config,
            source,
            static_files: Vec::new(),
            pages: Vec::new(),
            collections,
            converters,
            generators: GeneratorRegistry::new(),
        }
    }

    pub fn add_converter(&mut self, converter: Arc<dyn Converter>) {
        self.converters.push(converter);
    }

    pub fn converters(&self) -> &[Arc<dyn Converter>] {
        &self.converters
    }

    /// The converter flagged as markdown, if one is registered
    pub fn find_markdown_converter(&self) -> Result<Arc<dyn Converter>, RustyllError> {
        self.converters
            .iter()
            .find(|converter| converter.is_markdown())
            .cloned()
            .ok_or(RustyllError::ConverterMissing)
    }

    /// Register a generator to run during `generate`
    pub fn register_generator(&mut self, generator: Arc<dyn Generator>) -> Result<(), String> {
        self.generators.register(generator)
    }

    /// Filter built from `include` and `exclude`
    pub fn entry_filter(&self) -> EntryFilter {
        EntryFilter::from_config(&self.config)
    }

    /// Forget everything read from the source
    pub fn reset(&mut self) {
        self.static_files.clear();
        self.pages.clear();
        self.collections.clear_docs();
    }

    /// Read the source tree into the site
    pub fn read(&mut self) -> Result<(), RustyllError> {
        read_site(self)
    }

    /// Run every registered generator
    pub fn generate(&mut self) -> BoxResult<()> {
        let generators = std::mem::take(&mut self.generators);
        let result = generators.run(self);
        self.generators = generators;
        result
    }

    /// Reset, read and generate
    pub fn process(&mut self) -> BoxResult<()> {
        self.reset();
        self.read()?;
        self.generate()?;
        debug!(
            "Processed site: {} pages, {} static files",
            self.pages.len(),
            self.static_files.len()
        );
        Ok(())
    }
}
