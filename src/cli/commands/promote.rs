use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::info;
use serde_yaml::Value;

use crate::builder::Site;
use crate::cli::types::Commands;
use crate::config;
use crate::optional_front_matter::{OptionalFrontMatter, CONFIG_KEY};
use crate::utils::error::BoxResult;

/// Command-line settings layered over the loaded configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromoteOverrides {
    pub config_files: Option<Vec<PathBuf>>,
    pub collections: bool,
    pub remove_originals: bool,
    pub safe: bool,
}

impl PromoteOverrides {
    pub fn from_command(command: Option<&Commands>) -> Self {
        match command {
            Some(Commands::Promote {
                config,
                collections,
                remove_originals,
                safe,
            }) => PromoteOverrides {
                config_files: config.clone(),
                collections: *collections,
                remove_originals: *remove_originals,
                safe: *safe,
            },
            None => PromoteOverrides::default(),
        }
    }
}

/// Load the site at `source`, read it and run the generator
pub fn promote_site(source: &Path, overrides: &PromoteOverrides) -> BoxResult<Site> {
    let mut config = config::load_config(source, overrides.config_files.clone())?;

    if overrides.collections {
        config.set_nested(CONFIG_KEY, "collections", Value::Bool(true));
    }
    if overrides.remove_originals {
        config.set_nested(CONFIG_KEY, "remove_originals", Value::Bool(true));
    }
    if overrides.safe {
        config.safe_mode = true;
    }

    let mut site = Site::new(config);
    site.register_generator(Arc::new(OptionalFrontMatter::new()))?;
    site.process()?;

    Ok(site)
}

/// Handle the promote command
pub fn handle_promote_command(command: Option<&Commands>, source: &Path) -> BoxResult<()> {
    let overrides = PromoteOverrides::from_command(command);

    info!("Reading site from {}", source.display());
    let site = promote_site(source, &overrides)?;

    println!("Pages:");
    for page in &site.pages {
        println!("  {} -> {}", page.relative_path, page.url);
    }

    println!("Documents:");
    for collection in site.collections.iter() {
        for doc in &collection.docs {
            match &doc.url {
                Some(url) => println!("  {}: {} -> {}", collection.label, doc.relative_path, url),
                None => println!("  {}: {}", collection.label, doc.relative_path),
            }
        }
    }

    println!("Static files:");
    for file in &site.static_files {
        println!("  {}", file.relative_path());
    }

    Ok(())
}
