use log::{info, warn};

use crate::config::Config;
use crate::utils::error::RustyllError;

/// Validate the configuration
pub fn validate_config(config: &Config) -> Result<(), RustyllError> {
    validate_source_directory(config)?;
    validate_collections(config)?;
    Ok(())
}

/// Validate the source directory
fn validate_source_directory(config: &Config) -> Result<(), RustyllError> {
    let source = &config.source;

    if !source.exists() {
        return Err(RustyllError::Config(format!(
            "Source directory does not exist: {}",
            source.display()
        )));
    }

    if !source.is_dir() {
        return Err(RustyllError::Config(format!(
            "Source path is not a directory: {}",
            source.display()
        )));
    }

    info!("Source directory: {}", source.display());
    Ok(())
}

/// Validate collections configuration
fn validate_collections(config: &Config) -> Result<(), RustyllError> {
    for (label, collection) in &config.collections.items {
        if label.is_empty() || label.contains('/') || label.starts_with('_') {
            return Err(RustyllError::Config(format!(
                "Invalid collection label '{}'",
                label
            )));
        }

        if let Some(permalink) = &collection.permalink {
            // Basic permalink pattern validation
            if !permalink.contains(':') {
                warn!(
                    "Collection '{}' has a permalink without placeholders: {}",
                    label, permalink
                );
            }
        }
    }

    Ok(())
}
