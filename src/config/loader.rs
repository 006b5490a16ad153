use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde_yaml::{Mapping, Value};

use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::RustyllError;

/// Configuration file names to look for
const CONFIG_FILES: [&str; 3] = ["_config.yml", "_config.yaml", "_config.toml"];

/// Load site configuration from config files.
///
/// Files are deep-merged in order, later files overriding earlier ones, and
/// the merged tree is deserialized once so every key keeps its default when
/// no file sets it.
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>,
) -> Result<Config, RustyllError> {
    let source_dir = source_dir.as_ref();

    let config_paths = match config_files {
        Some(paths) if !paths.is_empty() => paths,
        _ => find_default_config_files(source_dir),
    };

    let mut merged = Value::Mapping(Mapping::new());
    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            let value = read_config_file(&path)?;
            merge_values(&mut merged, value);
        }
    }

    let mut config: Config = serde_yaml::from_value(merged)
        .map_err(|e| RustyllError::Config(format!("Invalid configuration: {}", e)))?;

    // Set source directory if not already set
    if config.source == PathBuf::from(".") {
        config.source = source_dir.to_path_buf();
    } else if config.source.is_relative() {
        config.source = source_dir.join(&config.source);
    }

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files(source_dir: &Path) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.join(name))
        .filter(|path| path.exists())
        .collect()
}

/// Read one configuration file into a generic tree
fn read_config_file(config_path: &Path) -> Result<Value, RustyllError> {
    if !config_path.exists() {
        return Err(RustyllError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path).map_err(|e| {
        RustyllError::Config(format!(
            "Failed to read configuration file {}: {}",
            config_path.display(),
            e
        ))
    })?;

    let ext = config_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let value = match ext.as_str() {
        "toml" => toml::from_str::<Value>(&content).map_err(|e| {
            RustyllError::Config(format!(
                "Failed to parse TOML configuration ({}): {}",
                config_path.display(),
                e
            ))
        })?,
        // Assume YAML for .yml, .yaml and extensionless files
        "yml" | "yaml" | "" => serde_yaml::from_str::<Value>(&content).map_err(|e| {
            RustyllError::Config(format!(
                "Failed to parse YAML configuration ({}): {}",
                config_path.display(),
                e
            ))
        })?,
        other => {
            return Err(RustyllError::Config(format!(
                "Unsupported configuration file format: {}",
                other
            )))
        }
    };

    // An empty YAML file parses to null
    Ok(match value {
        Value::Null => Value::Mapping(Mapping::new()),
        value => value,
    })
}

/// Deep-merge `overlay` into `base`: mappings merge key by key, anything
/// else is replaced.
pub fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
