use log::warn;
use serde::Deserialize;
use serde_yaml::Value;

use crate::config::Config;
use crate::utils::error::RustyllError;

/// Configuration block read by the generator
pub const CONFIG_KEY: &str = "optional_front_matter";
/// Deprecated top-level switch; `true` disables promotion
pub const LEGACY_KEY: &str = "require_front_matter";

/// The `optional_front_matter` block as written in `_config.yml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OptionalFrontMatterConfig {
    pub enabled: bool,
    /// Promote files under declared `_<label>/` directories too
    pub collections: bool,
    /// Drop promoted originals from the static inventory
    pub remove_originals: bool,
    /// Render promoted markdown to HTML right away
    pub convert_content: bool,
}

impl Default for OptionalFrontMatterConfig {
    fn default() -> Self {
        OptionalFrontMatterConfig {
            enabled: true,
            collections: false,
            remove_originals: false,
            convert_content: true,
        }
    }
}

/// Effective behavior for one pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub enabled: bool,
    pub collections: bool,
    pub remove_originals: bool,
    pub convert_content: bool,
}

impl ResolvedOptions {
    /// Resolve the block and the legacy flag against the site config.
    ///
    /// A truthy `require_front_matter` disables promotion whatever the
    /// block says. A falsy one changes nothing.
    pub fn resolve(config: &Config) -> Result<Self, RustyllError> {
        let block = match config.get(CONFIG_KEY) {
            None | Some(Value::Null) => OptionalFrontMatterConfig::default(),
            Some(value) => serde_yaml::from_value(value.clone()).map_err(|e| {
                RustyllError::Config(format!("Invalid '{}' configuration: {}", CONFIG_KEY, e))
            })?,
        };

        let legacy_disabled = match config.get(LEGACY_KEY) {
            Some(value) => {
                warn!(
                    "'{}' is deprecated, use '{}.enabled' instead",
                    LEGACY_KEY, CONFIG_KEY
                );
                is_truthy(value)
            }
            None => false,
        };

        Ok(ResolvedOptions {
            enabled: block.enabled && !legacy_disabled,
            collections: block.collections,
            remove_originals: block.remove_originals,
            convert_content: block.convert_content,
        })
    }
}

/// Only `null` and `false` are false
fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}
