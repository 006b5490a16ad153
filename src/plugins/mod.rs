//! Plugin system for Rustyll
//! Generators extend a site after it is read and before it is rendered

pub mod registry;

use crate::builder::site::Site;
use crate::utils::error::BoxResult;

pub use registry::GeneratorRegistry;

/// Order in which generators run; higher first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Priority {
    Lowest,
    Low,
    #[default]
    Normal,
    High,
    Highest,
}

/// Generator trait that site generators must implement
pub trait Generator: Send + Sync {
    /// Unique generator name
    fn name(&self) -> &str;

    fn priority(&self) -> Priority {
        Priority::Normal
    }

    /// Whether the generator may run in safe mode
    fn safe(&self) -> bool {
        false
    }

    /// Add to or rewrite the site's content
    fn generate(&self, site: &mut Site) -> BoxResult<()>;
}
