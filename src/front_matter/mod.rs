pub mod utils;

/// Parsed front matter. Files promoted without a header carry an empty mapping.
pub type FrontMatter = serde_yaml::Mapping;

pub use utils::{extract_content, extract_front_matter, has_front_matter};
