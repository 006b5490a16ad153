mod types;
mod loader;
mod defaults;
mod deserializers;
mod validation;

pub use types::*;
pub use loader::{load_config, merge_values};
pub use defaults::{default_collection_permalink, DEFAULT_MARKDOWN_EXT};
