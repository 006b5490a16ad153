pub mod model;
pub mod registry;

pub use model::{Collection, Document};
pub use registry::CollectionRegistry;
