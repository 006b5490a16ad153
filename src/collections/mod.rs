pub mod document;

pub use document::{Collection, CollectionRegistry, Document};
