mod content;

pub use content::{extract_content, extract_front_matter, has_front_matter};
