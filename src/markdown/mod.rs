pub mod converter;
pub mod engine;

pub use converter::{normalize_extname, Converter, MarkdownConverter};
pub use engine::{create_comrak_options, render_markdown};
