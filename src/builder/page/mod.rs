mod model;
mod utils;

pub use model::Page;
pub use utils::{determine_output_path, determine_url};
