pub mod site;
pub mod page;

pub use page::Page;
pub use site::{EntryFilter, Site, StaticFile};
