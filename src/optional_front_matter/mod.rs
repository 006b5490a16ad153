//! Promotes markdown files that lack front matter into pages and
//! collection documents.
//!
//! The site reader leaves such files in the static inventory. This
//! generator picks out the markdown ones, turns them into `Page`s (or
//! `Document`s under a declared `_<label>/` directory), skips repository
//! boilerplate like `README` unless it is whitelisted through `include`,
//! and optionally drops the promoted originals from the inventory.

mod classifier;
mod extension;
mod generator;
mod options;
mod policy;

pub use classifier::{collection_name_for, PathClass, PathClassifier};
pub use extension::ExtensionMatcher;
pub use generator::{OptionalFrontMatter, PromotionReport};
pub use options::{OptionalFrontMatterConfig, ResolvedOptions, CONFIG_KEY, LEGACY_KEY};
pub use policy::{Candidate, FilenameBlacklist, FilenamePolicy, DEFAULT_BLACKLIST};
