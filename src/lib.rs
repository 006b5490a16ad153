//! Rustyll support for markdown files without front matter.
//!
//! A site is read into pages, collection documents and static files. The
//! `optional_front_matter` generator then promotes markdown static files
//! into pages and documents so they render like any other content.

pub mod builder;
pub mod cli;
pub mod collections;
pub mod config;
pub mod front_matter;
pub mod markdown;
pub mod optional_front_matter;
pub mod plugins;
pub mod utils;
