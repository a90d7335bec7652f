//! Document collection and line-based markdown skimming
//!
//! This module handles:
//! - Finding the documents to publish inside a checkout
//! - Pulling a title, a summary and a URL path out of each document

pub mod collect;
pub mod doc;

pub use collect::{collect, Collection};
pub use doc::{
    extract_summary, extract_title, humanize_path, relative_url_path, DocumentRecord,
    FALLBACK_SUMMARY, MAX_SUMMARY_CHARS,
};
