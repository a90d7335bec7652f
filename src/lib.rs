//! llms-txt-generator - documentation aggregation for LLM consumption
//!
//! This library clones a markdown documentation repository and renders two
//! text artifacts from it: a compact `llms.txt` index and a complete
//! `llms-full.txt` concatenation.

pub mod cli;
pub mod error;
pub mod extract;
pub mod render;
pub mod repo;

/// Re-export commonly used types
pub use error::{Error, Result};
pub use extract::{Collection, DocumentRecord};
pub use render::RenderConfig;
pub use repo::{GeneratorConfig, RepositoryMetadata, RepositoryReference};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "llms-txt-generator";
