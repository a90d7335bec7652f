//! Output document rendering
//!
//! Two artifacts are produced from the same collection:
//! - `llms.txt`: a compact index with one linked entry per document
//! - `llms-full.txt`: every document's content, concatenated

mod full;
mod index;

pub use full::{render_full, write_full};
pub use index::{render_index, write_index};

use crate::repo::{RepositoryMetadata, RepositoryReference};
use std::io::{self, Write};
use std::path::Path;

/// Settings shared by both renderers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    pub project_name: String,
    pub base_url: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
}

/// Values given explicitly on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub name: Option<String>,
    pub base_url: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
}

impl RenderConfig {
    /// Combine overrides, fetched metadata and the parsed repository name.
    /// Overrides always win.
    pub fn resolve(
        overrides: Overrides,
        metadata: RepositoryMetadata,
        reference: &RepositoryReference,
    ) -> Self {
        Self {
            project_name: overrides
                .name
                .or(metadata.display_name)
                .unwrap_or_else(|| reference.name.clone()),
            base_url: overrides.base_url.or(metadata.homepage),
            version: overrides.version,
            description: overrides.description.or(metadata.description),
        }
    }

    fn version_suffix(&self) -> String {
        self.version
            .as_deref()
            .map(|v| format!("-{}", v))
            .unwrap_or_default()
    }

    /// `llms.txt`, or `llms-<version>.txt`
    pub fn index_file_name(&self) -> String {
        format!("llms{}.txt", self.version_suffix())
    }

    /// `llms-full.txt`, or `llms-full-<version>.txt`
    pub fn full_file_name(&self) -> String {
        format!("llms-full{}.txt", self.version_suffix())
    }

    /// Heading text with the optional version appended
    fn heading(&self, label: &str) -> String {
        match &self.version {
            Some(version) => format!("{} {} - {}", self.project_name, label, version),
            None => format!("{} {}", self.project_name, label),
        }
    }

    /// Title, quoted description and website lines common to both outputs
    fn write_header<W: Write>(&self, out: &mut W, label: &str) -> io::Result<()> {
        writeln!(out, "# {}\n", self.heading(label))?;

        if let Some(ref description) = self.description {
            writeln!(out, "> {}\n", description)?;
        }

        if let Some(ref base_url) = self.base_url {
            writeln!(out, "Website: {}", base_url)?;
        }

        Ok(())
    }
}

/// Size of a written artifact in bytes, zero if it cannot be read
pub(crate) fn file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
