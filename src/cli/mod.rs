//! CLI interface using clap
//!
//! Provides the command-line interface for llms-txt-generator

mod commands;

pub use commands::*;

use clap::Parser;
use std::path::PathBuf;

/// Generate llms.txt and llms-full.txt from any markdown documentation repository
#[derive(Parser, Debug)]
#[command(name = "llms-txt-generator")]
#[command(author, about, long_about = None)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Configuration file (defaults to ./llmstxt.toml when present)
    #[arg(long, env = "LLMSTXT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments for a generation run
#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    /// Repository URL (e.g., https://github.com/owner/repo)
    pub repo_url: String,

    /// Folder within the repository containing markdown files
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Branch to clone
    #[arg(long, default_value = "main")]
    pub branch: String,

    /// Project name (default: extracted from the repository)
    #[arg(long)]
    pub name: Option<String>,

    /// Version string to include in output names and headers
    #[arg(long)]
    pub version: Option<String>,

    /// Base URL for documentation links (default: repository homepage)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Project description (default: repository description)
    #[arg(long)]
    pub description: Option<String>,

    /// Output directory for generated files
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Scratch directory for the checkout (default: <temp>/docs-repo).
    /// It is deleted recursively, so it may not contain --output-dir
    #[arg(long)]
    pub work_dir: Option<PathBuf>,

    /// Keep the cloned repository after generation
    #[arg(long)]
    pub keep_repo: bool,

    /// Generate only llms-full.txt
    #[arg(long, conflicts_with = "index_only")]
    pub full_only: bool,

    /// Generate only llms.txt (index)
    #[arg(long)]
    pub index_only: bool,
}

const EXAMPLES: &str = "\
Examples:
  # Laravel docs
  llms-txt-generator https://github.com/laravel/docs --branch 12.x --name Laravel

  # Next.js docs (in 'docs' folder)
  llms-txt-generator https://github.com/vercel/next.js --root docs --name Next.js

  # Vue.js docs with custom base URL
  llms-txt-generator https://github.com/vuejs/docs --name Vue.js --base-url https://vuejs.org --version 3.x";

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl GenerateArgs {
    pub fn wants_index(&self) -> bool {
        !self.full_only
    }

    pub fn wants_full(&self) -> bool {
        !self.index_only
    }
}
