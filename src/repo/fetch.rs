//! Shallow repository checkout with branch fallbacks

use crate::error::{Error, Result};
use git2::build::RepoBuilder;
use git2::FetchOptions;
use std::path::{Path, PathBuf};

/// Performs a single checkout attempt
///
/// `branch` of `None` means the remote's default branch.
pub trait Cloner {
    fn clone_repo(&self, url: &str, dest: &Path, branch: Option<&str>) -> Result<()>;
}

/// Depth-1 clone through libgit2
#[derive(Debug, Default, Clone, Copy)]
pub struct GitCloner;

impl Cloner for GitCloner {
    fn clone_repo(&self, url: &str, dest: &Path, branch: Option<&str>) -> Result<()> {
        let mut fetch_options = FetchOptions::new();
        fetch_options.depth(1);

        let mut builder = RepoBuilder::new();
        builder.fetch_options(fetch_options);
        if let Some(branch) = branch {
            builder.branch(branch);
        }

        builder.clone(url, dest)?;
        Ok(())
    }
}

/// Clone `url` into `dest`, falling back to `fallback_branch` and then to the
/// remote default branch
///
/// Any existing directory at `dest` is removed first.
pub fn fetch(
    cloner: &dyn Cloner,
    url: &str,
    dest: &Path,
    branch: &str,
    fallback_branch: &str,
) -> Result<()> {
    println!("Cloning repository from {}...", url);
    println!("Branch: {}", branch);

    remove_dir_if_exists(dest)?;

    let attempts = [Some(branch), Some(fallback_branch), None];

    for (idx, attempt) in attempts.iter().enumerate() {
        if idx > 0 {
            match attempt {
                Some(name) => println!("  ⚠ Branch '{}' not found, trying '{}'...", branch, name),
                None => println!("  ⚠ Trying default branch..."),
            }
        }

        match cloner.clone_repo(url, dest, *attempt) {
            Ok(()) => {
                println!("✓ Repository cloned to {}", dest.display());
                return Ok(());
            }
            Err(e) => {
                tracing::debug!(
                    "Clone attempt {} ({}) failed: {}",
                    idx + 1,
                    attempt.unwrap_or("default branch"),
                    e
                );
                // A failed clone can leave a partial checkout behind
                remove_dir_if_exists(dest)?;
            }
        }
    }

    println!("✗ Failed to clone repository");
    Err(Error::CloneFailed {
        url: url.to_string(),
        attempts: attempts.len(),
    })
}

fn remove_dir_if_exists(path: &Path) -> Result<()> {
    if path.exists() {
        std::fs::remove_dir_all(path)?;
    }
    Ok(())
}

/// Owns the scratch checkout and removes it when dropped unless kept
#[derive(Debug)]
pub struct ScratchDir {
    path: PathBuf,
    keep: bool,
}

impl ScratchDir {
    /// Claim `path`, deleting whatever a previous run left there
    pub fn prepare(path: impl Into<PathBuf>, keep: bool) -> Result<Self> {
        let path = path.into();
        if path.exists() {
            println!("Removing existing directory: {}", path.display());
            std::fs::remove_dir_all(&path)?;
        }
        Ok(Self { path, keep })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_kept(&self) -> bool {
        self.keep
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if self.keep || !self.path.exists() {
            return;
        }
        if let Err(e) = std::fs::remove_dir_all(&self.path) {
            tracing::warn!("Failed to remove {}: {}", self.path.display(), e);
        }
    }
}
