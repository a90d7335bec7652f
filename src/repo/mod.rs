//! Repository location, metadata and checkout
//!
//! This module handles everything that happens before documents are read:
//! - Parsing a repository URL into an owner/name pair
//! - Looking up the repository's About metadata
//! - Shallow-cloning the repository into a scratch directory

mod config;
mod fetch;
mod metadata;

pub use config::{GeneratorConfig, CONFIG_FILE_NAME};
pub use fetch::{fetch, Cloner, GitCloner, ScratchDir};
pub use metadata::{metadata_from_json, GitHubClient, MetadataSource, RepositoryMetadata};

use once_cell::sync::Lazy;
use regex::Regex;

/// Host-qualified form: `https://github.com/owner/name` or `git@github.com:owner/name`
static HOSTED_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"github\.com[:/]([^/]+)/([^/.]+)").expect("valid repository pattern")
});

/// Generic trailing `owner/name[.git]` form
static TRAILING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([^/]+)/([^/.]+?)(?:\.git)?$").expect("valid repository pattern")
});

/// Owner and name of a hosted repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryReference {
    pub owner: String,
    pub name: String,
}

impl RepositoryReference {
    /// Parse a repository URL, returning `None` when no pattern matches
    pub fn parse(url: &str) -> Option<Self> {
        [&*HOSTED_PATTERN, &*TRAILING_PATTERN]
            .into_iter()
            .find_map(|pattern| pattern.captures(url))
            .map(|caps| Self {
                owner: caps[1].to_string(),
                name: caps[2].replace(".git", ""),
            })
    }

    /// `owner/name`
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl std::fmt::Display for RepositoryReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(url: &str) -> Option<(String, String)> {
        RepositoryReference::parse(url).map(|r| (r.owner, r.name))
    }

    fn pair(owner: &str, name: &str) -> Option<(String, String)> {
        Some((owner.to_string(), name.to_string()))
    }

    #[test]
    fn test_https_urls() {
        assert_eq!(parsed("https://github.com/laravel/docs"), pair("laravel", "docs"));
        assert_eq!(parsed("https://github.com/laravel/docs.git"), pair("laravel", "docs"));
        assert_eq!(parsed("https://github.com/laravel/docs/"), pair("laravel", "docs"));
        assert_eq!(
            parsed("https://github.com/vuejs/docs/tree/main/src"),
            pair("vuejs", "docs")
        );
    }

    #[test]
    fn test_ssh_shorthand() {
        assert_eq!(parsed("git@github.com:vuejs/docs.git"), pair("vuejs", "docs"));
        assert_eq!(parsed("git@github.com:vuejs/docs"), pair("vuejs", "docs"));
    }

    #[test]
    fn test_hosted_name_stops_at_dot() {
        assert_eq!(parsed("https://github.com/vercel/next.js"), pair("vercel", "next"));
    }

    #[test]
    fn test_generic_trailing_segments() {
        assert_eq!(parsed("https://gitlab.com/group/handbook.git"), pair("group", "handbook"));
        assert_eq!(parsed("owner/project"), pair("owner", "project"));
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(parsed("not-a-repository"), None);
        assert_eq!(parsed(""), None);
        assert_eq!(parsed("https://example.com/file.tar.gz"), None);
    }

    #[test]
    fn test_display() {
        let reference = RepositoryReference::parse("https://github.com/a/b").unwrap();
        assert_eq!(reference.to_string(), "a/b");
        assert_eq!(reference.slug(), "a/b");
    }
}
