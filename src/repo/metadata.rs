//! Repository About metadata from the GitHub REST API

use super::RepositoryReference;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Optional About fields of a hosted repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryMetadata {
    pub homepage: Option<String>,
    pub description: Option<String>,
    pub display_name: Option<String>,
}

/// Source of repository metadata
///
/// Implementations must not fail: any problem degrades to an empty record.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn fetch(&self, reference: &RepositoryReference) -> RepositoryMetadata;
}

/// Subset of the `GET /repos/{owner}/{repo}` response we read
#[derive(Debug, Deserialize)]
struct RepoResponse {
    name: Option<String>,
    homepage: Option<String>,
    description: Option<String>,
}

/// Unauthenticated GitHub API client
pub struct GitHubClient {
    api_base: String,
    client: reqwest::Client,
}

impl GitHubClient {
    /// Create a client with the given API base, client identifier and timeout
    pub fn new(api_base: &str, user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn request(&self, reference: &RepositoryReference) -> Result<RepositoryMetadata> {
        let url = format!(
            "{}/repos/{}/{}",
            self.api_base, reference.owner, reference.name
        );

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?
            .error_for_status()
            .context("Metadata API returned an error status")?;

        let body = response
            .text()
            .await
            .context("Failed to read metadata response")?;

        metadata_from_json(&body)
    }
}

#[async_trait]
impl MetadataSource for GitHubClient {
    async fn fetch(&self, reference: &RepositoryReference) -> RepositoryMetadata {
        match self.request(reference).await {
            Ok(metadata) => metadata,
            Err(e) => {
                println!("  ⚠ Could not fetch GitHub metadata: {}", e);
                tracing::warn!("Metadata lookup for {} failed: {:#}", reference, e);
                RepositoryMetadata::default()
            }
        }
    }
}

/// Parse a repository API response body, treating blank fields as absent
pub fn metadata_from_json(body: &str) -> Result<RepositoryMetadata> {
    let response: RepoResponse =
        serde_json::from_str(body).context("Malformed metadata response")?;

    Ok(RepositoryMetadata {
        homepage: non_blank(response.homepage),
        description: non_blank(response.description),
        display_name: non_blank(response.name),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
