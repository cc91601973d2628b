// src/integrations/github/client.rs
//
// GitHub REST API Integration
//
// ARCHITECTURE:
// - Plain REST client for the GitHub v3 API
// - Maps external data → domain entities (NO domain mutation)
// - Used by the RepositoryExplorer through the RepositoryLookup seam
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Never touches the bookmark list
// - Handles all external API concerns

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{header, Client, StatusCode};

use crate::domain::Repository;
use crate::error::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Remote repository lookup seam
///
/// The explorer depends on this trait rather than the concrete client so
/// tests can substitute a scripted lookup.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RepositoryLookup: Send + Sync {
    /// Fetch repository metadata by its "owner/name" identifier
    async fn get_repository(&self, full_name: &str) -> AppResult<Repository>;
}

/// GitHub API Client
pub struct GithubClient {
    base_url: String,
    http_client: Client,
    auth_token: Option<String>,
}

impl GithubClient {
    /// Create a new GitHub client against the public API
    pub fn new() -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: "https://api.github.com".to_string(),
            http_client,
            auth_token: None,
        }
    }

    /// Create client with an authentication token (higher rate limits)
    pub fn with_auth(token: String) -> Self {
        let mut client = Self::new();
        client.auth_token = Some(token);
        client
    }

    /// Point the client at a different API root (local test servers)
    pub fn with_base_url(base_url: String) -> Self {
        let mut client = Self::new();
        client.base_url = base_url;
        client
    }
}

#[async_trait]
impl RepositoryLookup for GithubClient {
    async fn get_repository(&self, full_name: &str) -> AppResult<Repository> {
        // Path is built from the raw identifier, matching what the user
        // typed; the "owner/name" separator must survive as-is.
        let url = format!("{}/repos/{}", self.base_url, full_name);

        let mut request = self
            .http_client
            .get(&url)
            .header(header::ACCEPT, "application/vnd.github+json")
            .header(header::USER_AGENT, "github-explorer");

        if let Some(token) = &self.auth_token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = request.send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                debug!("GitHub returned 404 for '{}'", full_name);
                Err(AppError::NotFound)
            }
            status if !status.is_success() => {
                debug!("GitHub returned {} for '{}'", status, full_name);
                Err(AppError::Lookup(format!(
                    "GitHub API returned status: {}",
                    status
                )))
            }
            _ => response
                .json::<Repository>()
                .await
                .map_err(|e| AppError::Lookup(format!("Failed to parse GitHub response: {}", e))),
        }
    }
}

impl Default for GithubClient {
    fn default() -> Self {
        Self::new()
    }
}
