use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_GITHUB_API_BASE_URL: &str = "https://api.github.com";

pub struct GitHubRestResult {
    pub body: String,
    pub status: StatusCode,
}

/// Subset of the `/users/{handle}` payload. Everything else GitHub sends is ignored.
#[derive(Debug, Deserialize)]
pub struct GitHubUserResponse {
    pub login: Option<String>,
    pub followers: Option<u64>,
}

impl GitHubUserResponse {
    pub fn from_body(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// The handle is interpolated as-is, callers must pass a path-safe value.
pub fn user_url(base_url: &str, handle: &str) -> String {
    let base_url = base_url.strip_suffix('/').unwrap_or(base_url);
    format!("{base_url}/users/{handle}")
}

pub async fn fetch_user(
    base_url: &str,
    handle: &str,
) -> Result<GitHubRestResult, FetchUserError> {
    let url = user_url(base_url, handle);

    let client = Client::new();

    debug!(%url, "fetching github user");

    let response = client
        .get(&url)
        .header("Accept", "application/vnd.github+json")
        .header("User-Agent", "rust-client")
        .send()
        .await
        .map_err(|source| FetchUserError::RequestSend { source })?;

    let status = response.status();

    let body = response
        .text()
        .await
        .map_err(|source| FetchUserError::ResponseRead { source })?;

    debug!(%url, %status, bytes = body.len(), "github user fetched");

    Ok(GitHubRestResult { body, status })
}

#[derive(Debug, Error)]
pub enum FetchUserError {
    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },
}
