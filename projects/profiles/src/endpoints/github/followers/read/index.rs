use axum::{
	extract::{Extension, Json, Path},
	http::StatusCode,
	response::IntoResponse,
};
use interfaces_github_followers::index::{
	fetch_user, FetchUserError, GitHubRestResult, GitHubUserResponse, DEFAULT_GITHUB_API_BASE_URL,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::router::AppState;

#[derive(Debug, Error)]
pub enum FetchFollowerCountError {
	#[error("FetchUser: {source}")]
	FetchUser {
		#[from]
		source: FetchUserError,
	},

	#[error("UnexpectedStatus: {status}")]
	UnexpectedStatus {
		status: reqwest::StatusCode,
		body: String,
	},

	#[error("DeserializeResponseBody: {source}")]
	DeserializeResponseBody {
		#[from]
		source: serde_json::Error,
	},

	#[error("Missing or null followers field in user response")]
	FollowersFieldMissing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowerCountErrorKind {
	/// Transport failure or a non-success status.
	Network,
	/// Body is not JSON or has no usable `followers` value.
	Parse,
}

impl FetchFollowerCountError {
	pub fn kind(&self) -> FollowerCountErrorKind {
		match self {
			FetchFollowerCountError::FetchUser { .. }
			| FetchFollowerCountError::UnexpectedStatus { .. } => FollowerCountErrorKind::Network,
			FetchFollowerCountError::DeserializeResponseBody { .. }
			| FetchFollowerCountError::FollowersFieldMissing => FollowerCountErrorKind::Parse,
		}
	}
}

/// Follower count of `handle` as reported by the API at `base_url`.
pub async fn fetch_follower_count(
	base_url: &str,
	handle: &str,
) -> Result<u64, FetchFollowerCountError> {
	let GitHubRestResult { body, status } = fetch_user(base_url, handle).await?;

	if !status.is_success() {
		return Err(FetchFollowerCountError::UnexpectedStatus { status, body });
	}

	let parsed = GitHubUserResponse::from_body(&body)?;

	parsed
		.followers
		.ok_or(FetchFollowerCountError::FollowersFieldMissing)
}

/// Follower count from the public GitHub API.
pub async fn get_followers(handle: &str) -> Result<u64, FetchFollowerCountError> {
	fetch_follower_count(DEFAULT_GITHUB_API_BASE_URL, handle).await
}

#[derive(Debug, Error)]
pub enum HandlerError {
	#[error("UserNotFound: {handle}")]
	UserNotFound {
		handle: String,
	},
	#[error("FetchFollowerCount: {source}")]
	FetchFollowerCount {
		#[from]
		source: FetchFollowerCountError,
	},
}

impl IntoResponse for HandlerError {
	fn into_response(self) -> axum::response::Response {
		match self {
			HandlerError::UserNotFound { handle } => (StatusCode::NOT_FOUND, format!("GitHub user {handle} not found")).into_response(),
			HandlerError::FetchFollowerCount { source } => (StatusCode::BAD_GATEWAY, source.to_string()).into_response(),
		}
	}
}

#[derive(Debug, Serialize)]
pub struct FollowersResponse {
	pub handle: String,
	pub followers: u64,
}

/// Axum handler: GET /github/followers/{handle}
pub async fn handler(
	Extension(state): Extension<AppState>,
	Path(handle): Path<String>,
) -> Result<Json<FollowersResponse>, HandlerError> {
	let followers = match fetch_follower_count(&state.github_api_base_url, &handle).await {
		Ok(followers) => followers,
		Err(FetchFollowerCountError::UnexpectedStatus { status, .. })
			if status == reqwest::StatusCode::NOT_FOUND =>
		{
			return Err(HandlerError::UserNotFound { handle });
		}
		Err(source) => {
			warn!(%handle, kind = ?source.kind(), "follower lookup failed: {source}");
			return Err(HandlerError::FetchFollowerCount { source });
		}
	};

	info!(%handle, followers, "follower count fetched");

	Ok(Json(FollowersResponse { handle, followers }))
}
