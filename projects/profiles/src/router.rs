use axum::{
	routing::{get, post},
	Extension, Router,
};

use crate::config::Config;
use crate::endpoints::github::followers::read::index::handler as github_followers_read_handler;
use crate::endpoints::person::greet::index::handler as person_greet_handler;

/// Per-request view of the configuration the handlers need.
#[derive(Debug, Clone)]
pub struct AppState {
	pub github_api_base_url: String,
}

impl From<&Config> for AppState {
	fn from(config: &Config) -> Self {
		Self {
			github_api_base_url: config.github_api_base_url.clone(),
		}
	}
}

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/github/followers/{handle}", get(github_followers_read_handler))
		.route("/person/greet", post(person_greet_handler))
		.layer(Extension(state))
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::{
		body::{to_bytes, Body},
		http::{header, Request, StatusCode},
	};
	use mockito::Server;
	use serde_json::{json, Value};
	use tower::ServiceExt;

	async fn body_json(response: axum::response::Response) -> Value {
		let bytes = to_bytes(response.into_body(), usize::MAX)
			.await
			.expect("readable body");
		serde_json::from_slice(&bytes).expect("json body")
	}

	fn app(base_url: &str) -> Router {
		router(AppState {
			github_api_base_url: base_url.to_string(),
		})
	}

	#[tokio::test]
	async fn followers_route_returns_count() {
		let mut server = Server::new_async().await;
		let _mock = server
			.mock("GET", "/users/alice")
			.with_status(200)
			.with_body(r#"{"login":"alice","followers":42}"#)
			.create_async()
			.await;

		let response = app(&server.url())
			.oneshot(
				Request::get("/github/followers/alice")
					.body(Body::empty())
					.unwrap(),
			)
			.await
			.unwrap();

		assert_eq!(response.status(), StatusCode::OK);
		assert_eq!(body_json(response).await, json!({"handle": "alice", "followers": 42}));
	}

	#[tokio::test]
	async fn followers_route_maps_upstream_404() {
		let mut server = Server::new_async().await;
		let _mock = server
			.mock("GET", "/users/ghost")
			.with_status(404)
			.with_body(r#"{"message":"Not Found"}"#)
			.create_async()
			.await;

		let response = app(&server.url())
			.oneshot(
				Request::get("/github/followers/ghost")
					.body(Body::empty())
					.unwrap(),
			)
			.await
			.unwrap();

		assert_eq!(response.status(), StatusCode::NOT_FOUND);
	}

	#[tokio::test]
	async fn followers_route_reports_bad_gateway_on_parse_failure() {
		let mut server = Server::new_async().await;
		let _mock = server
			.mock("GET", "/users/alice")
			.with_status(200)
			.with_body(r#"{"login":"alice"}"#)
			.create_async()
			.await;

		let response = app(&server.url())
			.oneshot(
				Request::get("/github/followers/alice")
					.body(Body::empty())
					.unwrap(),
			)
			.await
			.unwrap();

		assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
	}

	#[tokio::test]
	async fn greet_route_selects_greeting() {
		let response = app("http://127.0.0.1:9")
			.oneshot(
				Request::post("/person/greet")
					.header(header::CONTENT_TYPE, "application/json")
					.body(Body::from(
						r#"{"date_of_birth":"1985-06-15","today":"2030-06-15"}"#,
					))
					.unwrap(),
			)
			.await
			.unwrap();

		assert_eq!(response.status(), StatusCode::OK);
		assert_eq!(
			body_json(response).await,
			json!({"is_birthday": true, "greeting": "Happy birthday!"})
		);
	}

	#[tokio::test]
	async fn greet_route_rejects_bad_date() {
		let response = app("http://127.0.0.1:9")
			.oneshot(
				Request::post("/person/greet")
					.header(header::CONTENT_TYPE, "application/json")
					.body(Body::from(r#"{"date_of_birth":"June 15th"}"#))
					.unwrap(),
			)
			.await
			.unwrap();

		assert!(response.status().is_client_error());
	}
}
