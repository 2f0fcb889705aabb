use axum::extract::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::person::{birthday::local_today, models::Person};

/// JSON payload expected by the endpoint.
#[derive(Debug, Deserialize)]
pub struct GreetQuery {
	#[serde(flatten)]
	person: Person,
	/// Defaults to the server's local date.
	today: Option<NaiveDate>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct GreetResponse {
	pub is_birthday: bool,
	pub greeting: &'static str,
}

/// Axum handler: POST /person/greet
pub async fn handler(Json(input): Json<GreetQuery>) -> Json<GreetResponse> {
	let today = input.today.unwrap_or_else(local_today);
	let person = input.person;

	let response = GreetResponse {
		is_birthday: person.is_birthday(today),
		greeting: person.greet(today),
	};

	debug!(%today, is_birthday = response.is_birthday, "greeting selected");

	Json(response)
}
