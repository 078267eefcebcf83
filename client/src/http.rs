// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use gloo_net::http::Request;
use register_form_shared::submission::{PartValue, RegistrationPayload};
use register_form_shared::REGISTER_PATH;
use std::fmt;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData, Url};

/// Errors that can occur while sending a registration request
pub enum RegistrationRequestError {
	Browser(String),
	Request(gloo_net::Error),
	Status {
		status: u16,
		status_text: String,
		body: String,
	},
}

impl fmt::Display for RegistrationRequestError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Browser(error) => write!(f, "The browser failed to prepare the request: {}", error),
			Self::Request(error) => write!(f, "{}", error),
			Self::Status {
				status,
				status_text,
				body,
			} => write!(f, "The server responded with {} {}: {}", status, status_text, body),
		}
	}
}

impl From<gloo_net::Error> for RegistrationRequestError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Request(error)
	}
}

impl From<JsValue> for RegistrationRequestError {
	fn from(error: JsValue) -> Self {
		Self::Browser(format!("{:?}", error))
	}
}

/// Body of a successful registration response
pub enum ResponseBody {
	Json(serde_json::Value),
	Text(String),
	Unreadable(String),
}

impl From<String> for ResponseBody {
	fn from(text: String) -> Self {
		match serde_json::from_str(&text) {
			Ok(value) => Self::Json(value),
			Err(_) => Self::Text(text),
		}
	}
}

impl fmt::Display for ResponseBody {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Json(value) => write!(f, "{}", value),
			Self::Text(text) => write!(f, "{}", text),
			Self::Unreadable(error) => write!(f, "<unreadable body: {}>", error),
		}
	}
}

/// Gets the URL of the registration endpoint on the host serving the page.
pub fn registration_endpoint() -> Result<String, RegistrationRequestError> {
	let window = web_sys::window()
		.ok_or_else(|| RegistrationRequestError::Browser(String::from("No browser window is available")))?;
	let page_address = window.location().href()?;
	let url = Url::new_with_base(REGISTER_PATH, &page_address)?;
	Ok(url.href())
}

fn build_form_data(payload: &RegistrationPayload<File>) -> Result<FormData, RegistrationRequestError> {
	let form_data = FormData::new()?;
	for part in payload.parts() {
		match part.value {
			PartValue::Text(text) => form_data.append_with_str(part.name, text)?,
			PartValue::File(file) => form_data.append_with_blob(part.name, file)?,
		}
	}
	Ok(form_data)
}

/// Sends the registration as a multipart POST.
///
/// # Errors
///
/// Fails when the browser can't build the request, when the request can't be completed, and when the server
/// responds with a non-success status.
pub async fn post_registration(payload: &RegistrationPayload<File>) -> Result<ResponseBody, RegistrationRequestError> {
	let endpoint = registration_endpoint()?;
	let form_data = build_form_data(payload)?;

	// The browser sets the multipart content type (with its boundary) for FormData bodies.
	let response = Request::post(&endpoint).body(form_data)?.send().await?;
	let body = response.text().await;
	response_result(response.status(), response.status_text(), body)
}

/// Decides the result of a request from its status alone; the body is only kept for logging.
fn response_result(
	status: u16,
	status_text: String,
	body: Result<String, gloo_net::Error>,
) -> Result<ResponseBody, RegistrationRequestError> {
	if (200..300).contains(&status) {
		return Ok(match body {
			Ok(text) => ResponseBody::from(text),
			Err(error) => ResponseBody::Unreadable(error.to_string()),
		});
	}
	let body = body.unwrap_or_else(|error| ResponseBody::Unreadable(error.to_string()).to_string());
	Err(RegistrationRequestError::Status {
		status,
		status_text,
		body,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn unreadable() -> Result<String, gloo_net::Error> {
		Err(gloo_net::Error::GlooError(String::from("body stream already read")))
	}

	#[test]
	fn success_with_unreadable_body_is_still_success() {
		let result = response_result(201, String::from("Created"), unreadable());
		assert!(matches!(result, Ok(ResponseBody::Unreadable(_))));
	}

	#[test]
	fn json_body_is_parsed_for_logging() {
		let result = response_result(200, String::from("OK"), Ok(String::from("{\"ok\":true}")));
		match result {
			Ok(ResponseBody::Json(value)) => assert_eq!(value, serde_json::json!({ "ok": true })),
			_ => panic!("expected a JSON body"),
		}
	}

	#[test]
	fn plain_body_is_kept_as_text() {
		let result = response_result(204, String::from("No Content"), Ok(String::new()));
		assert!(matches!(result, Ok(ResponseBody::Text(text)) if text.is_empty()));
	}

	#[test]
	fn non_success_status_is_an_error() {
		let result = response_result(409, String::from("Conflict"), Ok(String::from("taken")));
		match result {
			Err(RegistrationRequestError::Status { status, body, .. }) => {
				assert_eq!(status, 409);
				assert_eq!(body, "taken");
			}
			_ => panic!("expected a status error"),
		}

		let result = response_result(500, String::from("Internal Server Error"), unreadable());
		assert!(matches!(result, Err(RegistrationRequestError::Status { status: 500, .. })));
	}
}
