// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::form::{FormField, RegistrationForm};
use std::cell::RefCell;
use std::fmt;
use std::future::Future;

/// Name of the multipart part carrying the profile image
pub const PROFILE_IMAGE_PART: &str = "profileImage";

/// Reasons a submission is stopped before any request is made
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitRejection {
	PasswordMismatch,
}

impl fmt::Display for SubmitRejection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::PasswordMismatch => write!(f, "Passwords do not match"),
		}
	}
}

/// How a request that was sent ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmissionOutcome {
	Succeeded,
	Failed,
}

impl<T, E> From<&Result<T, E>> for SubmissionOutcome {
	fn from(result: &Result<T, E>) -> Self {
		if result.is_ok() {
			Self::Succeeded
		} else {
			Self::Failed
		}
	}
}

#[derive(Debug, Eq, PartialEq)]
pub enum PartValue<'a, F> {
	Text(&'a str),
	File(&'a F),
}

/// One named part of the multipart body
#[derive(Debug, Eq, PartialEq)]
pub struct PayloadPart<'a, F> {
	pub name: &'static str,
	pub value: PartValue<'a, F>,
}

/// Snapshot of the form taken when a submission starts
#[derive(Clone)]
pub struct RegistrationPayload<F> {
	username: String,
	password: String,
	confirm_password: String,
	profile_image: Option<F>,
}

impl<F> RegistrationPayload<F> {
	pub fn username(&self) -> &str {
		&self.username
	}

	pub fn profile_image(&self) -> Option<&F> {
		self.profile_image.as_ref()
	}

	/// The parts of the multipart body in the order they're sent. The profile image part is only present when an
	/// image was selected.
	pub fn parts(&self) -> Vec<PayloadPart<'_, F>> {
		let mut parts = vec![
			PayloadPart {
				name: FormField::Username.part_name(),
				value: PartValue::Text(&self.username),
			},
			PayloadPart {
				name: FormField::Password.part_name(),
				value: PartValue::Text(&self.password),
			},
			PayloadPart {
				name: FormField::ConfirmPassword.part_name(),
				value: PartValue::Text(&self.confirm_password),
			},
		];
		if let Some(image) = self.profile_image.as_ref() {
			parts.push(PayloadPart {
				name: PROFILE_IMAGE_PART,
				value: PartValue::File(image),
			});
		}
		parts
	}
}

impl<F> fmt::Debug for RegistrationPayload<F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RegistrationPayload")
			.field("username", &self.username)
			.field("password", &"<redacted>")
			.field("confirm_password", &"<redacted>")
			.field("has_profile_image", &self.profile_image.is_some())
			.finish()
	}
}

impl<F: Clone> RegistrationForm<F> {
	/// Validates the form for submission and, if it passes, takes a snapshot of it to send.
	///
	/// The passwords are compared exactly as typed. On a mismatch, nothing about the form changes. Otherwise the
	/// form counts one more request in flight and keeps its field values until [`finish_submission`] is called.
	///
	/// [`finish_submission`]: RegistrationForm::finish_submission
	pub fn begin_submission(&mut self) -> Result<RegistrationPayload<F>, SubmitRejection> {
		if self.password != self.confirm_password {
			return Err(SubmitRejection::PasswordMismatch);
		}

		self.submissions_in_flight += 1;
		Ok(RegistrationPayload {
			username: self.username.clone(),
			password: self.password.clone(),
			confirm_password: self.confirm_password.clone(),
			profile_image: self.profile_image.clone(),
		})
	}
}

impl<F> RegistrationForm<F> {
	/// Records the end of a request started by [`begin_submission`](RegistrationForm::begin_submission).
	///
	/// Fields are cleared whatever the outcome. A failure leaves the submitted flag as it was.
	pub fn finish_submission(&mut self, outcome: SubmissionOutcome) {
		if outcome == SubmissionOutcome::Succeeded {
			self.is_submitted = true;
		}
		self.submissions_in_flight = self.submissions_in_flight.saturating_sub(1);
		self.clear_fields();
	}
}

/// Somewhere a form's state is kept between events
///
/// The submit sequence only touches the form through short updates, so no borrow is held while a request is in flight.
pub trait FormState<F> {
	fn with_form<R>(&self, update: impl FnOnce(&mut RegistrationForm<F>) -> R) -> R;
}

impl<F> FormState<F> for RefCell<RegistrationForm<F>> {
	fn with_form<R>(&self, update: impl FnOnce(&mut RegistrationForm<F>) -> R) -> R {
		update(&mut self.borrow_mut())
	}
}

/// What a submit event ended up doing
#[derive(Debug, Eq, PartialEq)]
pub enum SubmitAttempt<T, E> {
	/// Stopped before sending; the user was alerted
	Rejected(SubmitRejection),
	/// A request was sent and finished with this result
	Sent(Result<T, E>),
}

/// Handles a submit event for the form.
///
/// A rejected form raises exactly one alert through `alert` and is left as it was. Otherwise the payload goes to
/// `post`, and once its future resolves the form records the outcome and clears its fields.
pub async fn submit_registration<F, S, P, Fut, T, E>(form: &S, alert: impl FnOnce(&str), post: P) -> SubmitAttempt<T, E>
where
	F: Clone,
	S: FormState<F> + ?Sized,
	P: FnOnce(RegistrationPayload<F>) -> Fut,
	Fut: Future<Output = Result<T, E>>,
{
	let payload = match form.with_form(|state| state.begin_submission()) {
		Ok(payload) => payload,
		Err(rejection) => {
			alert(&rejection.to_string());
			return SubmitAttempt::Rejected(rejection);
		}
	};

	let result = post(payload).await;
	form.with_form(|state| state.finish_submission(SubmissionOutcome::from(&result)));
	SubmitAttempt::Sent(result)
}
