// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// The text fields of the registration form
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormField {
	Username,
	Password,
	ConfirmPassword,
}

impl FormField {
	pub const ALL: [FormField; 3] = [Self::Username, Self::Password, Self::ConfirmPassword];

	pub fn label(&self) -> &'static str {
		match self {
			Self::Username => "Username",
			Self::Password => "Password",
			Self::ConfirmPassword => "Confirm Password",
		}
	}

	pub fn placeholder(&self) -> &'static str {
		match self {
			Self::Username => "username",
			Self::Password => "password",
			Self::ConfirmPassword => "confirm password",
		}
	}

	/// The HTML input type used to render the field
	pub fn input_type(&self) -> &'static str {
		match self {
			Self::Username => "text",
			Self::Password | Self::ConfirmPassword => "password",
		}
	}

	/// Inline message shown while the field is empty
	pub fn required_message(&self) -> &'static str {
		match self {
			Self::Username => "Username is required.",
			Self::Password => "Password is required.",
			Self::ConfirmPassword => "Confirm Password is required.",
		}
	}

	/// Name of the multipart part carrying this field's value
	pub fn part_name(&self) -> &'static str {
		match self {
			Self::Username => "username",
			Self::Password => "password",
			Self::ConfirmPassword => "confirmPassword",
		}
	}

	/// Identifier used for the field's input element
	pub fn element_id(&self) -> &'static str {
		match self {
			Self::Username => "register_username",
			Self::Password => "register_password",
			Self::ConfirmPassword => "register_confirm_password",
		}
	}
}

/// Whitespace as browsers trim it: Unicode white space plus the byte order mark, but not NEL (U+0085)
fn is_trimmable(c: char) -> bool {
	match c {
		'\u{FEFF}' => true,
		'\u{85}' => false,
		_ => c.is_whitespace(),
	}
}

/// Whether a field value counts as empty for the inline "required" feedback
pub fn is_blank(value: &str) -> bool {
	value.trim_matches(is_trimmable).is_empty()
}

/// A change coming from one of the form's inputs
#[derive(Debug)]
pub enum FormEvent<F> {
	FieldChanged(FormField, String),
	/// A change on the file input. `None` means the picker was closed without choosing a file.
	ProfileImageSelected(Option<F>),
}

/// Whether the form is waiting on any submission request
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormPhase {
	Editing,
	Submitting,
}

/// State of one registration form instance.
///
/// `F` is the handle type for the selected profile image. It's passed through to the submission payload untouched.
#[derive(Clone, Debug)]
pub struct RegistrationForm<F> {
	pub(crate) username: String,
	pub(crate) password: String,
	pub(crate) confirm_password: String,
	pub(crate) profile_image: Option<F>,
	pub(crate) is_submitted: bool,
	pub(crate) submissions_in_flight: usize,
}

impl<F> Default for RegistrationForm<F> {
	fn default() -> Self {
		Self {
			username: String::new(),
			password: String::new(),
			confirm_password: String::new(),
			profile_image: None,
			is_submitted: false,
			submissions_in_flight: 0,
		}
	}
}

impl<F> RegistrationForm<F> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn field(&self, field: FormField) -> &str {
		match field {
			FormField::Username => &self.username,
			FormField::Password => &self.password,
			FormField::ConfirmPassword => &self.confirm_password,
		}
	}

	pub fn set_field(&mut self, field: FormField, value: String) {
		match field {
			FormField::Username => self.username = value,
			FormField::Password => self.password = value,
			FormField::ConfirmPassword => self.confirm_password = value,
		}
	}

	pub fn select_profile_image(&mut self, image: F) {
		self.profile_image = Some(image);
	}

	pub fn profile_image(&self) -> Option<&F> {
		self.profile_image.as_ref()
	}

	pub fn apply(&mut self, event: FormEvent<F>) {
		match event {
			FormEvent::FieldChanged(field, value) => self.set_field(field, value),
			FormEvent::ProfileImageSelected(Some(image)) => self.select_profile_image(image),
			FormEvent::ProfileImageSelected(None) => (),
		}
	}

	pub fn is_field_empty(&self, field: FormField) -> bool {
		is_blank(self.field(field))
	}

	pub fn is_username_empty(&self) -> bool {
		self.is_field_empty(FormField::Username)
	}

	pub fn is_password_empty(&self) -> bool {
		self.is_field_empty(FormField::Password)
	}

	pub fn is_confirm_password_empty(&self) -> bool {
		self.is_field_empty(FormField::ConfirmPassword)
	}

	/// Whether any submission has completed successfully for this form
	pub fn is_submitted(&self) -> bool {
		self.is_submitted
	}

	pub fn phase(&self) -> FormPhase {
		if self.submissions_in_flight == 0 {
			FormPhase::Editing
		} else {
			FormPhase::Submitting
		}
	}

	pub fn submissions_in_flight(&self) -> usize {
		self.submissions_in_flight
	}

	pub(crate) fn clear_fields(&mut self) {
		self.username.clear();
		self.password.clear();
		self.confirm_password.clear();
		self.profile_image = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_form_starts_empty() {
		let form: RegistrationForm<()> = RegistrationForm::new();
		for field in FormField::ALL {
			assert_eq!(form.field(field), "");
			assert!(form.is_field_empty(field));
		}
		assert!(form.profile_image().is_none());
		assert!(!form.is_submitted());
		assert_eq!(form.phase(), FormPhase::Editing);
	}

	#[test]
	fn blank_means_empty_after_trimming() {
		let cases = [
			("", true),
			(" ", true),
			("  \t\n ", true),
			("\u{2003}", true),
			("a", false),
			("  a  ", false),
			("\ta", false),
			("\u{FEFF}", true),
			(" \u{FEFF}\u{A0} ", true),
			("\u{85}", false),
			("\u{85} ", false),
			("\u{FEFF}a\u{FEFF}", false),
		];
		for (value, expected) in cases {
			assert_eq!(is_blank(value), expected, "value {:?}", value);
		}
	}

	#[test]
	fn bom_only_username_is_reported_empty() {
		let mut form: RegistrationForm<()> = RegistrationForm::new();
		form.set_field(FormField::Username, String::from("\u{FEFF}"));
		assert!(form.is_username_empty());

		form.set_field(FormField::Username, String::from("\u{85}"));
		assert!(!form.is_username_empty());
	}

	#[test]
	fn whitespace_username_is_reported_empty() {
		let mut form: RegistrationForm<()> = RegistrationForm::new();
		form.apply(FormEvent::FieldChanged(FormField::Username, String::from("  ")));
		assert_eq!(form.field(FormField::Username), "  ");
		assert!(form.is_username_empty());
		assert_eq!(FormField::Username.required_message(), "Username is required.");
	}

	#[test]
	fn emptiness_is_tracked_per_field() {
		let mut form: RegistrationForm<()> = RegistrationForm::new();
		form.set_field(FormField::Password, String::from("hunter2"));
		assert!(form.is_username_empty());
		assert!(!form.is_password_empty());
		assert!(form.is_confirm_password_empty());
	}

	#[test]
	fn later_edits_overwrite_earlier_ones() {
		let mut form: RegistrationForm<()> = RegistrationForm::new();
		form.apply(FormEvent::FieldChanged(FormField::Username, String::from("a")));
		form.apply(FormEvent::FieldChanged(FormField::Username, String::from("al")));
		form.apply(FormEvent::FieldChanged(FormField::Username, String::from("alice")));
		assert_eq!(form.field(FormField::Username), "alice");
	}

	#[test]
	fn cancelled_file_picker_keeps_current_image() {
		let mut form: RegistrationForm<&str> = RegistrationForm::new();
		form.apply(FormEvent::ProfileImageSelected(Some("avatar.png")));
		form.apply(FormEvent::ProfileImageSelected(None));
		assert_eq!(form.profile_image(), Some(&"avatar.png"));

		form.apply(FormEvent::ProfileImageSelected(Some("other.jpg")));
		assert_eq!(form.profile_image(), Some(&"other.jpg"));
	}

	#[test]
	fn part_names_match_the_wire_format() {
		assert_eq!(FormField::Username.part_name(), "username");
		assert_eq!(FormField::Password.part_name(), "password");
		assert_eq!(FormField::ConfirmPassword.part_name(), "confirmPassword");
	}
}
