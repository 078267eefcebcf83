use crate::components::profile_image_input::ProfileImageInput;
use crate::components::required_input::RequiredInput;
use crate::http::post_registration;
use crate::page_utils::{alert, set_page_title};
use register_form_shared::form::{FormField, RegistrationForm};
use register_form_shared::submission::{submit_registration, FormState, RegistrationPayload, SubmitAttempt};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::{Event as WebEvent, File};

/// Gives the submit sequence access to the form kept in a signal
struct SignalForm<'a>(&'a Signal<RegistrationForm<File>>);

impl FormState<File> for SignalForm<'_> {
	fn with_form<R>(&self, update: impl FnOnce(&mut RegistrationForm<File>) -> R) -> R {
		update(&mut *self.0.modify())
	}
}

#[component]
pub fn RegisterView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating registration page");
	set_page_title("Register");

	let form_signal = create_signal(ctx, RegistrationForm::<File>::new());
	let submitted_signal = create_memo(ctx, || form_signal.get().is_submitted());

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		spawn_local_scoped(ctx, async move {
			let form = SignalForm(form_signal);
			let attempt = submit_registration(&form, alert, |payload: RegistrationPayload<File>| {
				log::info!(
					"Submitting registration for {:?} (profile image: {})",
					payload.username(),
					payload.profile_image().map(|image| image.name()).unwrap_or_default()
				);
				async move { post_registration(&payload).await }
			})
			.await;

			match attempt {
				SubmitAttempt::Rejected(rejection) => log::debug!("Registration not sent: {}", rejection),
				SubmitAttempt::Sent(Ok(body)) => log::info!("Registration accepted: {}", body),
				SubmitAttempt::Sent(Err(error)) => log::error!("Registration failed: {}", error),
			}
			let form = form_signal.get();
			log::debug!(
				"Registration form is {:?} with {} submission(s) in flight",
				form.phase(),
				form.submissions_in_flight()
			);
		});
	};

	view! {
		ctx,
		form(id="register_user", on:submit=form_submission_handler) {
			RequiredInput(form=form_signal, field=FormField::Username)
			RequiredInput(form=form_signal, field=FormField::Password)
			RequiredInput(form=form_signal, field=FormField::ConfirmPassword)
			ProfileImageInput(form=form_signal)
			button(type="submit") { "Submit" }
		}
		(
			if *submitted_signal.get() {
				view! {
					ctx,
					div(id="register_success") { "Registration successful! You can now log in." }
				}
			} else {
				view! { ctx, }
			}
		)
		h1 { "#Register Page" }
	}
}
