use register_form_shared::form::{FormEvent, RegistrationForm};
use sycamore::prelude::*;
use sycamore::web::DomNode;
use wasm_bindgen::JsCast;
use web_sys::{Event as WebEvent, File, HtmlInputElement};

#[derive(Prop)]
pub struct ProfileImageInputProps<'a> {
	form: &'a Signal<RegistrationForm<File>>,
}

#[component]
pub fn ProfileImageInput<'a, G: Html>(ctx: Scope<'a>, props: ProfileImageInputProps<'a>) -> View<G> {
	let form = props.form;
	let file_input_ref = create_node_ref(ctx);

	// A file input can't be given a value, only cleared, so the reset is pushed to the element directly.
	create_effect(ctx, move || {
		if form.get().profile_image().is_some() {
			return;
		}
		if let Some(node) = file_input_ref.try_get::<DomNode>() {
			node.unchecked_into::<HtmlInputElement>().set_value("");
		}
	});

	let change_handler = move |event: WebEvent| {
		let image = event
			.target()
			.and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
			.and_then(|input| input.files())
			.and_then(|files| files.get(0));
		if let Some(image) = image.as_ref() {
			log::debug!("Selected profile image {} ({} bytes)", image.name(), image.size());
		}
		form.modify().apply(FormEvent::ProfileImageSelected(image));
	};

	view! {
		ctx,
		div(class="form_control") {
			label(for="register_profile_image") { "Profile Image" }
			input(id="register_profile_image", type="file", accept="image/*", ref=file_input_ref, on:change=change_handler)
		}
	}
}
