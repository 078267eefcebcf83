use register_form_shared::form::{FormEvent, FormField, RegistrationForm};
use sycamore::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event as WebEvent, File, HtmlInputElement};

#[derive(Prop)]
pub struct RequiredInputProps<'a> {
	form: &'a Signal<RegistrationForm<File>>,
	field: FormField,
}

/// A labeled text input for one of the credential fields, with its inline "required" message
#[component]
pub fn RequiredInput<'a, G: Html>(ctx: Scope<'a>, props: RequiredInputProps<'a>) -> View<G> {
	let form = props.form;
	let field = props.field;

	let value_signal = create_memo(ctx, move || form.get().field(field).to_string());
	let empty_signal = create_memo(ctx, move || form.get().is_field_empty(field));
	// Empty fields get the alternate border
	let border_class_signal = create_memo(ctx, move || if *empty_signal.get() { "input_error" } else { "input_valid" });

	let input_handler = move |event: WebEvent| {
		let Some(input) = event.target().and_then(|target| target.dyn_into::<HtmlInputElement>().ok()) else {
			return;
		};
		form.modify().apply(FormEvent::FieldChanged(field, input.value()));
	};

	view! {
		ctx,
		div(class="form_control") {
			label(for=field.element_id()) {
				(field.label())
				span(class="required_marker") { " *" }
			}
			input(
				id=field.element_id(),
				type=field.input_type(),
				placeholder=field.placeholder(),
				class=*border_class_signal.get(),
				prop:value=(*value_signal.get()).clone(),
				on:input=input_handler
			)
			(
				if *empty_signal.get() {
					view! {
						ctx,
						span(class="input_error_message") { (field.required_message()) }
					}
				} else {
					view! { ctx, }
				}
			)
		}
	}
}
