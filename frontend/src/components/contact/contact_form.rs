//! Contact Form
//!
//! Validates, hands the message to the stub submission, then clears the
//! fields and shows a confirmation for a few seconds.

use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::prelude::*;
use must_admissions::core::contact::ContactMessage;
use must_admissions::core::validation::ValidationErrors;

use crate::components::form_fields::{
    field_error, optional_text, SubmitButton, TextAreaField, TextField,
};
use crate::services::config_service::use_admissions_config;
use crate::services::submission::simulate_submission;

#[component]
pub fn ContactForm() -> impl IntoView {
    let config = use_admissions_config();
    let delay_ms = config.submission.simulated_delay_ms;
    let banner_ms = config.submission.success_banner_ms;

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let errors: RwSignal<Option<ValidationErrors>> = RwSignal::new(None);
    let is_submitting = RwSignal::new(false);
    let show_success = RwSignal::new(false);

    let on_success = Callback::new(move |_: ()| {
        for field in [name, email, phone, subject, message] {
            field.set(String::new());
        }
        show_success.set(true);
        Timeout::new(banner_ms, move || show_success.set(false)).forget();
    });

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let contact = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: optional_text(phone),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };

        if let Err(e) = contact.validate() {
            errors.set(Some(e));
            return;
        }
        errors.set(None);

        match serde_json::to_value(&contact) {
            Ok(payload) => {
                simulate_submission("contact message", payload, delay_ms, is_submitting, on_success)
            }
            Err(e) => log::error!("Failed to serialize contact message: {}", e),
        }
    };

    view! {
        <form class="space-y-4 bg-white border border-slate-200 rounded-xl p-6" on:submit=handle_submit>
            <Show when=move || show_success.get()>
                <div class="p-4 bg-green-50 border border-green-200 rounded-lg text-green-800 text-sm">
                    "Thank you for your message! We'll get back to you soon."
                </div>
            </Show>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <TextField label="Name" value=name error=field_error(errors, "name") />
                <TextField label="Email" value=email error=field_error(errors, "email") input_type="email" />
                <TextField label="Phone" value=phone error=field_error(errors, "phone") input_type="tel" required=false />
                <TextField label="Subject" value=subject error=field_error(errors, "subject") />
            </div>
            <TextAreaField label="Message" value=message error=field_error(errors, "message") rows=6 required=true />

            <div class="flex justify-end">
                <SubmitButton label="Send Message" busy_label="Sending..." is_submitting=is_submitting />
            </div>
        </form>
    }
}
