//! Student Application Form

use leptos::ev;
use leptos::prelude::*;
use must_admissions::core::apply::{ApplicationForm, StudentApplication};
use must_admissions::core::validation::ValidationErrors;

use super::ProgramSummary;
use crate::components::form_fields::{
    field_error, optional_text, SubmitButton, TextAreaField, TextField,
};
use crate::services::config_service::use_admissions_config;
use crate::services::submission::simulate_submission;

#[component]
pub fn StudentForm(initial: StudentApplication, on_success: Callback<()>) -> impl IntoView {
    let delay_ms = use_admissions_config().submission.simulated_delay_ms;
    let context = StoredValue::new(initial.context.clone());

    let first_name = RwSignal::new(initial.first_name);
    let last_name = RwSignal::new(initial.last_name);
    let email = RwSignal::new(initial.email);
    let phone = RwSignal::new(initial.phone);
    let nationality = RwSignal::new(initial.nationality);
    let date_of_birth = RwSignal::new(initial.date_of_birth);
    let previous_education = RwSignal::new(initial.previous_education);
    let message = RwSignal::new(initial.message.unwrap_or_default());

    let errors: RwSignal<Option<ValidationErrors>> = RwSignal::new(None);
    let is_submitting = RwSignal::new(false);

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let form = ApplicationForm::Student(StudentApplication {
            context: context.get_value(),
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            nationality: nationality.get_untracked(),
            date_of_birth: date_of_birth.get_untracked(),
            previous_education: previous_education.get_untracked(),
            message: optional_text(message),
        });

        if let Err(e) = form.validate() {
            errors.set(Some(e));
            return;
        }
        errors.set(None);

        match form.payload() {
            Ok(payload) => {
                simulate_submission("student application", payload, delay_ms, is_submitting, on_success)
            }
            Err(e) => log::error!("Failed to serialize student application: {}", e),
        }
    };

    view! {
        <form class="space-y-6 max-w-2xl mx-auto" on:submit=handle_submit>
            <ProgramSummary context=initial.context />

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <TextField label="First Name" value=first_name error=field_error(errors, "firstName") />
                <TextField label="Last Name" value=last_name error=field_error(errors, "lastName") />
                <TextField label="Email" value=email error=field_error(errors, "email") input_type="email" />
                <TextField label="Phone" value=phone error=field_error(errors, "phone") input_type="tel" placeholder="+48 ..." />
                <TextField label="Nationality" value=nationality error=field_error(errors, "nationality") />
                <TextField label="Date of Birth" value=date_of_birth error=field_error(errors, "dateOfBirth") input_type="date" />
            </div>

            <TextField
                label="Previous Education"
                value=previous_education
                error=field_error(errors, "previousEducation")
                placeholder="e.g. High school diploma, 2024"
            />
            <TextAreaField label="Message" value=message error=field_error(errors, "message") />

            <div class="flex justify-end">
                <SubmitButton label="Submit Application" busy_label="Submitting..." is_submitting=is_submitting />
            </div>
        </form>
    }
}
