//! Agency Application Form
//!
//! Filled in by a recruitment agency on behalf of one student.

use leptos::ev;
use leptos::prelude::*;
use must_admissions::core::apply::{AgencyApplication, ApplicationForm};
use must_admissions::core::validation::ValidationErrors;

use super::ProgramSummary;
use crate::components::form_fields::{
    field_error, optional_text, SubmitButton, TextAreaField, TextField,
};
use crate::services::config_service::use_admissions_config;
use crate::services::submission::simulate_submission;

#[component]
pub fn AgencyForm(initial: AgencyApplication, on_success: Callback<()>) -> impl IntoView {
    let delay_ms = use_admissions_config().submission.simulated_delay_ms;
    let context = StoredValue::new(initial.context.clone());

    let agency_name = RwSignal::new(initial.agency_name);
    let contact_person = RwSignal::new(initial.contact_person);
    let email = RwSignal::new(initial.email);
    let phone = RwSignal::new(initial.phone);
    let country = RwSignal::new(initial.country);
    let student_name = RwSignal::new(initial.student_name);
    let student_email = RwSignal::new(initial.student_email);
    let message = RwSignal::new(initial.message.unwrap_or_default());

    let errors: RwSignal<Option<ValidationErrors>> = RwSignal::new(None);
    let is_submitting = RwSignal::new(false);

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let form = ApplicationForm::Agency(AgencyApplication {
            context: context.get_value(),
            agency_name: agency_name.get_untracked(),
            contact_person: contact_person.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            country: country.get_untracked(),
            student_name: student_name.get_untracked(),
            student_email: student_email.get_untracked(),
            message: optional_text(message),
        });

        if let Err(e) = form.validate() {
            errors.set(Some(e));
            return;
        }
        errors.set(None);

        match form.payload() {
            Ok(payload) => {
                simulate_submission("agency application", payload, delay_ms, is_submitting, on_success)
            }
            Err(e) => log::error!("Failed to serialize agency application: {}", e),
        }
    };

    view! {
        <form class="space-y-6 max-w-2xl mx-auto" on:submit=handle_submit>
            <ProgramSummary context=initial.context />

            <h4 class="text-sm font-semibold text-slate-500 uppercase tracking-wider">"Agency"</h4>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <TextField label="Agency Name" value=agency_name error=field_error(errors, "agencyName") />
                <TextField label="Contact Person" value=contact_person error=field_error(errors, "contactPerson") />
                <TextField label="Email" value=email error=field_error(errors, "email") input_type="email" />
                <TextField label="Phone" value=phone error=field_error(errors, "phone") input_type="tel" />
                <TextField label="Country" value=country error=field_error(errors, "country") />
            </div>

            <h4 class="text-sm font-semibold text-slate-500 uppercase tracking-wider">"Student"</h4>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <TextField label="Student Full Name" value=student_name error=field_error(errors, "studentName") />
                <TextField label="Student Email" value=student_email error=field_error(errors, "studentEmail") input_type="email" />
            </div>

            <TextAreaField label="Message" value=message error=field_error(errors, "message") />

            <div class="flex justify-end">
                <SubmitButton label="Submit Application" busy_label="Submitting..." is_submitting=is_submitting />
            </div>
        </form>
    }
}
