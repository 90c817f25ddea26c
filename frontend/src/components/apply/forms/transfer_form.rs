//! Transfer Application Form

use leptos::ev;
use leptos::prelude::*;
use must_admissions::core::apply::forms::{MAX_COMPLETED_SEMESTERS, MIN_COMPLETED_SEMESTERS};
use must_admissions::core::apply::{ApplicationForm, TransferApplication};
use must_admissions::core::validation::ValidationErrors;

use super::ProgramSummary;
use crate::components::form_fields::{
    field_error, optional_text, SubmitButton, TextAreaField, TextField,
};
use crate::services::config_service::use_admissions_config;
use crate::services::submission::simulate_submission;

#[component]
pub fn TransferForm(initial: TransferApplication, on_success: Callback<()>) -> impl IntoView {
    let delay_ms = use_admissions_config().submission.simulated_delay_ms;
    let context = StoredValue::new(initial.context.clone());

    let first_name = RwSignal::new(initial.first_name);
    let last_name = RwSignal::new(initial.last_name);
    let email = RwSignal::new(initial.email);
    let phone = RwSignal::new(initial.phone);
    let current_university = RwSignal::new(initial.current_university);
    let current_program = RwSignal::new(initial.current_program);
    let completed_semesters = RwSignal::new(initial.completed_semesters);
    let message = RwSignal::new(initial.message.unwrap_or_default());

    let errors: RwSignal<Option<ValidationErrors>> = RwSignal::new(None);
    let is_submitting = RwSignal::new(false);
    let semesters_error = field_error(errors, "completedSemesters");

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let form = ApplicationForm::Transfer(TransferApplication {
            context: context.get_value(),
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            current_university: current_university.get_untracked(),
            current_program: current_program.get_untracked(),
            completed_semesters: completed_semesters.get_untracked(),
            message: optional_text(message),
        });

        if let Err(e) = form.validate() {
            errors.set(Some(e));
            return;
        }
        errors.set(None);

        match form.payload() {
            Ok(payload) => {
                simulate_submission("transfer application", payload, delay_ms, is_submitting, on_success)
            }
            Err(e) => log::error!("Failed to serialize transfer application: {}", e),
        }
    };

    view! {
        <form class="space-y-6 max-w-2xl mx-auto" on:submit=handle_submit>
            <ProgramSummary context=initial.context />

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <TextField label="First Name" value=first_name error=field_error(errors, "firstName") />
                <TextField label="Last Name" value=last_name error=field_error(errors, "lastName") />
                <TextField label="Email" value=email error=field_error(errors, "email") input_type="email" />
                <TextField label="Phone" value=phone error=field_error(errors, "phone") input_type="tel" />
                <TextField label="Current University" value=current_university error=field_error(errors, "currentUniversity") />
                <TextField label="Current Program" value=current_program error=field_error(errors, "currentProgram") />
            </div>

            // Completed semesters
            <div class="space-y-1">
                <label class="block text-sm font-medium text-slate-700">
                    "Completed Semesters"
                    <span class="text-red-500 ml-1">"*"</span>
                </label>
                <select
                    class="w-full px-3 py-2 bg-white border border-slate-300 rounded-lg text-slate-900 focus:outline-none focus:border-blue-600"
                    on:change=move |ev| {
                        if let Ok(n) = event_target_value(&ev).parse::<u32>() {
                            completed_semesters.set(n);
                        }
                    }
                >
                    {(MIN_COMPLETED_SEMESTERS..=MAX_COMPLETED_SEMESTERS).map(|n| view! {
                        <option value=n.to_string() selected=move || completed_semesters.get() == n>
                            {n.to_string()}
                        </option>
                    }).collect_view()}
                </select>
                {move || semesters_error.get().map(|msg| view! {
                    <p class="text-xs text-red-600">{msg}</p>
                })}
            </div>

            <TextAreaField label="Message" value=message error=field_error(errors, "message") />

            <div class="flex justify-end">
                <SubmitButton label="Submit Application" busy_label="Submitting..." is_submitting=is_submitting />
            </div>
        </form>
    }
}
