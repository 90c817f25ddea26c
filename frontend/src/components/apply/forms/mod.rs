//! Terminal application forms, one per applicant type.

mod agency_form;
mod student_form;
mod transfer_form;

pub use agency_form::AgencyForm;
pub use student_form::StudentForm;
pub use transfer_form::TransferForm;

use leptos::prelude::*;
use must_admissions::core::apply::{ApplicationForm, FormContext};

use crate::services::apply_state::use_apply_context;

/// Read-only summary of the program picked in the earlier steps
#[component]
pub fn ProgramSummary(context: FormContext) -> impl IntoView {
    view! {
        <div class="p-4 bg-blue-50 border border-blue-200 rounded-lg text-sm">
            <div class="text-blue-900 font-medium">{context.faculty_name.clone()}</div>
            <div class="text-blue-700">
                {format!("{} - taught in {}", context.degree_name, context.teaching_language.label())}
            </div>
        </div>
    }
}

/// Form for the selected applicant type, pre-filled with the program context
#[component]
pub fn TerminalForm() -> impl IntoView {
    let ctx = use_apply_context();
    let form = Memo::new(move |_| ctx.terminal_form());
    let on_success = Callback::new(move |_: ()| ctx.complete_submission());

    move || match form.get() {
        Some(ApplicationForm::Student(initial)) => {
            view! { <StudentForm initial=initial on_success=on_success /> }.into_any()
        }
        Some(ApplicationForm::Agency(initial)) => {
            view! { <AgencyForm initial=initial on_success=on_success /> }.into_any()
        }
        Some(ApplicationForm::Transfer(initial)) => {
            view! { <TransferForm initial=initial on_success=on_success /> }.into_any()
        }
        None => view! {
            <p class="text-center text-slate-500">
                "Complete the previous steps to open the application form."
            </p>
        }
        .into_any(),
    }
}
