//! Applicant Type Step - who is applying
//!
//! First step of the wizard. Picking a card only records the choice;
//! moving on is left to the navigation footer.

use leptos::prelude::*;
use must_admissions::core::apply::ApplicantType;

use crate::services::apply_state::use_apply_context;

#[component]
pub fn ApplicantTypeStep() -> impl IntoView {
    let ctx = use_apply_context();

    view! {
        <div class="space-y-8 max-w-3xl mx-auto">
            <div class="text-center">
                <h3 class="text-2xl font-bold text-slate-900 mb-2">"How are you applying?"</h3>
                <p class="text-slate-500">"Choose the option that describes you best"</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {ApplicantType::all().into_iter().map(|kind| {
                    let is_selected = move || ctx.applicant_type() == Some(kind);

                    view! {
                        <button
                            type="button"
                            class=move || format!(
                                "p-5 rounded-lg border text-left transition-all duration-200 {}",
                                if is_selected() {
                                    "bg-blue-50 border-blue-600 ring-1 ring-blue-600/50"
                                } else {
                                    "bg-white border-slate-200 hover:border-slate-300 hover:bg-slate-50"
                                }
                            )
                            on:click=move |_| ctx.select_applicant_type(kind)
                        >
                            <div class="font-medium text-slate-900">{kind.label()}</div>
                            <div class="text-xs text-slate-500 mt-1">{kind.description()}</div>
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
