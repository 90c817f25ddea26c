//! Apply Page Component
//!
//! Main container for the apply wizard. Restores the tab's saved session
//! on mount and lays out progress rail, current step and navigation.

use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::prelude::*;
use must_admissions::core::apply::ApplyStep;

use super::forms::TerminalForm;
use super::step_progress::StepProgress;
use super::steps::{ApplicantTypeStep, DegreeStep, FacultyStep};
use crate::services::apply_state::{provide_apply_context, use_apply_context};
use crate::services::config_service::use_admissions_config;

/// Navigation footer with back/next buttons
#[component]
fn WizardNavigation() -> impl IntoView {
    let ctx = use_apply_context();

    let can_retreat = Signal::derive(move || ctx.can_retreat());
    let can_advance = Signal::derive(move || ctx.can_advance());
    let is_form_step = Signal::derive(move || ctx.current_step() == ApplyStep::Form);

    let handle_back = move |_: ev::MouseEvent| ctx.retreat();
    let handle_next = move |_: ev::MouseEvent| ctx.advance();

    view! {
        <div class="flex items-center justify-between px-6 py-4 border-t border-slate-200 bg-slate-50">
            <div>
                {move || can_retreat.get().then(|| view! {
                    <button
                        type="button"
                        class="px-4 py-2 bg-white border border-slate-300 hover:bg-slate-100 text-slate-700 rounded-lg transition-colors"
                        on:click=handle_back
                    >
                        "Back"
                    </button>
                })}
            </div>

            // The form step submits through its own button
            <div>
                {move || (!is_form_step.get()).then(|| view! {
                    <button
                        type="button"
                        class="px-6 py-2 bg-blue-700 hover:bg-blue-600 text-white rounded-lg transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled=move || !can_advance.get()
                        on:click=handle_next
                    >
                        "Next"
                    </button>
                })}
            </div>
        </div>
    }
}

/// Error display component
#[component]
fn ErrorBanner(message: Signal<Option<String>>, on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="mx-6 mt-4 p-4 bg-red-50 border border-red-200 rounded-lg flex items-center justify-between">
                <span class="text-red-700 text-sm">
                    {move || message.get().unwrap_or_default()}
                </span>
                <button
                    type="button"
                    class="text-red-500 hover:text-red-700 transition-colors"
                    on:click=move |_| on_dismiss.run(())
                >
                    <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                    </svg>
                </button>
            </div>
        </Show>
    }
}

/// Confirmation shown after a submission resets the wizard
#[component]
fn SubmittedBanner() -> impl IntoView {
    let ctx = use_apply_context();

    view! {
        <Show when=move || ctx.submitted.get()>
            <div class="mx-6 mt-4 p-4 bg-green-50 border border-green-200 rounded-lg text-green-800 text-sm">
                "Thank you! Your application has been received. Our admissions team will contact you soon."
            </div>
        </Show>
    }
}

/// Step content renderer
#[component]
fn StepContent() -> impl IntoView {
    let ctx = use_apply_context();
    let step = Memo::new(move |_| ctx.current_step());

    move || match step.get() {
        ApplyStep::Type => view! { <ApplicantTypeStep /> }.into_any(),
        ApplyStep::Degree => view! { <DegreeStep /> }.into_any(),
        ApplyStep::Faculty => view! { <FacultyStep /> }.into_any(),
        ApplyStep::Form => view! { <TerminalForm /> }.into_any(),
    }
}

/// Main apply wizard page
#[component]
pub fn ApplyPage() -> impl IntoView {
    let config = use_admissions_config();
    let banner_ms = config.submission.success_banner_ms;
    let ttl_minutes = config.session.ttl_minutes;
    let ctx = provide_apply_context(config);

    // Hide the confirmation after a while
    Effect::new(move |_| {
        if ctx.submitted.get() {
            Timeout::new(banner_ms, move || ctx.submitted.set(false)).forget();
        }
    });

    let dismiss_error = Callback::new(move |_: ()| ctx.clear_error());

    view! {
        <section class="max-w-5xl mx-auto py-10 px-4">
            <div class="text-center mb-6">
                <h2 class="text-3xl font-bold text-slate-900">"Apply to MUST"</h2>
                <p class="text-slate-500 mt-2">
                    {format!("Your progress is kept in this tab for {} minutes.", ttl_minutes)}
                </p>
            </div>

            <div class="bg-white border border-slate-200 rounded-xl shadow-sm overflow-hidden">
                <div class="border-b border-slate-200">
                    <StepProgress />
                </div>

                <SubmittedBanner />
                <ErrorBanner
                    message=Signal::derive(move || ctx.error.get())
                    on_dismiss=dismiss_error
                />

                <div class="p-6">
                    <StepContent />
                </div>

                <WizardNavigation />
            </div>
        </section>
    }
}
