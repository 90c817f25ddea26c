//! Step Progress Rail Component
//!
//! Shows the four apply steps with current position and completion.
//! Any step the wizard allows direct navigation to is clickable.

use leptos::prelude::*;
use must_admissions::core::apply::ApplyStep;

use crate::services::apply_state::use_apply_context;

/// Checkmark icon SVG
fn check_icon() -> impl IntoView {
    view! {
        <svg
            class="w-4 h-4"
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="3"
                d="M5 13l4 4L19 7"
            />
        </svg>
    }
}

/// Individual step indicator
#[component]
fn StepIndicator(
    step: ApplyStep,
    is_current: Signal<bool>,
    is_completed: Signal<bool>,
    is_clickable: Signal<bool>,
    on_click: Callback<ApplyStep>,
) -> impl IntoView {
    let circle_class = Signal::derive(move || {
        if is_current.get() {
            "bg-blue-700 text-white ring-2 ring-blue-300 ring-offset-2"
        } else if is_completed.get() {
            "bg-blue-100 text-blue-700 hover:bg-blue-200"
        } else {
            "bg-slate-200 text-slate-500"
        }
    });

    let label_class = Signal::derive(move || {
        if is_current.get() {
            "text-slate-900 font-medium"
        } else if is_completed.get() {
            "text-slate-600"
        } else {
            "text-slate-400"
        }
    });

    let handle_click = move |_| {
        if is_clickable.get() {
            on_click.run(step);
        }
    };

    view! {
        <button
            type="button"
            class=move || format!(
                "flex flex-col items-center gap-2 transition-all duration-200 {}",
                if is_clickable.get() { "cursor-pointer" } else { "cursor-default" }
            )
            disabled=move || !is_clickable.get()
            on:click=handle_click
        >
            <div class=move || format!(
                "w-10 h-10 rounded-full flex items-center justify-center text-sm font-medium transition-all duration-200 {}",
                circle_class.get()
            )>
                {move || {
                    if is_completed.get() && !is_current.get() {
                        check_icon().into_any()
                    } else {
                        view! { <span>{step.index() + 1}</span> }.into_any()
                    }
                }}
            </div>
            <div class="flex flex-col items-center">
                <span class=move || format!("text-xs transition-colors {}", label_class.get())>
                    {step.label()}
                </span>
                {move || is_current.get().then(|| view! {
                    <span class="text-[10px] text-slate-500 mt-0.5">
                        {step.description()}
                    </span>
                })}
            </div>
        </button>
    }
}

/// Connector line between steps
#[component]
fn StepConnector(is_completed: Signal<bool>) -> impl IntoView {
    view! {
        <div class=move || format!(
            "flex-1 h-0.5 mx-2 mt-5 transition-colors duration-200 {}",
            if is_completed.get() { "bg-blue-600" } else { "bg-slate-300" }
        ) />
    }
}

/// Step progress rail showing all apply steps
#[component]
pub fn StepProgress() -> impl IntoView {
    let ctx = use_apply_context();
    let steps = ApplyStep::all();
    let on_click = Callback::new(move |step: ApplyStep| ctx.go_to(step));

    view! {
        <div class="w-full px-4 py-6">
            // Horizontal layout for wider screens
            <div class="hidden md:flex items-start justify-center gap-1">
                {steps.iter().enumerate().map(|(i, step)| {
                    let step = *step;
                    let is_current = Signal::derive(move || ctx.current_step() == step);
                    let is_completed = Signal::derive(move || ctx.is_step_completed(step));
                    let is_clickable = Signal::derive(move || {
                        !is_current.get() && ctx.is_step_accessible(step)
                    });

                    view! {
                        <>
                            {(i > 0).then(|| {
                                let prev_step = steps[i - 1];
                                let connector_completed = Signal::derive(move || ctx.is_step_completed(prev_step));
                                view! { <StepConnector is_completed=connector_completed /> }
                            })}
                            <StepIndicator
                                step=step
                                is_current=is_current
                                is_completed=is_completed
                                is_clickable=is_clickable
                                on_click=on_click
                            />
                        </>
                    }
                }).collect_view()}
            </div>

            // Compact layout for mobile - just show current step info
            <div class="md:hidden flex flex-col items-center gap-2">
                <span class="text-sm text-slate-500">
                    {move || format!(
                        "Step {} of {}",
                        ctx.current_step().index() + 1,
                        ApplyStep::all().len()
                    )}
                </span>
                <div class="text-center">
                    <h3 class="text-lg font-semibold text-slate-900">
                        {move || ctx.current_step().label()}
                    </h3>
                    <p class="text-sm text-slate-500">
                        {move || ctx.current_step().description()}
                    </p>
                </div>
                <div class="w-full max-w-xs bg-slate-200 rounded-full h-2 mt-2">
                    <div
                        class="bg-blue-700 h-2 rounded-full transition-all duration-300"
                        style=move || format!("width: {}%", ctx.progress_percent())
                    />
                </div>
            </div>
        </div>
    }
}
