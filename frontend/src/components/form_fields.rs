//! Form Field Components
//!
//! Labelled inputs with an inline error line, shared by the application
//! and contact forms. Errors come from the core `ValidationErrors` by field
//! name.

use leptos::prelude::*;
use must_admissions::core::validation::ValidationErrors;

/// Message for `field` in the latest validation run, if it failed
pub fn field_error(
    errors: RwSignal<Option<ValidationErrors>>,
    field: &'static str,
) -> Signal<Option<String>> {
    Signal::derive(move || {
        errors.with(|e| {
            e.as_ref()
                .and_then(|e| e.message_for(field))
                .map(str::to_string)
        })
    })
}

/// Single-line input
#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    error: Signal<Option<String>>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = true)] required: bool,
) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <label class="block text-sm font-medium text-slate-700">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-1">"*"</span> })}
            </label>
            <input
                type=input_type
                class=move || format!(
                    "w-full px-3 py-2 bg-white border rounded-lg text-slate-900 placeholder-slate-400 focus:outline-none focus:ring-1 {}",
                    if error.get().is_some() {
                        "border-red-400 focus:ring-red-400"
                    } else {
                        "border-slate-300 focus:border-blue-600 focus:ring-blue-600"
                    }
                )
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! {
                <p class="text-xs text-red-600">{msg}</p>
            })}
        </div>
    }
}

/// Multi-line input
#[component]
pub fn TextAreaField(
    label: &'static str,
    value: RwSignal<String>,
    error: Signal<Option<String>>,
    #[prop(default = 4)] rows: u32,
    #[prop(default = false)] required: bool,
) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <label class="block text-sm font-medium text-slate-700">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-1">"*"</span> })}
            </label>
            <textarea
                class="w-full px-3 py-2 bg-white border border-slate-300 rounded-lg text-slate-900 focus:outline-none focus:border-blue-600 focus:ring-1 focus:ring-blue-600 resize-none"
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! {
                <p class="text-xs text-red-600">{msg}</p>
            })}
        </div>
    }
}

/// Submit button with an in-flight label
#[component]
pub fn SubmitButton(
    label: &'static str,
    busy_label: &'static str,
    is_submitting: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="px-6 py-2 bg-blue-700 hover:bg-blue-600 text-white rounded-lg transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
            disabled=move || is_submitting.get()
        >
            {move || if is_submitting.get() { busy_label } else { label }}
        </button>
    }
}

/// Trimmed value, or `None` when blank
pub fn optional_text(value: RwSignal<String>) -> Option<String> {
    let text = value.get_untracked();
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
