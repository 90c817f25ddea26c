//! Newsletter signup

use leptos::ev;
use leptos::prelude::*;
use must_admissions::core::contact::NewsletterSignup;

use crate::services::config_service::use_admissions_config;
use crate::services::submission::simulate_submission;

#[component]
pub fn NewsletterForm() -> impl IntoView {
    let delay_ms = use_admissions_config().submission.simulated_delay_ms;

    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let is_submitting = RwSignal::new(false);
    let subscribed = RwSignal::new(false);

    let on_success = Callback::new(move |_: ()| {
        email.set(String::new());
        subscribed.set(true);
    });

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let signup = NewsletterSignup {
            email: email.get_untracked(),
        };
        if let Err(e) = signup.validate() {
            error.set(e.message_for("email").map(str::to_string));
            return;
        }
        error.set(None);

        match serde_json::to_value(&signup) {
            Ok(payload) => {
                simulate_submission("newsletter signup", payload, delay_ms, is_submitting, on_success)
            }
            Err(e) => log::error!("Failed to serialize newsletter signup: {}", e),
        }
    };

    view! {
        <div class="bg-blue-50 border border-blue-200 rounded-xl p-6">
            <h3 class="text-lg font-semibold text-slate-900">"Stay Updated"</h3>
            <p class="text-sm text-slate-500 mb-4">"Admission deadlines and open days, straight to your inbox."</p>

            {move || if subscribed.get() {
                view! {
                    <p class="text-green-700 text-sm">"You're subscribed. Thank you!"</p>
                }.into_any()
            } else {
                view! {
                    <form class="flex flex-col sm:flex-row gap-2" on:submit=handle_submit>
                        <input
                            type="email"
                            class="flex-1 px-3 py-2 bg-white border border-slate-300 rounded-lg focus:outline-none focus:border-blue-600"
                            placeholder="your@email.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <button
                            type="submit"
                            class="px-5 py-2 bg-blue-700 hover:bg-blue-600 text-white rounded-lg disabled:opacity-50"
                            disabled=move || is_submitting.get()
                        >
                            {move || if is_submitting.get() { "Subscribing..." } else { "Subscribe" }}
                        </button>
                    </form>
                }.into_any()
            }}
            {move || error.get().map(|msg| view! {
                <p class="text-xs text-red-600 mt-2">{msg}</p>
            })}
        </div>
    }
}
