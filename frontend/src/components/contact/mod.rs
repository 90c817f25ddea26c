//! Contact page components.

pub mod contact_form;
pub mod newsletter_form;

pub use contact_form::ContactForm;
pub use newsletter_form::NewsletterForm;

use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="max-w-3xl mx-auto py-10 px-4 space-y-10">
            <div class="text-center">
                <h2 class="text-3xl font-bold text-slate-900">"Contact Admissions"</h2>
                <p class="text-slate-500 mt-2">"Questions about programs, fees or housing? Write to us."</p>
            </div>
            <ContactForm />
            <NewsletterForm />
        </section>
    }
}
