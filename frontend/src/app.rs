use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::apply::ApplyPage;
use crate::components::contact::ContactPage;
use crate::services::config_service::provide_admissions_config;

#[component]
pub fn App() -> impl IntoView {
    // Provide global services
    provide_admissions_config();

    view! {
        <Router>
            <main class="min-h-screen bg-slate-50 text-slate-900">
                <Routes fallback=|| view! { <div class="p-8">"404 - Page Not Found"</div> }>
                    <Route path=path!("/") view=ApplyPage />
                    <Route path=path!("/apply") view=ApplyPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
        </Router>
    }
}
