//! Degree Step - level of study
//!
//! Changing the degree drops any faculty and language chosen for the
//! previous one.

use leptos::prelude::*;

use crate::services::apply_state::use_apply_context;

#[component]
pub fn DegreeStep() -> impl IntoView {
    let ctx = use_apply_context();
    let degrees = ctx.degrees();

    view! {
        <div class="space-y-8 max-w-3xl mx-auto">
            <div class="text-center">
                <h3 class="text-2xl font-bold text-slate-900 mb-2">"Select a Degree"</h3>
                <p class="text-slate-500">"Which level of study are you applying for?"</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {degrees.into_iter().map(|degree| {
                    let degree_id = degree.id;
                    let is_selected = move || ctx.selected_degree_id() == Some(degree_id);
                    let faculty_count = degree.faculties.len();
                    let name = degree.name.clone();

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
                            on:click=move |_| {
                                // Re-clicking the selected card keeps faculty and language
                                if !is_selected() {
                                    ctx.select_degree(degree.clone());
                                }
                            }
                        >
                            <div class="font-medium text-slate-900">{name}</div>
                            <div class="text-xs text-slate-500 mt-1">
                                {format!("{} faculties", faculty_count)}
                            </div>
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
