//! Faculty Step - faculty and teaching language
//!
//! Lists the faculties of the selected degree, then the languages the
//! selected faculty teaches in. Both are needed to continue.

use leptos::prelude::*;

use crate::services::apply_state::use_apply_context;

#[component]
pub fn FacultyStep() -> impl IntoView {
    let ctx = use_apply_context();

    view! {
        <div class="space-y-8 max-w-3xl mx-auto">
            <div class="text-center">
                <h3 class="text-2xl font-bold text-slate-900 mb-2">"Choose a Faculty"</h3>
                <p class="text-slate-500">"Then pick the language you want to study in"</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                {move || ctx.faculty_options().into_iter().map(|faculty| {
                    let faculty_id = faculty.id;
                    let is_selected = move || ctx.selected_faculty_id() == Some(faculty_id);
                    let name = faculty.name.clone();
                    let languages = faculty
                        .language_options()
                        .iter()
                        .map(|l| l.code())
                        .collect::<Vec<_>>()
                        .join(" / ");

                    view! {
                        <button
                            type="button"
                            class=move || format!(
                                "p-4 rounded-lg border text-left transition-all duration-200 {}",
                                if is_selected() {
                                    "bg-blue-50 border-blue-600 ring-1 ring-blue-600/50"
                                } else {
                                    "bg-white border-slate-200 hover:border-slate-300 hover:bg-slate-50"
                                }
                            )
                            on:click=move |_| {
                                // Re-clicking the selected card keeps the language
                                if !is_selected() {
                                    ctx.select_faculty(faculty.clone());
                                }
                            }
                        >
                            <div class="font-medium text-slate-900">{name}</div>
                            <div class="text-xs text-slate-500 mt-1">{languages}</div>
                        </button>
                    }
                }).collect_view()}
            </div>

            <Show when=move || ctx.selected_faculty_id().is_some()>
                <div class="space-y-3">
                    <label class="block text-sm font-medium text-slate-700">
                        "Teaching Language"
                        <span class="text-red-500 ml-1">"*"</span>
                    </label>
                    <div class="flex flex-wrap gap-2">
                        {move || ctx.language_options().into_iter().map(|language| {
                            let is_selected = move || ctx.selected_language() == Some(language);
                            view! {
                                <button
                                    type="button"
                                    class=move || format!(
                                        "px-4 py-2 rounded-full border text-sm transition-colors {}",
                                        if is_selected() {
                                            "bg-blue-700 border-blue-700 text-white"
                                        } else {
                                            "bg-white border-slate-300 text-slate-700 hover:border-slate-400"
                                        }
                                    )
                                    on:click=move |_| ctx.select_language(language)
                                >
                                    {language.label()}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </Show>
        </div>
    }
}
