//! Editable name lists, one textarea per category.

use leptos::*;
use web_sys::Event;

use crate::roster::{names_to_text, parse_names};
use crate::types::{Categories, Category};

#[component]
pub fn CategoryEditors(
    categories: ReadSignal<Categories>,
    set_categories: WriteSignal<Categories>,
) -> impl IntoView {
    view! {
        <section class="grid grid-3 mb-6">
            {Category::ALL
                .into_iter()
                .map(|category| {
                    let text = move || categories.with(|c| names_to_text(c.get(category)));
                    let count = move || categories.with(|c| c.get(category).len());

                    // Normalized on blur, not per keystroke.
                    let on_change = move |ev: Event| {
                        let names = parse_names(&event_target_value(&ev));
                        set_categories.update(|c| c.set(category, names));
                    };

                    view! {
                        <div class="card">
                            <h3 class="card-title">"Category " {category.label()}</h3>
                            <textarea
                                class="names-input"
                                rows="8"
                                prop:value=text
                                on:change=on_change
                            ></textarea>
                            <div class="hint">"Count: " {count}</div>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
