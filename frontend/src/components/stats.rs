use leptos::*;

use crate::types::{Categories, Category};

#[component]
pub fn QuickStats(categories: ReadSignal<Categories>, total: Memo<usize>) -> impl IntoView {
    view! {
        <aside class="card">
            <h5 class="card-title">"Quick stats"</h5>
            {Category::ALL
                .into_iter()
                .map(|category| view! {
                    <div class="stat">
                        "Category " {category.label()} ": "
                        {move || categories.with(|c| c.get(category).len())}
                    </div>
                })
                .collect_view()}
            <div class="stat mt-2">"Total participants: " {move || total.get()}</div>
        </aside>
    }
}
