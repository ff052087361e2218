//! Page header component

use leptos::*;
use leptos_meta::Title;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <Title text="Inter-Hostel Team Builder"/>
        <header class="page-header">
            <h1>"Inter-Hostel Team Builder"</h1>
            <p class="subtitle">
                "Upload PDFs, preview participants, then generate teams."
            </p>
        </header>
    }
}
