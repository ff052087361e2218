//! PDF roster selection and parse actions.
//!
//! Files can be sent either one per category or as a single PDF that the
//! backend splits into the three categories.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::config::PDF_ACCEPT;
use crate::services::{parse_multiple, parse_single};
use crate::types::{AppError, Categories, Category, RosterFiles};

/// First file of a `<input type="file">` change event, if any.
fn selected_file(ev: &Event) -> Option<File> {
    let input: HtmlInputElement = event_target(ev);
    input.files().and_then(|files| files.get(0))
}

#[component]
pub fn FileInputs(set_files: WriteSignal<RosterFiles>) -> impl IntoView {
    view! {
        <section class="grid grid-3 mb-6">
            {Category::ALL
                .into_iter()
                .map(|category| {
                    let on_change = move |ev: Event| {
                        let file = selected_file(&ev);
                        log::debug!(
                            "📄 Category {} file: {:?}",
                            category.label(),
                            file.as_ref().map(|f| f.name())
                        );
                        set_files.update(|files| files.set(category, file));
                    };

                    view! {
                        <div class="card">
                            <label class="field-label">"Category " {category.label()} " PDF"</label>
                            <input type="file" accept=PDF_ACCEPT class="w-full" on:change=on_change/>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[component]
pub fn ParsePanel(
    files: ReadSignal<RosterFiles>,
    set_files: WriteSignal<RosterFiles>,
    set_categories: WriteSignal<Categories>,
    parsing: ReadSignal<bool>,
    set_parsing: WriteSignal<bool>,
    set_message: WriteSignal<Option<String>>,
    total: Memo<usize>,
) -> impl IntoView {
    let on_parse_separate = move |_| {
        let snapshot = files.get_untracked();
        set_parsing.set(true);
        set_message.set(None);

        spawn_local(async move {
            match parse_multiple(&snapshot).await {
                Ok(parsed) => {
                    log::info!("✅ Parsed {} participants from separate PDFs", parsed.total());
                    set_categories.set(parsed);
                    set_message.set(Some("Parsing complete. Review lists.".to_string()));
                }
                Err(e) => {
                    log::error!("❌ Parse failed: {}", e);
                    set_message.set(Some(format!("Parse error: {}", e)));
                }
            }
            set_parsing.set(false);
        });
    };

    let on_parse_single = move |_| {
        let Some(file) = files.with_untracked(|f| f.single.clone()) else {
            set_message.set(Some(AppError::MissingFile("a single PDF file").to_string()));
            return;
        };
        set_parsing.set(true);
        set_message.set(None);

        spawn_local(async move {
            match parse_single(&file).await {
                Ok(parsed) => {
                    log::info!("✅ Parsed {} participants from single PDF", parsed.total());
                    set_categories.set(parsed);
                    set_message.set(Some("Parsed single PDF into 3 categories.".to_string()));
                }
                Err(e) => {
                    log::error!("❌ Parse failed: {}", e);
                    set_message.set(Some(format!("Parse error: {}", e)));
                }
            }
            set_parsing.set(false);
        });
    };

    let on_single_change = move |ev: Event| {
        let file = selected_file(&ev);
        set_files.update(|files| files.single = file);
    };

    view! {
        <section class="card mb-6">
            <div class="row mb-3">
                <button
                    class="btn btn-dark"
                    on:click=on_parse_separate
                    disabled=move || !files.with(|f| f.can_parse_separate(parsing.get()))
                >
                    "Parse Separate PDFs"
                </button>
                <div class="muted">"or"</div>
                <input type="file" accept=PDF_ACCEPT on:change=on_single_change/>
                <button
                    class="btn btn-dark"
                    on:click=on_parse_single
                    disabled=move || !files.with(|f| f.can_parse_single(parsing.get()))
                >
                    {move || if parsing.get() { "⏳ Parsing..." } else { "Parse Single PDF (split into 3)" }}
                </button>
                <div class="push-right muted">"Total parsed: " <strong>{move || total.get()}</strong></div>
            </div>
            <div class="hint">"Tip: Use scanned PDFs? The backend runs OCR fallback automatically."</div>
        </section>
    }
}
