//! Generated teams with export, clipboard copy and reset.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::config::{COPIED_FLASH_MS, CSV_FILENAME};
use crate::export::{is_incomplete, team_label, teams_to_clipboard_text, teams_to_csv};
use crate::services::{copy_to_clipboard, download_text};
use crate::types::GenerateOptions;

#[component]
pub fn TeamsPanel(
    teams: ReadSignal<Vec<Vec<String>>>,
    set_teams: WriteSignal<Vec<Vec<String>>>,
    options: ReadSignal<GenerateOptions>,
    message: ReadSignal<Option<String>>,
    set_message: WriteSignal<Option<String>>,
) -> impl IntoView {
    let (copied, set_copied) = create_signal(false);
    let no_teams = move || teams.with(|t| t.is_empty());

    let on_export = move |_| {
        let result = teams
            .with_untracked(|t| teams_to_csv(t))
            .and_then(|csv| download_text(&csv, CSV_FILENAME, "text/csv"));
        if let Err(e) = result {
            log::error!("❌ CSV export failed: {}", e);
            set_message.set(Some(e.to_string()));
        }
    };

    let on_copy = move |_| {
        let text = teams.with_untracked(|t| teams_to_clipboard_text(t));
        spawn_local(async move {
            match copy_to_clipboard(&text).await {
                Ok(()) => {
                    set_copied.set(true);
                    TimeoutFuture::new(COPIED_FLASH_MS).await;
                    set_copied.set(false);
                }
                Err(e) => {
                    log::warn!("Could not copy teams: {}", e);
                    set_message.set(Some(e.to_string()));
                }
            }
        });
    };

    let on_reset = move |_| {
        log::info!("🔄 Reset teams");
        set_teams.set(Vec::new());
        set_message.set(None);
    };

    view! {
        <div>
            <Show when=move || message.with(Option::is_some) fallback=|| view! {}>
                <div class="status-message">{move || message.get().unwrap_or_default()}</div>
            </Show>

            <h4 class="card-title">"Generated teams"</h4>
            <Show
                when=move || !no_teams()
                fallback=|| view! { <div class="muted">"No teams yet."</div> }
            >
                <div class="grid grid-2">
                    {move || {
                        let team_size = options.with(|o| o.team_size);
                        teams
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, team)| {
                                let incomplete = is_incomplete(&team, team_size);
                                let len = team.len();
                                view! {
                                    <div class="team-card">
                                        <div class="team-title">{team_label(index)}</div>
                                        <ul class="team-members">
                                            {team.into_iter().map(|member| view! { <li>{member}</li> }).collect_view()}
                                        </ul>
                                        {incomplete.then(|| view! {
                                            <div class="badge-incomplete">
                                                {format!("Incomplete team ({}/{})", len, team_size)}
                                            </div>
                                        })}
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>

            <div class="row mt-4">
                <button class="btn btn-sky" on:click=on_export disabled=no_teams>"Export CSV"</button>
                <button class="btn btn-slate" on:click=on_copy disabled=no_teams>
                    {move || if copied.get() { "Copied!" } else { "Copy to clipboard" }}
                </button>
                <button class="btn btn-amber push-right" on:click=on_reset>"Reset"</button>
            </div>
        </div>
    }
}
