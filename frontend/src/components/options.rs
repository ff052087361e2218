//! Generation options and the generate action.

use leptos::*;
use rand::Rng;
use web_sys::Event;

use crate::config::{MAX_RANDOM_SEED, MIN_TEAM_SIZE};
use crate::export::generation_message;
use crate::roster::{parse_seed, parse_team_size};
use crate::services::generate_teams;
use crate::types::{Categories, GenerateOptions, GenerateRequest, TwoCategoryStrategy};

#[component]
pub fn OptionsPanel(
    categories: ReadSignal<Categories>,
    options: ReadSignal<GenerateOptions>,
    set_options: WriteSignal<GenerateOptions>,
    set_teams: WriteSignal<Vec<Vec<String>>>,
    set_message: WriteSignal<Option<String>>,
) -> impl IntoView {
    let (seed, set_seed) = create_signal(None::<i64>);
    let (generating, set_generating) = create_signal(false);

    let on_generate = move |_| {
        let request = GenerateRequest {
            categories: categories.get_untracked(),
            options: options.get_untracked(),
            seed: seed.get_untracked(),
        };
        set_generating.set(true);

        spawn_local(async move {
            match generate_teams(&request).await {
                Ok(response) => {
                    log::info!("✅ Received {} teams", response.teams.len());
                    set_message.set(Some(generation_message(&response.meta)));
                    set_teams.set(response.teams);
                }
                Err(e) => {
                    log::error!("❌ Generation failed: {}", e);
                    set_message.set(Some(format!("Generation error: {}", e)));
                }
            }
            set_generating.set(false);
        });
    };

    let on_random_seed = move |_| {
        let value = rand::thread_rng().gen_range(1..=MAX_RANDOM_SEED);
        log::debug!("🎲 Random seed {}", value);
        set_seed.set(Some(value));
    };

    view! {
        <section class="card mb-6">
            <h4 class="card-title">"Generation options"</h4>
            <div class="row wrap">
                <label class="row">
                    <span>"Team size"</span>
                    <input
                        type="number"
                        class="input-narrow"
                        min=MIN_TEAM_SIZE.to_string()
                        prop:value=move || options.with(|o| o.team_size.to_string())
                        on:change=move |ev: Event| {
                            let size = parse_team_size(&event_target_value(&ev));
                            set_options.update(|o| o.team_size = size);
                        }
                    />
                </label>

                <label class="row">
                    <input
                        type="checkbox"
                        prop:checked=move || options.with(|o| o.allow_incomplete_teams)
                        on:change=move |ev: Event| {
                            let checked = event_target_checked(&ev);
                            set_options.update(|o| o.allow_incomplete_teams = checked);
                        }
                    />
                    <span>"Keep incomplete final teams"</span>
                </label>

                <label class="row">
                    <input
                        type="checkbox"
                        prop:checked=move || options.with(|o| o.allow_reuse)
                        on:change=move |ev: Event| {
                            let checked = event_target_checked(&ev);
                            set_options.update(|o| o.allow_reuse = checked);
                        }
                    />
                    <span>"Allow reusing participants"</span>
                </label>

                <label class="row">
                    <span>"Two-category strategy"</span>
                    <select on:change=move |ev: Event| {
                        if let Some(strategy) = TwoCategoryStrategy::from_value(&event_target_value(&ev)) {
                            set_options.update(|o| o.two_category_strategy = strategy);
                        }
                    }>
                        {TwoCategoryStrategy::ALL
                            .into_iter()
                            .map(|strategy| view! {
                                <option
                                    value=strategy.as_str()
                                    selected=move || options.with(|o| o.two_category_strategy == strategy)
                                >
                                    {strategy.description()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </label>

                <label class="row">
                    <span>"Seed (optional)"</span>
                    <input
                        type="number"
                        class="input-medium"
                        prop:value=move || seed.get().map(|s| s.to_string()).unwrap_or_default()
                        on:change=move |ev: Event| set_seed.set(parse_seed(&event_target_value(&ev)))
                    />
                    <button class="btn btn-small" title="Random seed" on:click=on_random_seed>"🎲"</button>
                </label>

                <div class="push-right">
                    <button class="btn btn-green" on:click=on_generate disabled=move || generating.get()>
                        {move || if generating.get() { "⏳ Generating..." } else { "Generate Teams" }}
                    </button>
                </div>
            </div>
        </section>
    }
}
