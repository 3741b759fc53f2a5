//! Read-only modal with profile details and formatted stats.

use leptos::prelude::*;

use crate::state::game::GameState;
use crate::state::ui::UiState;
use crate::util::format::format_count;

/// About dialog: bio plus the aggregate counters.
#[component]
pub fn AboutProfileModal() -> impl IntoView {
    let game = expect_context::<RwSignal<GameState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let close = move || ui.update(|state| state.open_dialog = None);

    let bio = move || {
        let bio = game.get().profile.bio;
        if bio.is_empty() {
            "This Punster hasn't written a bio yet.".to_owned()
        } else {
            bio
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div
                class="dialog dialog--about"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        close();
                    }
                }
                tabindex="0"
            >
                <h2 class="dialog__title">{move || format!("About {}", game.get().profile.name)}</h2>
                <p class="dialog__subtitle">"Learn more about this Punster Profile."</p>

                <p class="dialog__bio">{bio}</p>

                <div class="dialog__stat-row">
                    <span class="dialog__stat-label">"Total views"</span>
                    <span>{move || format_count(game.get().profile.total_views)}</span>
                </div>
                <div class="dialog__stat-row">
                    <span class="dialog__stat-label">"Subscribers"</span>
                    <span>{move || format_count(game.get().profile.subscribers)}</span>
                </div>
                <div class="dialog__stat-row">
                    <span class="dialog__stat-label">"Location"</span>
                    <span>"United States"</span>
                </div>

                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| close()>"Close"</button>
                </div>
            </div>
        </div>
    }
}
