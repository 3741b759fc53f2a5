//! Confirmation dialog for the one-time ad campaign.

use leptos::prelude::*;

use crate::state::game::{AD_CAMPAIGN_SUBSCRIBERS, AD_CAMPAIGN_VIEWS, GameState};
use crate::state::ui::UiState;
use crate::util::format::format_count;

/// One-shot campaign confirm; unreachable again once the flag is set because
/// the header disables its menu entry.
#[component]
pub fn AdCampaignModal() -> impl IntoView {
    let game = expect_context::<RwSignal<GameState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let close = move || ui.update(|state| state.open_dialog = None);

    let on_launch = move |_| {
        game.update(|state| {
            if state.profile.run_ad_campaign() {
                log::info!("ad campaign launched");
            }
        });
        close();
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div
                class="dialog dialog--campaign"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        close();
                    }
                }
                tabindex="0"
            >
                <h2 class="dialog__title">"Run Ad Campaign"</h2>
                <p class="dialog__subtitle">
                    "Blast your profile across the platform. This can only be done once."
                </p>
                <p class="dialog__bio">
                    {format!(
                        "Expected boost: +{} subscribers, +{} views.",
                        format_count(AD_CAMPAIGN_SUBSCRIBERS),
                        format_count(AD_CAMPAIGN_VIEWS),
                    )}
                </p>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| close()>"Cancel"</button>
                    <button class="btn btn--primary" on:click=on_launch>"Launch Campaign"</button>
                </div>
            </div>
        </div>
    }
}
