//! Account-setup screen shown before a game session starts.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only way into the game. Submitting a non-empty name performs the
//! one-way session transition; once started this page is unmounted and the
//! transition becomes unreachable.

#[cfg(test)]
#[path = "setup_test.rs"]
mod setup_test;

use leptos::prelude::*;

use crate::state::game::GameState;

/// Trim the entered profile name, rejecting empty or whitespace-only input.
fn validate_profile_name(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Name-entry card that starts the session.
#[component]
pub fn SetupPage() -> impl IntoView {
    let game = expect_context::<RwSignal<GameState>>();
    let name = RwSignal::new(String::new());

    let start = move || {
        if let Some(profile_name) = validate_profile_name(&name.get()) {
            log::info!("starting session for {profile_name}");
            game.update(|state| {
                state.start(&profile_name);
            });
        }
    };

    view! {
        <div class="setup-page">
            <div class="setup-card">
                <h1 class="setup-card__title">"Punsta: The Ultimate Rap Simulator"</h1>
                <p class="setup-card__subtitle">
                    "Become the next rap sensation! Create your Punster Profile and build your empire."
                </p>
                <label class="setup-card__label" for="profile-name">
                    "Your Punster Profile Name"
                </label>
                <input
                    id="profile-name"
                    class="setup-input"
                    type="text"
                    placeholder="e.g., FlowMaster Flex"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            start();
                        }
                    }
                />
                <button
                    class="btn btn--primary setup-card__start"
                    disabled=move || validate_profile_name(&name.get()).is_none()
                    on:click=move |_| start()
                >
                    "Start Your Journey"
                </button>
            </div>
        </div>
    }
}
