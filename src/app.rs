//! Root application component: shared-state contexts and the session gate.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::pages::home::HomePage;
use crate::pages::setup::SetupPage;
use crate::state::game::GameState;
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides the game-state and UI-state contexts, then gates on the session:
/// the setup page until a profile name is submitted, the full shell after.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let game = RwSignal::new(GameState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(game);
    provide_context(ui);

    view! {
        <Title text="Punsta: The Ultimate Rap Simulator"/>

        <Show when=move || game.get().started fallback=|| view! { <SetupPage/> }>
            <Shell/>
        </Show>
    }
}

/// Post-setup layout: header, collapsible sidebar, and the profile home page.
#[component]
fn Shell() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let main_class = move || {
        if ui.get().sidebar_hovered {
            "app-shell__main app-shell__main--pushed"
        } else {
            "app-shell__main"
        }
    };

    view! {
        <div
            class="app-shell"
            on:mouseenter=move |_| ui.update(|state| state.sidebar_hovered = true)
            on:mouseleave=move |_| ui.update(|state| state.sidebar_hovered = false)
        >
            <Header/>
            <Sidebar/>
            <main class=main_class>
                <HomePage/>
            </main>
        </div>
    }
}
