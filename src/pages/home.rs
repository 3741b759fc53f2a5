//! Profile homepage: banner, identity row, and the ordered section blocks.

use leptos::prelude::*;

use crate::state::game::GameState;
use crate::util::format::format_count;

/// Profile home page rendered once a session has started.
///
/// Pure consumer of the game state: sections render in exactly the stored
/// `homepage_layout` order.
#[component]
pub fn HomePage() -> impl IntoView {
    let game = expect_context::<RwSignal<GameState>>();
    let profile = move || game.get().profile;

    view! {
        <div class="home-page">
            <img class="home-page__banner" src=move || profile().banner alt="Profile banner"/>
            <div class="home-page__identity">
                <img class="home-page__avatar" src=move || profile().avatar alt="Profile avatar"/>
                <div class="home-page__titles">
                    <h1 class="home-page__name">{move || profile().name}</h1>
                    <p class="home-page__stats">
                        {move || format_count(profile().subscribers)}
                        " subscribers"
                        <span class="home-page__stats-sep">"|"</span>
                        {move || format_count(profile().total_views)}
                        " total views"
                    </p>
                </div>
            </div>
            <div class="home-page__sections">
                {move || {
                    profile()
                        .homepage_layout
                        .into_iter()
                        .map(|section| {
                            view! {
                                <section class="home-section">
                                    <h2 class="home-section__title">{section.label()}</h2>
                                    <p class="home-section__empty">
                                        "Nothing here yet. Drop your first pun!"
                                    </p>
                                </section>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
