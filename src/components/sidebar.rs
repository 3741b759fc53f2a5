//! Collapsible navigation rail.
//!
//! Pure display chrome: expands while the shell is hovered, never touches the
//! game state.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[derive(Clone, Copy)]
struct NavEntry {
    glyph: &'static str,
    label: &'static str,
}

const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { glyph: "🏠", label: "Home" },
    NavEntry { glyph: "🔥", label: "Trending" },
    NavEntry { glyph: "📼", label: "Subscriptions" },
    NavEntry { glyph: "📚", label: "Library" },
];

/// Navigation rail; labels are revealed while `sidebar_hovered` is set.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let class = move || {
        if ui.get().sidebar_hovered {
            "sidebar sidebar--expanded"
        } else {
            "sidebar"
        }
    };

    view! {
        <nav class=class>
            {NAV_ENTRIES
                .iter()
                .map(|entry| {
                    view! {
                        <div class="sidebar__entry">
                            <span class="sidebar__glyph">{entry.glyph}</span>
                            <Show when=move || ui.get().sidebar_hovered>
                                <span class="sidebar__label">{entry.label}</span>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
