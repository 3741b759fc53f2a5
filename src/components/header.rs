//! Fixed top bar: wordmark, search chrome, and the profile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header is the launch point for every profile dialog. It reads the
//! profile for display only; all mutations happen inside the dialogs it opens.

use leptos::prelude::*;

use crate::components::about_profile_modal::AboutProfileModal;
use crate::components::ad_campaign_modal::AdCampaignModal;
use crate::components::customize_profile_modal::CustomizeProfileModal;
use crate::state::game::GameState;
use crate::state::ui::{DialogKind, UiState};

/// Fixed header with the profile dropdown and dialog mounts.
#[component]
pub fn Header() -> impl IntoView {
    let game = expect_context::<RwSignal<GameState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let menu_open = RwSignal::new(false);

    let profile_name = move || game.get().profile.name;
    let profile_avatar = move || game.get().profile.avatar;
    let has_advertised = move || game.get().profile.has_advertised;

    let open_dialog = move |kind: DialogKind| {
        menu_open.set(false);
        ui.update(|state| state.open_dialog = Some(kind));
    };

    view! {
        <header class="header">
            <div class="header__brand">
                <span class="header__logo">"🎤"</span>
                <span class="header__wordmark">"Punsta"</span>
            </div>

            <div class="header__search">
                <input class="header__search-input" type="search" placeholder="Search"/>
                <button class="btn header__search-button" title="Search">"Search"</button>
            </div>

            <div class="header__actions">
                <button class="btn header__bell" title="Notifications">"🔔"</button>

                <div class="header__menu">
                    <button
                        class="header__avatar-button"
                        title=profile_name
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        <img class="header__avatar" src=profile_avatar alt="Profile avatar"/>
                    </button>

                    <Show when=move || menu_open.get()>
                        <div class="header__dropdown">
                            <div class="header__dropdown-label">{profile_name}</div>
                            <div class="header__dropdown-divider"></div>
                            <button
                                class="header__dropdown-item"
                                on:click=move |_| open_dialog(DialogKind::Customize)
                            >
                                "Customize Punster Profile"
                            </button>
                            <button
                                class="header__dropdown-item"
                                on:click=move |_| open_dialog(DialogKind::About)
                            >
                                "About This Profile"
                            </button>
                            <button
                                class="header__dropdown-item"
                                disabled=has_advertised
                                on:click=move |_| open_dialog(DialogKind::AdCampaign)
                            >
                                "Run Ad Campaign (Once)"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </header>

        <Show when=move || ui.get().open_dialog == Some(DialogKind::Customize)>
            <CustomizeProfileModal/>
        </Show>
        <Show when=move || ui.get().open_dialog == Some(DialogKind::About)>
            <AboutProfileModal/>
        </Show>
        <Show when=move || ui.get().open_dialog == Some(DialogKind::AdCampaign)>
            <AdCampaignModal/>
        </Show>
    }
}
