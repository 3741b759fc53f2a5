//! Modal for staging and saving edits to the Punster Profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only component that writes structured updates into the game state.
//! Edits accumulate in signal-held draft fields; Save turns them into one
//! `ProfilePatch` and issues a single merge-write, Cancel (or Escape, or a
//! backdrop click) discards them without touching the store.

use leptos::prelude::*;

use crate::state::draft::{MoveDirection, ProfileDraft, move_section, toggle_section};
use crate::state::game::{GameState, SectionId};
use crate::state::ui::UiState;

/// Profile customization dialog.
#[component]
pub fn CustomizeProfileModal() -> impl IntoView {
    let game = expect_context::<RwSignal<GameState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Stage the draft once, from the profile as it is when the dialog opens.
    let draft = ProfileDraft::from_profile(&game.get_untracked().profile);
    let name = RwSignal::new(draft.name);
    let bio = RwSignal::new(draft.bio);
    let avatar_query = RwSignal::new(draft.avatar_query);
    let banner_query = RwSignal::new(draft.banner_query);
    let sections = RwSignal::new(draft.sections);

    let close = move || ui.update(|state| state.open_dialog = None);

    let on_save = move |_| {
        let patch = ProfileDraft {
            name: name.get(),
            bio: bio.get(),
            avatar_query: avatar_query.get(),
            banner_query: banner_query.get(),
            sections: sections.get(),
        }
        .into_patch();
        log::info!("saving punster profile customization");
        game.update(|state| state.profile.apply(patch));
        close();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div
                class="dialog dialog--customize"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2 class="dialog__title">"Customize Punster Profile"</h2>
                <p class="dialog__subtitle">
                    "Personalize your Punster Profile's appearance and homepage layout."
                </p>

                <h3 class="dialog__section-heading">"Profile Details"</h3>
                <div class="dialog__field-row">
                    <label class="dialog__field-label" for="customize-name">"Profile Name"</label>
                    <input
                        id="customize-name"
                        class="dialog__input"
                        type="text"
                        placeholder="Your Punster Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <div class="dialog__field-row">
                    <label class="dialog__field-label" for="customize-bio">"Bio"</label>
                    <textarea
                        id="customize-bio"
                        class="dialog__textarea"
                        placeholder="Tell your fans about yourself..."
                        prop:value=move || bio.get()
                        on:input=move |ev| bio.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="dialog__field-row">
                    <label class="dialog__field-label" for="customize-avatar">"Avatar Query"</label>
                    <input
                        id="customize-avatar"
                        class="dialog__input"
                        type="text"
                        placeholder="e.g., 'cool rapper cartoon'"
                        prop:value=move || avatar_query.get()
                        on:input=move |ev| avatar_query.set(event_target_value(&ev))
                    />
                </div>
                <div class="dialog__field-row">
                    <label class="dialog__field-label" for="customize-banner">"Banner Query"</label>
                    <input
                        id="customize-banner"
                        class="dialog__input"
                        type="text"
                        placeholder="e.g., 'rap concert stage'"
                        prop:value=move || banner_query.get()
                        on:input=move |ev| banner_query.set(event_target_value(&ev))
                    />
                </div>

                <h3 class="dialog__section-heading">"Visible Sections"</h3>
                <div class="dialog__checks">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <label class="dialog__check-row">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || sections.get().contains(&section)
                                        on:change=move |ev| {
                                            let selected = event_target_checked(&ev);
                                            sections.update(|list| toggle_section(list, section, selected));
                                        }
                                    />
                                    <span>{section.label()}</span>
                                </label>
                            }
                        })
                        .collect_view()}
                </div>

                <Show when=move || !sections.get().is_empty()>
                    <h3 class="dialog__section-heading">"Order Sections"</h3>
                    <div class="dialog__order">
                        {move || {
                            let list = sections.get();
                            let len = list.len();
                            list.into_iter()
                                .enumerate()
                                .map(|(index, section)| {
                                    view! {
                                        <div class="dialog__order-row">
                                            <span class="dialog__order-label">{section.label()}</span>
                                            <button
                                                class="btn btn--ghost"
                                                title="Move up"
                                                disabled=index == 0
                                                on:click=move |_| {
                                                    sections.update(|list| {
                                                        move_section(list, index, MoveDirection::Up);
                                                    });
                                                }
                                            >
                                                "▲"
                                            </button>
                                            <button
                                                class="btn btn--ghost"
                                                title="Move down"
                                                disabled=index + 1 == len
                                                on:click=move |_| {
                                                    sections.update(|list| {
                                                        move_section(list, index, MoveDirection::Down);
                                                    });
                                                }
                                            >
                                                "▼"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| close()>"Cancel"</button>
                    <button class="btn btn--primary" on:click=on_save>"Save Changes"</button>
                </div>
            </div>
        </div>
    }
}
