use super::*;
use crate::state::game::GameState;

// =============================================================
// toggle_section
// =============================================================

#[test]
fn toggle_on_appends_to_the_end() {
    let mut sections = vec![SectionId::LatestUploads];
    toggle_section(&mut sections, SectionId::Playlists, true);
    assert_eq!(sections, vec![SectionId::LatestUploads, SectionId::Playlists]);
}

#[test]
fn toggle_on_never_duplicates() {
    let mut sections = vec![SectionId::LatestUploads];
    toggle_section(&mut sections, SectionId::LatestUploads, true);
    assert_eq!(sections, vec![SectionId::LatestUploads]);
}

#[test]
fn toggle_off_removes_and_preserves_order() {
    let mut sections = SectionId::default_layout();
    toggle_section(&mut sections, SectionId::PopularUploads, false);
    assert_eq!(sections, vec![SectionId::LatestUploads, SectionId::Playlists]);
}

#[test]
fn toggle_off_missing_section_is_a_no_op() {
    let mut sections = vec![SectionId::LatestUploads];
    toggle_section(&mut sections, SectionId::Playlists, false);
    assert_eq!(sections, vec![SectionId::LatestUploads]);
}

// =============================================================
// move_section
// =============================================================

#[test]
fn move_up_swaps_with_previous() {
    let mut sections = SectionId::default_layout();
    assert!(move_section(&mut sections, 1, MoveDirection::Up));
    assert_eq!(
        sections,
        vec![
            SectionId::PopularUploads,
            SectionId::LatestUploads,
            SectionId::Playlists,
        ]
    );
}

#[test]
fn move_down_swaps_with_next() {
    let mut sections = SectionId::default_layout();
    assert!(move_section(&mut sections, 1, MoveDirection::Down));
    assert_eq!(
        sections,
        vec![
            SectionId::LatestUploads,
            SectionId::Playlists,
            SectionId::PopularUploads,
        ]
    );
}

#[test]
fn move_past_either_end_is_ignored() {
    let mut sections = SectionId::default_layout();
    let before = sections.clone();
    assert!(!move_section(&mut sections, 0, MoveDirection::Up));
    assert!(!move_section(&mut sections, 2, MoveDirection::Down));
    assert_eq!(sections, before);
}

#[test]
fn move_out_of_range_is_ignored() {
    let mut sections = vec![SectionId::LatestUploads];
    assert!(!move_section(&mut sections, 5, MoveDirection::Up));
    assert!(!move_section(&mut sections, 5, MoveDirection::Down));
    assert_eq!(sections, vec![SectionId::LatestUploads]);
}

// =============================================================
// ProfileDraft
// =============================================================

#[test]
fn from_profile_copies_editable_fields() {
    let mut profile = PlayerProfile::new("FlowMaster Flex");
    profile.bio = "I rap on Tuesdays".to_owned();
    let draft = ProfileDraft::from_profile(&profile);
    assert_eq!(draft.name, "FlowMaster Flex");
    assert_eq!(draft.bio, "I rap on Tuesdays");
    assert_eq!(draft.sections, profile.homepage_layout);
}

#[test]
fn from_profile_decodes_media_queries() {
    let mut profile = PlayerProfile::new("Flex");
    profile.avatar = media::avatar_ref("cool rapper cartoon");
    profile.banner = media::banner_ref("");
    let draft = ProfileDraft::from_profile(&profile);
    assert_eq!(draft.avatar_query, "cool rapper cartoon");
    assert_eq!(draft.banner_query, "");
}

#[test]
fn into_patch_builds_default_refs_for_empty_queries() {
    let profile = PlayerProfile::new("Flex");
    let patch = ProfileDraft::from_profile(&profile).into_patch();
    assert_eq!(patch.avatar, "/placeholder.svg?height=100&width=100");
    assert_eq!(patch.banner, "/placeholder.svg?height=200&width=1200");
}

#[test]
fn into_patch_encodes_non_empty_queries() {
    let profile = PlayerProfile::new("Flex");
    let mut draft = ProfileDraft::from_profile(&profile);
    draft.avatar_query = "rap concert stage".to_owned();
    let patch = draft.into_patch();
    assert_eq!(
        patch.avatar,
        "/placeholder.svg?height=100&width=100&query=rap%20concert%20stage"
    );
}

// =============================================================
// Full customization flow
// =============================================================

#[test]
fn save_applies_selected_subset_in_staged_order() {
    let mut state = GameState::default();
    state.start("FlowMaster Flex");

    let mut draft = ProfileDraft::from_profile(&state.profile);
    toggle_section(&mut draft.sections, SectionId::Playlists, false);
    move_section(&mut draft.sections, 1, MoveDirection::Up);

    state.profile.apply(draft.into_patch());
    assert_eq!(
        state.profile.homepage_layout,
        vec![SectionId::PopularUploads, SectionId::LatestUploads]
    );
}

#[test]
fn toggling_off_playlists_preserves_remaining_order() {
    let mut state = GameState::default();
    state.start("FlowMaster Flex");
    assert_eq!(state.profile.subscribers, 0);

    let mut draft = ProfileDraft::from_profile(&state.profile);
    draft.bio = "I rap on Tuesdays".to_owned();
    toggle_section(&mut draft.sections, SectionId::Playlists, false);
    state.profile.apply(draft.into_patch());

    assert_eq!(state.profile.bio, "I rap on Tuesdays");
    assert!(!state.profile.homepage_layout.contains(&SectionId::Playlists));
    assert_eq!(
        state.profile.homepage_layout,
        vec![SectionId::LatestUploads, SectionId::PopularUploads]
    );
}

#[test]
fn dropping_a_draft_leaves_the_profile_unchanged() {
    let mut state = GameState::default();
    state.start("FlowMaster Flex");
    let before = state.profile.clone();

    let mut draft = ProfileDraft::from_profile(&state.profile);
    draft.name = "Someone Else".to_owned();
    draft.sections.clear();
    drop(draft);

    assert_eq!(state.profile, before);
}

#[test]
fn draft_round_trips_unchanged_profile() {
    let mut state = GameState::default();
    state.start("FlowMaster Flex");
    let before = state.profile.clone();

    let draft = ProfileDraft::from_profile(&state.profile);
    state.profile.apply(draft.into_patch());

    assert_eq!(state.profile, before);
}
