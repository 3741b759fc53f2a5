//! Staged profile edits for the customization flow.
//!
//! DESIGN
//! ======
//! A `ProfileDraft` is a local copy of the editable profile fields. The modal
//! mutates the draft freely; nothing touches the stored profile until the
//! draft is turned into a `ProfilePatch` and applied through the store in one
//! write. Dropping the draft is cancellation and has no effect.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use crate::state::game::{PlayerProfile, ProfilePatch, SectionId};
use crate::util::media;

/// Direction for a single-step section move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Toggle a section's membership in the selected layout.
///
/// Selecting appends to the end; deselecting removes. Selecting a section
/// that is already present is a no-op, so duplicates are never introduced.
pub fn toggle_section(sections: &mut Vec<SectionId>, section: SectionId, selected: bool) {
    if selected {
        if !sections.contains(&section) {
            sections.push(section);
        }
    } else {
        sections.retain(|s| *s != section);
    }
}

/// Swap the section at `index` with its neighbor in the given direction.
///
/// Moves past either end, or from an out-of-range index, are silently
/// ignored and leave the order unchanged. Returns whether a move happened.
pub fn move_section(sections: &mut [SectionId], index: usize, direction: MoveDirection) -> bool {
    match direction {
        MoveDirection::Up => {
            if index == 0 || index >= sections.len() {
                return false;
            }
            sections.swap(index, index - 1);
        }
        MoveDirection::Down => {
            if index + 1 >= sections.len() {
                return false;
            }
            sections.swap(index, index + 1);
        }
    }
    true
}

/// An uncommitted copy of the editable profile fields.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileDraft {
    pub name: String,
    pub bio: String,
    /// Search text behind the avatar placeholder reference, decoded.
    pub avatar_query: String,
    /// Search text behind the banner placeholder reference, decoded.
    pub banner_query: String,
    /// Selected homepage sections, in display order.
    pub sections: Vec<SectionId>,
}

impl ProfileDraft {
    /// Stage an edit session over the current profile.
    pub fn from_profile(profile: &PlayerProfile) -> Self {
        Self {
            name: profile.name.clone(),
            bio: profile.bio.clone(),
            avatar_query: media::query_of(&profile.avatar)
                .map(media::decode_query)
                .unwrap_or_default(),
            banner_query: media::query_of(&profile.banner)
                .map(media::decode_query)
                .unwrap_or_default(),
            sections: profile.homepage_layout.clone(),
        }
    }

    /// Commit the draft: build media references from the query text and wrap
    /// everything into a single merge-write patch.
    pub fn into_patch(self) -> ProfilePatch {
        ProfilePatch {
            name: self.name,
            bio: self.bio,
            avatar: media::avatar_ref(&self.avatar_query),
            banner: media::banner_ref(&self.banner_query),
            homepage_layout: self.sections,
        }
    }
}
