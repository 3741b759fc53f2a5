//! Game-session state: the player's Punster Profile and the started flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! This model is the single mutable record behind the whole UI. The root `App`
//! provides it as an `RwSignal<GameState>`; every write goes through
//! `RwSignal::update`, which swaps the state atomically and notifies all
//! subscribed views. Invariants (unique layout entries, one-way session start,
//! one-shot campaign flag) are enforced here, not in the store.

#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use serde::{Deserialize, Serialize};

use crate::util::media;

/// Subscribers gained by the one-time ad campaign.
pub const AD_CAMPAIGN_SUBSCRIBERS: u64 = 250;
/// Views gained by the one-time ad campaign.
pub const AD_CAMPAIGN_VIEWS: u64 = 5_000;

/// A homepage section block on the profile page.
///
/// A closed set so an unknown section identifier is unrepresentable; the
/// stable string `id` is what serialized state carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionId {
    #[serde(rename = "latestVideos")]
    LatestUploads,
    #[serde(rename = "popularVideos")]
    PopularUploads,
    #[serde(rename = "playlists")]
    Playlists,
}

impl SectionId {
    /// Every known section, in default display order.
    pub const ALL: [SectionId; 3] = [
        SectionId::LatestUploads,
        SectionId::PopularUploads,
        SectionId::Playlists,
    ];

    /// Stable string identifier.
    pub fn id(self) -> &'static str {
        match self {
            SectionId::LatestUploads => "latestVideos",
            SectionId::PopularUploads => "popularVideos",
            SectionId::Playlists => "playlists",
        }
    }

    /// Human-readable section title.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::LatestUploads => "Latest Uploads",
            SectionId::PopularUploads => "Popular Uploads",
            SectionId::Playlists => "Playlists",
        }
    }

    /// Layout a freshly created profile starts with.
    pub fn default_layout() -> Vec<SectionId> {
        SectionId::ALL.to_vec()
    }
}

/// The player's in-game persona: identity, media references, counters, layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    /// Unique profile identifier (UUID string).
    pub id: String,
    /// Display name chosen by the player.
    pub name: String,
    /// Free-text biography.
    pub bio: String,
    /// Avatar image reference (placeholder path, see `util::media`).
    pub avatar: String,
    /// Banner image reference (placeholder path, see `util::media`).
    pub banner: String,
    /// Lifetime view count across all content.
    pub total_views: u64,
    /// Current subscriber count.
    pub subscribers: u64,
    /// Ordered homepage sections; each section appears at most once.
    pub homepage_layout: Vec<SectionId>,
    /// One-time flag: the ad campaign has been run.
    pub has_advertised: bool,
}

impl PlayerProfile {
    /// Fresh profile for a newly started session: zero counters, empty bio,
    /// default media references, full default layout.
    pub fn new(name: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_owned(),
            bio: String::new(),
            avatar: media::avatar_ref(""),
            banner: media::banner_ref(""),
            total_views: 0,
            subscribers: 0,
            homepage_layout: SectionId::default_layout(),
            has_advertised: false,
        }
    }

    /// Merge-write the editable fields, preserving everything else.
    ///
    /// The layout is deduplicated here (first occurrence wins) so the
    /// at-most-once invariant holds no matter what the caller staged.
    pub fn apply(&mut self, patch: ProfilePatch) {
        let ProfilePatch {
            name,
            bio,
            avatar,
            banner,
            homepage_layout,
        } = patch;
        self.name = name;
        self.bio = bio;
        self.avatar = avatar;
        self.banner = banner;
        self.homepage_layout.clear();
        for section in homepage_layout {
            if !self.homepage_layout.contains(&section) {
                self.homepage_layout.push(section);
            }
        }
    }

    /// Run the one-time ad campaign. Returns `false` (and changes nothing) if
    /// it has already been run.
    pub fn run_ad_campaign(&mut self) -> bool {
        if self.has_advertised {
            return false;
        }
        self.has_advertised = true;
        self.subscribers += AD_CAMPAIGN_SUBSCRIBERS;
        self.total_views += AD_CAMPAIGN_VIEWS;
        true
    }
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self::new("")
    }
}

/// Patch carrying exactly the customization-editable profile fields.
///
/// Applied in one place (`PlayerProfile::apply`) so the layout invariant is
/// checkable in one place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub name: String,
    pub bio: String,
    pub avatar: String,
    pub banner: String,
    pub homepage_layout: Vec<SectionId>,
}

/// Session record: whether gameplay has begun, plus the active profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// True once the player has submitted a profile name.
    pub started: bool,
    /// The active profile; only meaningful once `started` is set.
    pub profile: PlayerProfile,
}

impl GameState {
    /// Start the session with the given profile name.
    ///
    /// The name is trimmed; empty input and re-entry after the session has
    /// already started are both refused. Returns whether the session started.
    pub fn start(&mut self, name: &str) -> bool {
        if self.started {
            return false;
        }
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.profile = PlayerProfile::new(name);
        self.started = true;
        true
    }
}
