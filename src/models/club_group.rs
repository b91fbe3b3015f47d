//! ClubGroup: clubs combined into one competitive pool.

use serde::{Deserialize, Serialize};

/// How a group came to exist.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    /// Created by an administrator with an explicit club list.
    Manual,
    /// One club large enough to stand alone.
    Single,
    /// Undersized clubs pooled together.
    Pooled,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ClubGroup {
    pub name: String,
    /// Participating clubs, in the order they were added.
    pub clubs: Vec<String>,
    pub min_participants: u32,
    pub participant_count: u32,
    pub kind: GroupKind,
}

impl ClubGroup {
    pub fn is_under_quorum(&self) -> bool {
        self.participant_count < self.min_participants
    }

    pub fn contains_club(&self, club: &str) -> bool {
        self.clubs.iter().any(|c| c == club)
    }
}

/// An administrator-defined group, applied before automatic pooling.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ManualGroup {
    pub name: String,
    pub clubs: Vec<String>,
    pub min_participants: u32,
}

/// Flagged but valid grouping outcomes.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum GroupingWarning {
    /// The group could not reach its minimum participant count.
    UnderQuorum {
        group: String,
        participant_count: u32,
        min_participants: u32,
    },
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupingResult {
    pub groups: Vec<ClubGroup>,
    pub warnings: Vec<GroupingWarning>,
}
