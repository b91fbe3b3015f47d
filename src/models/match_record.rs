//! MatchRecord: one head-to-head match, pending until a result is recorded.

use crate::models::bracket::SlotId;
use crate::models::competitor::CompetitorId;
use crate::models::error::EngineError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Pending,
    Completed,
}

/// Units (holes) won by each side in one match.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub player_1_units: u32,
    pub player_2_units: u32,
}

impl MatchOutcome {
    pub fn new(player_1_units: u32, player_2_units: u32) -> Self {
        Self {
            player_1_units,
            player_2_units,
        }
    }
}

/// A single match between two competitors.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub player_1: CompetitorId,
    pub player_2: CompetitorId,
    /// 1-based position in the schedule.
    pub match_number: u32,
    /// Club group the match was generated for, if any.
    #[serde(default)]
    pub group: Option<String>,
    /// Bracket slot this match decides, if it is a championship match.
    #[serde(default)]
    pub bracket_slot: Option<SlotId>,
    #[serde(default)]
    pub status: MatchStatus,
    /// None while pending.
    #[serde(default)]
    pub outcome: Option<MatchOutcome>,
    /// None while pending, and for a completed tie.
    #[serde(default)]
    pub winner: Option<CompetitorId>,
    #[serde(default)]
    pub played_on: Option<NaiveDate>,
}

impl MatchRecord {
    /// Create a pending match.
    pub fn new(player_1: CompetitorId, player_2: CompetitorId, match_number: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            player_1,
            player_2,
            match_number,
            group: None,
            bracket_slot: None,
            status: MatchStatus::Pending,
            outcome: None,
            winner: None,
            played_on: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    pub fn involves(&self, id: CompetitorId) -> bool {
        self.player_1 == id || self.player_2 == id
    }

    /// True if this match is between `a` and `b` in either order.
    pub fn is_between(&self, a: CompetitorId, b: CompetitorId) -> bool {
        (self.player_1 == a && self.player_2 == b) || (self.player_1 == b && self.player_2 == a)
    }

    /// Record a result: pending -> completed. The side with more units wins; equal units is a tie.
    pub fn complete(&mut self, outcome: MatchOutcome) -> Result<(), EngineError> {
        if self.is_completed() {
            return Err(EngineError::MatchAlreadyCompleted(self.id));
        }
        self.winner = match outcome.player_1_units.cmp(&outcome.player_2_units) {
            std::cmp::Ordering::Greater => Some(self.player_1),
            std::cmp::Ordering::Less => Some(self.player_2),
            std::cmp::Ordering::Equal => None,
        };
        self.outcome = Some(outcome);
        self.status = MatchStatus::Completed;
        Ok(())
    }

    /// Same as [`complete`](Self::complete), also stamping the date played.
    pub fn complete_on(&mut self, outcome: MatchOutcome, date: NaiveDate) -> Result<(), EngineError> {
        self.complete(outcome)?;
        self.played_on = Some(date);
        Ok(())
    }
}
