//! StandingsRow: derived per-competitor record, recomputed on every aggregation.

use crate::models::competitor::{Competitor, CompetitorId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub competitor_id: CompetitorId,
    pub name: String,
    pub club: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub total_matches: u32,
    /// Cumulative units (holes) won across all matches.
    pub tiebreaker_points: u32,
    pub total_holes_won: u32,
    pub total_holes_lost: u32,
    /// `total_holes_won - total_holes_lost`.
    pub net_holes: i64,
    /// 1-based position after sorting.
    pub rank: u32,
}

impl StandingsRow {
    /// A zeroed row for a competitor who has not played yet.
    pub fn for_competitor(c: &Competitor) -> Self {
        Self {
            competitor_id: c.id,
            name: c.name.clone(),
            club: c.club.clone(),
            ..Self::default()
        }
    }

    pub fn has_played(&self) -> bool {
        self.total_matches > 0
    }

    /// Fold one side of a completed match into this row.
    pub(crate) fn record(&mut self, units_won: u32, units_lost: u32, result: std::cmp::Ordering) {
        self.total_matches += 1;
        match result {
            std::cmp::Ordering::Greater => self.wins += 1,
            std::cmp::Ordering::Less => self.losses += 1,
            std::cmp::Ordering::Equal => self.ties += 1,
        }
        self.tiebreaker_points += units_won;
        self.total_holes_won += units_won;
        self.total_holes_lost += units_lost;
        self.net_holes = i64::from(self.total_holes_won) - i64::from(self.total_holes_lost);
    }
}

/// Standings of one club group (input to the bracket builder).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupStandings {
    pub group: String,
    /// Ordered by rank.
    pub rows: Vec<StandingsRow>,
}
