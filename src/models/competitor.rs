//! Competitor reference data (owned by the roster).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a competitor (used in matches, standings and brackets).
pub type CompetitorId = Uuid;

/// A registered competitor: identity, club affiliation and handicap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: String,
    pub club: String,
    /// Playing handicap; lower is better. Used by seeded pairing and net scoring.
    pub handicap: f64,
}

impl Competitor {
    /// Create a new competitor with a fresh id.
    pub fn new(name: impl Into<String>, club: impl Into<String>, handicap: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            club: club.into(),
            handicap,
        }
    }
}
