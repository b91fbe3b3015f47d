//! Data structures for the league engine: competitors, matches, standings, groups, brackets.

mod bracket;
mod club_group;
mod competitor;
mod error;
mod match_record;
mod standings;
mod strategy;

pub use bracket::{BracketSlot, Division, Occupant, ResolvedSlot, SlotId};
pub use club_group::{ClubGroup, GroupKind, GroupingResult, GroupingWarning, ManualGroup};
pub use competitor::{Competitor, CompetitorId};
pub use error::EngineError;
pub use match_record::{MatchId, MatchOutcome, MatchRecord, MatchStatus};
pub use standings::{GroupStandings, StandingsRow};
pub use strategy::PairingStrategy;
