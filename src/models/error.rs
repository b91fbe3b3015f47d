//! Errors returned by the engine's computations.

use crate::models::bracket::SlotId;
use crate::models::match_record::MatchId;

/// Errors that can occur while generating, scoring or laying out matches.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EngineError {
    /// Fewer than 2 competitors passed to pairing generation.
    InsufficientPlayers { available: usize },
    /// Not enough qualifiers to fill the bracket.
    InsufficientQualifiers { required: usize, available: usize },
    /// Unrecognized pairing strategy name.
    InvalidStrategy(String),
    /// Minimum matches per player must be at least 1.
    InvalidMinMatches,
    /// Bracket size must be a power of two, at least 4.
    InvalidBracketSize(usize),
    /// More group champions than bracket slots.
    TooManyChampions { champions: usize, size: usize },
    /// No bracket slot with this id.
    SlotNotFound(SlotId),
    /// A result was already recorded for this match.
    MatchAlreadyCompleted(MatchId),
    /// Two scorecards of different length.
    ScorecardMismatch { player_1: usize, player_2: usize },
    /// Roster input could not be read.
    Roster(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InsufficientPlayers { available } => {
                write!(f, "Need at least 2 players to generate matches (have {})", available)
            }
            EngineError::InsufficientQualifiers { required, available } => write!(
                f,
                "Bracket needs {} qualifiers but only {} are available",
                required, available
            ),
            EngineError::InvalidStrategy(name) => write!(f, "Unknown match generation strategy '{}'", name),
            EngineError::InvalidMinMatches => write!(f, "Minimum matches per player must be at least 1"),
            EngineError::InvalidBracketSize(size) => {
                write!(f, "Bracket size {} is not a power of two of at least 4", size)
            }
            EngineError::TooManyChampions { champions, size } => write!(
                f,
                "{} group champions do not fit in a bracket of {}",
                champions, size
            ),
            EngineError::SlotNotFound(id) => write!(f, "Bracket slot {} not found", id),
            EngineError::MatchAlreadyCompleted(_) => write!(f, "Match already has a result"),
            EngineError::ScorecardMismatch { player_1, player_2 } => write!(
                f,
                "Scorecards have different lengths ({} and {} holes)",
                player_1, player_2
            ),
            EngineError::Roster(msg) => write!(f, "Invalid roster: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<csv::Error> for EngineError {
    fn from(e: csv::Error) -> Self {
        EngineError::Roster(e.to_string())
    }
}
