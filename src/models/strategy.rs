//! Match generation strategies selectable by the administrator.

use crate::models::error::EngineError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingStrategy {
    /// Independent shuffles, paired sequentially.
    Random,
    /// Everyone plays everyone once, then repeat rounds as needed.
    RoundRobin,
    /// Adjacent players by handicap.
    Seeded,
    /// Greedy balancing of match counts and repeat pairings.
    #[default]
    Optimized,
}

impl PairingStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            PairingStrategy::Random => "random",
            PairingStrategy::RoundRobin => "round_robin",
            PairingStrategy::Seeded => "seeded",
            PairingStrategy::Optimized => "optimized",
        }
    }
}

impl std::fmt::Display for PairingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PairingStrategy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" | "random_pairs" => Ok(PairingStrategy::Random),
            "round_robin" => Ok(PairingStrategy::RoundRobin),
            "seeded" => Ok(PairingStrategy::Seeded),
            "optimized" => Ok(PairingStrategy::Optimized),
            _ => Err(EngineError::InvalidStrategy(s.to_string())),
        }
    }
}
