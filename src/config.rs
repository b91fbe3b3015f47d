//! Engine settings with environment overrides.

use crate::logic::DEFAULT_BRACKET_SIZE;
use crate::models::PairingStrategy;
use std::str::FromStr;

/// Defaults used when a request does not say otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineSettings {
    pub min_matches_per_player: u32,
    pub min_participants: u32,
    pub bracket_size: usize,
    pub strategy: PairingStrategy,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            min_matches_per_player: 3,
            min_participants: 4,
            bracket_size: DEFAULT_BRACKET_SIZE,
            strategy: PairingStrategy::Optimized,
        }
    }
}

impl EngineSettings {
    /// Defaults overridden by `MIN_MATCHES_PER_PLAYER`, `MIN_PARTICIPANTS`, `BRACKET_SIZE`, `PAIRING_STRATEGY`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            min_matches_per_player: parse_or(&lookup, "MIN_MATCHES_PER_PLAYER", defaults.min_matches_per_player),
            min_participants: parse_or(&lookup, "MIN_PARTICIPANTS", defaults.min_participants),
            bracket_size: parse_or(&lookup, "BRACKET_SIZE", defaults.bracket_size),
            strategy: parse_or(&lookup, "PAIRING_STRATEGY", defaults.strategy),
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid {}={:?}; using default", key, raw);
            default
        }),
    }
}
