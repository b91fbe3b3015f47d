//! Match-play scoring: gross hole scores plus handicaps -> holes won per side.

use crate::models::{EngineError, MatchOutcome};
use serde::{Deserialize, Serialize};

/// Most strokes the higher-handicap player can receive in one match.
pub const MAX_HANDICAP_STROKES: u32 = 8;

/// Gross scores for both players, hole by hole. A score of 0 means the hole was not played.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    pub player_1_gross: Vec<u32>,
    pub player_2_gross: Vec<u32>,
    pub player_1_handicap: f64,
    pub player_2_handicap: f64,
    /// Stroke index (difficulty rank, 1 = hardest) per hole. Missing or 0 counts as 1.
    #[serde(default)]
    pub stroke_indexes: Vec<u32>,
}

/// Per-hole net scores and the resulting outcome.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoredMatch {
    pub player_1_net: Vec<u32>,
    pub player_2_net: Vec<u32>,
    pub outcome: MatchOutcome,
}

/// Strokes the higher-handicap player receives over the match.
pub fn handicap_strokes(handicap: f64, opponent_handicap: f64) -> u32 {
    let diff = (handicap - opponent_handicap).abs().round() as u32;
    diff.min(MAX_HANDICAP_STROKES)
}

/// Strokes received on one hole when `strokes` are spread by stroke index.
fn strokes_on_hole(strokes: u32, stroke_index: u32) -> u32 {
    let index = stroke_index.max(1);
    strokes / 18 + u32::from(strokes % 18 >= index)
}

/// Score a match-play card. Lower net wins a hole; equal net halves it; unplayed holes are skipped.
pub fn score_match_play(card: &Scorecard) -> Result<ScoredMatch, EngineError> {
    if card.player_1_gross.len() != card.player_2_gross.len() {
        return Err(EngineError::ScorecardMismatch {
            player_1: card.player_1_gross.len(),
            player_2: card.player_2_gross.len(),
        });
    }
    let strokes = handicap_strokes(card.player_1_handicap, card.player_2_handicap);
    let receiver_is_1 = card.player_1_handicap > card.player_2_handicap;
    let receiver_is_2 = card.player_2_handicap > card.player_1_handicap;

    let mut scored = ScoredMatch::default();
    for (hole, (&g1, &g2)) in card.player_1_gross.iter().zip(&card.player_2_gross).enumerate() {
        let index = card.stroke_indexes.get(hole).copied().unwrap_or(1);
        let given = strokes_on_hole(strokes, index);
        let net = |gross: u32, receives: bool| {
            if gross == 0 {
                0
            } else if receives {
                gross.saturating_sub(given).max(1)
            } else {
                gross
            }
        };
        let n1 = net(g1, receiver_is_1);
        let n2 = net(g2, receiver_is_2);
        scored.player_1_net.push(n1);
        scored.player_2_net.push(n2);

        if g1 == 0 || g2 == 0 {
            continue;
        }
        match n1.cmp(&n2) {
            std::cmp::Ordering::Less => scored.outcome.player_1_units += 1,
            std::cmp::Ordering::Greater => scored.outcome.player_2_units += 1,
            std::cmp::Ordering::Equal => {}
        }
    }
    log::debug!(
        "Scored match play card: {} strokes given, result {}-{}",
        strokes,
        scored.outcome.player_1_units,
        scored.outcome.player_2_units
    );
    Ok(scored)
}
