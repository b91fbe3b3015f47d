//! Championship bracket: slots, divisions and occupant references.

use crate::models::competitor::CompetitorId;
use serde::{Deserialize, Serialize};

/// 1-based bracket slot number, unique within a bracket.
pub type SlotId = u32;

/// Half of the bracket (shown as East / West).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Division {
    A,
    B,
}

impl Division {
    pub fn display_name(self) -> &'static str {
        match self {
            Division::A => "East",
            Division::B => "West",
        }
    }
}

/// Who sits on one side of a slot: a known competitor, or whoever wins an earlier slot.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum Occupant {
    Competitor(CompetitorId),
    WinnerOf(SlotId),
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketSlot {
    pub id: SlotId,
    /// 1 = first round; the highest round is the final.
    pub round: u32,
    /// 1-based position within its round.
    pub match_number: u32,
    /// None for the final, which joins both divisions.
    pub division: Option<Division>,
    pub occupant_a: Occupant,
    pub occupant_b: Occupant,
    /// None until this slot's match completes.
    pub winner: Option<CompetitorId>,
}

/// A slot with its occupants resolved as far as current results allow.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSlot {
    #[serde(flatten)]
    pub slot: BracketSlot,
    pub competitor_a: Option<CompetitorId>,
    pub competitor_b: Option<CompetitorId>,
}
