//! Championship bracket: qualifier selection, two-division layout, and resolution on read.

use crate::logic::tiebreak::compare_standings;
use crate::models::{
    BracketSlot, CompetitorId, Division, EngineError, GroupStandings, MatchRecord, Occupant,
    ResolvedSlot, SlotId, StandingsRow,
};

/// Number of qualifiers in the championship bracket.
pub const DEFAULT_BRACKET_SIZE: usize = 8;

/// Build the default 8-player bracket.
pub fn build_bracket(groups: &[GroupStandings]) -> Result<Vec<BracketSlot>, EngineError> {
    build_bracket_with_size(groups, DEFAULT_BRACKET_SIZE)
}

/// Select qualifiers and lay out a two-division single-elimination bracket of `size` players.
///
/// First `size / 2` qualifiers form division A, the rest division B. Each division seeds its first round
/// top against bottom (for 4 players: 1v4, 2v3); later rounds and the final hold `WinnerOf` references.
pub fn build_bracket_with_size(groups: &[GroupStandings], size: usize) -> Result<Vec<BracketSlot>, EngineError> {
    if size < 4 || !size.is_power_of_two() {
        return Err(EngineError::InvalidBracketSize(size));
    }
    let qualifiers = select_qualifiers(groups, size)?;
    let ids: Vec<CompetitorId> = qualifiers.iter().map(|q| q.competitor_id).collect();
    let (east, west) = ids.split_at(size / 2);

    let rounds = size.trailing_zeros();
    let mut slots: Vec<BracketSlot> = Vec::with_capacity(size - 1);
    // Slot ids of the previous round, per division.
    let mut previous: [Vec<SlotId>; 2] = [Vec::new(), Vec::new()];

    for round in 1..rounds {
        let mut match_number = 0;
        for (d, division) in [Division::A, Division::B].into_iter().enumerate() {
            let pairs: Vec<(Occupant, Occupant)> = if round == 1 {
                let seeds = if division == Division::A { east } else { west };
                seed_order(seeds.len())
                    .chunks_exact(2)
                    .map(|p| (Occupant::Competitor(seeds[p[0] - 1]), Occupant::Competitor(seeds[p[1] - 1])))
                    .collect()
            } else {
                previous[d]
                    .chunks_exact(2)
                    .map(|p| (Occupant::WinnerOf(p[0]), Occupant::WinnerOf(p[1])))
                    .collect()
            };
            let mut current = Vec::with_capacity(pairs.len());
            for (a, b) in pairs {
                match_number += 1;
                let id = slots.len() as SlotId + 1;
                slots.push(BracketSlot {
                    id,
                    round,
                    match_number,
                    division: Some(division),
                    occupant_a: a,
                    occupant_b: b,
                    winner: None,
                });
                current.push(id);
            }
            previous[d] = current;
        }
    }

    slots.push(BracketSlot {
        id: slots.len() as SlotId + 1,
        round: rounds,
        match_number: 1,
        division: None,
        occupant_a: Occupant::WinnerOf(previous[0][0]),
        occupant_b: Occupant::WinnerOf(previous[1][0]),
        winner: None,
    });

    log::info!("Built {}-player bracket with {} slot(s)", size, slots.len());
    Ok(slots)
}

/// Group champions (in group order) followed by the best non-champions across all groups.
///
/// Every champion is guaranteed a place: more champions than `size` fails with `TooManyChampions`
/// instead of cutting the field to the first `size` champions.
pub fn select_qualifiers(groups: &[GroupStandings], size: usize) -> Result<Vec<StandingsRow>, EngineError> {
    let mut champions = Vec::new();
    let mut remainder = Vec::new();
    for group in groups {
        let Some(top) = group.rows.iter().enumerate().min_by_key(|(_, r)| r.rank).map(|(i, _)| i) else {
            log::debug!("Group '{}' has no standings; no champion", group.group);
            continue;
        };
        for (i, row) in group.rows.iter().enumerate() {
            if i == top {
                champions.push(row.clone());
            } else {
                remainder.push(row.clone());
            }
        }
    }
    if champions.len() > size {
        return Err(EngineError::TooManyChampions {
            champions: champions.len(),
            size,
        });
    }
    let available = champions.len() + remainder.len();
    if available < size {
        return Err(EngineError::InsufficientQualifiers { required: size, available });
    }

    remainder.sort_by(compare_standings);
    let wildcards = size - champions.len();
    let mut qualifiers = champions;
    qualifiers.extend(remainder.into_iter().take(wildcards));
    Ok(qualifiers)
}

/// Seed numbers (1-based) in bracket order; consecutive pairs meet in the first round.
fn seed_order(n: usize) -> Vec<usize> {
    let mut order = vec![1];
    while order.len() < n {
        let m = order.len() * 2;
        order = order.iter().flat_map(|&s| [s, m + 1 - s]).collect();
    }
    order
}

/// Fresh copy of the bracket with winners pulled from completed bracket matches.
///
/// A slot's winner is the winner of a completed match tagged with that slot and played between the slot's
/// two resolved occupants. A winner already stored on the slot is kept if it is one of its occupants.
pub fn resolve_bracket(slots: &[BracketSlot], matches: &[MatchRecord]) -> Vec<ResolvedSlot> {
    slots
        .iter()
        .map(|slot| {
            let lookup = Lookup { slots, matches };
            let competitor_a = lookup.occupant(slot.occupant_a, slots.len());
            let competitor_b = lookup.occupant(slot.occupant_b, slots.len());
            let mut slot = slot.clone();
            slot.winner = lookup.slot_winner(slot.id, slots.len());
            ResolvedSlot {
                slot,
                competitor_a,
                competitor_b,
            }
        })
        .collect()
}

/// Resolved state of a single slot.
pub fn resolve_slot(slots: &[BracketSlot], matches: &[MatchRecord], id: SlotId) -> Result<ResolvedSlot, EngineError> {
    let index = slots
        .iter()
        .position(|s| s.id == id)
        .ok_or(EngineError::SlotNotFound(id))?;
    let lookup = Lookup { slots, matches };
    let slot = &slots[index];
    let mut resolved = slot.clone();
    resolved.winner = lookup.slot_winner(id, slots.len());
    Ok(ResolvedSlot {
        competitor_a: lookup.occupant(slot.occupant_a, slots.len()),
        competitor_b: lookup.occupant(slot.occupant_b, slots.len()),
        slot: resolved,
    })
}

/// The current occupant of one side of a slot, if known.
pub fn resolve_occupant(slots: &[BracketSlot], matches: &[MatchRecord], occupant: Occupant) -> Option<CompetitorId> {
    Lookup { slots, matches }.occupant(occupant, slots.len())
}

/// Pending matches for slots whose occupants are both known, with no winner and no match yet.
///
/// A completed match that ended tied does not count: its slot gets a replay record.
pub fn ready_bracket_matches(slots: &[BracketSlot], matches: &[MatchRecord]) -> Vec<MatchRecord> {
    let mut next_number = matches.iter().map(|m| m.match_number).max().unwrap_or(0);
    resolve_bracket(slots, matches)
        .into_iter()
        .filter(|r| r.slot.winner.is_none())
        .filter_map(|r| {
            let (a, b) = (r.competitor_a?, r.competitor_b?);
            let exists = matches
                .iter()
                .filter(|m| m.bracket_slot == Some(r.slot.id) && m.is_between(a, b))
                .any(|m| !(m.is_completed() && m.winner.is_none()));
            if exists {
                return None;
            }
            next_number += 1;
            let mut m = MatchRecord::new(a, b, next_number);
            m.bracket_slot = Some(r.slot.id);
            Some(m)
        })
        .collect()
}

/// Winner of the final, once decided.
pub fn champion(resolved: &[ResolvedSlot]) -> Option<CompetitorId> {
    resolved
        .iter()
        .filter(|r| r.slot.division.is_none())
        .max_by_key(|r| r.slot.round)
        .and_then(|r| r.slot.winner)
}

/// Recursive pull-based lookup over slots and matches.
struct Lookup<'a> {
    slots: &'a [BracketSlot],
    matches: &'a [MatchRecord],
}

impl Lookup<'_> {
    /// `depth` bounds recursion so a malformed (cyclic) bracket cannot loop.
    fn occupant(&self, occupant: Occupant, depth: usize) -> Option<CompetitorId> {
        match occupant {
            Occupant::Competitor(id) => Some(id),
            Occupant::WinnerOf(slot) => self.slot_winner(slot, depth.checked_sub(1)?),
        }
    }

    fn slot_winner(&self, id: SlotId, depth: usize) -> Option<CompetitorId> {
        let slot = self.slots.iter().find(|s| s.id == id)?;
        let a = self.occupant(slot.occupant_a, depth)?;
        let b = self.occupant(slot.occupant_b, depth)?;
        if let Some(w) = slot.winner.filter(|&w| w == a || w == b) {
            return Some(w);
        }
        self.matches
            .iter()
            .filter(|m| m.is_completed() && m.bracket_slot == Some(id) && m.is_between(a, b))
            .find_map(|m| m.winner)
    }
}
