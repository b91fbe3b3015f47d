//! Standings: fold completed matches into per-competitor rows.

use crate::logic::tiebreak::rank_rows;
use crate::models::{
    ClubGroup, Competitor, CompetitorId, GroupStandings, MatchRecord, StandingsRow,
};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Build fresh, ranked standings for `competitors` from `matches`.
///
/// 1. One zeroed row per competitor (competitors with no matches are kept and rank last).
/// 2. Every completed match adds a win/loss/tie and units won/lost to both sides; pending matches are ignored.
/// 3. Stable sort by the tiebreak order and assign ranks.
///
/// A side whose id is not in `competitors` is skipped, so a subset roster yields subset standings.
pub fn aggregate_standings(matches: &[MatchRecord], competitors: &[Competitor]) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = competitors.iter().map(StandingsRow::for_competitor).collect();
    let index: HashMap<CompetitorId, usize> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| (r.competitor_id, i))
        .collect();

    for m in matches.iter().filter(|m| m.is_completed()) {
        let result_1 = match m.winner {
            None => Ordering::Equal,
            Some(w) if w == m.player_1 => Ordering::Greater,
            Some(w) if w == m.player_2 => Ordering::Less,
            Some(w) => {
                log::warn!("Match {} has winner {} who did not play in it; skipping", m.id, w);
                continue;
            }
        };
        let outcome = m.outcome.unwrap_or_default();
        if let Some(&i) = index.get(&m.player_1) {
            rows[i].record(outcome.player_1_units, outcome.player_2_units, result_1);
        }
        if let Some(&i) = index.get(&m.player_2) {
            rows[i].record(outcome.player_2_units, outcome.player_1_units, result_1.reverse());
        }
    }

    rank_rows(&mut rows);
    rows
}

/// Number of registered competitors per club (input to the group resolver).
pub fn club_counts(competitors: &[Competitor]) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for c in competitors {
        *counts.entry(c.club.clone()).or_insert(0) += 1;
    }
    counts
}

/// Members of a group, in roster order.
pub fn group_members<'a>(group: &ClubGroup, competitors: &'a [Competitor]) -> Vec<&'a Competitor> {
    competitors.iter().filter(|c| group.contains_club(&c.club)).collect()
}

/// Standings per group: only members of the group, only matches played between two members.
pub fn group_standings(
    groups: &[ClubGroup],
    competitors: &[Competitor],
    matches: &[MatchRecord],
) -> Vec<GroupStandings> {
    groups
        .iter()
        .map(|group| {
            let members: Vec<Competitor> = group_members(group, competitors).into_iter().cloned().collect();
            let ids: HashSet<CompetitorId> = members.iter().map(|c| c.id).collect();
            let within: Vec<MatchRecord> = matches
                .iter()
                .filter(|m| ids.contains(&m.player_1) && ids.contains(&m.player_2))
                .cloned()
                .collect();
            GroupStandings {
                group: group.name.clone(),
                rows: aggregate_standings(&within, &members),
            }
        })
        .collect()
}
