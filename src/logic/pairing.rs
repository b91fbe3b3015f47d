//! Match pairing: schedule pending matches until every player reaches the minimum.
//!
//! All strategies work on pool indices and a `Schedule` that tracks per-player match counts and
//! per-pair repeat counts. A pair is only committed if at least one side still needs matches, so
//! no strategy keeps adding matches once everyone has reached the minimum.

use crate::logic::standings::group_members;
use crate::models::{
    ClubGroup, Competitor, CompetitorId, EngineError, MatchRecord, PairingStrategy,
};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Generate pending matches for `pool` with the thread-local RNG.
pub fn generate_matches(
    strategy: PairingStrategy,
    pool: &[Competitor],
    min_matches_per_player: u32,
) -> Result<Vec<MatchRecord>, EngineError> {
    generate_matches_with_rng(strategy, pool, min_matches_per_player, &mut rand::thread_rng())
}

/// Generate pending matches for `pool` so every player has at least `min_matches_per_player`.
///
/// Only `Random` draws from `rng`; the other strategies are deterministic for a given pool order.
pub fn generate_matches_with_rng<R: Rng + ?Sized>(
    strategy: PairingStrategy,
    pool: &[Competitor],
    min_matches_per_player: u32,
    rng: &mut R,
) -> Result<Vec<MatchRecord>, EngineError> {
    if pool.len() < 2 {
        return Err(EngineError::InsufficientPlayers { available: pool.len() });
    }
    if min_matches_per_player == 0 {
        return Err(EngineError::InvalidMinMatches);
    }

    let mut schedule = Schedule::new(pool.len(), min_matches_per_player);
    match strategy {
        PairingStrategy::Random => random_pairs(&mut schedule, rng),
        PairingStrategy::RoundRobin => round_robin(&mut schedule),
        PairingStrategy::Seeded => seeded(&mut schedule, pool),
        PairingStrategy::Optimized => optimized(&mut schedule),
    }

    let matches: Vec<MatchRecord> = schedule
        .pairs
        .iter()
        .enumerate()
        .map(|(n, &(a, b))| MatchRecord::new(pool[a].id, pool[b].id, n as u32 + 1))
        .collect();
    log::info!(
        "Generated {} {} match(es) for {} player(s), minimum {} per player",
        matches.len(),
        strategy,
        pool.len(),
        min_matches_per_player
    );
    Ok(matches)
}

/// Generate matches separately for each group's members, tagging records with the group name.
///
/// Groups with fewer than 2 members are skipped with a warning. Match numbers run on across groups.
pub fn generate_group_matches<R: Rng + ?Sized>(
    strategy: PairingStrategy,
    groups: &[ClubGroup],
    pool: &[Competitor],
    min_matches_per_player: u32,
    rng: &mut R,
) -> Result<Vec<MatchRecord>, EngineError> {
    let mut all = Vec::new();
    for group in groups {
        let members: Vec<Competitor> = group_members(group, pool).into_iter().cloned().collect();
        if members.len() < 2 {
            log::warn!("Group '{}' has {} checked-in player(s); no matches generated", group.name, members.len());
            continue;
        }
        let offset = all.len() as u32;
        let matches = generate_matches_with_rng(strategy, &members, min_matches_per_player, rng)?;
        all.extend(matches.into_iter().map(|mut m| {
            m.match_number += offset;
            m.group = Some(group.name.clone());
            m
        }));
    }
    Ok(all)
}

/// Keep every completed match, drop every pending one, and append `generated` numbered after the kept ones.
pub fn replace_pending_matches(existing: &[MatchRecord], generated: Vec<MatchRecord>) -> Vec<MatchRecord> {
    let mut kept: Vec<MatchRecord> = existing.iter().filter(|m| m.is_completed()).cloned().collect();
    let base = kept.iter().map(|m| m.match_number).max().unwrap_or(0);
    let dropped = existing.len() - kept.len();
    if dropped > 0 {
        log::info!("Replacing {} pending match(es) with {} new", dropped, generated.len());
    }
    kept.extend(generated.into_iter().enumerate().map(|(i, mut m)| {
        m.match_number = base + i as u32 + 1;
        m
    }));
    kept
}

/// Competitors from `roster` who are checked in, in roster order.
pub fn checked_in_pool(roster: &[Competitor], checked_in: &[CompetitorId]) -> Vec<Competitor> {
    let ids: HashSet<CompetitorId> = checked_in.iter().copied().collect();
    roster.iter().filter(|c| ids.contains(&c.id)).cloned().collect()
}

/// Matches scheduled so far, by pool index.
struct Schedule {
    min: u32,
    counts: Vec<u32>,
    /// Times each pair has been scheduled, `faced[a][b] == faced[b][a]`.
    faced: Vec<Vec<u32>>,
    pairs: Vec<(usize, usize)>,
}

impl Schedule {
    fn new(n: usize, min: u32) -> Self {
        Self {
            min,
            counts: vec![0; n],
            faced: vec![vec![0; n]; n],
            pairs: Vec::new(),
        }
    }

    fn len(&self) -> usize {
        self.counts.len()
    }

    fn needs(&self, i: usize) -> bool {
        self.counts[i] < self.min
    }

    fn satisfied(&self) -> bool {
        (0..self.len()).all(|i| !self.needs(i))
    }

    fn push(&mut self, a: usize, b: usize) {
        self.counts[a] += 1;
        self.counts[b] += 1;
        self.faced[a][b] += 1;
        self.faced[b][a] += 1;
        self.pairs.push((a, b));
    }

    /// Commit the pair only if either side still needs matches.
    fn push_if_needed(&mut self, a: usize, b: usize) {
        if self.needs(a) || self.needs(b) {
            self.push(a, b);
        }
    }
}

/// Shuffled passes of the circle method: each pass relabels the pool with a fresh shuffle and plays
/// its rounds in shuffled order, so every round is a random pairing of the pool and no pair repeats
/// within a pass. A new pass starts only when some player has met everyone.
fn random_pairs<R: Rng + ?Sized>(schedule: &mut Schedule, rng: &mut R) {
    let n = schedule.len();
    while !schedule.satisfied() {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);
        let mut rounds = circle_rounds(n);
        rounds.shuffle(rng);
        for round in &rounds {
            for &(a, b) in round {
                schedule.push_if_needed(order[a], order[b]);
            }
            if schedule.satisfied() {
                return;
            }
        }
    }
}

/// Rounds of the circle method; an odd pool gets a bye (`None`) that rotates through.
fn circle_rounds(n: usize) -> Vec<Vec<(usize, usize)>> {
    let mut ring: Vec<Option<usize>> = (0..n).map(Some).collect();
    if n % 2 == 1 {
        ring.push(None);
    }
    let m = ring.len();
    let mut rounds = Vec::with_capacity(m - 1);
    for _ in 0..m - 1 {
        let round = (0..m / 2)
            .filter_map(|i| match (ring[i], ring[m - 1 - i]) {
                (Some(a), Some(b)) => Some((a, b)),
                _ => None,
            })
            .collect();
        rounds.push(round);
        // Fix position 0, rotate the rest by one.
        let last = ring.remove(m - 1);
        ring.insert(1, last);
    }
    rounds
}

/// One full round robin, then further passes of the same rotation (only pairs with a player still
/// short of the minimum) until everyone is satisfied.
fn round_robin(schedule: &mut Schedule) {
    let rounds = circle_rounds(schedule.len());
    for &(a, b) in rounds.iter().flatten() {
        schedule.push(a, b);
    }
    while !schedule.satisfied() {
        for &(a, b) in rounds.iter().flatten() {
            schedule.push_if_needed(a, b);
        }
    }
}

/// Sort by handicap, then play rounds. Each round walks the ranks top down and pairs every unpaired
/// player with the closest-ranked unpaired opponent they have not met yet, so round one is 1v2, 3v4
/// and later rounds widen the gap one step at a time. Only when a player still short of the minimum
/// has met everyone does a round allow rematches, least-played pairing first.
fn seeded(schedule: &mut Schedule, pool: &[Competitor]) {
    let mut order: Vec<usize> = (0..pool.len()).collect();
    order.sort_by(|&a, &b| pool[a].handicap.total_cmp(&pool[b].handicap));
    let n = order.len();

    let mut allow_rematches = false;
    while !schedule.satisfied() {
        let mut paired = vec![false; n];
        let mut committed = 0;
        for i in 0..n {
            if paired[i] {
                continue;
            }
            let partner = (0..n)
                .filter(|&j| j != i && !paired[j])
                .filter(|&j| schedule.needs(order[i]) || schedule.needs(order[j]))
                .filter(|&j| allow_rematches || schedule.faced[order[i]][order[j]] == 0)
                .min_by_key(|&j| (schedule.faced[order[i]][order[j]], i.abs_diff(j), j));
            if let Some(j) = partner {
                paired[i] = true;
                paired[j] = true;
                schedule.push(order[i], order[j]);
                committed += 1;
            }
        }
        allow_rematches = committed == 0;
    }
}

/// Greedy balancing: repeatedly take the player with the fewest matches who still needs one, and
/// pair them with the opponent they have met least, preferring players who still need matches,
/// then fewer matches scheduled.
fn optimized(schedule: &mut Schedule) {
    loop {
        let next = (0..schedule.len())
            .filter(|&i| schedule.needs(i))
            .min_by_key(|&i| (schedule.counts[i], i));
        let Some(a) = next else { return };
        let opponent = (0..schedule.len())
            .filter(|&j| j != a)
            .min_by_key(|&j| (schedule.faced[a][j], !schedule.needs(j), schedule.counts[j], j));
        let Some(b) = opponent else { return };
        schedule.push(a, b);
    }
}
