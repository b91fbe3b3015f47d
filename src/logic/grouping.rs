//! Club grouping: manual groups first, then standalone clubs, then pooled undersized clubs.

use crate::models::{ClubGroup, GroupKind, GroupingResult, GroupingWarning, ManualGroup};
use std::collections::{HashMap, HashSet};

/// Resolve groups with no administrator-defined groups.
pub fn resolve_groups(club_counts: &HashMap<String, u32>, min_participants: u32) -> GroupingResult {
    resolve_groups_with_manual(club_counts, min_participants, &[])
}

/// Resolve club groups in two passes.
///
/// 1. Manual groups, in the given order. A club already claimed by an earlier manual group is dropped
///    from later ones.
/// 2. Remaining clubs in descending participant order (ties by name): clubs with at least
///    `min_participants` stand alone; smaller ones accumulate into a pool that is sealed once it reaches
///    `min_participants`. A final under-filled pool is still emitted and flagged.
///
/// Pools are named `Combined Group N`, skipping any number whose name is already taken by a manual group
/// or a club.
pub fn resolve_groups_with_manual(
    club_counts: &HashMap<String, u32>,
    min_participants: u32,
    manual: &[ManualGroup],
) -> GroupingResult {
    let mut groups = Vec::new();
    let mut claimed: HashSet<&str> = HashSet::new();

    for m in manual {
        let mut clubs = Vec::new();
        for club in &m.clubs {
            if !claimed.insert(club.as_str()) {
                log::warn!("Club '{}' already belongs to an earlier group; dropped from '{}'", club, m.name);
                continue;
            }
            clubs.push(club.clone());
        }
        let participant_count = clubs.iter().map(|c| club_counts.get(c).copied().unwrap_or(0)).sum();
        groups.push(ClubGroup {
            name: m.name.clone(),
            clubs,
            min_participants: m.min_participants,
            participant_count,
            kind: GroupKind::Manual,
        });
    }

    let mut remaining: Vec<(&str, u32)> = club_counts
        .iter()
        .filter(|(club, _)| !claimed.contains(club.as_str()))
        .map(|(club, &n)| (club.as_str(), n))
        .collect();
    remaining.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let (large, small): (Vec<_>, Vec<_>) = remaining.into_iter().partition(|(_, n)| *n >= min_participants);

    for (club, n) in large {
        groups.push(ClubGroup {
            name: club.to_string(),
            clubs: vec![club.to_string()],
            min_participants,
            participant_count: n,
            kind: GroupKind::Single,
        });
    }

    let mut taken: HashSet<&str> = manual.iter().map(|m| m.name.as_str()).collect();
    taken.extend(club_counts.keys().map(String::as_str));
    let mut pooled = 0;
    let mut current: Vec<String> = Vec::new();
    let mut running = 0;
    for (club, n) in small {
        current.push(club.to_string());
        running += n;
        if running >= min_participants {
            let name = next_pool_name(&mut pooled, &taken);
            groups.push(pooled_group(name, std::mem::take(&mut current), min_participants, running));
            running = 0;
        }
    }
    if !current.is_empty() {
        let name = next_pool_name(&mut pooled, &taken);
        groups.push(pooled_group(name, current, min_participants, running));
    }

    let warnings: Vec<GroupingWarning> = groups
        .iter()
        .filter(|g| g.is_under_quorum())
        .map(|g| GroupingWarning::UnderQuorum {
            group: g.name.clone(),
            participant_count: g.participant_count,
            min_participants: g.min_participants,
        })
        .collect();
    for w in &warnings {
        let GroupingWarning::UnderQuorum { group, participant_count, min_participants } = w;
        log::warn!("Group '{}' has {} of {} required participants", group, participant_count, min_participants);
    }
    log::info!("Resolved {} club group(s) from {} club(s)", groups.len(), club_counts.len());

    GroupingResult { groups, warnings }
}

fn next_pool_name(counter: &mut usize, taken: &HashSet<&str>) -> String {
    loop {
        *counter += 1;
        let name = format!("Combined Group {}", counter);
        if !taken.contains(name.as_str()) {
            return name;
        }
        log::debug!("Pool name '{}' already in use; skipping", name);
    }
}

fn pooled_group(name: String, clubs: Vec<String>, min_participants: u32, participant_count: u32) -> ClubGroup {
    ClubGroup {
        name,
        clubs,
        min_participants,
        participant_count,
        kind: GroupKind::Pooled,
    }
}
