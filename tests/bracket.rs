//! Integration tests for qualifier selection, bracket layout and resolution.

use golf_league_engine::{
    build_bracket, build_bracket_with_size, champion, compare_standings, ready_bracket_matches,
    resolve_bracket, resolve_occupant, resolve_slot, select_qualifiers, BracketSlot, CompetitorId, Division,
    EngineError, GroupStandings, MatchOutcome, MatchRecord, Occupant, StandingsRow,
};
use std::collections::HashSet;
use uuid::Uuid;

fn standings_row(wins: u32, points: u32, net: i64) -> StandingsRow {
    StandingsRow {
        competitor_id: Uuid::new_v4(),
        wins,
        tiebreaker_points: points,
        net_holes: net,
        ..StandingsRow::default()
    }
}

/// A group whose rows are given best first; ranks are assigned in order.
fn group(name: &str, stats: &[(u32, u32, i64)]) -> GroupStandings {
    let rows = stats
        .iter()
        .enumerate()
        .map(|(i, &(w, p, n))| StandingsRow {
            rank: i as u32 + 1,
            ..standings_row(w, p, n)
        })
        .collect();
    GroupStandings {
        group: name.to_string(),
        rows,
    }
}

fn three_groups() -> Vec<GroupStandings> {
    vec![
        group("North", &[(4, 20, 8), (3, 15, 4), (2, 12, 1), (1, 6, -3), (0, 2, -10)]),
        group("South", &[(3, 14, 5), (3, 12, 2), (1, 9, -2), (0, 4, -5)]),
        group("Central", &[(2, 10, 3), (2, 10, 1), (1, 5, -4)]),
    ]
}

fn played(slot: &BracketSlot, a: CompetitorId, b: CompetitorId, a_units: u32, b_units: u32) -> MatchRecord {
    let mut m = MatchRecord::new(a, b, slot.id);
    m.bracket_slot = Some(slot.id);
    m.complete(MatchOutcome::new(a_units, b_units)).unwrap();
    m
}

#[test]
fn champions_always_qualify_and_top_wildcards_fill_the_rest() {
    let groups = three_groups();
    let qualifiers = select_qualifiers(&groups, 8).unwrap();
    assert_eq!(qualifiers.len(), 8);

    let champions: Vec<_> = groups.iter().map(|g| g.rows[0].competitor_id).collect();
    assert_eq!(
        qualifiers[..3].iter().map(|q| q.competitor_id).collect::<Vec<_>>(),
        champions
    );

    let mut rest: Vec<StandingsRow> = groups.iter().flat_map(|g| g.rows[1..].iter().cloned()).collect();
    assert_eq!(rest.len(), 9);
    rest.sort_by(compare_standings);
    let expected: Vec<_> = rest[..5].iter().map(|r| r.competitor_id).collect();
    let wildcards: Vec<_> = qualifiers[3..].iter().map(|q| q.competitor_id).collect();
    assert_eq!(wildcards, expected);
}

#[test]
fn too_few_qualifiers_fails() {
    let groups = vec![group("Only", &[(3, 9, 3), (2, 8, 1), (1, 2, -1), (0, 0, -3)])];
    assert_eq!(
        build_bracket(&groups),
        Err(EngineError::InsufficientQualifiers { required: 8, available: 4 })
    );
}

#[test]
fn more_champions_than_slots_fails() {
    let groups: Vec<_> = (0..9).map(|i| group(&format!("G{i}"), &[(1, 1, 1)])).collect();
    assert!(matches!(
        build_bracket(&groups),
        Err(EngineError::TooManyChampions { champions: 9, size: 8 })
    ));
}

#[test]
fn invalid_sizes_are_rejected() {
    let groups = three_groups();
    for size in [0, 2, 6, 12] {
        assert_eq!(
            build_bracket_with_size(&groups, size),
            Err(EngineError::InvalidBracketSize(size))
        );
    }
}

#[test]
fn eight_player_layout_has_two_divisions_and_a_final() {
    let groups = three_groups();
    let qualifiers: Vec<_> = select_qualifiers(&groups, 8)
        .unwrap()
        .into_iter()
        .map(|q| q.competitor_id)
        .collect();
    let slots = build_bracket(&groups).unwrap();
    assert_eq!(slots.len(), 7);

    let quarterfinals: Vec<_> = slots.iter().filter(|s| s.round == 1).collect();
    assert_eq!(quarterfinals.len(), 4);
    let seeded = |slot: &BracketSlot| (slot.occupant_a, slot.occupant_b);
    // Division A: 1v4, 2v3 of the first four; division B: the same over the next four.
    assert_eq!(quarterfinals[0].division, Some(Division::A));
    assert_eq!(
        seeded(quarterfinals[0]),
        (Occupant::Competitor(qualifiers[0]), Occupant::Competitor(qualifiers[3]))
    );
    assert_eq!(
        seeded(quarterfinals[1]),
        (Occupant::Competitor(qualifiers[1]), Occupant::Competitor(qualifiers[2]))
    );
    assert_eq!(quarterfinals[2].division, Some(Division::B));
    assert_eq!(
        seeded(quarterfinals[2]),
        (Occupant::Competitor(qualifiers[4]), Occupant::Competitor(qualifiers[7]))
    );
    assert_eq!(
        seeded(quarterfinals[3]),
        (Occupant::Competitor(qualifiers[5]), Occupant::Competitor(qualifiers[6]))
    );

    let semis: Vec<_> = slots.iter().filter(|s| s.round == 2).collect();
    assert_eq!(semis.len(), 2);
    assert_eq!(semis[0].division, Some(Division::A));
    assert_eq!(
        seeded(semis[0]),
        (Occupant::WinnerOf(quarterfinals[0].id), Occupant::WinnerOf(quarterfinals[1].id))
    );
    assert_eq!(
        seeded(semis[1]),
        (Occupant::WinnerOf(quarterfinals[2].id), Occupant::WinnerOf(quarterfinals[3].id))
    );

    let last = slots.last().unwrap();
    assert_eq!(last.round, 3);
    assert_eq!(last.division, None);
    assert_eq!(seeded(last), (Occupant::WinnerOf(semis[0].id), Occupant::WinnerOf(semis[1].id)));

    let ids: HashSet<_> = slots.iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), slots.len());
    assert!(slots.iter().all(|s| s.winner.is_none()));
}

#[test]
fn four_player_bracket_is_two_semis_and_a_final() {
    let groups = vec![group("A", &[(2, 5, 2), (1, 3, 0)]), group("B", &[(2, 6, 3), (0, 1, -4)])];
    let slots = build_bracket_with_size(&groups, 4).unwrap();
    assert_eq!(slots.len(), 3);
    assert_eq!(slots.iter().filter(|s| s.round == 1).count(), 2);
    assert_eq!(slots[2].round, 2);
}

#[test]
fn results_flow_through_the_bracket_on_read() {
    let groups = three_groups();
    let slots = build_bracket(&groups).unwrap();
    let occupant = |o: Occupant| match o {
        Occupant::Competitor(id) => id,
        Occupant::WinnerOf(_) => panic!("first round slot must hold competitors"),
    };

    // Nothing played: only the quarterfinals are ready.
    let ready = ready_bracket_matches(&slots, &[]);
    assert_eq!(ready.len(), 4);
    assert!(ready.iter().all(|m| m.bracket_slot.unwrap() <= 4));

    // Top seeds win both division A quarterfinals.
    let qf1 = &slots[0];
    let qf2 = &slots[1];
    let (a1, b1) = (occupant(qf1.occupant_a), occupant(qf1.occupant_b));
    let (a2, b2) = (occupant(qf2.occupant_a), occupant(qf2.occupant_b));
    let mut matches = vec![played(qf1, a1, b1, 4, 2), played(qf2, a2, b2, 1, 3)];

    let resolved = resolve_bracket(&slots, &matches);
    assert_eq!(resolved[0].slot.winner, Some(a1));
    assert_eq!(resolved[1].slot.winner, Some(b2));
    let semi_a = &resolved[4];
    assert_eq!(semi_a.competitor_a, Some(a1));
    assert_eq!(semi_a.competitor_b, Some(b2));
    assert_eq!(resolve_occupant(&slots, &matches, slots[4].occupant_b), Some(b2));
    assert_eq!(resolved[6].competitor_a, None);
    assert_eq!(champion(&resolved), None);

    // The input slots are untouched.
    assert!(slots.iter().all(|s| s.winner.is_none()));

    // Semifinal A is now ready, the played quarterfinals are not.
    let ready = ready_bracket_matches(&slots, &matches);
    assert!(ready.iter().any(|m| m.bracket_slot == Some(slots[4].id) && m.is_between(a1, b2)));
    assert!(ready.iter().all(|m| m.bracket_slot != Some(qf1.id) && m.bracket_slot != Some(qf2.id)));

    // Play out the rest.
    let (qf3, qf4) = (&slots[2], &slots[3]);
    let (a3, b3) = (occupant(qf3.occupant_a), occupant(qf3.occupant_b));
    let (a4, b4) = (occupant(qf4.occupant_a), occupant(qf4.occupant_b));
    matches.push(played(qf3, a3, b3, 5, 0));
    matches.push(played(qf4, a4, b4, 2, 1));
    matches.push(played(&slots[4], a1, b2, 3, 2));
    matches.push(played(&slots[5], a3, a4, 0, 2));
    matches.push(played(&slots[6], a1, a4, 4, 1));

    let resolved = resolve_bracket(&slots, &matches);
    assert_eq!(resolved[5].slot.winner, Some(a4));
    assert_eq!(champion(&resolved), Some(a1));
    assert!(ready_bracket_matches(&slots, &matches).is_empty());
}

#[test]
fn a_tied_bracket_match_does_not_advance_anyone() {
    let groups = three_groups();
    let slots = build_bracket(&groups).unwrap();
    let (a, b) = match (slots[0].occupant_a, slots[0].occupant_b) {
        (Occupant::Competitor(a), Occupant::Competitor(b)) => (a, b),
        _ => unreachable!(),
    };
    let mut matches = vec![played(&slots[0], a, b, 2, 2)];
    let resolved = resolve_bracket(&slots, &matches);
    assert_eq!(resolved[0].slot.winner, None);
    assert_eq!(resolved[4].competitor_a, None);

    // The tie is offered as a replay, and the replay decides the slot.
    let ready = ready_bracket_matches(&slots, &matches);
    assert!(ready.iter().any(|m| m.bracket_slot == Some(slots[0].id) && m.is_between(a, b)));
    matches.push(played(&slots[0], a, b, 3, 1));
    assert_eq!(resolve_bracket(&slots, &matches)[0].slot.winner, Some(a));
    assert!(ready_bracket_matches(&slots, &matches).iter().all(|m| m.bracket_slot != Some(slots[0].id)));
}

#[test]
fn a_result_for_the_wrong_players_is_ignored() {
    let groups = three_groups();
    let slots = build_bracket(&groups).unwrap();
    let stranger = Uuid::new_v4();
    let a = match slots[0].occupant_a {
        Occupant::Competitor(a) => a,
        Occupant::WinnerOf(_) => unreachable!(),
    };
    let matches = vec![played(&slots[0], a, stranger, 3, 0)];
    assert_eq!(resolve_bracket(&slots, &matches)[0].slot.winner, None);
}

#[test]
fn single_slot_lookup() {
    let slots = build_bracket(&three_groups()).unwrap();
    let first = resolve_slot(&slots, &[], slots[0].id).unwrap();
    assert_eq!(first.slot.id, slots[0].id);
    assert!(first.competitor_a.is_some() && first.competitor_b.is_some());
    assert_eq!(resolve_slot(&slots, &[], 99), Err(EngineError::SlotNotFound(99)));
}
