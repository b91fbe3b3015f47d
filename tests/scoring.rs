//! Integration tests for match-play scoring, recording results, and roster import.

use golf_league_engine::{
    aggregate_standings, read_roster_csv, score_match_play, Competitor, EngineError,
    MatchOutcome, MatchRecord, MatchStatus, Scorecard,
};

fn card(p1: &[u32], p2: &[u32], h1: f64, h2: f64) -> Scorecard {
    Scorecard {
        player_1_gross: p1.to_vec(),
        player_2_gross: p2.to_vec(),
        player_1_handicap: h1,
        player_2_handicap: h2,
        stroke_indexes: (1..=p1.len() as u32).collect(),
    }
}

#[test]
fn lower_score_wins_the_hole_and_ties_halve() {
    let scored = score_match_play(&card(&[4, 5, 3, 4], &[5, 5, 4, 3], 10.0, 10.0)).unwrap();
    assert_eq!(scored.outcome, MatchOutcome::new(2, 1));
    assert_eq!(scored.player_1_net, vec![4, 5, 3, 4]);
}

#[test]
fn higher_handicap_gets_strokes_on_the_hardest_holes() {
    // Differential 2: player 2 receives a stroke on stroke index 1 and 2 only.
    let scored = score_match_play(&card(&[4, 4, 4], &[5, 5, 5], 8.0, 10.0)).unwrap();
    assert_eq!(scored.player_2_net, vec![4, 4, 5]);
    assert_eq!(scored.player_1_net, vec![4, 4, 4]);
    assert_eq!(scored.outcome, MatchOutcome::new(1, 0));
}

#[test]
fn net_score_never_drops_below_one() {
    let scored = score_match_play(&card(&[1], &[1], 0.0, 20.0)).unwrap();
    assert_eq!(scored.player_2_net, vec![1]);
    assert_eq!(scored.outcome, MatchOutcome::new(0, 0));
}

#[test]
fn unplayed_holes_are_skipped() {
    let scored = score_match_play(&card(&[4, 0, 6], &[5, 3, 0], 5.0, 5.0)).unwrap();
    assert_eq!(scored.outcome, MatchOutcome::new(1, 0));
}

#[test]
fn scorecards_of_different_length_are_rejected() {
    assert_eq!(
        score_match_play(&card(&[4, 4], &[4], 0.0, 0.0)),
        Err(EngineError::ScorecardMismatch { player_1: 2, player_2: 1 })
    );
}

#[test]
fn scored_card_completes_a_match_and_feeds_standings() {
    let a = Competitor::new("Ann", "Cypress", 6.0);
    let b = Competitor::new("Bo", "Cypress", 14.0);
    let mut m = MatchRecord::new(a.id, b.id, 1);
    let scored = score_match_play(&card(&[4, 3, 5, 4, 4], &[5, 4, 5, 6, 3], 6.0, 14.0)).unwrap();
    m.complete(scored.outcome).unwrap();

    assert_eq!(m.status, MatchStatus::Completed);
    let expected_winner = match scored.outcome.player_1_units.cmp(&scored.outcome.player_2_units) {
        std::cmp::Ordering::Greater => Some(a.id),
        std::cmp::Ordering::Less => Some(b.id),
        std::cmp::Ordering::Equal => None,
    };
    assert_eq!(m.winner, expected_winner);

    let rows = aggregate_standings(&[m], &[a.clone(), b.clone()]);
    let ann = rows.iter().find(|r| r.competitor_id == a.id).unwrap();
    assert_eq!(ann.total_holes_won, scored.outcome.player_1_units);
    assert_eq!(ann.total_holes_lost, scored.outcome.player_2_units);
}

#[test]
fn roster_csv_reads_competitors() {
    let data = "name,club,handicap\nAnn Lee, Cypress ,6.4\nBo Kim,Pine Valley,\n";
    let roster = read_roster_csv(data.as_bytes()).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].name, "Ann Lee");
    assert_eq!(roster[0].club, "Cypress");
    assert_eq!(roster[0].handicap, 6.4);
    assert_eq!(roster[1].handicap, 0.0);
    assert_ne!(roster[0].id, roster[1].id);
}

#[test]
fn roster_csv_rejects_bad_rows() {
    assert!(matches!(
        read_roster_csv("name,club,handicap\n,Cypress,3\n".as_bytes()),
        Err(EngineError::Roster(_))
    ));
    assert!(matches!(
        read_roster_csv("name,club,handicap\nAnn,Cypress,low\n".as_bytes()),
        Err(EngineError::Roster(_))
    ));
}
