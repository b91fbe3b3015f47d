//! League computations: standings, grouping, pairing, scoring and the championship bracket.

mod bracket;
mod grouping;
mod pairing;
mod roster;
mod scoring;
mod standings;
mod tiebreak;

pub use bracket::{
    build_bracket, build_bracket_with_size, champion, ready_bracket_matches, resolve_bracket,
    resolve_occupant, resolve_slot, select_qualifiers, DEFAULT_BRACKET_SIZE,
};
pub use grouping::{resolve_groups, resolve_groups_with_manual};
pub use pairing::{
    checked_in_pool, generate_group_matches, generate_matches, generate_matches_with_rng,
    replace_pending_matches,
};
pub use roster::read_roster_csv;
pub use scoring::{handicap_strokes, score_match_play, ScoredMatch, Scorecard, MAX_HANDICAP_STROKES};
pub use standings::{aggregate_standings, club_counts, group_members, group_standings};
pub use tiebreak::{compare_standings, rank_rows};
