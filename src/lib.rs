//! Golf league engine: standings, club grouping, match pairing and championship brackets.
//!
//! Every operation is a pure function from roster and match records to fresh output.

pub mod config;
pub mod logic;
pub mod models;

pub use config::EngineSettings;
pub use logic::{
    aggregate_standings, build_bracket, build_bracket_with_size, champion, checked_in_pool,
    club_counts, compare_standings, generate_group_matches, generate_matches,
    generate_matches_with_rng, group_members, group_standings, handicap_strokes, rank_rows,
    read_roster_csv, ready_bracket_matches, replace_pending_matches, resolve_bracket,
    resolve_groups, resolve_groups_with_manual, resolve_occupant, resolve_slot, score_match_play,
    select_qualifiers, ScoredMatch, Scorecard, DEFAULT_BRACKET_SIZE, MAX_HANDICAP_STROKES,
};
pub use models::{
    BracketSlot, ClubGroup, Competitor, CompetitorId, Division, EngineError, GroupKind,
    GroupStandings, GroupingResult, GroupingWarning, ManualGroup, MatchId, MatchOutcome,
    MatchRecord, MatchStatus, Occupant, PairingStrategy, ResolvedSlot, SlotId, StandingsRow,
};
