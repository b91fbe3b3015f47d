//! Tiebreak ordering of standings rows.

use crate::models::StandingsRow;
use std::cmp::Ordering;

/// Order two rows, better first: match wins, then tiebreaker points, then net holes (all descending).
///
/// Returns `Less` when `a` ranks above `b`. Rows equal on all three compare `Equal`; callers must
/// use a stable sort so equal rows keep their input order.
pub fn compare_standings(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.wins
        .cmp(&a.wins)
        .then_with(|| b.tiebreaker_points.cmp(&a.tiebreaker_points))
        .then_with(|| b.net_holes.cmp(&a.net_holes))
}

/// Stable-sort rows by [`compare_standings`] and assign 1-based ranks.
pub fn rank_rows(rows: &mut [StandingsRow]) {
    rows.sort_by(compare_standings);
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i as u32 + 1;
    }
}
