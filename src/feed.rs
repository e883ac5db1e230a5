//! Ordering of scored matches into a feed.
//!
//! Scores within a small tolerance of each other count as a tie and the newer
//! posting wins. That comparison is not transitive (70 ~ 74 ~ 78 but 70 < 78),
//! so the feed is built with an insertion sort driven directly by the
//! comparator instead of `sort_by`, which may panic on inconsistent orderings.

use std::cmp::Ordering;

use crate::model::JobMatch;

/// Score difference at or below which two matches are ordered by posting date
pub const DEFAULT_TIE_TOLERANCE: u8 = 5;

/// Rank matches with the default tolerance
pub fn rank_feed(matches: Vec<JobMatch<'_>>) -> Vec<JobMatch<'_>> {
    rank_feed_with_tolerance(matches, DEFAULT_TIE_TOLERANCE)
}

/// Rank matches best first. Entries the comparator considers equal keep their
/// input order.
pub fn rank_feed_with_tolerance(matches: Vec<JobMatch<'_>>, tolerance: u8) -> Vec<JobMatch<'_>> {
    let mut ranked: Vec<JobMatch<'_>> = Vec::with_capacity(matches.len());
    for entry in matches {
        let mut pos = ranked.len();
        while pos > 0 && compare_matches(&ranked[pos - 1], &entry, tolerance) == Ordering::Greater {
            pos -= 1;
        }
        ranked.insert(pos, entry);
    }
    ranked
}

/// `Less` when `a` belongs before `b` in the feed.
///
/// Scores further apart than `tolerance` order by score, highest first.
/// Otherwise the more recently posted job comes first.
pub fn compare_matches(a: &JobMatch<'_>, b: &JobMatch<'_>, tolerance: u8) -> Ordering {
    if a.overall_score.abs_diff(b.overall_score) > tolerance {
        b.overall_score.cmp(&a.overall_score)
    } else {
        b.job.posted_date.cmp(&a.job.posted_date)
    }
}
