//! Collapse bursts of raw conflicts into discrete events.

use crate::models::Conflict;

/// Default gap below which consecutive conflicts of one pair are merged (seconds).
pub const DEFAULT_BURST_WINDOW_S: f64 = 5.0;

/// Reduce raw conflicts to one representative per burst.
///
/// Conflicts are stably sorted by time, then folded left to right. A conflict
/// is dropped when it involves the same pair as the last kept conflict and
/// lies less than `burst_window_s` after it; the last kept conflict does not
/// move forward when that happens. Anything else starts a new burst.
///
/// Only the most recently kept record is consulted, so a burst that resumes
/// after a gap is never merged back into an earlier one.
pub fn deduplicate_conflicts(mut conflicts: Vec<Conflict>, burst_window_s: f64) -> Vec<Conflict> {
    conflicts.sort_by(|a, b| a.time.total_cmp(&b.time));

    let mut iter = conflicts.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let (mut kept, last) = iter.fold((Vec::new(), first), |(mut kept, last), conflict| {
        if conflict.same_pair(&last) && conflict.time - last.time < burst_window_s {
            (kept, last)
        } else {
            kept.push(last);
            (kept, conflict)
        }
    });
    kept.push(last);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Waypoint;

    fn raw(time: f64, other: &str) -> Conflict {
        Conflict::with_primary(time, Waypoint::new(time, 0.0, 0.0), other)
    }

    fn times_and_ids(conflicts: &[Conflict]) -> Vec<(f64, &str)> {
        conflicts
            .iter()
            .map(|c| (c.time, c.drone_ids.1.as_str()))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(deduplicate_conflicts(Vec::new(), DEFAULT_BURST_WINDOW_S).is_empty());
    }

    #[test]
    fn test_dense_burst_collapses_to_first_sample() {
        let conflicts = vec![raw(10.0, "A"), raw(11.0, "A"), raw(12.0, "A"), raw(13.0, "A")];
        let deduped = deduplicate_conflicts(conflicts, DEFAULT_BURST_WINDOW_S);
        assert_eq!(times_and_ids(&deduped), vec![(10.0, "A")]);
        assert_eq!(deduped[0].location, Waypoint::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn test_no_cross_pair_merging() {
        let deduped = deduplicate_conflicts(vec![raw(10.0, "A"), raw(11.0, "B")], 5.0);
        assert_eq!(times_and_ids(&deduped), vec![(10.0, "A"), (11.0, "B")]);
    }

    #[test]
    fn test_anchor_does_not_advance_within_burst() {
        // 14 is within 5s of the kept 10, but 15 is not, even though 15 is 1s after 14.
        let conflicts = vec![raw(10.0, "A"), raw(14.0, "A"), raw(15.0, "A"), raw(16.0, "A")];
        let deduped = deduplicate_conflicts(conflicts, 5.0);
        assert_eq!(times_and_ids(&deduped), vec![(10.0, "A"), (15.0, "A")]);
    }

    #[test]
    fn test_interleaved_pairs_break_each_other() {
        let conflicts = vec![raw(10.0, "A"), raw(10.0, "B"), raw(11.0, "A"), raw(11.0, "B")];
        let deduped = deduplicate_conflicts(conflicts, 5.0);
        assert_eq!(deduped.len(), 4);
    }

    #[test]
    fn test_resumed_burst_not_merged_with_earlier() {
        let conflicts = vec![raw(10.0, "A"), raw(11.0, "A"), raw(20.0, "A"), raw(21.0, "A")];
        let deduped = deduplicate_conflicts(conflicts, 5.0);
        assert_eq!(times_and_ids(&deduped), vec![(10.0, "A"), (20.0, "A")]);
    }

    #[test]
    fn test_unsorted_input_is_sorted_stably() {
        let conflicts = vec![raw(12.0, "A"), raw(3.0, "B"), raw(3.0, "C"), raw(10.0, "A")];
        let deduped = deduplicate_conflicts(conflicts, 5.0);
        assert_eq!(
            times_and_ids(&deduped),
            vec![(3.0, "B"), (3.0, "C"), (10.0, "A")]
        );
    }

    #[test]
    fn test_gap_equal_to_window_starts_new_burst() {
        let deduped = deduplicate_conflicts(vec![raw(10.0, "A"), raw(15.0, "A")], 5.0);
        assert_eq!(deduped.len(), 2);
    }
}
