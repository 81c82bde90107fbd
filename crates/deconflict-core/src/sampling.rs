//! Sample times across a half-open time window.

/// Yield `start + i * step` for `i = 0, 1, 2, ...` while the value stays
/// strictly below `end`.
///
/// Each sample is computed from its index rather than by repeated addition,
/// so no drift accumulates over long windows. `step` must be positive.
pub fn sample_times(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    debug_assert!(step > 0.0, "sample step must be positive");
    (0u64..)
        .map(move |i| start + i as f64 * step)
        .take_while(move |&t| t < end)
}

/// Number of samples `sample_times` yields for the same arguments.
pub fn sample_count(start: f64, end: f64, step: f64) -> usize {
    sample_times(start, end, step).count()
}
