//! Goodness-of-fit helpers for distribution tests.

/// Counts how often each bucket index was produced. Indexes at or beyond
/// `buckets` are a test failure.
///
/// # Panics
///
/// Panics if an index is out of range.
#[must_use]
pub fn tally(indexes: impl IntoIterator<Item = usize>, buckets: usize) -> Vec<u64> {
    let mut counts = vec![0_u64; buckets];
    for index in indexes {
        assert!(index < buckets, "bucket {index} out of range 0..{buckets}");
        counts[index] += 1;
    }
    counts
}

/// Pearson's chi-square statistic of `observed` against a uniform
/// expectation over the same buckets.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn chi_square(observed: &[u64]) -> f64 {
    let total: u64 = observed.iter().sum();
    let expected = total as f64 / observed.len() as f64;
    observed
        .iter()
        .map(|&count| {
            let delta = count as f64 - expected;
            delta * delta / expected
        })
        .sum()
}
