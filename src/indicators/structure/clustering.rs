//! Level clustering
//!
//! Raw pivot values arrive in near-duplicate clumps (the same level tested
//! several times). Clustering keeps one representative per clump using a
//! relative tolerance around the input mean.

/// Default tolerance as a fraction of the mean input value.
pub const DEFAULT_TOLERANCE_RATIO: f64 = 0.002;

/// Deduplicate `values` into ascending cluster representatives.
///
/// Values are sorted ascending; a value starts a new cluster only when it
/// sits more than `mean * tolerance_ratio` above the previously kept
/// representative. The first value of each clump in sorted order wins; no
/// averaging.
pub fn cluster_levels(values: &[f64], tolerance_ratio: f64) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let tolerance = mean * tolerance_ratio;

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut kept: Vec<f64> = Vec::new();
    for value in sorted {
        match kept.last() {
            Some(last) if (value - last).abs() <= tolerance => {}
            _ => kept.push(value),
        }
    }
    kept
}
