//! Order-statistic percentile extraction.

/// Percentile by floor-index order statistic: `k = floor(n * p)`, clamped
/// to the last element.
///
/// No interpolation, by design: the same rule is applied to final-value
/// distributions, per-month projections, and Value-at-Risk, so results
/// are exact sample values rather than blends.
///
/// `sorted` must be sorted ascending and non-empty.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    debug_assert!((0.0..=1.0).contains(&p));
    let k = ((sorted.len() as f64 * p) as usize).min(sorted.len() - 1);
    sorted[k]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_index_rule() {
        let sorted = vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0];
        // k = floor(10 * 0.5) = 5 -> 60, not the interpolated 55.
        assert_eq!(percentile(&sorted, 0.5), 60.0);
        assert_eq!(percentile(&sorted, 0.1), 20.0);
        assert_eq!(percentile(&sorted, 0.9), 100.0);
        assert_eq!(percentile(&sorted, 0.05), 10.0);
    }

    #[test]
    fn test_top_percentile_clamped() {
        let sorted = vec![1.0, 2.0, 3.0];
        assert_eq!(percentile(&sorted, 1.0), 3.0);
    }

    #[test]
    fn test_single_element() {
        let sorted = vec![42.0];
        for p in [0.0, 0.1, 0.5, 0.9, 1.0] {
            assert_eq!(percentile(&sorted, p), 42.0);
        }
    }
}
