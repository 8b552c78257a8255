use trackcmp_core::models::Segment;

/// Mean of the values at indices covered by at least one segment.
///
/// `values` is indexed from 0. Each segment is intersected with the valid
/// index range before accumulating, so positions beyond the end of the
/// signal are excluded from both the sum and the count. Returns NaN when no
/// position contributes: empty segments, an empty signal, or every segment
/// out of range.
///
/// Two accumulation strategies back this, chosen by input size: when the
/// total covered length is smaller than the signal, covered indices are
/// summed directly, O(covered); otherwise a prefix-sum array answers each
/// segment's range sum in constant time, O(n + segments). The choice never
/// changes the result.
pub fn covered_mean<S>(segments: S, values: &[f64]) -> f64
where
    S: IntoIterator<Item = Segment>,
{
    let segments: Vec<Segment> = segments.into_iter().collect();

    let covered: u64 = segments.iter().map(|s| u64::from(s.width())).sum();

    let (sum, count) = if covered < values.len() as u64 {
        direct_sum(&segments, values)
    } else {
        range_sum(&segments, values)
    };

    if count > 0 { sum / count as f64 } else { f64::NAN }
}

/// Clamp a segment to the valid index range [0, n).
#[inline]
fn clamp(segment: &Segment, n: usize) -> (usize, usize) {
    let lo = (segment.start as usize).min(n);
    let hi = (segment.end as usize).min(n);
    (lo, hi)
}

fn direct_sum(segments: &[Segment], values: &[f64]) -> (f64, u64) {
    let mut sum = 0.0;
    let mut count: u64 = 0;

    for segment in segments {
        let (lo, hi) = clamp(segment, values.len());
        if hi > lo {
            for &value in &values[lo..hi] {
                sum += value;
            }
            count += (hi - lo) as u64;
        }
    }

    (sum, count)
}

fn range_sum(segments: &[Segment], values: &[f64]) -> (f64, u64) {
    let mut prefix: Vec<f64> = Vec::with_capacity(values.len() + 1);
    let mut running = 0.0;
    prefix.push(running);
    for &value in values {
        running += value;
        prefix.push(running);
    }

    let mut sum = 0.0;
    let mut count: u64 = 0;

    for segment in segments {
        let (lo, hi) = clamp(segment, values.len());
        if hi > lo {
            sum += prefix[hi] - prefix[lo];
            count += (hi - lo) as u64;
        }
    }

    (sum, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn segments(pairs: &[(u32, u32)]) -> Vec<Segment> {
        pairs.iter().map(|&(s, e)| Segment::new(s, e)).collect()
    }

    #[rstest]
    fn test_mean_over_covered_indices() {
        let values = [10.0, 10.0, 20.0, 40.0, 50.0];
        let mean = covered_mean(segments(&[(2, 5)]), &values);
        assert!((mean - (20.0 + 40.0 + 50.0) / 3.0).abs() < 1e-12);
    }

    #[rstest]
    fn test_indices_past_the_signal_are_excluded() {
        // [1, 7) only covers valid indices 1 and 2
        let values = [1.0, 2.0, 3.0];
        let mean = covered_mean(segments(&[(1, 7)]), &values);
        assert!((mean - 2.5).abs() < 1e-12);
    }

    #[rstest]
    #[case(&[(5, 7)], &[1.0, 2.0, 3.0])]
    #[case(&[], &[1.0, 2.0, 3.0])]
    #[case(&[(0, 3)], &[])]
    #[case(&[(3, 1)], &[1.0, 2.0, 3.0])]
    fn test_nothing_covered_is_nan(#[case] segs: &[(u32, u32)], #[case] values: &[f64]) {
        assert!(covered_mean(segments(segs), values).is_nan());
    }

    #[rstest]
    fn test_both_strategies_agree() {
        let values: Vec<f64> = (0..32).map(|i| (i * 3 % 17) as f64).collect();
        let segs = segments(&[(0, 4), (6, 9), (15, 40)]);

        let (direct_total, direct_count) = direct_sum(&segs, &values);
        let (ranged_total, ranged_count) = range_sum(&segs, &values);
        assert_eq!(direct_count, ranged_count);
        assert!((direct_total - ranged_total).abs() < 1e-9);
    }

    #[rstest]
    #[case(&[(0, 2)])] // covered < n: direct summation
    #[case(&[(0, 5)])] // covered == n: range sums
    #[case(&[(0, 5), (7, 9)])] // covered > n: range sums, out-of-range clamped
    fn test_result_is_invariant_to_strategy(#[case] segs: &[(u32, u32)]) {
        let values = [4.0, 8.0, 15.0, 16.0, 23.0];

        // recompute what the mean must be, independent of strategy
        let mut expected_sum = 0.0;
        let mut expected_count = 0u32;
        for &(s, e) in segs {
            for i in s..e.min(values.len() as u32) {
                expected_sum += values[i as usize];
                expected_count += 1;
            }
        }
        let expected = expected_sum / f64::from(expected_count);

        let mean = covered_mean(segments(segs), &values);
        assert_eq!(mean, expected);
    }
}
