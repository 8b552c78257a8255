use trackcmp_core::models::Segment;

/// Total number of coordinate units covered by both segment tracks.
///
/// Each input must be sorted by start and non-overlapping within itself.
/// The sweep holds one current segment per side, accumulates the pairwise
/// intersection, and advances whichever side ends first; on equal ends the
/// first track advances. Runs in O(|a| + |b|) with a single forward pass
/// over each input.
pub fn overlap_length<A, B>(a: A, b: B) -> u64
where
    A: IntoIterator<Item = Segment>,
    B: IntoIterator<Item = Segment>,
{
    let mut a = a.into_iter();
    let mut b = b.into_iter();

    let (Some(mut current_a), Some(mut current_b)) = (a.next(), b.next()) else {
        return 0;
    };

    let mut total: u64 = 0;
    loop {
        total += u64::from(current_a.intersect(&current_b));

        // advance the side that ends first
        if current_a.end <= current_b.end {
            match a.next() {
                Some(segment) => current_a = segment,
                None => break,
            }
        } else {
            match b.next() {
                Some(segment) => current_b = segment,
                None => break,
            }
        }
    }

    total
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
    #[case(&[(0, 10), (20, 30)], &[(5, 25)], 10)]
    #[case(&[(0, 5)], &[(5, 8)], 0)]
    #[case(&[(0, 100)], &[(10, 20), (30, 40)], 20)]
    #[case(&[(0, 10)], &[(0, 10)], 10)]
    #[case(&[], &[(0, 10)], 0)]
    #[case(&[(0, 10)], &[], 0)]
    fn test_overlap_length(
        #[case] a: &[(u32, u32)],
        #[case] b: &[(u32, u32)],
        #[case] expected: u64,
    ) {
        assert_eq!(overlap_length(segments(a), segments(b)), expected);
    }

    #[rstest]
    #[case(&[(0, 10), (20, 30)], &[(5, 25)])]
    #[case(&[(0, 3), (4, 9), (12, 40)], &[(2, 5), (8, 14)])]
    #[case(&[(0, 10)], &[(0, 10), (15, 18)])]
    fn test_overlap_is_symmetric(#[case] a: &[(u32, u32)], #[case] b: &[(u32, u32)]) {
        assert_eq!(
            overlap_length(segments(a), segments(b)),
            overlap_length(segments(b), segments(a))
        );
    }

    #[rstest]
    fn test_equal_ends_do_not_drop_coverage() {
        // both current segments end at 10; whichever side advances, the
        // remaining track can still overlap later segments
        let a = segments(&[(0, 10), (12, 20)]);
        let b = segments(&[(5, 10), (12, 16)]);
        assert_eq!(overlap_length(a, b), 9);
    }

    #[rstest]
    fn test_single_pass_over_lazy_input() {
        // segment sources stay lazy; the sweep must not clone or re-iterate
        let a = (0..5u32).map(|i| Segment::new(i * 10, i * 10 + 5));
        let b = segments(&[(0, 50)]);
        assert_eq!(overlap_length(a, b), 25);
    }
}
