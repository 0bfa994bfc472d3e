use itertools::Itertools;

use crate::range::NumericRange;

/// Union of integer intervals, kept as a minimal list of ranges sorted by
/// `min` in which no two ranges overlap or touch.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DisjointIntervalSet {
    ranges: Vec<NumericRange>,
}

impl DisjointIntervalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `range`, fusing it with every stored range it overlaps or touches.
    pub fn insert(&mut self, range: NumericRange) {
        let lo = self
            .ranges
            .partition_point(|r| r.max().saturating_add(1) < range.min());
        let hi = self
            .ranges
            .partition_point(|r| r.min() <= range.max().saturating_add(1));

        // everything in lo..hi touches `range`, and the union only grows
        let merged = self.ranges[lo..hi].iter().fold(range, |acc, &r| {
            acc.merge(r)
                .unwrap_or_else(|| unreachable!("{r} does not touch {acc}"))
        });

        self.ranges.splice(lo..hi, [merged]);

        debug_assert!(self.is_normalized());
    }

    pub fn ranges(&self) -> &[NumericRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Number of distinct integers covered.
    pub fn total_count(&self) -> u64 {
        self.ranges.iter().map(|r| r.len()).sum()
    }

    pub fn contains(&self, v: i64) -> bool {
        let idx = self.ranges.partition_point(|r| r.max() < v);

        self.ranges.get(idx).is_some_and(|r| r.contains(v))
    }

    /// Smallest uncovered integer in `[0, bound]`.
    pub fn first_gap_below(&self, bound: i64) -> Option<i64> {
        NumericRange::new(0, bound).and_then(|window| self.first_gap_within(window))
    }

    /// Smallest uncovered integer inside `window`.
    pub fn first_gap_within(&self, window: NumericRange) -> Option<i64> {
        let mut cursor = window.min();

        // ranges never touch, so at most one of them can cover the cursor
        let idx = self.ranges.partition_point(|r| r.max() < cursor);
        if let Some(r) = self.ranges.get(idx).filter(|r| r.min() <= cursor) {
            cursor = r.max().checked_add(1)?;
        }

        window.contains(cursor).then_some(cursor)
    }

    /// Every maximal uncovered sub-range of `window`, in ascending order.
    pub fn gaps_within(&self, window: NumericRange) -> Vec<NumericRange> {
        let mut gaps = Vec::new();
        let mut cursor = window.min();

        let start = self.ranges.partition_point(|r| r.max() < cursor);

        for r in &self.ranges[start..] {
            if r.min() > window.max() {
                break;
            }

            if r.min() > cursor {
                gaps.extend(NumericRange::new(cursor, r.min() - 1));
            }

            match r.max().checked_add(1) {
                Some(next) => cursor = next,
                None => return gaps,
            }
        }

        gaps.extend(NumericRange::new(cursor, window.max()));
        gaps
    }

    fn is_normalized(&self) -> bool {
        self.ranges
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.max().saturating_add(1) < b.min())
    }
}

impl Extend<NumericRange> for DisjointIntervalSet {
    fn extend<T: IntoIterator<Item = NumericRange>>(&mut self, iter: T) {
        for range in iter {
            self.insert(range);
        }
    }
}

impl FromIterator<NumericRange> for DisjointIntervalSet {
    fn from_iter<T: IntoIterator<Item = NumericRange>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;

    fn r(min: i64, max: i64) -> NumericRange {
        NumericRange::new(min, max).unwrap()
    }

    fn set(ranges: &[(i64, i64)]) -> DisjointIntervalSet {
        ranges.iter().map(|&(min, max)| r(min, max)).collect()
    }

    #[rstest]
    #[case(&[(0, 5), (3, 9)], &[(0, 9)])]
    #[case(&[(0, 5), (6, 9)], &[(0, 9)])]
    #[case(&[(0, 5), (7, 9)], &[(0, 5), (7, 9)])]
    #[case(&[(7, 9), (0, 5)], &[(0, 5), (7, 9)])]
    #[case(&[(0, 1), (4, 5), (8, 9), (2, 7)], &[(0, 9)])]
    #[case(&[(0, 1), (4, 5), (8, 9), (3, 3)], &[(0, 1), (3, 5), (8, 9)])]
    #[case(&[(0, 20), (5, 6)], &[(0, 20)])]
    fn insert_merges_transitively(#[case] input: &[(i64, i64)], #[case] expected: &[(i64, i64)]) {
        let expected: Vec<_> = expected.iter().map(|&(min, max)| r(min, max)).collect();

        assert_eq!(set(input).ranges(), expected.as_slice());
    }

    #[test]
    fn total_count_does_not_double_count() {
        assert_eq!(set(&[(0, 10), (5, 15), (-3, -1)]).total_count(), 19);
        assert_eq!(set(&[(0, 3), (10, 12)]).total_count(), 7);
        assert_eq!(DisjointIntervalSet::new().total_count(), 0);
    }

    #[rstest]
    #[case(&[(-3, -3), (0, 10)], 10, None)]
    #[case(&[(-3, -3), (1, 10)], 10, Some(0))]
    #[case(&[(-3, -3), (0, 4), (6, 10)], 10, Some(5))]
    #[case(&[(-3, -3), (0, 9)], 10, Some(10))]
    #[case(&[], 10, Some(0))]
    #[case(&[], -1, None)]
    #[case(&[(0, 9)], -5, None)]
    fn first_gap_below(
        #[case] ranges: &[(i64, i64)],
        #[case] bound: i64,
        #[case] expected: Option<i64>,
    ) {
        assert_eq!(set(ranges).first_gap_below(bound), expected);
    }

    #[test]
    fn first_gap_within_respects_lower_bound() {
        let s = set(&[(0, 4), (8, 12)]);

        assert_eq!(s.first_gap_within(r(2, 20)), Some(5));
        assert_eq!(s.first_gap_within(r(9, 20)), Some(13));
        assert_eq!(s.first_gap_within(r(9, 12)), None);
        assert_eq!(s.first_gap_within(r(6, 6)), Some(6));
    }

    #[test]
    fn first_gap_at_top_of_domain() {
        let s = set(&[(0, i64::MAX)]);

        assert_eq!(s.first_gap_within(r(0, i64::MAX)), None);
    }

    #[test]
    fn lists_every_gap() {
        let s = set(&[(0, 4), (8, 12), (15, 15)]);

        assert_eq!(s.gaps_within(r(0, 20)), vec![r(5, 7), r(13, 14), r(16, 20)]);
        assert_eq!(s.gaps_within(r(-2, 3)), vec![r(-2, -1)]);
        assert_eq!(s.gaps_within(r(2, 10)), vec![r(5, 7)]);
        assert_eq!(s.gaps_within(r(9, 20)), vec![r(13, 14), r(16, 20)]);
        assert!(s.gaps_within(r(8, 12)).is_empty());
        assert_eq!(DisjointIntervalSet::new().gaps_within(r(1, 2)), vec![r(1, 2)]);
    }

    #[test]
    fn contains_checks_membership() {
        let s = set(&[(0, 4), (8, 12)]);

        assert!(s.contains(0));
        assert!(s.contains(12));
        assert!(!s.contains(6));
        assert!(!s.contains(13));
        assert!(!s.contains(-1));
    }

    proptest! {
        #[test]
        fn stays_sorted_and_disjoint(
            input in prop::collection::vec((-100i64..100, 0i64..15), 0..40)
        ) {
            let s: DisjointIntervalSet = input.iter().map(|&(min, w)| r(min, min + w)).collect();

            prop_assert!(s.is_normalized());

            for v in -100i64..120 {
                let expected = input.iter().any(|&(min, w)| (min..=min + w).contains(&v));
                prop_assert_eq!(s.contains(v), expected);
            }
        }

        #[test]
        fn count_matches_distinct_members(
            input in prop::collection::vec((-50i64..50, 0i64..10), 0..20)
        ) {
            let s: DisjointIntervalSet = input.iter().map(|&(min, w)| r(min, min + w)).collect();
            let distinct = (-50i64..60)
                .filter(|v| input.iter().any(|&(min, w)| (min..=min + w).contains(v)))
                .count() as u64;

            prop_assert_eq!(s.total_count(), distinct);
        }
    }
}
