use std::{
    cmp::{max, min},
    fmt,
    ops::RangeInclusive,
};

/// Inclusive integer interval `[min, max]`. An empty interval is never
/// constructed; operations that could produce one return `None` instead.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NumericRange {
    min: i64,
    max: i64,
}

impl NumericRange {
    pub fn new(min: i64, max: i64) -> Option<Self> {
        (min <= max).then_some(Self { min, max })
    }

    pub const fn single(v: i64) -> Self {
        Self { min: v, max: v }
    }

    pub const fn min(self) -> i64 {
        self.min
    }

    pub const fn max(self) -> i64 {
        self.max
    }

    /// Number of integers in the interval. Saturates for the full `i64` span.
    pub fn len(self) -> u64 {
        self.max.abs_diff(self.min).saturating_add(1)
    }

    pub fn contains(self, v: i64) -> bool {
        self.min <= v && v <= self.max
    }

    pub fn overlaps_or_touches(self, other: Self) -> bool {
        self.min <= other.max.saturating_add(1) && other.min <= self.max.saturating_add(1)
    }

    /// Union of two intervals, or `None` if a gap separates them.
    pub fn merge(self, other: Self) -> Option<Self> {
        self.overlaps_or_touches(other).then(|| Self {
            min: min(self.min, other.min),
            max: max(self.max, other.max),
        })
    }

    pub fn intersect(self, other: Self) -> Option<Self> {
        Self::new(max(self.min, other.min), min(self.max, other.max))
    }
}

impl From<NumericRange> for RangeInclusive<i64> {
    fn from(NumericRange { min, max }: NumericRange) -> Self {
        min..=max
    }
}

impl fmt::Display for NumericRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
