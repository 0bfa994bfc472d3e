use std::fmt;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Taxicab distance, `|dx| + |dy|`.
    ///
    /// # Panics
    ///
    /// If the distance does not fit in a `u64`, which takes both axes to span
    /// more than half of the `i64` range.
    pub fn manhattan(self, other: Self) -> u64 {
        self.x
            .abs_diff(other.x)
            .checked_add(self.y.abs_diff(other.y))
            .unwrap_or_else(|| panic!("distance from {self} to {other} overflows u64"))
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i64, i64) {
    fn from(Point { x, y }: Point) -> Self {
        (x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
