use crate::{point::Point, range::NumericRange};

/// The diamond of points a sensor rules out: everything no farther from
/// `center` than its closest beacon.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ExclusionZone {
    center: Point,
    beacon: Point,
    radius: u64, // memoized manhattan distance
}

impl ExclusionZone {
    pub fn new(center: Point, beacon: Point) -> Self {
        Self {
            center,
            beacon,
            radius: center.manhattan(beacon),
        }
    }

    /// Builds a zone from an already computed radius.
    ///
    /// # Panics
    ///
    /// If `radius` is not the distance between `center` and `beacon`.
    pub fn with_radius(center: Point, beacon: Point, radius: u64) -> Self {
        let actual = center.manhattan(beacon);

        assert_eq!(
            radius, actual,
            "sensor at {center} has its beacon at {beacon}, distance {actual}, not {radius}"
        );

        Self {
            center,
            beacon,
            radius,
        }
    }

    pub const fn center(&self) -> Point {
        self.center
    }

    pub const fn beacon(&self) -> Point {
        self.beacon
    }

    pub const fn radius(&self) -> u64 {
        self.radius
    }

    pub fn contains(&self, point: Point) -> bool {
        self.center.manhattan(point) <= self.radius
    }

    /// Rows crossed by the diamond, clamped to the `i64` domain.
    pub fn rows(&self) -> NumericRange {
        let Point { y, .. } = self.center;

        NumericRange::new(
            y.saturating_sub_unsigned(self.radius),
            y.saturating_add_unsigned(self.radius),
        )
        .unwrap_or(NumericRange::single(y))
    }

    /// Columns the diamond covers on `row`, or `None` if it does not reach it.
    pub fn cross_section_at_row(&self, row: i64) -> Option<NumericRange> {
        let Point { x, y } = self.center;
        let half_width = self.radius.checked_sub(y.abs_diff(row))?;

        NumericRange::new(
            x.saturating_sub_unsigned(half_width),
            x.saturating_add_unsigned(half_width),
        )
    }
}

impl From<(Point, Point)> for ExclusionZone {
    fn from((center, beacon): (Point, Point)) -> Self {
        Self::new(center, beacon)
    }
}
