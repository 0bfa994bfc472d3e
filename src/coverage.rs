use std::collections::HashSet;

use tracing::trace;

use crate::{
    error::CoverageError, gap::GapFinder, interval_set::DisjointIntervalSet, point::Point,
    range::NumericRange, zone::ExclusionZone,
};

/// Every sensor's exclusion zone, queried one row at a time.
#[derive(Clone, Debug, Default)]
pub struct CoverageIndex {
    zones: Vec<ExclusionZone>,
}

impl CoverageIndex {
    pub fn new(zones: Vec<ExclusionZone>) -> Self {
        Self { zones }
    }

    /// Builds an index from `(sensor, closest beacon)` pairs.
    pub fn from_readings(readings: impl IntoIterator<Item = (Point, Point)>) -> Self {
        readings.into_iter().map(ExclusionZone::from).collect()
    }

    pub fn push(&mut self, zone: ExclusionZone) {
        self.zones.push(zone);
    }

    pub fn zones(&self) -> &[ExclusionZone] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Distinct beacon locations.
    pub fn beacons(&self) -> HashSet<Point> {
        self.zones.iter().map(ExclusionZone::beacon).collect()
    }

    pub fn covers(&self, point: Point) -> bool {
        self.zones.iter().any(|z| z.contains(point))
    }

    /// Union of every zone's cross-section at `row`.
    pub fn row_coverage(&self, row: i64) -> DisjointIntervalSet {
        let set: DisjointIntervalSet = self
            .zones
            .iter()
            .filter_map(|z| z.cross_section_at_row(row))
            .collect();

        trace!(row, ranges = set.len(), "computed row coverage");

        set
    }

    /// Same as [`row_coverage`](Self::row_coverage), clipped to `columns`.
    pub fn row_coverage_within(&self, row: i64, columns: NumericRange) -> DisjointIntervalSet {
        self.zones
            .iter()
            .filter_map(|z| z.cross_section_at_row(row)?.intersect(columns))
            .collect()
    }

    /// Number of positions on `row` covered by some zone, not counting the
    /// covered positions listed in `excluded`.
    pub fn count_covered_on_row<'a>(
        &self,
        row: i64,
        excluded: impl IntoIterator<Item = &'a Point>,
    ) -> u64 {
        let coverage = self.row_coverage(row);

        let occupied = excluded
            .into_iter()
            .filter(|p| p.y == row && coverage.contains(p.x))
            .collect::<HashSet<_>>()
            .len() as u64;

        coverage.total_count() - occupied
    }

    /// Positions on `row` where no beacon can be.
    pub fn count_non_beacon_on_row(&self, row: i64) -> u64 {
        self.count_covered_on_row(row, &self.beacons())
    }

    /// First column in `columns` left uncovered on `row`.
    pub fn gap_in_row(&self, row: i64, columns: NumericRange) -> Option<i64> {
        self.row_coverage_within(row, columns).first_gap_within(columns)
    }

    /// First uncovered point inside the box, lowest row first, then lowest
    /// column.
    pub fn gap_in_bounds(
        &self,
        columns: NumericRange,
        rows: NumericRange,
    ) -> Result<Point, CoverageError> {
        GapFinder::new(self, columns, rows).run()
    }
}

impl FromIterator<ExclusionZone> for CoverageIndex {
    fn from_iter<T: IntoIterator<Item = ExclusionZone>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Extend<ExclusionZone> for CoverageIndex {
    fn extend<T: IntoIterator<Item = ExclusionZone>>(&mut self, iter: T) {
        self.zones.extend(iter);
    }
}
