use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{coverage::CoverageIndex, error::CoverageError, point::Point, range::NumericRange};

pub const TUNING_MULTIPLIER: i64 = 4_000_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScanState {
    /// The next row to inspect.
    Scanning(i64),
    Found(Point),
    Exhausted,
}

/// Row sweep over a bounded box, looking for positions no sensor covers.
///
/// Each row costs one interval merge over the zones' cross-sections, so the
/// sweep never visits individual columns.
#[derive(Clone, Debug)]
pub struct GapFinder<'a> {
    index: &'a CoverageIndex,
    columns: NumericRange,
    rows: NumericRange,
    state: ScanState,
}

impl<'a> GapFinder<'a> {
    pub fn new(index: &'a CoverageIndex, columns: NumericRange, rows: NumericRange) -> Self {
        Self {
            index,
            columns,
            rows,
            state: ScanState::Scanning(rows.min()),
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    fn after(&self, row: i64) -> ScanState {
        if row >= self.rows.max() {
            ScanState::Exhausted
        } else {
            ScanState::Scanning(row + 1)
        }
    }

    /// Inspects one row. `Found` and `Exhausted` are terminal.
    pub fn step(&mut self) -> ScanState {
        if let ScanState::Scanning(row) = self.state {
            trace!(row, "scanning");

            self.state = match self.index.gap_in_row(row, self.columns) {
                Some(x) => ScanState::Found(Point::new(x, row)),
                None => self.after(row),
            };
        }

        self.state
    }

    /// Scans until the lowest row holding a gap, returning its leftmost
    /// uncovered position.
    pub fn run(mut self) -> Result<Point, CoverageError> {
        loop {
            match self.step() {
                ScanState::Scanning(_) => continue,
                ScanState::Found(point) => {
                    debug!(%point, "found uncovered position");
                    return Ok(point);
                }
                ScanState::Exhausted => {
                    debug!(rows = %self.rows, columns = %self.columns, "no uncovered position");
                    return Err(CoverageError::NoGapFound);
                }
            }
        }
    }

    /// Same result as [`run`](Self::run), with rows fanned out over the rayon
    /// thread pool. The lowest row with a gap still wins.
    pub fn run_parallel(&self) -> Result<Point, CoverageError> {
        let start = match self.state {
            ScanState::Scanning(row) => row,
            ScanState::Found(point) => return Ok(point),
            ScanState::Exhausted => return Err(CoverageError::NoGapFound),
        };

        let Self { index, columns, .. } = *self;

        let found = (start..=self.rows.max())
            .into_par_iter()
            .find_map_first(|row| index.gap_in_row(row, columns).map(|x| Point::new(x, row)));

        debug!(?found, "parallel sweep done");

        found.ok_or(CoverageError::NoGapFound)
    }
}

/// Yields the leftmost uncovered position of every row that has one, in row
/// order. Resuming past a `Found` row is how callers spot a second gap.
impl Iterator for GapFinder<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        if let ScanState::Found(point) = self.state {
            self.state = self.after(point.y);
        }

        loop {
            match self.step() {
                ScanState::Scanning(_) => continue,
                ScanState::Found(point) => return Some(point),
                ScanState::Exhausted => return None,
            }
        }
    }
}

fn square(bound: i64) -> Result<NumericRange, CoverageError> {
    NumericRange::new(0, bound).ok_or(CoverageError::NoGapFound)
}

/// Uncovered position in `[0, bound] x [0, bound]`.
pub fn find_unique_gap(index: &CoverageIndex, bound: i64) -> Result<Point, CoverageError> {
    let side = square(bound)?;

    GapFinder::new(index, side, side).run()
}

pub fn find_unique_gap_parallel(index: &CoverageIndex, bound: i64) -> Result<Point, CoverageError> {
    let side = square(bound)?;

    GapFinder::new(index, side, side).run_parallel()
}

/// `4_000_000 * x + y`, checked.
pub fn tuning_frequency(point: Point) -> Result<i64, CoverageError> {
    point
        .x
        .checked_mul(TUNING_MULTIPLIER)
        .and_then(|f| f.checked_add(point.y))
        .ok_or(CoverageError::FrequencyOverflow(point))
}
