use thiserror::Error;

use crate::point::Point;

#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum CoverageError {
    /// Every position in the searched region is covered by some sensor.
    #[error("no uncovered position in the searched region")]
    NoGapFound,

    #[error("tuning frequency of {0} does not fit in 64 bits")]
    FrequencyOverflow(Point),
}
