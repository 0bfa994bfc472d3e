//! Coverage queries over sensors that each rule out a Manhattan-distance
//! diamond around themselves.

pub mod coverage;
pub mod error;
pub mod gap;
pub mod interval_set;
pub mod parse;
pub mod point;
pub mod range;
pub mod zone;

pub use coverage::CoverageIndex;
pub use error::CoverageError;
pub use gap::{
    find_unique_gap, find_unique_gap_parallel, tuning_frequency, GapFinder, ScanState,
};
pub use interval_set::DisjointIntervalSet;
pub use point::Point;
pub use range::NumericRange;
pub use zone::ExclusionZone;
