//! Signal processing: edge detection and streaming filters
pub mod filters;
pub mod flank;

pub use self::filters::{Filter, FirFilter, MovingAverageFilter};
pub use self::flank::{FlankDetector, Level, LevelSet, Strictness, Transition};
