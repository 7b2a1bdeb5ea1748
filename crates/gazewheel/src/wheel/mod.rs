use std::f64::consts::{FRAC_PI_2, TAU};

pub mod heading;
pub mod prize;
pub mod resolver;
pub mod sector;

pub use heading::{FaceLandmark, HeadingError, HeadingEstimator, HeadingVector};
pub use prize::{ColorLabel, PrizeTable};
pub use resolver::{GazeResolver, normalize_angle};
pub use sector::{Sector, SectorWheel, WeightRange, WheelError};

/// 12 o'clock in screen coordinates (y grows downward). Sectors are laid out from here.
pub const START_ANGLE: f64 = -FRAC_PI_2;
/// Exclusive upper bound of the partition, one full turn after [`START_ANGLE`].
pub const END_ANGLE: f64 = START_ANGLE + TAU;

pub const DEFAULT_SENSITIVITY: f64 = 400.0;
pub const DEFAULT_SECTOR_COUNT: usize = 12;
pub const DEFAULT_WEIGHT_MIN: f64 = 0.4; // keeps every sector wide enough to hit
pub const DEFAULT_WEIGHT_MAX: f64 = 1.2;
