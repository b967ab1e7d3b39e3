//! Path postprocessing: densification, plausibility checks and
//! hills-zone weighting

mod densify;
mod validate;
mod weighting;

pub use densify::{MAX_STEPS_PER_SEGMENT, densify};
pub use validate::{CITY_MAX_SEGMENT_KM, ImplausibleReason, ImplausibleSegment, SegmentValidator, has_implausible_segment};
pub use weighting::{HillsZone, PERTH_HILLS, reweight};
