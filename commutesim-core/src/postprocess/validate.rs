use std::fmt;

use itertools::Itertools;
use serde::Deserialize;

use crate::algo::haversine_coords;
use crate::model::{BoundingBox, PERTH_CITY_CORE, Path};
use crate::Km;

/// Segment length cap inside the city core under strict validation
pub const CITY_MAX_SEGMENT_KM: Km = 1.0;

/// Flags a path containing a straight hop longer than `max_km`, or, with
/// `city_strict`, longer than 1 km between two points of the city core.
/// An unbounded `max_km` never flags.
pub fn has_implausible_segment(path: &Path, max_km: Km, city_strict: bool) -> bool {
    SegmentValidator {
        max_segment_km: max_km,
        city_strict,
        ..SegmentValidator::default()
    }
    .is_implausible(path)
}

/// Long-segment plausibility rules
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SegmentValidator {
    /// Cap for any segment; a non-finite cap disables validation entirely
    pub max_segment_km: Km,
    pub city_strict: bool,
    pub city_core: BoundingBox,
    pub city_max_segment_km: Km,
}

impl Default for SegmentValidator {
    fn default() -> Self {
        Self {
            max_segment_km: f64::INFINITY,
            city_strict: false,
            city_core: PERTH_CITY_CORE,
            city_max_segment_km: CITY_MAX_SEGMENT_KM,
        }
    }
}

/// The first offending segment of a path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImplausibleSegment {
    /// Index of the segment's first point
    pub index: usize,
    pub length_km: Km,
    pub reason: ImplausibleReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImplausibleReason {
    ExceedsMax,
    CityCore,
}

impl fmt::Display for ImplausibleSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = match self.reason {
            ImplausibleReason::ExceedsMax => "exceeds max segment length",
            ImplausibleReason::CityCore => "too long inside city core",
        };
        write!(
            f,
            "segment {} is {:.2} km ({rule})",
            self.index, self.length_km
        )
    }
}

impl SegmentValidator {
    pub fn first_implausible(&self, path: &Path) -> Option<ImplausibleSegment> {
        if !self.max_segment_km.is_finite() {
            return None;
        }

        path.points()
            .iter()
            .copied()
            .tuple_windows()
            .enumerate()
            .find_map(|(index, (a, b))| {
                let length_km = haversine_coords(a, b);
                let reason = if length_km > self.max_segment_km {
                    ImplausibleReason::ExceedsMax
                } else if self.city_strict
                    && length_km > self.city_max_segment_km
                    && self.city_core.contains(a)
                    && self.city_core.contains(b)
                {
                    ImplausibleReason::CityCore
                } else {
                    return None;
                };
                Some(ImplausibleSegment {
                    index,
                    length_km,
                    reason,
                })
            })
    }

    pub fn is_implausible(&self, path: &Path) -> bool {
        self.first_implausible(path).is_some()
    }
}
