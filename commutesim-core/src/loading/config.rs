use serde::Deserialize;

use super::corridors::major_roads;
use crate::model::{LatLon, Mode, RoutePolyline};
use crate::postprocess::{HillsZone, PERTH_HILLS};
use crate::DEFAULT_KEY_PRECISION;

/// Largest supported node-key precision; beyond this the scaled
/// coordinates stop fitting comfortably in the key integers
pub const MAX_KEY_PRECISION: u32 = 9;

/// Graph construction settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Decimal places that define "the same point"
    pub key_precision: u32,
    /// Preload the built-in major-road corridors into bus graphs
    pub include_major_roads: bool,
    /// Additional corridors preloaded after the major roads
    pub extra_corridors: Vec<CorridorSpec>,
    /// Zone whose edges get a cost penalty
    pub hills_zone: Option<HillsZone>,
}

impl NetworkConfig {
    /// Plain graph: no corridors and no weighting
    pub fn bare() -> Self {
        Self {
            key_precision: DEFAULT_KEY_PRECISION,
            include_major_roads: false,
            extra_corridors: Vec::new(),
            hills_zone: None,
        }
    }

    /// Same settings with corridor preloading switched off, for rail graphs
    pub fn without_corridors(&self) -> Self {
        Self {
            include_major_roads: false,
            extra_corridors: Vec::new(),
            ..self.clone()
        }
    }

    /// Corridor polylines to preload, in insertion order
    pub fn corridors(&self) -> Vec<RoutePolyline> {
        let mut corridors = if self.include_major_roads {
            major_roads()
        } else {
            Vec::new()
        };
        corridors.extend(self.extra_corridors.iter().map(CorridorSpec::to_polyline));
        corridors
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            key_precision: DEFAULT_KEY_PRECISION,
            include_major_roads: true,
            extra_corridors: Vec::new(),
            hills_zone: Some(PERTH_HILLS),
        }
    }
}

/// Named corridor given as a list of positions
#[derive(Debug, Clone, Deserialize)]
pub struct CorridorSpec {
    pub name: String,
    pub points: Vec<LatLon>,
}

impl CorridorSpec {
    pub fn to_polyline(&self) -> RoutePolyline {
        RoutePolyline::new(
            self.name.clone(),
            Mode::Bus,
            self.points.iter().map(|&p| p.into()),
        )
    }
}
