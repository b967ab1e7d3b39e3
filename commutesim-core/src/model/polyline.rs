//! Named transit route geometry

use std::fmt;

use geo::{Coord, LineString};
use serde::{Deserialize, Serialize};

use super::coordinate::lat_lon;

/// Travel mode of a route or plan leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Walk,
    Bus,
    #[serde(alias = "train")]
    Rail,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Walk => "walk",
            Mode::Bus => "bus",
            Mode::Rail => "rail",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One transit route's path, immutable once ingested
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePolyline {
    name: String,
    mode: Mode,
    geometry: LineString<f64>,
}

impl RoutePolyline {
    pub fn new(
        name: impl Into<String>,
        mode: Mode,
        points: impl IntoIterator<Item = Coord<f64>>,
    ) -> Self {
        Self {
            name: name.into(),
            mode,
            geometry: points.into_iter().collect(),
        }
    }

    /// Builds a polyline from `(lat, lon)` pairs
    pub fn from_lat_lons(name: impl Into<String>, mode: Mode, points: &[(f64, f64)]) -> Self {
        Self::new(
            name,
            mode,
            points.iter().map(|&(lat, lon)| lat_lon(lat, lon)),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn geometry(&self) -> &LineString<f64> {
        &self.geometry
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord<f64>> + '_ {
        self.geometry.coords().copied()
    }

    pub fn len(&self) -> usize {
        self.geometry.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometry.0.is_empty()
    }
}
