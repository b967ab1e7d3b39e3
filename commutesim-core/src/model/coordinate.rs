//! WGS84 positions and axis-aligned areas
//!
//! Internally positions are `geo::Coord<f64>` with `x` = longitude and
//! `y` = latitude. [`LatLon`] is the serde-friendly form used by
//! configuration and reporting.

use geo::{Coord, Rect, coord};
use serde::{Deserialize, Serialize};

/// Builds a `geo` coordinate from latitude and longitude, in that order
#[inline]
pub const fn lat_lon(lat: f64, lon: f64) -> Coord<f64> {
    coord! { x: lon, y: lat }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl From<LatLon> for Coord<f64> {
    fn from(value: LatLon) -> Self {
        lat_lon(value.lat, value.lon)
    }
}

impl From<Coord<f64>> for LatLon {
    fn from(value: Coord<f64>) -> Self {
        Self {
            lat: value.y,
            lon: value.x,
        }
    }
}

/// Latitude/longitude rectangle, `(minLat, minLon, maxLat, maxLon)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    pub const fn new(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            min_lon,
            max_lat,
            max_lon,
        }
    }

    /// Strict interior test; points on the edge are outside
    pub fn contains(&self, point: Coord<f64>) -> bool {
        point.y > self.min_lat
            && point.y < self.max_lat
            && point.x > self.min_lon
            && point.x < self.max_lon
    }

    pub fn width_deg(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    pub fn height_deg(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn center(&self) -> Coord<f64> {
        lat_lon(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            lat_lon(self.min_lat, self.min_lon),
            lat_lon(self.max_lat, self.max_lon),
        )
    }
}

impl From<Rect<f64>> for BoundingBox {
    fn from(rect: Rect<f64>) -> Self {
        Self::new(rect.min().y, rect.min().x, rect.max().y, rect.max().x)
    }
}

/// Simulation destination, the Perth CBD
pub const PERTH_CBD: LatLon = LatLon::new(-31.9523, 115.8590);

/// Area covered by the stop and route queries
pub const PERTH_METRO: BoundingBox = BoundingBox::new(-32.6, 115.5, -31.4, 116.2);

/// Dense urban core where long straight hops are implausible
pub const PERTH_CITY_CORE: BoundingBox = BoundingBox::new(-32.2, 115.6, -31.5, 116.1);
