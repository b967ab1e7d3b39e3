//! Covering a bounding box with fixed-size lat/lon tiles, used to split
//! route geometry queries into bounded requests.

use log::warn;

use crate::model::BoundingBox;

/// Default tile edge in degrees
pub const ROUTE_TILE_SIZE_DEG: f64 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteTile {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl RouteTile {
    /// Stable textual key, two decimals per bound:
    /// `minLat_minLon_maxLat_maxLon`
    pub fn key(&self) -> String {
        format!(
            "{:.2}_{:.2}_{:.2}_{:.2}",
            self.min_lat, self.min_lon, self.max_lat, self.max_lon
        )
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.min_lat, self.min_lon, self.max_lat, self.max_lon)
    }
}

/// Row-major grid of tiles covering `bbox`. The last row and column are
/// clipped to the box edges.
///
/// Tile origins are derived from their grid index rather than accumulated,
/// so repeated calls always produce the same keys.
pub fn route_tiles_for_bbox(bbox: &BoundingBox, tile_size_deg: f64) -> Vec<RouteTile> {
    if !tile_size_deg.is_finite() || tile_size_deg <= 0.0 {
        warn!("Refusing to tile with non-positive tile size {tile_size_deg}");
        return Vec::new();
    }

    let rows = steps_within(bbox.min_lat, bbox.max_lat, tile_size_deg);
    let cols = steps_within(bbox.min_lon, bbox.max_lon, tile_size_deg);

    let mut tiles = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        let lat = bbox.min_lat + row as f64 * tile_size_deg;
        for col in 0..cols {
            let lon = bbox.min_lon + col as f64 * tile_size_deg;
            tiles.push(RouteTile {
                min_lat: lat,
                min_lon: lon,
                max_lat: bbox.max_lat.min(lat + tile_size_deg),
                max_lon: bbox.max_lon.min(lon + tile_size_deg),
            });
        }
    }
    tiles
}

/// Number of `size` steps starting at `min` whose origin lies below `max`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn steps_within(min: f64, max: f64, size: f64) -> usize {
    if min.is_nan() || max.is_nan() || max <= min {
        return 0;
    }
    let mut count = ((max - min) / size).ceil() as usize;
    // Guard against ceil landing one past the edge through rounding
    while count > 0 && min + (count - 1) as f64 * size >= max {
        count -= 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use hashbrown::HashSet;

    use super::*;

    #[test]
    fn deterministic_tile_key() {
        let tile = RouteTile {
            min_lat: -32.6,
            min_lon: 115.5,
            max_lat: -32.25,
            max_lon: 115.85,
        };
        assert_eq!(tile.key(), "-32.60_115.50_-32.25_115.85");
    }

    #[test]
    fn covers_bbox_with_grid_tiles() {
        let bbox = BoundingBox::new(-32.6, 115.5, -32.0, 116.0);
        let tiles = route_tiles_for_bbox(&bbox, ROUTE_TILE_SIZE_DEG);

        assert!(!tiles.is_empty());
        assert!(tiles.len() < 100);
        assert_eq!(tiles.len(), 4);

        let keys: HashSet<String> = tiles.iter().map(RouteTile::key).collect();
        assert_eq!(keys.len(), tiles.len());
    }

    #[test]
    fn repeated_tiling_is_identical() {
        let bbox = BoundingBox::new(-32.6, 115.5, -31.4, 116.2);
        let first: Vec<String> = route_tiles_for_bbox(&bbox, 0.35)
            .iter()
            .map(RouteTile::key)
            .collect();
        let second: Vec<String> = route_tiles_for_bbox(&bbox, 0.35)
            .iter()
            .map(RouteTile::key)
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn last_tiles_are_clipped() {
        let bbox = BoundingBox::new(-32.6, 115.5, -32.0, 116.0);
        let tiles = route_tiles_for_bbox(&bbox, 0.35);

        assert!(tiles.iter().all(|t| t.max_lat <= bbox.max_lat));
        assert!(tiles.iter().all(|t| t.max_lon <= bbox.max_lon));
    }

    #[test]
    fn invalid_tile_size_yields_nothing() {
        let bbox = BoundingBox::new(-32.6, 115.5, -32.0, 116.0);
        assert!(route_tiles_for_bbox(&bbox, 0.0).is_empty());
        assert!(route_tiles_for_bbox(&bbox, f64::NAN).is_empty());
    }
}
