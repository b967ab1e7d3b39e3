//! Great-circle distances on a spherical Earth

use geo::Coord;
use itertools::Itertools;

use crate::{EARTH_RADIUS_KM, Km};

/// Haversine distance in kilometres between two WGS84 positions.
///
/// Symmetric, zero for identical points and monotonic in the angular
/// separation of the two positions.
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Km {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    // Rounding can push `a` a hair above 1 for antipodal points
    2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}

/// Same as [`haversine`] for `geo` coordinates (`x` = longitude, `y` = latitude)
#[inline]
pub fn haversine_coords(a: Coord<f64>, b: Coord<f64>) -> Km {
    haversine(a.y, a.x, b.y, b.x)
}

/// Sum of consecutive segment lengths, 0 for fewer than two points
pub fn path_length(points: &[Coord<f64>]) -> Km {
    points
        .iter()
        .tuple_windows()
        .map(|(a, b)| haversine_coords(*a, *b))
        .sum()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use geo::coord;

    use super::*;

    #[test]
    fn symmetric_for_distant_points() {
        let d1 = haversine(-31.95, 115.86, -32.05, 115.85);
        let d2 = haversine(-32.05, 115.85, -31.95, 115.86);

        assert!((d1 - d2).abs() < 1e-6);
        assert!(d1 > 10.0);
    }

    #[test]
    fn identical_points_are_zero() {
        assert_eq!(haversine(-31.9523, 115.859, -31.9523, 115.859), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        // R * pi / 180
        assert_relative_eq!(haversine(0.0, 0.0, 1.0, 0.0), 111.194_926_6, epsilon = 1e-6);
    }

    #[test]
    fn path_length_sums_segments() {
        let path = [
            coord! { x: 115.86, y: -31.95 },
            coord! { x: 115.86, y: -32.0 },
            coord! { x: 115.86, y: -32.05 },
        ];

        let total = path_length(&path);
        assert!(total > 10.0);
        assert_relative_eq!(
            total,
            haversine_coords(path[0], path[1]) + haversine_coords(path[1], path[2])
        );
    }

    #[test]
    fn short_paths_have_zero_length() {
        assert_eq!(path_length(&[]), 0.0);
        assert_eq!(path_length(&[coord! { x: 115.86, y: -31.95 }]), 0.0);
    }
}
