use geo::Coord;

use crate::{Km, algo::geodesic::haversine_coords};

/// Linear scan for the candidate closest to `query`.
/// Strict comparison keeps the first candidate on ties.
pub(crate) fn nearest_by<T, I>(candidates: I, query: Coord<f64>) -> Option<(T, Km)>
where
    I: IntoIterator<Item = (T, Coord<f64>)>,
{
    let mut best: Option<(T, Km)> = None;
    for (item, position) in candidates {
        let distance = haversine_coords(query, position);
        if best.as_ref().is_none_or(|(_, best_distance)| distance < *best_distance) {
            best = Some((item, distance));
        }
    }
    best
}

/// Index of the point in `points` closest to `query`, with its distance
pub fn nearest_point_index(points: &[Coord<f64>], query: Coord<f64>) -> Option<(usize, Km)> {
    nearest_by(points.iter().copied().enumerate(), query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::lat_lon;

    #[test]
    fn picks_the_closest_vertex() {
        let points = [
            lat_lon(-31.95, 115.86),
            lat_lon(-32.0, 115.86),
            lat_lon(-32.1, 115.86),
        ];

        let (idx, _) = nearest_point_index(&points, lat_lon(-32.02, 115.86)).unwrap();
        assert_eq!(idx, 1);
    }

    #[test]
    fn exact_hit_has_zero_distance() {
        let points = [lat_lon(-31.95, 115.86), lat_lon(-32.0, 115.86)];
        let (idx, dist) = nearest_point_index(&points, lat_lon(-32.0, 115.86)).unwrap();

        assert_eq!(idx, 1);
        assert_eq!(dist, 0.0);
    }

    #[test]
    fn empty_slice_has_no_nearest() {
        assert!(nearest_point_index(&[], lat_lon(-32.0, 115.86)).is_none());
    }
}
