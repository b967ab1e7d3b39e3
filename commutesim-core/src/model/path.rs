use geo::{Coord, LineString};

use crate::{Km, algo::geodesic::path_length};

/// Ordered coordinates of a route between two points
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    points: Vec<Coord<f64>>,
}

impl Path {
    pub fn new(points: Vec<Coord<f64>>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Coord<f64>] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Coord<f64>> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Coord<f64>> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Coord<f64>> {
        self.points.last().copied()
    }

    pub fn length_km(&self) -> Km {
        path_length(&self.points)
    }

    /// Appends `other`, skipping its first point when it repeats our last one
    pub fn concat(&self, other: &Path) -> Path {
        let mut points = Vec::with_capacity(self.len() + other.len());
        points.extend_from_slice(&self.points);

        let skip = usize::from(self.last().is_some() && self.last() == other.first());
        points.extend_from_slice(&other.points[skip.min(other.len())..]);

        Path { points }
    }

    pub fn to_line_string(&self) -> LineString<f64> {
        LineString::new(self.points.clone())
    }
}

impl From<Vec<Coord<f64>>> for Path {
    fn from(points: Vec<Coord<f64>>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Coord<f64>> for Path {
    fn from_iter<T: IntoIterator<Item = Coord<f64>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
