use geo::Coord;
use log::debug;
use serde::Deserialize;

use crate::model::{BoundingBox, RouteGraph};
use crate::{Error, Km};

/// Region with sparse direct transit where edges cost more than their
/// length, steering searches onto corridors around it
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct HillsZone {
    pub bounds: BoundingBox,
    /// Cost multiplier, at least 1
    pub penalty: f64,
}

/// Darling Scarp and the eastern hills
pub const PERTH_HILLS: HillsZone = HillsZone {
    bounds: BoundingBox::new(-32.15, 116.0, -31.75, 116.25),
    penalty: 1.8,
};

impl HillsZone {
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] unless the penalty is finite and at least 1
    pub fn validate(&self) -> Result<(), Error> {
        if self.penalty.is_finite() && self.penalty >= 1.0 {
            Ok(())
        } else {
            Err(Error::InvalidData(format!(
                "Hills zone penalty must be a finite value >= 1, got {}",
                self.penalty
            )))
        }
    }

    pub fn touches(&self, a: Coord<f64>, b: Coord<f64>) -> bool {
        self.bounds.contains(a) || self.bounds.contains(b)
    }

    /// Search cost of an edge of `length_km` between `a` and `b`
    pub fn cost(&self, a: Coord<f64>, b: Coord<f64>, length_km: Km) -> f64 {
        if self.touches(a, b) {
            length_km * self.penalty
        } else {
            length_km
        }
    }
}

/// Copy of `graph` with every edge cost recomputed for `zone`.
/// Lengths are untouched.
///
/// # Errors
///
/// Returns an error if the zone penalty would lower or break edge costs
pub fn reweight(graph: &RouteGraph, zone: &HillsZone) -> Result<RouteGraph, Error> {
    zone.validate()?;
    let mut weighted = graph.clone();
    let mut touched = 0usize;

    for edge in weighted.graph.edge_indices() {
        let Some((a, b)) = weighted.graph.edge_endpoints(edge) else {
            continue;
        };
        let (Some(pa), Some(pb)) = (weighted.position(a), weighted.position(b)) else {
            continue;
        };
        if let Some(weight) = weighted.graph.edge_weight_mut(edge) {
            weight.cost = zone.cost(pa, pb, weight.length_km);
            if zone.touches(pa, pb) {
                touched += 1;
            }
        }
    }

    debug!("Re-weighted {touched} of {} edges", weighted.edge_count());
    Ok(weighted)
}
