//! Bus and rail graph pair used for travel-plan synthesis

use geo::Coord;
use log::info;
use rand::Rng;

use super::{Mode, RouteGraph, RoutePolyline};
use crate::loading::{NetworkConfig, build_graph};
use crate::simulation::{PlanConfig, TravelPlan, random_travel_plan};
use crate::Error;

/// Routing graphs of one session, built once and only read afterwards.
/// Rebuilding replaces the whole value.
#[derive(Debug, Clone)]
pub struct TransitNetwork {
    bus: RouteGraph,
    rail: RouteGraph,
}

impl TransitNetwork {
    pub fn new(bus: RouteGraph, rail: RouteGraph) -> Self {
        Self { bus, rail }
    }

    /// Splits `polylines` by mode and builds both graphs. Corridors are
    /// preloaded into the bus graph only; walking polylines are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is out of range
    pub fn build(polylines: &[RoutePolyline], config: &NetworkConfig) -> Result<Self, Error> {
        let by_mode = |mode: Mode| -> Vec<RoutePolyline> {
            polylines
                .iter()
                .filter(|polyline| polyline.mode() == mode)
                .cloned()
                .collect()
        };

        let bus = build_graph(&by_mode(Mode::Bus), config)?;
        let rail = build_graph(&by_mode(Mode::Rail), &config.without_corridors())?;

        let network = Self { bus, rail };
        info!("{}", network.info());
        Ok(network)
    }

    pub fn bus(&self) -> &RouteGraph {
        &self.bus
    }

    pub fn rail(&self) -> &RouteGraph {
        &self.rail
    }

    /// Total graph nodes across both modes
    pub fn stop_count(&self) -> usize {
        self.bus.node_count() + self.rail.node_count()
    }

    pub fn info(&self) -> String {
        format!(
            "Graphs: bus {} nodes / rail {} nodes",
            self.bus.node_count(),
            self.rail.node_count()
        )
    }

    /// See [`random_travel_plan`]
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegeneratePlan`] when no viable plan was found
    pub fn random_travel_plan<R: Rng + ?Sized>(
        &self,
        origin: Coord<f64>,
        target: Coord<f64>,
        config: &PlanConfig,
        rng: &mut R,
    ) -> Result<TravelPlan, Error> {
        random_travel_plan(&self.bus, &self.rail, origin, target, config, rng)
    }
}
