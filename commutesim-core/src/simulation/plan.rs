use std::fmt;

use geo::Coord;
use hashbrown::HashSet;

use crate::model::{Mode, Path};
use crate::postprocess::densify;
use crate::{Km, MIN_PLAN_POINTS, Minutes};

/// Shape of a synthesized commute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanKind {
    BusToRail,
    BusOnly,
    RailOnly,
}

impl PlanKind {
    /// This kind followed by the others, in retry order
    pub fn with_alternates(self) -> [PlanKind; 3] {
        match self {
            PlanKind::BusToRail => [PlanKind::BusToRail, PlanKind::BusOnly, PlanKind::RailOnly],
            PlanKind::BusOnly => [PlanKind::BusOnly, PlanKind::BusToRail, PlanKind::RailOnly],
            PlanKind::RailOnly => [PlanKind::RailOnly, PlanKind::BusToRail, PlanKind::BusOnly],
        }
    }
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlanKind::BusToRail => "bus+rail",
            PlanKind::BusOnly => "bus",
            PlanKind::RailOnly => "rail",
        })
    }
}

/// One stretch of a plan travelled in a single mode
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    pub mode: Mode,
    pub path: Path,
    /// Wait before boarding, zero for walking
    pub wait_minutes: Minutes,
    /// Time spent moving
    pub travel_minutes: Minutes,
}

impl Leg {
    pub fn length_km(&self) -> Km {
        self.path.length_km()
    }

    pub fn is_transit(&self) -> bool {
        self.mode != Mode::Walk
    }
}

/// A simulated commute made of ordered legs
#[derive(Debug, Clone, PartialEq)]
pub struct TravelPlan {
    kind: PlanKind,
    legs: Vec<Leg>,
}

impl TravelPlan {
    pub(crate) fn new(kind: PlanKind, legs: Vec<Leg>) -> Self {
        Self { kind, legs }
    }

    pub fn kind(&self) -> PlanKind {
        self.kind
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Mode sequence, e.g. walk, bus, walk, rail, walk
    pub fn modes(&self) -> Vec<Mode> {
        self.legs.iter().map(|leg| leg.mode).collect()
    }

    /// Every leg joined into one path
    pub fn points(&self) -> Path {
        join(self.legs.iter())
    }

    /// Transit legs joined, leaving out walking
    pub fn transit_points(&self) -> Path {
        join(self.legs.iter().filter(|leg| leg.is_transit()))
    }

    pub fn point_count(&self) -> usize {
        self.points().len()
    }

    pub fn total_km(&self) -> Km {
        self.legs.iter().map(Leg::length_km).sum()
    }

    pub fn wait_minutes(&self) -> Minutes {
        self.legs.iter().map(|leg| leg.wait_minutes).sum()
    }

    /// Door-to-door time, waits included
    pub fn travel_minutes(&self) -> Minutes {
        self.legs
            .iter()
            .map(|leg| leg.wait_minutes + leg.travel_minutes)
            .sum()
    }

    /// Whole plan split into steps of at most `step_km`, for animation
    pub fn densified(&self, step_km: Km) -> Path {
        densify(&self.points(), step_km)
    }

    /// Distinct coordinates visited by transit legs
    pub fn distinct_transit_points(&self) -> usize {
        distinct(self.transit_points().points())
    }

    /// True when transit covers at least an origin, a via point and a
    /// destination
    pub fn is_viable(&self) -> bool {
        self.distinct_transit_points() >= MIN_PLAN_POINTS
    }

    pub fn status_line(&self) -> String {
        format!("Path pts: {}", self.point_count())
    }
}

fn join<'a>(legs: impl Iterator<Item = &'a Leg>) -> Path {
    legs.fold(Path::default(), |acc, leg| acc.concat(&leg.path))
}

fn distinct(points: &[Coord<f64>]) -> usize {
    points
        .iter()
        .map(|c| (c.x.to_bits(), c.y.to_bits()))
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::model::lat_lon;

    fn leg(mode: Mode, points: &[(f64, f64)], wait: f64) -> Leg {
        Leg {
            mode,
            path: points.iter().map(|&(lat, lon)| lat_lon(lat, lon)).collect(),
            wait_minutes: wait,
            travel_minutes: 1.0,
        }
    }

    fn sample_plan() -> TravelPlan {
        TravelPlan::new(
            PlanKind::BusToRail,
            vec![
                leg(Mode::Walk, &[(-32.0, 115.79), (-32.0, 115.8)], 0.0),
                leg(Mode::Bus, &[(-32.0, 115.8), (-32.0, 115.81), (-31.99, 115.81)], 4.0),
                leg(Mode::Rail, &[(-31.99, 115.81), (-31.97, 115.83), (-31.95, 115.86)], 6.0),
            ],
        )
    }

    #[test]
    fn joins_legs_without_repeating_junctions() {
        let plan = sample_plan();

        assert_eq!(plan.modes(), vec![Mode::Walk, Mode::Bus, Mode::Rail]);
        assert_eq!(plan.point_count(), 6);
        assert_eq!(plan.transit_points().len(), 5);
        assert_eq!(plan.status_line(), "Path pts: 6");
        assert!(plan.is_viable());
    }

    #[test]
    fn totals_add_up() {
        let plan = sample_plan();

        assert_relative_eq!(plan.wait_minutes(), 10.0);
        assert_relative_eq!(plan.travel_minutes(), 13.0);
        assert_relative_eq!(plan.total_km(), plan.points().length_km(), epsilon = 1e-9);
    }

    #[test]
    fn straight_hop_is_not_viable() {
        let plan = TravelPlan::new(
            PlanKind::BusOnly,
            vec![leg(Mode::Bus, &[(-32.0, 115.8), (-32.0, 115.8), (-31.95, 115.86)], 3.0)],
        );

        assert_eq!(plan.distinct_transit_points(), 2);
        assert!(!plan.is_viable());
    }

    #[test]
    fn retry_order_starts_with_the_chosen_kind() {
        for kind in [PlanKind::BusToRail, PlanKind::BusOnly, PlanKind::RailOnly] {
            let order = kind.with_alternates();
            assert_eq!(order[0], kind);
            assert!(order[1] != kind && order[2] != kind && order[1] != order[2]);
        }
    }

    #[test]
    fn densified_plan_keeps_endpoints() {
        let plan = sample_plan();
        let dense = plan.densified(0.2);

        assert!(dense.len() > plan.point_count());
        assert_eq!(dense.first(), plan.points().first());
        assert_eq!(dense.last(), plan.points().last());
    }
}
