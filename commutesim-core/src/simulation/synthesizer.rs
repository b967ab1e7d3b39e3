use geo::Coord;
use log::{debug, trace};
use rand::Rng;
use rand::seq::IndexedRandom;

use super::config::PlanConfig;
use super::plan::{Leg, PlanKind, TravelPlan};
use super::wait::{ModeTiming, minutes_at};
use crate::model::{Mode, Path, RouteGraph};
use crate::routing::{shortest_path, shortest_path_between};
use crate::{Error, MIN_PLAN_POINTS};

/// Synthesizes a randomized commute from `origin` toward `target`.
///
/// The plan kind is drawn from the configured weights. Attempts that fail
/// to route or collapse below three distinct transit points are retried
/// with the alternate kinds, up to `max_attempts` in total.
///
/// # Errors
///
/// Returns [`Error::DegeneratePlan`] when every attempt was degenerate
pub fn random_travel_plan<R: Rng + ?Sized>(
    bus: &RouteGraph,
    rail: &RouteGraph,
    origin: Coord<f64>,
    target: Coord<f64>,
    config: &PlanConfig,
    rng: &mut R,
) -> Result<TravelPlan, Error> {
    let order = config.kind_weights.choose(rng).with_alternates();
    let attempts = config.max_attempts.max(1);

    for attempt in 0..attempts {
        let kind = order[attempt % order.len()];
        let Some(legs) = transit_legs(kind, bus, rail, origin, target, config, rng) else {
            trace!("Attempt {attempt}: no {kind} route");
            continue;
        };

        let plan = TravelPlan::new(kind, with_walking(legs, origin, target, config));
        if plan.is_viable() {
            debug!(
                "Synthesized {kind} plan: {} legs, {:.2} km, {:.1} min wait",
                plan.legs().len(),
                plan.total_km(),
                plan.wait_minutes()
            );
            return Ok(plan);
        }
        trace!(
            "Attempt {attempt}: {kind} plan has only {} distinct points",
            plan.distinct_transit_points()
        );
    }

    debug!("Gave up synthesizing a plan after {attempts} attempts");
    Err(Error::DegeneratePlan {
        attempts,
        min_points: MIN_PLAN_POINTS,
    })
}

/// Routed transit legs for `kind`, single-point legs dropped
fn transit_legs<R: Rng + ?Sized>(
    kind: PlanKind,
    bus: &RouteGraph,
    rail: &RouteGraph,
    origin: Coord<f64>,
    target: Coord<f64>,
    config: &PlanConfig,
    rng: &mut R,
) -> Option<Vec<Leg>> {
    let legs = match kind {
        PlanKind::BusOnly => {
            let path = shortest_path(bus, origin, target)?;
            vec![ride(Mode::Bus, path, &config.bus, config, rng)]
        }
        PlanKind::RailOnly => {
            let path = shortest_path(rail, origin, target)?;
            vec![ride(Mode::Rail, path, &config.rail, config, rng)]
        }
        PlanKind::BusToRail => {
            let candidates = rail.nearest_nodes(origin, config.transfer_candidates.max(1));
            let &(station, _) = candidates.choose(rng)?;
            let (arrival, _) = rail.nearest_node(target)?;

            let bus_path = shortest_path(bus, origin, rail.position(station)?)?;
            let rail_path = shortest_path_between(rail, station, arrival)?;
            // Both rides must move, or this is not a bus to rail commute
            if bus_path.len() < 2 || rail_path.len() < 2 {
                return None;
            }

            let mut legs = vec![ride(Mode::Bus, bus_path, &config.bus, config, rng)];
            if let Some(transfer) = legs[0]
                .path
                .last()
                .zip(rail_path.first())
                .and_then(|(from, to)| walk(from, to, config))
            {
                legs.push(transfer);
            }
            legs.push(ride(Mode::Rail, rail_path, &config.rail, config, rng));
            legs
        }
    };

    let legs: Vec<Leg> = legs
        .into_iter()
        .filter(|leg| !leg.is_transit() || leg.path.len() >= 2)
        .collect();
    legs.iter().any(Leg::is_transit).then_some(legs)
}

/// Adds walking legs from the origin and to the target around `legs`
fn with_walking(legs: Vec<Leg>, origin: Coord<f64>, target: Coord<f64>, config: &PlanConfig) -> Vec<Leg> {
    let first = legs.first().and_then(|leg| leg.path.first());
    let last = legs.last().and_then(|leg| leg.path.last());

    let access = first.and_then(|to| walk(origin, to, config));
    let egress = last.and_then(|from| walk(from, target, config));

    access.into_iter().chain(legs).chain(egress).collect()
}

fn ride<R: Rng + ?Sized>(
    mode: Mode,
    path: Path,
    timing: &ModeTiming,
    config: &PlanConfig,
    rng: &mut R,
) -> Leg {
    Leg {
        mode,
        wait_minutes: timing.wait(config.randomize_wait, rng),
        travel_minutes: timing.ride_minutes(path.length_km()),
        path,
    }
}

/// Straight walking leg, `None` when both ends coincide
fn walk(from: Coord<f64>, to: Coord<f64>, config: &PlanConfig) -> Option<Leg> {
    if from == to {
        return None;
    }
    let path = Path::new(vec![from, to]);
    Some(Leg {
        mode: Mode::Walk,
        wait_minutes: 0.0,
        travel_minutes: minutes_at(path.length_km(), config.walk_speed_kmh),
        path,
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::loading::{NetworkConfig, build_graph};
    use crate::model::{RoutePolyline, lat_lon};
    use crate::simulation::KindWeights;

    fn network() -> (RouteGraph, RouteGraph) {
        let bus = build_graph(
            &[RoutePolyline::from_lat_lons(
                "Route 101",
                Mode::Bus,
                &[(-32.05, 115.80), (-32.04, 115.81), (-32.03, 115.82), (-32.02, 115.83)],
            )],
            &NetworkConfig::bare(),
        )
        .unwrap();
        let rail = build_graph(
            &[RoutePolyline::from_lat_lons(
                "Mandurah Line",
                Mode::Rail,
                &[(-32.02, 115.83), (-32.00, 115.84), (-31.98, 115.85), (-31.95, 115.86)],
            )],
            &NetworkConfig::bare(),
        )
        .unwrap();
        (bus, rail)
    }

    fn only(kind: PlanKind) -> PlanConfig {
        let kind_weights = match kind {
            PlanKind::BusToRail => KindWeights { bus_to_rail: 1.0, bus_only: 0.0, rail_only: 0.0 },
            PlanKind::BusOnly => KindWeights { bus_to_rail: 0.0, bus_only: 1.0, rail_only: 0.0 },
            PlanKind::RailOnly => KindWeights { bus_to_rail: 0.0, bus_only: 0.0, rail_only: 1.0 },
        };
        PlanConfig {
            kind_weights,
            transfer_candidates: 1,
            ..PlanConfig::default()
        }
    }

    #[test]
    fn bus_to_rail_plan_transfers_at_shared_station() {
        let (bus, rail) = network();
        let mut rng = StdRng::seed_from_u64(1);
        let plan = random_travel_plan(
            &bus,
            &rail,
            lat_lon(-32.051, 115.80),
            lat_lon(-31.95, 115.86),
            &only(PlanKind::BusToRail),
            &mut rng,
        )
        .unwrap();

        assert_eq!(plan.kind(), PlanKind::BusToRail);
        assert_eq!(plan.modes(), vec![Mode::Walk, Mode::Bus, Mode::Rail]);
        assert!(plan.distinct_transit_points() >= 3);
        assert_eq!(plan.points().first(), Some(lat_lon(-32.051, 115.80)));
        assert_eq!(plan.points().last(), Some(lat_lon(-31.95, 115.86)));
        assert!(plan.wait_minutes() >= ModeTiming::bus().base_wait_minutes);
    }

    #[test]
    fn bus_to_rail_without_a_bus_ride_is_not_returned() {
        // Origin and the only reachable station snap to the same bus node
        let bus = build_graph(
            &[RoutePolyline::from_lat_lons(
                "Stub",
                Mode::Bus,
                &[(-32.10, 115.80), (-32.11, 115.80)],
            )],
            &NetworkConfig::bare(),
        )
        .unwrap();
        let rail = build_graph(
            &[RoutePolyline::from_lat_lons(
                "Armadale Line",
                Mode::Rail,
                &[(-32.05, 115.85), (-32.00, 115.85), (-31.95, 115.86)],
            )],
            &NetworkConfig::bare(),
        )
        .unwrap();
        let config = only(PlanKind::BusToRail);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let Ok(plan) = random_travel_plan(
                &bus,
                &rail,
                lat_lon(-32.10, 115.80),
                lat_lon(-31.95, 115.86),
                &config,
                &mut rng,
            ) else {
                continue;
            };

            assert_ne!(plan.kind(), PlanKind::BusToRail);
            for leg in plan.legs() {
                assert!(leg.path.len() >= 2);
                if leg.mode == Mode::Walk {
                    assert_eq!(leg.wait_minutes, 0.0);
                }
            }
        }
    }

    #[test]
    fn bus_to_rail_legs_are_bus_then_rail() {
        let (bus, rail) = network();
        let config = PlanConfig {
            transfer_candidates: 3,
            ..only(PlanKind::BusToRail)
        };

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let Ok(plan) = random_travel_plan(
                &bus,
                &rail,
                lat_lon(-32.051, 115.80),
                lat_lon(-31.95, 115.86),
                &config,
                &mut rng,
            ) else {
                continue;
            };
            if plan.kind() != PlanKind::BusToRail {
                continue;
            }

            let rides: Vec<Mode> = plan.modes().into_iter().filter(|&m| m != Mode::Walk).collect();
            assert_eq!(rides, vec![Mode::Bus, Mode::Rail]);
            let transit_wait: f64 = plan
                .legs()
                .iter()
                .filter(|leg| leg.is_transit())
                .map(|leg| leg.wait_minutes)
                .sum();
            assert_eq!(transit_wait, plan.wait_minutes());
        }
    }

    #[test]
    fn degenerate_kind_falls_back_to_alternate() {
        let (bus, rail) = network();
        let mut rng = StdRng::seed_from_u64(2);
        // Origin and target snap to the same rail station
        let plan = random_travel_plan(
            &bus,
            &rail,
            lat_lon(-32.05, 115.80),
            lat_lon(-32.02, 115.83),
            &only(PlanKind::RailOnly),
            &mut rng,
        )
        .unwrap();

        assert_ne!(plan.kind(), PlanKind::RailOnly);
        assert!(plan.is_viable());
    }

    #[test]
    fn exhausted_attempts_report_degenerate_plan() {
        let single = build_graph(
            &[RoutePolyline::from_lat_lons("Shuttle", Mode::Bus, &[(-32.0, 115.8), (-32.0, 115.81)])],
            &NetworkConfig::bare(),
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let result = random_travel_plan(
            &single,
            &single,
            lat_lon(-32.0, 115.8),
            lat_lon(-32.0, 115.81),
            &PlanConfig::default(),
            &mut rng,
        );

        assert!(matches!(
            result,
            Err(Error::DegeneratePlan { attempts: 6, min_points: 3 })
        ));
    }

    #[test]
    fn empty_graphs_are_degenerate() {
        let empty = build_graph(&[], &NetworkConfig::bare()).unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        let config = PlanConfig {
            max_attempts: 0,
            ..PlanConfig::default()
        };
        let result = random_travel_plan(
            &empty,
            &empty,
            lat_lon(-32.0, 115.8),
            lat_lon(-31.95, 115.86),
            &config,
            &mut rng,
        );

        assert!(matches!(result, Err(Error::DegeneratePlan { attempts: 1, .. })));
    }

    #[test]
    fn same_seed_same_plan() {
        let (bus, rail) = network();
        let config = PlanConfig {
            transfer_candidates: 3,
            ..PlanConfig::default()
        };
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            random_travel_plan(
                &bus,
                &rail,
                lat_lon(-32.05, 115.79),
                lat_lon(-31.95, 115.86),
                &config,
                &mut rng,
            )
            .unwrap()
        };

        assert_eq!(run(11), run(11));
    }
}
