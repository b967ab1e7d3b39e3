use commutesim_core::postprocess::{ImplausibleSegment, SegmentValidator};
use commutesim_core::{BoundingBox, Error, PlanConfig, TransitNetwork, TravelPlan, lat_lon};
use geo::Coord;
use geojson::{Feature, FeatureCollection};
use itertools::Itertools;
use rand::Rng;
use tracing::{debug, warn};

/// Outcome of one simulated commute
#[derive(Debug)]
pub struct RunReport {
    pub run: usize,
    pub origin: Coord<f64>,
    pub plan: Result<TravelPlan, Error>,
    /// First straight hop of a transit leg that failed validation
    pub implausible: Option<ImplausibleSegment>,
    /// Point count of the plan after densification
    pub densified_points: usize,
}

impl RunReport {
    pub fn summary(&self) -> String {
        let origin = format!("({:.4}, {:.4})", self.origin.y, self.origin.x);
        match &self.plan {
            Ok(plan) => {
                let mut line = format!(
                    "Run {}: {origin} {} [{}] {} ({} animated), {:.2} km, wait {:.1} min, total {:.1} min",
                    self.run,
                    plan.kind(),
                    plan.modes().iter().join(" > "),
                    plan.status_line(),
                    self.densified_points,
                    plan.total_km(),
                    plan.wait_minutes(),
                    plan.travel_minutes()
                );
                if let Some(segment) = &self.implausible {
                    line.push_str(&format!(", implausible: {segment}"));
                }
                line
            }
            Err(err) => format!("Run {}: {origin} no plan: {err}", self.run),
        }
    }
}

/// Uniformly random origin inside `bbox`
pub fn random_origin<R: Rng + ?Sized>(bbox: &BoundingBox, rng: &mut R) -> Coord<f64> {
    lat_lon(
        rng.random_range(bbox.min_lat..bbox.max_lat),
        rng.random_range(bbox.min_lon..bbox.max_lon),
    )
}

pub struct Simulation<'a> {
    pub network: &'a TransitNetwork,
    pub target: Coord<f64>,
    pub metro: BoundingBox,
    pub plan: &'a PlanConfig,
    pub validator: SegmentValidator,
    pub densify_step_km: f64,
}

impl Simulation<'_> {
    pub fn run<R: Rng + ?Sized>(&self, runs: usize, rng: &mut R) -> Vec<RunReport> {
        (1..=runs).map(|run| self.run_once(run, rng)).collect()
    }

    fn run_once<R: Rng + ?Sized>(&self, run: usize, rng: &mut R) -> RunReport {
        let origin = random_origin(&self.metro, rng);
        let plan = self
            .network
            .random_travel_plan(origin, self.target, self.plan, rng);

        let (implausible, densified_points) = match &plan {
            Ok(plan) => {
                let implausible = plan
                    .legs()
                    .iter()
                    .filter(|leg| leg.is_transit())
                    .find_map(|leg| self.validator.first_implausible(&leg.path));
                if let Some(segment) = &implausible {
                    warn!("Run {run}: {segment}");
                }
                (implausible, plan.densified(self.densify_step_km).len())
            }
            Err(err) => {
                debug!("Run {run}: {err}");
                (None, 0)
            }
        };

        RunReport {
            run,
            origin,
            plan,
            implausible,
            densified_points,
        }
    }
}

/// Features of every successful plan, tagged with their run number
pub fn collect_features(reports: &[RunReport]) -> Result<FeatureCollection, Error> {
    let mut features: Vec<Feature> = Vec::new();
    for report in reports {
        let Ok(plan) = &report.plan else {
            continue;
        };
        for mut feature in plan.to_geojson()?.features {
            feature.set_property("run", report.run);
            features.push(feature);
        }
    }

    Ok(FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    })
}
