//! Randomized multi-leg commute synthesis

mod config;
mod plan;
mod synthesizer;
mod to_geojson;
mod wait;

pub use config::{DEFAULT_MAX_PLAN_ATTEMPTS, KindWeights, PlanConfig};
pub use plan::{Leg, PlanKind, TravelPlan};
pub use synthesizer::random_travel_plan;
pub use wait::{ModeTiming, compute_wait};
