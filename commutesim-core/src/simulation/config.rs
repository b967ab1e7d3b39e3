use rand::Rng;
use serde::Deserialize;

use super::plan::PlanKind;
use super::wait::ModeTiming;
use crate::Error;

/// Plans tried before giving up on a degenerate origin
pub const DEFAULT_MAX_PLAN_ATTEMPTS: usize = 6;

/// Travel-plan synthesis settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    pub bus: ModeTiming,
    pub rail: ModeTiming,
    pub walk_speed_kmh: f64,
    /// Draw waits at random instead of using the expected wait
    pub randomize_wait: bool,
    pub kind_weights: KindWeights,
    /// Rail stations near the origin considered for a bus to rail transfer
    pub transfer_candidates: usize,
    pub max_attempts: usize,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            bus: ModeTiming::bus(),
            rail: ModeTiming::rail(),
            walk_speed_kmh: 4.8,
            randomize_wait: true,
            kind_weights: KindWeights::default(),
            transfer_candidates: 3,
            max_attempts: DEFAULT_MAX_PLAN_ATTEMPTS,
        }
    }
}

/// Relative likelihood of each plan kind
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct KindWeights {
    pub bus_to_rail: f64,
    pub bus_only: f64,
    pub rail_only: f64,
}

impl Default for KindWeights {
    fn default() -> Self {
        Self {
            bus_to_rail: 0.6,
            bus_only: 0.2,
            rail_only: 0.2,
        }
    }
}

impl PlanConfig {
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] for negative or non-finite kind weights
    /// and non-positive speeds
    pub fn validate(&self) -> Result<(), Error> {
        self.kind_weights.validate()?;
        for (name, speed) in [
            ("bus speed", self.bus.speed_kmh),
            ("rail speed", self.rail.speed_kmh),
            ("walk speed", self.walk_speed_kmh),
        ] {
            if !(speed.is_finite() && speed > 0.0) {
                return Err(Error::InvalidData(format!(
                    "{name} must be a positive finite value, got {speed}"
                )));
            }
        }
        Ok(())
    }
}

impl KindWeights {
    fn entries(&self) -> [(PlanKind, f64); 3] {
        [
            (PlanKind::BusToRail, self.bus_to_rail),
            (PlanKind::BusOnly, self.bus_only),
            (PlanKind::RailOnly, self.rail_only),
        ]
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] when a weight is negative or not finite
    pub fn validate(&self) -> Result<(), Error> {
        match self.entries().into_iter().find(|(_, w)| !(w.is_finite() && *w >= 0.0)) {
            Some((kind, w)) => Err(Error::InvalidData(format!(
                "{kind} weight must be a finite value >= 0, got {w}"
            ))),
            None => Ok(()),
        }
    }

    /// Picks a kind in proportion to its weight. Negative and non-finite
    /// weights count as zero; all-zero weights pick bus to rail.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> PlanKind {
        let clean = |w: f64| if w.is_finite() { w.max(0.0) } else { 0.0 };
        let mut weighted = self.entries().map(|(kind, w)| (kind, clean(w)));

        // Scaled to a max of 1 so huge weights cannot overflow the total
        let largest = weighted.iter().map(|(_, w)| *w).fold(0.0, f64::max);
        if largest <= 0.0 {
            return PlanKind::BusToRail;
        }
        for (_, w) in &mut weighted {
            *w /= largest;
        }
        let total: f64 = weighted.iter().map(|(_, w)| w).sum();

        let mut roll = rng.random_range(0.0..total);
        for (kind, w) in weighted {
            if roll < w {
                return kind;
            }
            roll -= w;
        }
        PlanKind::BusToRail
    }
}
