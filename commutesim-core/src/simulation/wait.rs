use rand::Rng;
use serde::Deserialize;

use crate::{Km, Minutes};

/// Wait before boarding a service running every `headway` minutes.
///
/// Without randomization this is the expected wait under uniform arrival,
/// `base + headway / 2`. Randomized waits are drawn from
/// `[base, base + headway]` and never leave that range.
pub fn compute_wait<R: Rng + ?Sized>(
    base: Minutes,
    headway: Minutes,
    randomize: bool,
    rng: &mut R,
) -> Minutes {
    let headway = headway.max(0.0);
    if !randomize {
        return base + headway / 2.0;
    }

    let fraction: f64 = rng.random_range(0.0..=1.0);
    (base + headway * fraction).max(base).min(base + headway)
}

/// Service timing of one transit mode
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ModeTiming {
    pub base_wait_minutes: Minutes,
    pub headway_minutes: Minutes,
    /// Average in-vehicle speed including stops
    pub speed_kmh: f64,
}

impl ModeTiming {
    pub const fn bus() -> Self {
        Self {
            base_wait_minutes: 2.0,
            headway_minutes: 15.0,
            speed_kmh: 25.0,
        }
    }

    pub const fn rail() -> Self {
        Self {
            base_wait_minutes: 1.0,
            headway_minutes: 10.0,
            speed_kmh: 55.0,
        }
    }

    pub fn wait<R: Rng + ?Sized>(&self, randomize: bool, rng: &mut R) -> Minutes {
        compute_wait(self.base_wait_minutes, self.headway_minutes, randomize, rng)
    }

    pub fn ride_minutes(&self, distance: Km) -> Minutes {
        minutes_at(distance, self.speed_kmh)
    }
}

pub(crate) fn minutes_at(distance: Km, speed_kmh: f64) -> Minutes {
    if speed_kmh > 0.0 {
        distance / speed_kmh * 60.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    use super::*;

    /// Always returns the largest possible value
    struct MaxRng;

    impl RngCore for MaxRng {
        fn next_u32(&mut self) -> u32 {
            u32::MAX
        }

        fn next_u64(&mut self) -> u64 {
            u64::MAX
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0xFF);
        }
    }

    #[test]
    fn expected_wait_is_half_headway() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(compute_wait(5.0, 10.0, false, &mut rng), 10.0);
    }

    #[test]
    fn random_wait_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let wait = compute_wait(5.0, 10.0, true, &mut rng);
            assert!((5.0..=15.0).contains(&wait), "{wait}");
        }
    }

    #[test]
    fn worst_case_source_gives_full_headway() {
        let wait = compute_wait(5.0, 10.0, true, &mut MaxRng);

        assert!(wait <= 15.0);
        assert_relative_eq!(wait, 15.0, epsilon = 1e-6);
    }

    #[test]
    fn negative_headway_is_treated_as_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(compute_wait(4.0, -6.0, false, &mut rng), 4.0);
        assert_eq!(compute_wait(4.0, -6.0, true, &mut rng), 4.0);
    }

    #[test]
    fn ride_time_follows_speed() {
        assert_relative_eq!(ModeTiming::rail().ride_minutes(55.0), 60.0);
        assert_eq!(minutes_at(10.0, 0.0), 0.0);
    }
}
