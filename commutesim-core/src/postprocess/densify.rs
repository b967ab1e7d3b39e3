use itertools::Itertools;
use log::trace;

use crate::algo::haversine_coords;
use crate::model::Path;

/// Upper bound on the points a single segment is split into
pub const MAX_STEPS_PER_SEGMENT: usize = 10_000;

/// Splits every segment of `path` into steps no longer than `step_km`.
///
/// Each segment `(a, b)` contributes `a` plus evenly spaced points toward
/// `b`, interpolated linearly in lat/lon. The last original point closes
/// the result exactly once. Paths with fewer than two points and
/// non-positive or non-finite steps are returned unchanged. A segment is
/// never split into more than [`MAX_STEPS_PER_SEGMENT`] steps, so very
/// small steps yield coarser spacing than asked for.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn densify(path: &Path, step_km: f64) -> Path {
    let points = path.points();
    let Some(&last) = points.last() else {
        return path.clone();
    };
    if points.len() < 2 || !(step_km.is_finite() && step_km > 0.0) {
        return path.clone();
    }

    let mut dense = Vec::with_capacity(points.len());
    for (a, b) in points.iter().copied().tuple_windows() {
        let steps = (haversine_coords(a, b) / step_km)
            .ceil()
            .max(1.0)
            .min(MAX_STEPS_PER_SEGMENT as f64) as usize;
        dense.extend((0..steps).map(|i| {
            let t = i as f64 / steps as f64;
            a + (b - a) * t
        }));
    }
    dense.push(last);

    trace!("Densified {} points into {}", points.len(), dense.len());
    Path::new(dense)
}
