//! Route polyline ingestion from point-per-row CSV files
//!
//! Expected columns: `route_name,mode,sequence,lat,lon`. Rows of one route
//! may appear in any order; `sequence` fixes the point order.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use geo::Coord;
use hashbrown::HashMap;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::model::{Mode, RoutePolyline, lat_lon};
use crate::Error;

const REQUIRED_COLUMNS: [&str; 5] = ["route_name", "mode", "sequence", "lat", "lon"];

#[derive(Debug, Deserialize)]
struct PointRow {
    route_name: String,
    mode: Mode,
    sequence: u32,
    lat: f64,
    lon: f64,
}

struct PendingRoute {
    mode: Mode,
    points: Vec<(u32, Coord<f64>)>,
}

/// Reads route polylines from CSV data.
///
/// Routes come back in first-seen order. Unparseable rows and rows with
/// non-finite coordinates are skipped with a warning.
///
/// # Errors
///
/// Returns an error if the header is unreadable or lacks a required column
pub fn read_polylines<R: Read>(reader: R) -> Result<Vec<RoutePolyline>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(Error::InvalidData(format!(
            "Route CSV is missing the `{missing}` column"
        )));
    }

    let mut order: Vec<String> = Vec::new();
    let mut routes: HashMap<String, PendingRoute> = HashMap::new();
    let mut skipped = 0usize;

    for (line, row) in reader.deserialize::<PointRow>().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                warn!("Skipping route CSV record {}: {err}", line + 1);
                skipped += 1;
                continue;
            }
        };
        if !(row.lat.is_finite() && row.lon.is_finite()) {
            warn!("Skipping non-finite point in route {}", row.route_name);
            skipped += 1;
            continue;
        }

        let point = (row.sequence, lat_lon(row.lat, row.lon));
        match routes.get_mut(&row.route_name) {
            Some(route) => {
                if route.mode != row.mode {
                    warn!(
                        "Route {} mixes modes {} and {}, keeping {}",
                        row.route_name, route.mode, row.mode, route.mode
                    );
                }
                route.points.push(point);
            }
            None => {
                order.push(row.route_name.clone());
                routes.insert(
                    row.route_name,
                    PendingRoute {
                        mode: row.mode,
                        points: vec![point],
                    },
                );
            }
        }
    }

    let polylines: Vec<RoutePolyline> = order
        .into_iter()
        .filter_map(|name| {
            let mut route = routes.remove(&name)?;
            // Stable: equal sequence numbers keep file order
            route.points.sort_by_key(|&(sequence, _)| sequence);
            Some(RoutePolyline::new(
                name,
                route.mode,
                route.points.into_iter().map(|(_, coord)| coord),
            ))
        })
        .collect();

    if skipped > 0 {
        debug!("Skipped {skipped} route CSV records");
    }
    Ok(polylines)
}

/// Loads route polylines from a CSV file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed
pub fn load_polylines(path: &Path) -> Result<Vec<RoutePolyline>, Error> {
    let file = File::open(path)?;
    let polylines = read_polylines(file)?;
    info!(
        "Loaded {} route polylines from {}",
        polylines.len(),
        path.display()
    );
    Ok(polylines)
}
