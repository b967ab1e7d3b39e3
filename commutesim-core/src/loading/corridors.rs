//! Major road and bus corridors preloaded into bus graphs so cross-town
//! travel follows real alignments instead of whatever single routes
//! happen to connect.

use crate::model::{Mode, RoutePolyline};

/// Built-in corridor set, ordered north-south freeways first
pub fn major_roads() -> Vec<RoutePolyline> {
    vec![
        RoutePolyline::from_lat_lons(
            "Kwinana Fwy BUS",
            Mode::Bus,
            &[
                (-31.9580, 115.8520),
                (-31.9890, 115.8460),
                (-32.0160, 115.8400),
                (-32.0520, 115.8440),
                (-32.0870, 115.8400),
                (-32.1200, 115.8410),
                (-32.1640, 115.8420),
                (-32.2100, 115.8290),
                (-32.2520, 115.8130),
            ],
        ),
        RoutePolyline::from_lat_lons(
            "Mitchell Fwy BUS",
            Mode::Bus,
            &[
                (-31.9480, 115.8520),
                (-31.9200, 115.8410),
                (-31.8900, 115.8240),
                (-31.8570, 115.8070),
                (-31.8240, 115.7890),
                (-31.7840, 115.7770),
                (-31.7450, 115.7680),
            ],
        ),
        RoutePolyline::from_lat_lons(
            "Great Eastern Hwy BUS",
            Mode::Bus,
            &[
                (-31.9540, 115.8660),
                (-31.9470, 115.8950),
                (-31.9380, 115.9260),
                (-31.9180, 115.9620),
                (-31.8980, 116.0070),
            ],
        ),
        RoutePolyline::from_lat_lons(
            "Albany Hwy BUS",
            Mode::Bus,
            &[
                (-31.9600, 115.8700),
                (-31.9800, 115.8950),
                (-32.0150, 115.9300),
                (-32.0520, 115.9600),
                (-32.0890, 115.9990),
            ],
        ),
        RoutePolyline::from_lat_lons(
            "Stirling Hwy BUS",
            Mode::Bus,
            &[
                (-31.9560, 115.8480),
                (-31.9700, 115.8200),
                (-31.9900, 115.7900),
                (-32.0200, 115.7600),
                (-32.0500, 115.7500),
            ],
        ),
    ]
}
