use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use commutesim_core::{TransitNetwork, load_polylines};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod simulate;

use config::AppConfig;
use error::CliError;
use simulate::{Simulation, collect_features};

/// Simulates randomized bus and rail commutes toward a fixed target
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, default_value = "commutesim-cli/config/default.toml")]
    config: PathBuf,

    /// Route polylines CSV, overrides `routes_csv`
    #[arg(long)]
    routes: Option<PathBuf>,

    /// Random seed, overrides `seed`
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of simulated commutes, overrides `runs`
    #[arg(short = 'n', long)]
    runs: Option<usize>,

    /// Write every plan as GeoJSON to this file
    #[arg(long)]
    geojson: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let mut config = AppConfig::load(&args.config)?;
    if let Some(routes) = args.routes {
        config.routes_csv = routes;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(runs) = args.runs {
        config.runs = runs;
    }
    if args.geojson.is_some() {
        config.geojson_out = args.geojson;
    }

    let polylines = load_polylines(&config.routes_csv).map_err(|err| match err {
        commutesim_core::Error::IoError(source) => CliError::Io {
            path: config.routes_csv.clone(),
            source,
        },
        other => other.into(),
    })?;
    let network = TransitNetwork::build(&polylines, &config.network)?;

    println!("{}", network.info());
    println!("Stops: {}", network.stop_count());

    info!("Simulating {} commutes with seed {}", config.runs, config.seed);
    let mut rng = StdRng::seed_from_u64(config.seed);
    let simulation = Simulation {
        network: &network,
        target: config.target.into(),
        metro: config.metro,
        plan: &config.plan,
        validator: config.validation,
        densify_step_km: config.densify_step_km,
    };
    let reports = simulation.run(config.runs, &mut rng);

    for report in &reports {
        println!("{}", report.summary());
    }
    let planned = reports.iter().filter(|r| r.plan.is_ok()).count();
    info!("{planned} of {} commutes planned", reports.len());

    if let Some(path) = &config.geojson_out {
        let collection = collect_features(&reports)?;
        let text = serde_json::to_string_pretty(&collection)
            .map_err(|e| commutesim_core::Error::GeoJsonError(e.to_string()))?;
        fs::write(path, text).map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        })?;
        info!("Wrote {} features to {}", collection.features.len(), path.display());
    }

    Ok(())
}
