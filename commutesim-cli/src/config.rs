use std::fs;
use std::path::{Path, PathBuf};

use commutesim_core::model::{PERTH_CBD, PERTH_METRO};
use commutesim_core::postprocess::SegmentValidator;
use commutesim_core::{BoundingBox, LatLon, NetworkConfig, PlanConfig};
use serde::Deserialize;

use crate::error::CliError;

/// Simulation settings read from a TOML file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub seed: u64,
    pub runs: usize,
    /// Route polylines CSV, relative to the config file
    pub routes_csv: PathBuf,
    /// Destination of every simulated commute
    pub target: LatLon,
    /// Box random origins are drawn from
    pub metro: BoundingBox,
    pub densify_step_km: f64,
    pub geojson_out: Option<PathBuf>,
    pub network: NetworkConfig,
    pub plan: PlanConfig,
    pub validation: SegmentValidator,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            runs: 10,
            routes_csv: PathBuf::from("data/perth_routes.csv"),
            target: PERTH_CBD,
            metro: PERTH_METRO,
            densify_step_km: 0.2,
            geojson_out: None,
            network: NetworkConfig::default(),
            plan: PlanConfig::default(),
            validation: SegmentValidator::default(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml(&text).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(dir) = path.parent() {
            config.routes_csv = dir.join(&config.routes_csv);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn validate(&self) -> Result<(), CliError> {
        if !self.target.is_finite() {
            return Err(CliError::InvalidSetting("target must be finite".into()));
        }
        if !(self.metro.max_lat > self.metro.min_lat && self.metro.max_lon > self.metro.min_lon) {
            return Err(CliError::InvalidSetting(
                "metro box must have a positive extent".into(),
            ));
        }
        if !(self.densify_step_km.is_finite() && self.densify_step_km > 0.0) {
            return Err(CliError::InvalidSetting(format!(
                "densify_step_km must be positive, got {}",
                self.densify_step_km
            )));
        }
        self.plan.validate()?;
        if let Some(zone) = &self.network.hills_zone {
            zone.validate()?;
        }
        Ok(())
    }
}
