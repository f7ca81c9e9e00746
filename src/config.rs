use std::path::PathBuf;

use geo::Point;
use serde::Deserialize;

use crate::zone::{SolverKind, DEFAULT_PRECISION};

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct CenterConfig {
    pub lat: f64,
    pub lon: f64,
}

impl From<CenterConfig> for Point {
    fn from(center: CenterConfig) -> Self {
        Point::new(center.lon, center.lat)
    }
}

#[derive(Debug, Deserialize)]
pub struct ZoneConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub center: CenterConfig,
    /// Kilometers.
    pub radius: f64,
    /// Radians, overrides the job-wide precision.
    #[serde(default)]
    pub precision: Option<f64>,
}

fn default_precision() -> f64 {
    DEFAULT_PRECISION
}

#[derive(Debug, Deserialize)]
pub struct ZonesConfig {
    pub name: String,
    pub outdir: PathBuf,
    #[serde(default)]
    pub solver: SolverKind,
    #[serde(default = "default_precision")]
    pub precision: f64,
    pub zones: Vec<ZoneConfig>,
}
