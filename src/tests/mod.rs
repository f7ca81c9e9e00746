
use std::{cell::Cell, path::{Path, PathBuf}};

use anyhow::{ensure, Result};
use geo::{Coord, Point};

use crate::zone::{GeodesicSolver, ZoneError};

pub const OUTDIR: &'_ str = "tmp/test-output/";

fn ensure_dir(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }
    ensure!(dir.is_dir(), "{dir:?} should be a directory");
    Ok(())
}

pub fn init_test_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .format_timestamp(None)
        .format_target(false)
        .is_test(true)
        .try_init();
}

/// Write `yaml` as a job file named `name` (its `outdir` should be [`test_outdir`]) and run it.
pub fn run(name: &str, yaml: &str) -> Result<PathBuf> {
    init_test_logger();
    ensure_dir(OUTDIR)?;

    let config_path = Path::new(OUTDIR).join(format!("config-{name}")).with_extension("yaml");
    std::fs::write(&config_path, yaml)?;

    crate::run(&config_path)?;

    Ok(test_outdir(name))
}

pub fn test_outdir(name: &str) -> PathBuf {
    Path::new(OUTDIR).join(format!("output-{name}"))
}


/// Wraps a solver and counts how often it was asked for a destination.
pub struct CountingSolver<S> {
    inner: S,
    pub calls: Cell<usize>,
}

impl<S> CountingSolver<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }
}

impl<S: GeodesicSolver> GeodesicSolver for CountingSolver<S> {
    fn destination(&self, origin: Point, bearing_degrees: f64, distance_km: f64) -> Result<Point, ZoneError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.destination(origin, bearing_degrees, distance_km)
    }
}

/// A solver that can never compute anything.
pub struct FailingSolver;

impl GeodesicSolver for FailingSolver {
    fn destination(&self, _origin: Point, _bearing_degrees: f64, _distance_km: f64) -> Result<Point, ZoneError> {
        Err(ZoneError::GeodesicComputation("no solution".into()))
    }
}

pub fn coords_eq(a: Coord, b: Coord, tolerance: f64) -> bool {
    (a.x - b.x).abs() < tolerance && (a.y - b.y).abs() < tolerance
}
