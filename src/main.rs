pub mod config;
pub mod io;
pub mod zone;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use config::{ZoneConfig, ZonesConfig};
use io::{geojson_output::make_geojson, svg_output::make_svg, ZoneOutput};
use log::{debug, error, info};
use zone::{CircleZone, GeodesicSolver};


#[derive(Parser)]
pub struct Args {
    /// Path to the zones config.
    pub config: PathBuf,
}


fn main() {
    if let Err(_) = std::env::var("RUST_LOG") {
        unsafe { std::env::set_var("RUST_LOG", "info") };
    }

    env_logger::init();
    let args = Args::parse();
    if let Err(err) = run(&args.config) {
        error!("{err:#}");
        std::process::exit(1);
    }
}


pub fn convert_zone(solver: &impl GeodesicSolver, name: String, zone: &ZoneConfig, precision: f64) -> Result<ZoneOutput> {
    let precision = zone.precision.unwrap_or(precision);
    let circle = CircleZone::new(zone.radius, zone.center.into())?;

    let radii = circle.axis_radii(solver)?;
    debug!("Zone {name} - x_radius {}, y_radius {}", radii.x, radii.y);

    let boundary = circle.boundary_with_radii(radii, precision)?;

    Ok(ZoneOutput::new(name, circle, radii, precision, boundary))
}


pub fn run(config_path: &Path) -> Result<()> {
    let file = std::fs::File::open(config_path).with_context(|| format!("opening {config_path:?}"))?;
    let config: ZonesConfig = serde_norway::from_reader(file)?;

    if !config.outdir.exists() {
        std::fs::create_dir_all(&config.outdir)?;
    }
    ensure!(config.outdir.is_dir(), "{:?} should be a directory", config.outdir);

    let name = config.name;
    let solver = config.solver;

    info!("Converting {} zones with the {solver:?} solver", config.zones.len());

    let mut outputs: Vec<ZoneOutput> = Vec::with_capacity(config.zones.len());

    for (i, zone) in config.zones.iter().enumerate() {
        let zone_name = zone.name.clone().unwrap_or_else(|| format!("zone-{i:02}"));

        let output = convert_zone(&solver, zone_name, zone, config.precision)
            .with_context(|| format!("Zone {i:02}"))?;

        info!("Zone {i:02} ({}) - {} boundary points", output.name, output.boundary.exterior().0.len());

        outputs.push(output);
    }

    let geojson = make_geojson(&outputs);
    let output_path = config.outdir.join(format!("{name}.geojson"));
    std::fs::write(&output_path, serde_json::to_string_pretty(&geojson)?)?;

    info!("Produced {output_path:?}");

    let document = make_svg(&outputs);
    let output_path = config.outdir.join(format!("{name}.svg"));
    svg::save(&output_path, &document)?;

    info!("Produced the overview SVG");

    Ok(())
}
