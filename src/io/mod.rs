use geo::Polygon;

use crate::zone::{AxisRadii, CircleZone};

pub mod geojson_output;
pub mod svg_output;

/// A converted zone, ready to be written out.
#[derive(Debug)]
pub struct ZoneOutput {
    pub name: String,
    pub zone: CircleZone,
    pub radii: AxisRadii,
    pub precision: f64,
    pub boundary: Polygon,
}

impl ZoneOutput {
    pub fn new(name: String, zone: CircleZone, radii: AxisRadii, precision: f64, boundary: Polygon) -> Self {
        Self {
            name,
            zone,
            radii,
            precision,
            boundary,
        }
    }
}
