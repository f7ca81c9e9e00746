mod circle;
mod solver;

use geo::Point;
use thiserror::Error;

pub use circle::*;
pub use solver::*;

pub const EPSILON: f64 = 0.000000001;


#[derive(Clone, Debug, Error, PartialEq)]
pub enum ZoneError {
    #[error("radius must be a positive number of kilometers, got {0}")]
    InvalidRadius(f64),

    #[error("precision must be a step in [{min:.3e}, {max:.4}) radians, got {0}", min = MIN_PRECISION, max = MAX_PRECISION)]
    InvalidPrecision(f64),

    #[error("axis radii must be finite and non-negative degrees, got x {x}, y {y}")]
    InvalidAxisRadii { x: f64, y: f64 },

    #[error("coordinate out of range: lat {lat}, lon {lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("geodesic computation failed: {0}")]
    GeodesicComputation(String),
}


pub trait PointExt: Sized {
    /// Latitude within [-90, 90] and longitude within [-180, 180], both finite.
    fn is_valid_lat_lon(&self) -> bool;

    fn latitude(&self) -> f64;

    fn longitude(&self) -> f64;
}


impl PointExt for Point {
    fn is_valid_lat_lon(&self) -> bool {
        let (lon, lat) = self.x_y();
        lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon)
    }

    fn latitude(&self) -> f64 {
        self.y()
    }

    fn longitude(&self) -> f64 {
        self.x()
    }
}


/// Bring a longitude (or longitude difference) into [-180, 180].
pub fn wrap_longitude(lon: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon) {
        return lon;
    }

    (lon + 180.0).rem_euclid(360.0) - 180.0
}
