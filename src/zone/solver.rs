use geo::{Destination, Geodesic, Haversine, Point};
use serde::Deserialize;

use super::{wrap_longitude, PointExt, ZoneError};


/// Finds the point reached by travelling `distance_km` from `origin` along `bearing_degrees`
/// (clockwise from north).
pub trait GeodesicSolver {
    fn destination(&self, origin: Point, bearing_degrees: f64, distance_km: f64) -> Result<Point, ZoneError>;
}


/// Karney's geodesic on the WGS84 ellipsoid.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ellipsoidal;

/// Great circle on a sphere with the mean earth radius.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spherical;


fn check_inputs(origin: Point, bearing_degrees: f64, distance_km: f64) -> Result<(), ZoneError> {
    if !origin.is_valid_lat_lon() {
        return Err(ZoneError::GeodesicComputation(format!(
            "origin ({}, {}) is not a valid coordinate", origin.latitude(), origin.longitude(),
        )));
    }

    if !bearing_degrees.is_finite() {
        return Err(ZoneError::GeodesicComputation(format!("bearing {bearing_degrees} is not finite")));
    }

    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(ZoneError::GeodesicComputation(format!("distance {distance_km} km is not a non-negative number")));
    }

    Ok(())
}

fn check_output(dest: Point) -> Result<Point, ZoneError> {
    let (lon, lat) = dest.x_y();
    if !lon.is_finite() || !lat.is_finite() {
        return Err(ZoneError::GeodesicComputation(format!("destination ({lat}, {lon}) is not finite")));
    }

    Ok(Point::new(wrap_longitude(lon), lat))
}


impl GeodesicSolver for Ellipsoidal {
    fn destination(&self, origin: Point, bearing_degrees: f64, distance_km: f64) -> Result<Point, ZoneError> {
        check_inputs(origin, bearing_degrees, distance_km)?;
        check_output(Geodesic::destination(origin, bearing_degrees, distance_km * 1000.0))
    }
}

impl GeodesicSolver for Spherical {
    fn destination(&self, origin: Point, bearing_degrees: f64, distance_km: f64) -> Result<Point, ZoneError> {
        check_inputs(origin, bearing_degrees, distance_km)?;
        check_output(Haversine::destination(origin, bearing_degrees, distance_km * 1000.0))
    }
}


/// Solver selection as it appears in the job file.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
pub enum SolverKind {
    #[default]
    Geodesic,
    Haversine,
}

impl GeodesicSolver for SolverKind {
    fn destination(&self, origin: Point, bearing_degrees: f64, distance_km: f64) -> Result<Point, ZoneError> {
        match self {
            SolverKind::Geodesic => Ellipsoidal.destination(origin, bearing_degrees, distance_km),
            SolverKind::Haversine => Spherical.destination(origin, bearing_degrees, distance_km),
        }
    }
}
