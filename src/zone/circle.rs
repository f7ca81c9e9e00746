use std::f64::consts::TAU;

use geo::{Coord, LineString, Point, Polygon};
use log::debug;

use super::{wrap_longitude, GeodesicSolver, PointExt, ZoneError, EPSILON};

/// Sampling step used when the job does not set one, in radians.
pub const DEFAULT_PRECISION: f64 = 0.01;

/// Upper bound on the number of samples a single boundary may take.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Fewest distinct samples in a ring; with the closing point a GeoJSON ring needs 4 positions.
pub const MIN_SAMPLES: usize = 3;

/// Finest accepted sampling step, in radians.
pub const MIN_PRECISION: f64 = TAU / MAX_SAMPLES as f64;

/// Sampling steps must stay strictly below this, in radians.
pub const MAX_PRECISION: f64 = TAU / (MIN_SAMPLES - 1) as f64;

const BEARING_NORTH: f64 = 0.0;
const BEARING_EAST: f64 = 90.0;


/// Half-widths of a zone in coordinate space, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRadii {
    /// East-west, degrees of longitude.
    pub x: f64,
    /// North-south, degrees of latitude.
    pub y: f64,
}


/// A circle on the earth's surface: `radius` kilometers around `center` (x = lon, y = lat).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleZone {
    radius: f64,
    center: Point,
}

impl CircleZone {
    pub fn new(radius: f64, center: Point) -> Result<Self, ZoneError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ZoneError::InvalidRadius(radius));
        }

        if !center.is_valid_lat_lon() {
            return Err(ZoneError::InvalidCoordinate { lat: center.latitude(), lon: center.longitude() });
        }

        Ok(Self {
            radius,
            center,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Angular distance, in degrees, covered by the radius along `bearing_degrees`.
    ///
    /// East-west bearings measure longitude, north-south bearings measure latitude.
    /// The value is only meaningful near the center's latitude.
    pub fn angular_radius(&self, solver: &impl GeodesicSolver, bearing_degrees: f64) -> Result<f64, ZoneError> {
        let outside = solver.destination(self.center, bearing_degrees, self.radius)?;

        let bearing = bearing_degrees.to_radians();
        let east_west = bearing.sin().abs() > bearing.cos().abs();

        let delta = if east_west {
            wrap_longitude(outside.longitude() - self.center.longitude())
        } else {
            outside.latitude() - self.center.latitude()
        };

        Ok(delta.abs())
    }

    pub fn axis_radii(&self, solver: &impl GeodesicSolver) -> Result<AxisRadii, ZoneError> {
        Ok(AxisRadii {
            x: self.angular_radius(solver, BEARING_EAST)?,
            y: self.angular_radius(solver, BEARING_NORTH)?,
        })
    }

    /// Approximate the zone with a closed ring sampled every `precision` radians.
    pub fn boundary(&self, solver: &impl GeodesicSolver, precision: f64) -> Result<Polygon, ZoneError> {
        let samples = sample_count(precision)?;
        let radii = self.axis_radii(solver)?;
        Ok(self.sample(radii, precision, samples))
    }

    /// Same as [`CircleZone::boundary`] with radii computed beforehand.
    pub fn boundary_with_radii(&self, radii: AxisRadii, precision: f64) -> Result<Polygon, ZoneError> {
        let samples = sample_count(precision)?;

        let valid = |r: f64| r.is_finite() && r >= 0.0;
        if !valid(radii.x) || !valid(radii.y) {
            return Err(ZoneError::InvalidAxisRadii { x: radii.x, y: radii.y });
        }

        Ok(self.sample(radii, precision, samples))
    }

    fn sample(&self, radii: AxisRadii, precision: f64, samples: usize) -> Polygon {
        let (lon, lat) = self.center.x_y();

        debug!("Sampling {samples} points: x_radius {}, y_radius {}, step {precision}", radii.x, radii.y);

        let mut ring: Vec<Coord> = (0..samples)
            .map(|i| {
                let (sin, cos) = (i as f64 * precision).sin_cos();
                Coord {
                    x: lon + radii.x * cos,
                    y: lat + radii.y * sin,
                }
            })
            .collect();

        ring.push(ring[0]);

        Polygon::new(LineString::new(ring), vec![])
    }
}


/// Number of distinct samples around the ring, `ceil(2π / precision)`.
///
/// Steps finer than [`MIN_PRECISION`] or not below [`MAX_PRECISION`] are rejected, so a ring
/// always has at least [`MIN_SAMPLES`] distinct points.
pub fn sample_count(precision: f64) -> Result<usize, ZoneError> {
    if !precision.is_finite() || precision <= 0.0 {
        return Err(ZoneError::InvalidPrecision(precision));
    }

    // Exact divisors of 2π must not pick up an extra sample from rounding
    let samples = (TAU / precision - EPSILON).ceil();

    if samples < MIN_SAMPLES as f64 || samples > MAX_SAMPLES as f64 {
        return Err(ZoneError::InvalidPrecision(precision));
    }

    Ok(samples as usize)
}
