use geo::{LineString, Polygon};
use serde_json::{json, Value};

use super::ZoneOutput;


fn ring_coordinates(ring: &LineString) -> Value {
    ring.coords()
        .map(|c| json!([c.x, c.y]))
        .collect()
}

/// GeoJSON `Polygon` geometry, positions as `[lon, lat]`.
pub fn polygon_geometry(polygon: &Polygon) -> Value {
    let rings: Vec<Value> = std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(ring_coordinates)
        .collect();

    json!({
        "type": "Polygon",
        "coordinates": rings,
    })
}

fn make_feature(output: &ZoneOutput) -> Value {
    let center = output.zone.center();

    json!({
        "type": "Feature",
        "geometry": polygon_geometry(&output.boundary),
        "properties": {
            "name": output.name,
            "radius_km": output.zone.radius(),
            "center": [center.x(), center.y()],
            "x_radius": output.radii.x,
            "y_radius": output.radii.y,
            "precision": output.precision,
        },
    })
}

pub fn make_geojson(outputs: &[ZoneOutput]) -> Value {
    let features: Vec<Value> = outputs.iter().map(make_feature).collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}
