use geo::{Coord, Polygon};
use svg::{node::element, Document};

use super::ZoneOutput;

/// SVG y grows downwards, latitude grows northwards.
fn to_svg(c: Coord) -> (f64, f64) {
    (c.x, -c.y)
}

pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl ViewBox {
    pub fn new() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    pub fn include(&mut self, (x, y): (f64, f64)) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Grow every side by `ratio` of the larger dimension.
    pub fn add_margin(&mut self, ratio: f64) {
        let margin = (self.max_x - self.min_x).max(self.max_y - self.min_y) * ratio;
        self.min_x -= margin;
        self.min_y -= margin;
        self.max_x += margin;
        self.max_y += margin;
    }

    pub fn get(&self) -> (f64, f64, f64, f64) {
        if self.is_empty() {
            return (0.0, 0.0, 0.0, 0.0);
        }
        (self.min_x, self.min_y, self.max_x - self.min_x, self.max_y - self.min_y)
    }
}

fn make_svg_path(polygon: &Polygon, view_box: &mut ViewBox) -> Option<element::Path> {
    let mut points = polygon.exterior().coords().copied().map(to_svg);
    let p0 = points.next()?;

    let mut data = element::path::Data::new();
    data = data.move_to(p0);
    view_box.include(p0);

    for p in points {
        data = data.line_to(p);
        view_box.include(p);
    }

    data = data.close();

    Some(element::Path::new()
        .set("d", data)
        .set("vector-effect", "non-scaling-stroke"))
}

fn make_svg_centers(outputs: &[ZoneOutput], fill: &str) -> element::Group {
    let mut g_centers = element::Group::new()
        .set("fill", fill)
        .set("stroke", "none");

    for output in outputs {
        let (cx, cy) = to_svg(output.zone.center().0);
        let r = output.radii.x.min(output.radii.y) / 20.0;

        g_centers = g_centers.add(element::Circle::new()
            .set("cx", cx)
            .set("cy", cy)
            .set("r", r));
    }

    g_centers
}

pub fn make_svg(outputs: &[ZoneOutput]) -> Document {
    let mut view_box = ViewBox::new();

    let mut g_zones = element::Group::new()
        .set("fill", "#4774AA22")
        .set("stroke", "#4774AAFF")
        .set("stroke-width", 1);

    for output in outputs {
        if let Some(path) = make_svg_path(&output.boundary, &mut view_box) {
            g_zones = g_zones.add(path.set("id", output.name.as_str()));
        }
    }

    view_box.add_margin(0.05);

    Document::new()
        .add(g_zones)
        .add(make_svg_centers(outputs, "#893566FF"))
        .set("viewBox", view_box.get())
}
