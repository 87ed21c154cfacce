use kurbo::{ParamCurve, QuadBez};

use crate::foundation::core::{BezPath, Point, Vec2};
use crate::foundation::error::{LoomError, LoomResult};
use crate::foundation::math::linspace;

/// One petal: the region between two quadratic arcs sharing `start` and `end`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Petal {
    /// Generation the petal belongs to.
    pub generation: usize,
    /// Shared arc start.
    pub start: Point,
    /// Shared arc end.
    pub end: Point,
    /// Control point of the arc bulging to the left of `start -> end`.
    pub ctrl_a: Point,
    /// Control point of the arc bulging to the right.
    pub ctrl_b: Point,
}

impl Petal {
    /// The two bounding arcs.
    pub fn arcs(&self) -> (QuadBez, QuadBez) {
        (
            QuadBez::new(self.start, self.ctrl_a, self.end),
            QuadBez::new(self.start, self.ctrl_b, self.end),
        )
    }

    /// `samples` points along each arc, endpoints included.
    pub fn sample_arcs(&self, samples: usize) -> (Vec<Point>, Vec<Point>) {
        let (a, b) = self.arcs();
        (
            linspace(0.0, 1.0, samples).map(|t| a.eval(t)).collect(),
            linspace(0.0, 1.0, samples).map(|t| b.eval(t)).collect(),
        )
    }

    /// Closed outline: out along one arc, back along the other.
    pub fn outline(&self) -> BezPath {
        let mut p = BezPath::new();
        p.move_to(self.start);
        p.quad_to(self.ctrl_a, self.end);
        p.quad_to(self.ctrl_b, self.start);
        p.close_path();
        p
    }
}

/// Fibonacci flower layout.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FlowerParams {
    /// Full length of the two guide lines of each generation.
    pub lengths: Vec<f64>,
    /// Guide-line angles in degrees; generation `g` uses entry `g % len`.
    pub angle_patterns: Vec<Vec<f64>>,
    /// Petal bulge relative to the half-line length.
    pub curvature: f64,
}

impl Default for FlowerParams {
    fn default() -> Self {
        Self {
            lengths: vec![
                2.0, 2.0, 4.0, 6.0, 10.0, 16.0, 26.0, 42.0, 68.0, 110.0, 178.0,
            ],
            angle_patterns: vec![vec![90.0, 0.0], vec![45.0, -45.0]],
            curvature: 0.4,
        }
    }
}

/// Build the petals of every generation, centered at `center`.
///
/// Each generation lays two guide lines (never drawn) through the center at its pattern's
/// angles, splits each at the midpoint and grows a petal on each half. Halves of zero length are
/// skipped.
#[tracing::instrument(skip(params), fields(generations = params.lengths.len()))]
pub fn generate(center: Point, params: &FlowerParams) -> LoomResult<Vec<Petal>> {
    if params.angle_patterns.is_empty() {
        return Err(LoomError::validation(
            "flower angle_patterns must not be empty",
        ));
    }
    if let Some(bad) = params.lengths.iter().find(|l| !l.is_finite() || **l < 0.0) {
        return Err(LoomError::validation(format!(
            "flower lengths must be finite and >= 0, got {bad}"
        )));
    }

    let mut petals = Vec::new();
    for (generation, &length) in params.lengths.iter().enumerate() {
        let angles = &params.angle_patterns[generation % params.angle_patterns.len()];
        for &deg in angles {
            let dir = Vec2::from_angle(deg.to_radians()) * (length / 2.0);
            let (a, b) = (center - dir, center + dir);
            let mid = a.midpoint(b);
            for (s, e) in [(a, mid), (mid, b)] {
                if let Some(p) = petal_on(s, e, params.curvature, generation) {
                    petals.push(p);
                }
            }
        }
    }
    tracing::debug!(petals = petals.len(), "flower built");
    Ok(petals)
}

fn petal_on(start: Point, end: Point, curvature: f64, generation: usize) -> Option<Petal> {
    let v = end - start;
    let len = v.hypot();
    if len == 0.0 {
        return None;
    }
    let normal = Vec2::new(-v.y / len, v.x / len);
    let mid = start.midpoint(end);
    let bulge = normal * (curvature * len);
    Some(Petal {
        generation,
        start,
        end,
        ctrl_a: mid + bulge,
        ctrl_b: mid - bulge,
    })
}

/// Colors of the 3x3 flower grid, row-major.
pub const GRID_COLORS: [&str; 9] = [
    "#D94446", "#FA5053", "#FA766E", "#1A4A96", "#3E80D3", "#66A7E1", "#FF9900", "#FFCC33",
    "#FFE066",
];

#[cfg(test)]
#[path = "../../tests/unit/pattern/flower.rs"]
mod tests;
