use crate::foundation::core::{Point, Vec2};
use crate::foundation::math::{lerp_point, linspace};

/// A straight stroke of a glyph or motif skeleton.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    /// Stroke start.
    pub start: Point,
    /// Stroke end.
    pub end: Point,
}

impl Segment {
    /// Segment between two coordinate pairs.
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            start: Point::new(x0, y0),
            end: Point::new(x1, y1),
        }
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        (self.end - self.start).hypot()
    }

    /// Left-hand unit normal, or `None` for a zero-length segment.
    pub fn unit_normal(&self) -> Option<Vec2> {
        let d = self.end - self.start;
        let len = d.hypot();
        if len > 0.0 {
            Some(Vec2::new(-d.y / len, d.x / len))
        } else {
            None
        }
    }
}

/// Turn stroke skeletons into a dense point cloud.
///
/// Every segment contributes `points_per_segment` evenly spaced samples (both endpoints
/// included). With `thickness > 0` and `rails > 1` the samples are repeated on `rails` parallel
/// lines spread over `[-thickness, +thickness]` along the segment normal. Zero-length segments
/// have no normal and fall back to the centerline, i.e. a repeated point.
#[tracing::instrument(skip(segments), fields(segments = segments.len()))]
pub fn sample(
    segments: &[Segment],
    points_per_segment: usize,
    thickness: f64,
    rails: usize,
) -> Vec<Point> {
    let mut out = Vec::new();
    for seg in segments {
        let base: Vec<Point> = linspace(0.0, 1.0, points_per_segment)
            .map(|t| lerp_point(seg.start, seg.end, t))
            .collect();

        match seg.unit_normal() {
            Some(n) if thickness > 0.0 && rails > 1 => {
                for off in linspace(-thickness, thickness, rails) {
                    out.extend(base.iter().map(|&p| p + n * off));
                }
            }
            _ => out.extend(base),
        }
    }
    tracing::debug!(points = out.len(), "sampled skeleton");
    out
}

/// Stroke skeleton of the word "GENUARY" on a coarse grid (letters ~4 units wide, y in `[-0.5, 5]`).
pub fn word_skeleton() -> Vec<Segment> {
    let s = Segment::new;
    vec![
        // G
        s(0.0, 0.0, 0.0, 5.0),
        s(0.0, 5.0, 4.5, 5.0),
        s(0.0, 0.0, 4.5, 0.0),
        s(4.5, 0.0, 4.5, 2.7),
        s(2.2, 2.7, 4.5, 2.7),
        // E
        s(8.0, 0.0, 8.0, 5.0),
        s(8.0, 5.0, 12.0, 5.0),
        s(8.0, 2.5, 10.8, 2.5),
        s(8.0, 0.0, 12.0, 0.0),
        // N
        s(16.0, 0.0, 16.0, 5.0),
        s(16.0, 5.0, 20.0, 0.0),
        s(20.0, 0.0, 20.0, 5.0),
        // U
        s(24.0, 5.0, 24.0, -0.5),
        s(24.0, -0.5, 28.0, -0.5),
        s(28.0, -0.5, 28.0, 5.0),
        // A
        s(32.0, 0.0, 34.0, 5.0),
        s(36.0, 0.0, 34.0, 5.0),
        s(33.0, 3.0, 35.0, 3.0),
        // R
        s(40.0, 0.0, 40.0, 5.0),
        s(40.0, 5.0, 43.5, 5.0),
        s(43.5, 5.0, 44.0, 4.2),
        s(44.0, 4.2, 44.0, 3.2),
        s(44.0, 3.2, 43.5, 2.5),
        s(43.5, 2.5, 40.0, 2.5),
        s(40.0, 2.5, 44.0, 0.0),
        // Y
        s(48.0, 5.0, 50.0, 3.5),
        s(52.0, 5.0, 50.0, 3.5),
        s(50.0, 3.5, 50.0, 0.0),
    ]
}

/// Layout applied to skeleton samples before they become swarm targets.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UnitFit {
    /// Horizontal stretch about the x-center (>1 widens).
    pub width_scale: f64,
    /// Horizontal padding in unit space.
    pub pad_x: f64,
    /// Vertical padding in unit space.
    pub pad_y: f64,
}

impl Default for UnitFit {
    fn default() -> Self {
        Self {
            width_scale: 1.35,
            pad_x: 0.08,
            pad_y: 0.15,
        }
    }
}

/// Widen, normalize and pad points into the unit square.
///
/// A flat axis (all points share one coordinate) maps to the middle of that axis.
pub fn fit_to_unit(points: &[Point], fit: UnitFit) -> Vec<Point> {
    let Some(bounds) = Bounds::of(points) else {
        return Vec::new();
    };
    let cx = 0.5 * (bounds.min.x + bounds.max.x);
    let widen = |x: f64| cx + (x - cx) * fit.width_scale;
    let (min_x, max_x) = {
        let (a, b) = (widen(bounds.min.x), widen(bounds.max.x));
        (a.min(b), a.max(b))
    };

    let norm = |v: f64, lo: f64, hi: f64| {
        if hi > lo { (v - lo) / (hi - lo) } else { 0.5 }
    };

    points
        .iter()
        .map(|p| {
            let nx = norm(widen(p.x), min_x, max_x);
            let ny = norm(p.y, bounds.min.y, bounds.max.y);
            Point::new(
                fit.pad_x + (1.0 - 2.0 * fit.pad_x) * nx,
                fit.pad_y + (1.0 - 2.0 * fit.pad_y) * ny,
            )
        })
        .collect()
}

#[derive(Clone, Copy, Debug)]
struct Bounds {
    min: Point,
    max: Point,
}

impl Bounds {
    fn of(points: &[Point]) -> Option<Self> {
        let first = *points.first()?;
        Some(points.iter().fold(
            Self {
                min: first,
                max: first,
            },
            |b, p| Self {
                min: Point::new(b.min.x.min(p.x), b.min.y.min(p.y)),
                max: Point::new(b.max.x.max(p.x), b.max.y.max(p.y)),
            },
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/skeleton.rs"]
mod tests;
