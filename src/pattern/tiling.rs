use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::{LoomError, LoomResult};

/// Deepest recursion accepted; `4^depth` nodes grow quickly.
pub const MAX_TILING_DEPTH: u32 = 10;

/// A circle in the recursive tiling tree.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CircleNode {
    /// Circle center.
    pub center: Point,
    /// Circle radius.
    pub radius: f64,
    /// 0 for the root.
    pub depth: u32,
    /// Children in left, right, bottom, top order; empty at the depth limit.
    pub children: Vec<CircleNode>,
}

impl CircleNode {
    /// Nodes in pre-order: each parent before its children.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }
}

/// Pre-order walk over a [`CircleNode`] tree.
pub struct PreOrder<'a> {
    stack: Vec<&'a CircleNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a CircleNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// A generated tiling: the circle tree plus how every circle is painted.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CirclePattern {
    /// Root circle.
    pub root: CircleNode,
    /// Fill color shared by every circle.
    pub color: Rgba8,
    /// Fill opacity in `0..=1`.
    pub alpha: f64,
}

impl CirclePattern {
    /// Nodes in draw order.
    pub fn nodes(&self) -> PreOrder<'_> {
        self.root.iter()
    }

    /// Total number of circles.
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Depth of the deepest circle.
    pub fn max_depth_reached(&self) -> u32 {
        self.nodes().map(|n| n.depth).max().unwrap_or(0)
    }
}

/// Build the recursive circle tree.
///
/// Each circle inscribes an (invisible) square of side `r*sqrt(2)`; four children of radius
/// `r*shrink_fraction` sit tangent to the square's edges, centered `half_side + child_r` away from
/// the parent along each axis. `shrink_fraction >= 1` grows the circles and is allowed.
#[tracing::instrument(skip(color))]
pub fn generate(
    center: Point,
    radius: f64,
    color: Rgba8,
    alpha: f64,
    max_depth: u32,
    shrink_fraction: f64,
) -> LoomResult<CirclePattern> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(LoomError::validation(format!(
            "tiling radius must be finite and >= 0, got {radius}"
        )));
    }
    if !shrink_fraction.is_finite() || shrink_fraction < 0.0 {
        return Err(LoomError::validation(format!(
            "shrink_fraction must be finite and >= 0, got {shrink_fraction}"
        )));
    }
    if !(0.0..=1.0).contains(&alpha) {
        return Err(LoomError::validation(format!(
            "alpha must be in [0, 1], got {alpha}"
        )));
    }
    if max_depth > MAX_TILING_DEPTH {
        return Err(LoomError::validation(format!(
            "max_depth {max_depth} exceeds the supported maximum of {MAX_TILING_DEPTH}"
        )));
    }

    let root = subdivide(center, radius, 0, max_depth, shrink_fraction);
    Ok(CirclePattern { root, color, alpha })
}

fn subdivide(center: Point, r: f64, depth: u32, max_depth: u32, shrink: f64) -> CircleNode {
    if depth >= max_depth {
        return CircleNode {
            center,
            radius: r,
            depth,
            children: Vec::new(),
        };
    }

    let half_side = r * std::f64::consts::SQRT_2 / 2.0;
    let child_r = r * shrink;
    let off = half_side + child_r;
    let (cx, cy) = (center.x, center.y);

    let children = [
        Point::new(cx - off, cy),
        Point::new(cx + off, cy),
        Point::new(cx, cy - off),
        Point::new(cx, cy + off),
    ]
    .into_iter()
    .map(|c| subdivide(c, child_r, depth + 1, max_depth, shrink))
    .collect();

    CircleNode {
        center,
        radius: r,
        depth,
        children,
    }
}

/// Shrink fractions of the 3x3 comparison grid, row-major.
pub fn default_grid_fractions() -> [[f64; 3]; 3] {
    [[0.7, 0.75, 0.8], [0.85, 0.9, 0.95], [1.0, 1.1, 1.2]]
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/tiling.rs"]
mod tests;
