//! Draw plans: ordered shapes in world coordinates, grouped into panels.
//!
//! Generators stay unaware of pixels. Each panel maps a world box onto a pixel rectangle with
//! equal aspect and the y axis pointing up, the way a plotting axis would.

use crate::animation::frame::Frame;
use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8, Vec2};
use crate::foundation::error::{LoomError, LoomResult};
use crate::pattern::flower::Petal;
use crate::pattern::tiling::CirclePattern;

/// Points per inch; swarm marker areas are given in points squared.
const POINTS_PER_INCH: f64 = 72.0;

/// How a closed path is painted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    /// Filled; opacity lives in the color's alpha.
    Fill(Rgba8),
    /// Outlined with a pixel-space line width.
    Stroke {
        /// Line color.
        color: Rgba8,
        /// Line width in pixels.
        width_px: f64,
    },
}

/// One draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Filled circle in world units.
    Circle {
        /// Center.
        center: Point,
        /// Radius.
        radius: f64,
        /// Fill color.
        color: Rgba8,
    },
    /// Filled axis-aligned ellipse in world units.
    Ellipse {
        /// Center.
        center: Point,
        /// Horizontal and vertical radii.
        radii: Vec2,
        /// Fill color.
        color: Rgba8,
    },
    /// Closed petal outline in world units.
    Petal {
        /// Outline path.
        path: BezPath,
        /// Fill or stroke.
        paint: Paint,
    },
    /// Marker at a world position whose radius is in pixels.
    Dot {
        /// Center.
        center: Point,
        /// Radius in pixels.
        radius_px: f64,
        /// Fill color.
        color: Rgba8,
    },
}

/// World-space box shown by a panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    world: Rect,
    stretch: bool,
}

impl Viewport {
    /// Show `world`; it must be finite with positive extent.
    pub fn new(world: Rect) -> LoomResult<Self> {
        let finite = [world.x0, world.y0, world.x1, world.y1]
            .iter()
            .all(|v| v.is_finite());
        if !finite || world.width() <= 0.0 || world.height() <= 0.0 {
            return Err(LoomError::validation(format!(
                "viewport must have positive finite extent, got {world:?}"
            )));
        }
        Ok(Self {
            world,
            stretch: false,
        })
    }

    /// Show `world` filling the whole target, scaling each axis independently.
    pub fn stretched(world: Rect) -> LoomResult<Self> {
        Ok(Self {
            stretch: true,
            ..Self::new(world)?
        })
    }

    /// Square box `[-half, half]²` around the origin.
    pub fn centered(half: f64) -> LoomResult<Self> {
        Self::new(Rect::new(-half, -half, half, half))
    }

    /// World to pixel transform into `target` with the y axis flipped.
    ///
    /// The world box is centered in `target` with a uniform scale unless the viewport stretches.
    pub fn transform(&self, target: Rect) -> Affine {
        let kx = target.width() / self.world.width();
        let ky = target.height() / self.world.height();
        let (sx, sy) = if self.stretch {
            (kx, ky)
        } else {
            let s = kx.min(ky);
            (s, s)
        };
        let wc = self.world.center();
        let tc = target.center();
        Affine::new([sx, 0.0, 0.0, -sy, tc.x - sx * wc.x, tc.y + sy * wc.y])
    }
}

/// A viewport, its pixel rectangle and the shapes drawn in it.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    /// World box.
    pub viewport: Viewport,
    /// Pixel rectangle on the canvas.
    pub rect: Rect,
    /// Draw calls in order.
    pub ops: Vec<DrawOp>,
}

/// Everything needed to rasterize one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Output size.
    pub canvas: Canvas,
    /// Opaque background.
    pub background: Rgba8,
    /// Panels in draw order.
    pub panels: Vec<Panel>,
}

impl Scene {
    /// One panel covering the whole canvas.
    pub fn single(canvas: Canvas, background: Rgba8, viewport: Viewport, ops: Vec<DrawOp>) -> Self {
        Self {
            canvas,
            background,
            panels: vec![Panel {
                viewport,
                rect: canvas.rect(),
                ops,
            }],
        }
    }

    /// Total number of draw calls.
    pub fn op_count(&self) -> usize {
        self.panels.iter().map(|p| p.ops.len()).sum()
    }
}

/// Row-major cell rectangles of a `rows x cols` grid with `gap_px` between and around cells.
pub fn grid_cells(canvas: Canvas, rows: usize, cols: usize, gap_px: f64) -> LoomResult<Vec<Rect>> {
    if rows == 0 || cols == 0 {
        return Err(LoomError::validation("grid needs at least one row and column"));
    }
    let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
    let cell_w = (w - gap_px * (cols as f64 + 1.0)) / cols as f64;
    let cell_h = (h - gap_px * (rows as f64 + 1.0)) / rows as f64;
    if cell_w <= 0.0 || cell_h <= 0.0 {
        return Err(LoomError::validation(format!(
            "gap of {gap_px}px leaves no room for a {rows}x{cols} grid on {}x{}",
            canvas.width, canvas.height
        )));
    }

    let mut cells = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let x0 = gap_px + c as f64 * (cell_w + gap_px);
            let y0 = gap_px + r as f64 * (cell_h + gap_px);
            cells.push(Rect::new(x0, y0, x0 + cell_w, y0 + cell_h));
        }
    }
    Ok(cells)
}

/// Circles of a tiling in pre-order, tinted with the pattern's alpha.
pub fn tiling_ops(pattern: &CirclePattern) -> Vec<DrawOp> {
    let color = pattern.color.with_alpha(pattern.alpha);
    pattern
        .nodes()
        .map(|n| DrawOp::Circle {
            center: n.center,
            radius: n.radius,
            color,
        })
        .collect()
}

/// Deformed ellipses for the entities of a pose frame; `size` is the base radius.
pub fn body_ops(frame: &Frame) -> Vec<DrawOp> {
    frame
        .entities
        .iter()
        .map(|e| DrawOp::Ellipse {
            center: e.position,
            radii: Vec2::new(e.size * e.deformation.x, e.size * e.deformation.y),
            color: e.color,
        })
        .collect()
}

/// Petal look.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum PetalStyle {
    /// Translucent fill.
    Filled {
        /// Fill opacity.
        alpha: f64,
    },
    /// Opaque outline.
    Outline {
        /// Line width in pixels.
        width_px: f64,
    },
}

impl Default for PetalStyle {
    fn default() -> Self {
        Self::Filled { alpha: 0.2 }
    }
}

/// Petals painted with `style` in `color`.
pub fn petal_ops(petals: &[Petal], color: Rgba8, style: PetalStyle) -> Vec<DrawOp> {
    let paint = match style {
        PetalStyle::Filled { alpha } => Paint::Fill(color.with_alpha(alpha)),
        PetalStyle::Outline { width_px } => Paint::Stroke { color, width_px },
    };
    petals
        .iter()
        .map(|p| DrawOp::Petal {
            path: p.outline(),
            paint,
        })
        .collect()
}

/// Swarm markers; entity `size` is a marker area in points squared at `dpi`.
pub fn marker_ops(frame: &Frame, dpi: f64) -> Vec<DrawOp> {
    frame
        .entities
        .iter()
        .map(|e| DrawOp::Dot {
            center: e.position,
            radius_px: marker_radius_px(e.size, dpi),
            color: e.color,
        })
        .collect()
}

/// Pixel radius of a round marker of `area_pt2` points squared.
pub fn marker_radius_px(area_pt2: f64, dpi: f64) -> f64 {
    0.5 * area_pt2.max(0.0).sqrt() * dpi / POINTS_PER_INCH
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;
