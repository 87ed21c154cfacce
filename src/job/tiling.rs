use crate::foundation::color::ColorDef;
use crate::foundation::core::{Canvas, Point, Rgba8};
use crate::foundation::error::{LoomError, LoomResult};
use crate::job::{FrameSource, Prepared, named, opaque, still_fps};
use crate::pattern::tiling::{self, default_grid_fractions};
use crate::render::plan::{Panel, Scene, Viewport, grid_cells, tiling_ops};

/// One recursive circle pattern centered on the canvas.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TilingJob {
    /// Output size.
    pub canvas: Canvas,
    /// Background color.
    pub background: ColorDef,
    /// Root circle radius in world units.
    pub radius: f64,
    /// Circle color.
    pub color: ColorDef,
    /// Circle opacity.
    pub alpha: f64,
    /// Recursion depth.
    pub max_depth: u32,
    /// Child radius relative to its parent.
    pub shrink_fraction: f64,
    /// Half-size of the shown box relative to `radius`.
    pub margin: f64,
}

impl Default for TilingJob {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 800,
                height: 800,
            },
            background: ColorDef::from(Rgba8::WHITE),
            radius: 2.0,
            color: named("pink"),
            alpha: 0.2,
            max_depth: 2,
            shrink_fraction: 0.7,
            margin: 1.8,
        }
    }
}

impl TilingJob {
    pub(crate) fn prepare(&self) -> LoomResult<Prepared> {
        let pattern = tiling::generate(
            Point::ORIGIN,
            self.radius,
            self.color.to_rgba8(),
            self.alpha,
            self.max_depth,
            self.shrink_fraction,
        )?;
        let viewport = Viewport::centered(self.radius * self.margin)?;
        Prepared::still(Scene::single(
            self.canvas,
            opaque(self.background),
            viewport,
            tiling_ops(&pattern),
        ))
    }
}

/// Grid of circle patterns sharing one view box, one shrink fraction per cell.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TilingGridJob {
    /// Output size.
    pub canvas: Canvas,
    /// Background color.
    pub background: ColorDef,
    /// Root circle radius in world units.
    pub radius: f64,
    /// Circle color.
    pub color: ColorDef,
    /// Circle opacity.
    pub alpha: f64,
    /// Recursion depth.
    pub max_depth: u32,
    /// Shrink fraction of every cell, row by row; rows must have equal length.
    pub shrink_fractions: Vec<Vec<f64>>,
    /// Half-size of each cell's view box relative to `radius`.
    pub margin: f64,
    /// Pixels between cells.
    pub gap_px: f64,
}

impl Default for TilingGridJob {
    fn default() -> Self {
        let base = TilingJob::default();
        Self {
            canvas: base.canvas,
            background: base.background,
            radius: base.radius,
            color: base.color,
            alpha: base.alpha,
            max_depth: base.max_depth,
            shrink_fractions: default_grid_fractions()
                .iter()
                .map(|row| row.to_vec())
                .collect(),
            margin: base.margin,
            gap_px: 8.0,
        }
    }
}

impl TilingGridJob {
    pub(crate) fn prepare(&self) -> LoomResult<Prepared> {
        let rows = self.shrink_fractions.len();
        let cols = self.shrink_fractions.first().map_or(0, Vec::len);
        if self.shrink_fractions.iter().any(|r| r.len() != cols) {
            return Err(LoomError::validation(
                "shrink_fractions rows must all have the same length",
            ));
        }
        let cells = grid_cells(self.canvas, rows, cols, self.gap_px)?;
        let viewport = Viewport::centered(self.radius * self.margin)?;
        let color = self.color.to_rgba8();

        let panels = self
            .shrink_fractions
            .iter()
            .flatten()
            .zip(cells)
            .map(|(&shrink, rect)| {
                let pattern = tiling::generate(
                    Point::ORIGIN,
                    self.radius,
                    color,
                    self.alpha,
                    self.max_depth,
                    shrink,
                )?;
                Ok(Panel {
                    viewport,
                    rect,
                    ops: tiling_ops(&pattern),
                })
            })
            .collect::<LoomResult<Vec<_>>>()?;

        let scene = Scene {
            canvas: self.canvas,
            background: opaque(self.background),
            panels,
        };
        Prepared::new(self.canvas, still_fps(), FrameSource::Scenes(vec![scene]))
    }
}
