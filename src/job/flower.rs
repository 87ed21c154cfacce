use crate::foundation::color::ColorDef;
use crate::foundation::core::{Canvas, Point, Rgba8};
use crate::foundation::error::{LoomError, LoomResult};
use crate::job::{FrameSource, Prepared, named, opaque, still_fps};
use crate::pattern::flower::{self, FlowerParams, GRID_COLORS};
use crate::render::plan::{Panel, PetalStyle, Scene, Viewport, grid_cells, petal_ops};

/// One Fibonacci flower.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FlowerJob {
    /// Output size.
    pub canvas: Canvas,
    /// Background color.
    pub background: ColorDef,
    /// Petal color.
    pub color: ColorDef,
    /// Fill or outline.
    pub style: PetalStyle,
    /// Geometry.
    pub params: FlowerParams,
    /// Half-size of the shown box in world units.
    pub view_half: f64,
}

impl Default for FlowerJob {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 900,
                height: 900,
            },
            background: ColorDef::from(Rgba8::WHITE),
            color: named("orange"),
            style: PetalStyle::default(),
            params: FlowerParams::default(),
            view_half: 60.0,
        }
    }
}

impl FlowerJob {
    pub(crate) fn prepare(&self) -> LoomResult<Prepared> {
        let petals = flower::generate(Point::ORIGIN, &self.params)?;
        let viewport = Viewport::centered(self.view_half)?;
        Prepared::still(Scene::single(
            self.canvas,
            opaque(self.background),
            viewport,
            petal_ops(&petals, self.color.to_rgba8(), self.style),
        ))
    }
}

/// The same flower in a grid, one color per cell.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FlowerGridJob {
    /// Output size.
    pub canvas: Canvas,
    /// Background color.
    pub background: ColorDef,
    /// Cell colors, row-major.
    pub colors: Vec<ColorDef>,
    /// Cells per row.
    pub columns: usize,
    /// Fill or outline.
    pub style: PetalStyle,
    /// Geometry.
    pub params: FlowerParams,
    /// Half-size of each cell's view box in world units.
    pub view_half: f64,
    /// Pixels between cells.
    pub gap_px: f64,
}

impl Default for FlowerGridJob {
    fn default() -> Self {
        let base = FlowerJob::default();
        Self {
            canvas: base.canvas,
            background: base.background,
            colors: GRID_COLORS
                .iter()
                .filter_map(|c| ColorDef::parse(c).ok())
                .collect(),
            columns: 3,
            style: base.style,
            params: base.params,
            view_half: base.view_half,
            gap_px: 10.0,
        }
    }
}

impl FlowerGridJob {
    /// Default grid drawn as outlines.
    pub fn outlined() -> Self {
        Self {
            style: PetalStyle::Outline { width_px: 1.2 },
            ..Self::default()
        }
    }

    pub(crate) fn prepare(&self) -> LoomResult<Prepared> {
        if self.colors.is_empty() || self.columns == 0 {
            return Err(LoomError::validation(
                "flower_grid needs at least one color and one column",
            ));
        }
        let petals = flower::generate(Point::ORIGIN, &self.params)?;
        let viewport = Viewport::centered(self.view_half)?;
        let rows = self.colors.len().div_ceil(self.columns);
        let cells = grid_cells(self.canvas, rows, self.columns, self.gap_px)?;

        let panels = self
            .colors
            .iter()
            .zip(cells)
            .map(|(c, rect)| Panel {
                viewport,
                rect,
                ops: petal_ops(&petals, c.to_rgba8(), self.style),
            })
            .collect();

        let scene = Scene {
            canvas: self.canvas,
            background: opaque(self.background),
            panels,
        };
        Prepared::new(self.canvas, still_fps(), FrameSource::Scenes(vec![scene]))
    }
}
