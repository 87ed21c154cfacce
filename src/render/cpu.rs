use kurbo::{PathEl, Shape};

use crate::foundation::core::{Affine, BezPath, Point, Rgba8};
use crate::foundation::error::{LoomError, LoomResult};
use crate::render::backend::FrameRGBA;
use crate::render::plan::{DrawOp, Paint, Scene};

/// Flattening tolerance for circles and ellipses, in output pixels.
const SHAPE_TOLERANCE_PX: f64 = 0.1;

/// CPU rasterizer powered by `vello_cpu`.
///
/// Holds on to its render context and pixmap so consecutive frames of the same size reuse them.
#[derive(Default)]
pub struct CpuRasterizer {
    ctx: Option<vello_cpu::RenderContext>,
    pixmap: Option<vello_cpu::Pixmap>,
}

impl CpuRasterizer {
    /// Fresh rasterizer without cached buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rasterize `scene` into an opaque frame.
    #[tracing::instrument(skip(self, scene), fields(ops = scene.op_count()))]
    pub fn render(&mut self, scene: &Scene) -> LoomResult<FrameRGBA> {
        scene.canvas.validate()?;
        let width: u16 = scene
            .canvas
            .width
            .try_into()
            .map_err(|_| LoomError::validation("canvas width exceeds u16"))?;
        let height: u16 = scene
            .canvas
            .height
            .try_into()
            .map_err(|_| LoomError::validation("canvas height exceeds u16"))?;

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();

        let mut pixmap = match self.pixmap.take() {
            Some(p) if p.width() == width && p.height() == height => p,
            _ => vello_cpu::Pixmap::new(width, height),
        };

        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(color_to_cpu(scene.background.with_alpha(1.0)));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));

        for panel in &scene.panels {
            let tr = panel.viewport.transform(panel.rect);
            // Panels only ever paint inside their own cell.
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.push_clip_layer(&bezpath_to_cpu(&panel.rect.to_path(0.1)));
            let drawn = panel.ops.iter().try_for_each(|op| draw_op(&mut ctx, tr, op));
            ctx.pop_layer();
            drawn?;
        }

        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        let frame = FrameRGBA {
            width: scene.canvas.width,
            height: scene.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
        };
        self.ctx = Some(ctx);
        self.pixmap = Some(pixmap);
        Ok(frame)
    }
}

fn draw_op(ctx: &mut vello_cpu::RenderContext, tr: Affine, op: &DrawOp) -> LoomResult<()> {
    let tolerance = world_tolerance(tr);
    match op {
        DrawOp::Circle {
            center,
            radius,
            color,
        } => {
            check_extent(*radius, "circle radius")?;
            let shape = kurbo::Circle::new(*center, *radius);
            fill_world(ctx, tr, &shape.to_path(tolerance), *color);
        }
        DrawOp::Ellipse {
            center,
            radii,
            color,
        } => {
            check_extent(radii.x, "ellipse radius")?;
            check_extent(radii.y, "ellipse radius")?;
            let shape = kurbo::Ellipse::new(*center, *radii, 0.0);
            fill_world(ctx, tr, &shape.to_path(tolerance), *color);
        }
        DrawOp::Petal { path, paint } => match *paint {
            Paint::Fill(color) => fill_world(ctx, tr, path, color),
            Paint::Stroke { color, width_px } => {
                check_extent(width_px, "stroke width")?;
                // Stroke in pixel space so the width does not scale with the viewport.
                ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                ctx.set_paint(color_to_cpu(color));
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width_px));
                ctx.stroke_path(&bezpath_to_cpu(&(tr * path.clone())));
            }
        },
        DrawOp::Dot {
            center,
            radius_px,
            color,
        } => {
            check_extent(*radius_px, "marker radius")?;
            let c = tr * *center;
            let shape = kurbo::Circle::new(c, *radius_px);
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(color_to_cpu(*color));
            ctx.fill_path(&bezpath_to_cpu(&shape.to_path(SHAPE_TOLERANCE_PX)));
        }
    }
    Ok(())
}

fn fill_world(ctx: &mut vello_cpu::RenderContext, tr: Affine, path: &BezPath, color: Rgba8) {
    ctx.set_transform(affine_to_cpu(tr));
    ctx.set_paint(color_to_cpu(color));
    ctx.fill_path(&bezpath_to_cpu(path));
}

/// World-space flattening tolerance that keeps the error under `SHAPE_TOLERANCE_PX` once `tr`
/// is applied.
fn world_tolerance(tr: Affine) -> f64 {
    let [a, b, c, d, _, _] = tr.as_coeffs();
    let scale = a.hypot(b).max(c.hypot(d));
    if scale.is_finite() && scale > 0.0 {
        SHAPE_TOLERANCE_PX / scale
    } else {
        SHAPE_TOLERANCE_PX
    }
}

fn check_extent(v: f64, what: &str) -> LoomResult<()> {
    if !v.is_finite() || v < 0.0 {
        return Err(LoomError::geometry(format!(
            "{what} must be finite and >= 0, got {v}"
        )));
    }
    Ok(())
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let pt = |p: Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
