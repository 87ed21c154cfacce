use rayon::prelude::*;

use crate::animation::ease::Ease;
use crate::foundation::color::blend_rgb;
use crate::foundation::core::{Canvas, Point, Rgba8};
use crate::foundation::error::{LoomError, LoomResult};
use crate::foundation::math::frame_progress;
use crate::foundation::rng::LoomRng;
use crate::render::backend::FrameRGBA;

/// Opacity of the ring of pixels touching the center.
const ADJACENT_OPACITY: f64 = 0.5;
/// Peak opacity of the distance gradient.
const GRADIENT_OPACITY: f64 = 0.5;

/// One radial "sun".
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RadialCenter {
    /// Center in pixel coordinates.
    pub position: Point,
    /// Color painted at and around the center.
    pub color: Rgba8,
    /// Radius reached when the growth factor is 1.
    pub max_radius: f64,
}

/// Opaque RGB8 raster, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 3` bytes.
    pub data: Vec<u8>,
}

impl PixelGrid {
    /// RGB of pixel `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Expand to an opaque RGBA frame.
    pub fn to_frame(&self) -> FrameRGBA {
        let mut data = Vec::with_capacity(self.data.len() / 3 * 4);
        for px in self.data.chunks_exact(3) {
            data.extend_from_slice(&[px[0], px[1], px[2], 255]);
        }
        FrameRGBA {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

/// Paint every pixel of `canvas` from its distances to `centers`.
///
/// For each center, in list order, with `r = growth * max_radius`:
///
/// - `d == 0` (only while `r > 0`): the exact center color,
/// - `0 < d <= sqrt(2)` and `d <= r`: 50% blend,
/// - `sqrt(2) < d <= r`: blend at `0.5 * (1 - d / max_radius)`,
/// - otherwise untouched.
///
/// Each blend starts from whatever earlier centers left in the pixel, so overlapping suns depend
/// on list order. That order dependence is part of the look and is kept.
#[tracing::instrument(skip(centers), fields(centers = centers.len()))]
pub fn compose(
    canvas: Canvas,
    centers: &[RadialCenter],
    growth: f64,
    background: Rgba8,
) -> LoomResult<PixelGrid> {
    canvas.validate()?;
    if !(0.0..=1.0).contains(&growth) {
        return Err(LoomError::validation(format!(
            "growth factor must be in [0, 1], got {growth}"
        )));
    }
    if let Some(c) = centers
        .iter()
        .find(|c| !c.max_radius.is_finite() || c.max_radius < 0.0)
    {
        return Err(LoomError::validation(format!(
            "radial max_radius must be finite and >= 0, got {}",
            c.max_radius
        )));
    }

    let width = canvas.width as usize;
    let bg = background.rgb();
    let mut data = vec![0u8; canvas.pixel_count() * 3];

    data.par_chunks_mut(width * 3)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.chunks_exact_mut(3).enumerate() {
                let p = Point::new(x as f64, y as f64);
                px.copy_from_slice(&shade_pixel(p, bg, centers, growth));
            }
        });

    Ok(PixelGrid {
        width: canvas.width,
        height: canvas.height,
        data,
    })
}

/// Color of a single pixel at `p` starting from `base`.
pub fn shade_pixel(p: Point, base: [u8; 3], centers: &[RadialCenter], growth: f64) -> [u8; 3] {
    let mut px = base;
    for c in centers {
        let current = growth * c.max_radius;
        if current <= 0.0 {
            continue;
        }
        let d = p.distance(c.position);
        let color = c.color.rgb();

        if d == 0.0 {
            px = color;
        } else if d > current {
            continue;
        } else if d <= std::f64::consts::SQRT_2 {
            px = blend_rgb(px, color, ADJACENT_OPACITY);
        } else {
            let opacity = (GRADIENT_OPACITY * (1.0 - d / c.max_radius)).clamp(0.0, GRADIENT_OPACITY);
            px = blend_rgb(px, color, opacity);
        }
    }
    px
}

/// Growth factor of each frame: `ease(i / (n_frames - 1))`, a single frame being fully grown.
pub fn growth_schedule(n_frames: usize, ease: Ease) -> Vec<f64> {
    (0..n_frames)
        .map(|i| ease.apply(frame_progress(i, n_frames)))
        .collect()
}

/// Growth animation: one grid per entry of [`growth_schedule`].
pub fn growth_frames(
    canvas: Canvas,
    centers: &[RadialCenter],
    n_frames: usize,
    ease: Ease,
    background: Rgba8,
) -> LoomResult<Vec<PixelGrid>> {
    if n_frames == 0 {
        return Err(LoomError::validation("radial n_frames must be >= 1"));
    }
    growth_schedule(n_frames, ease)
        .into_iter()
        .map(|growth| compose(canvas, centers, growth, background))
        .collect()
}

/// Random sun layout.
///
/// Each axis samples between `max_radius` and `len - max_radius`, whichever order those come in,
/// clipped to the canvas. Suns therefore crowd the middle of canvases smaller than twice the
/// maximum radius.
pub fn scatter_centers(
    canvas: Canvas,
    count: usize,
    min_radius: f64,
    max_radius: f64,
    color: Rgba8,
    seed: u64,
) -> LoomResult<Vec<RadialCenter>> {
    canvas.validate()?;
    if !min_radius.is_finite() || min_radius < 0.0 || !max_radius.is_finite() || max_radius < min_radius {
        return Err(LoomError::validation(format!(
            "radius range [{min_radius}, {max_radius}] is invalid"
        )));
    }
    let mut rng = LoomRng::new(seed);
    let axis = |rng: &mut LoomRng, len: u32| {
        let len = f64::from(len);
        let (a, b) = (max_radius, len - max_radius);
        rng.uniform(a.min(b).max(0.0), a.max(b).min(len))
    };

    Ok((0..count)
        .map(|_| {
            let x = axis(&mut rng, canvas.width);
            let y = axis(&mut rng, canvas.height);
            RadialCenter {
                position: Point::new(x, y),
                color,
                max_radius: rng.uniform(min_radius, max_radius),
            }
        })
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/radial.rs"]
mod tests;
