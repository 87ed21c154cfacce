use crate::animation::ease::smoothstep;
use crate::animation::frame::{Entity, Frame};
use crate::foundation::color::hsv_to_rgb;
use crate::foundation::core::{FrameIndex, Point, Rgba8, Vec2, unit_to_u8};
use crate::foundation::error::{LoomError, LoomResult};
use crate::foundation::math::{frame_progress, lerp_point};
use crate::foundation::rng::LoomRng;

/// Tuning knobs of the swarm; defaults reproduce the letter-formation look.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SwarmParams {
    /// Noise scale at the start of the flight; fades as `(1 - eased)^3`.
    pub jitter: f64,
    /// Standard deviation of the fixed per-particle target offset.
    pub target_jitter: f64,
    /// Base marker area range (points squared) before the center boost.
    pub min_size: f64,
    /// Upper end of the base marker area range.
    pub max_size: f64,
    /// Opacity of every particle.
    pub alpha: f64,
}

impl Default for SwarmParams {
    fn default() -> Self {
        Self {
            jitter: 0.008,
            target_jitter: 0.01,
            min_size: 5.0,
            max_size: 35.0,
            alpha: 0.95,
        }
    }
}

/// A particle's fixed setup; where it is at time `t` is derived, never stored.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Particle {
    /// Uniform random start inside the unit square.
    pub start: Point,
    /// Target plus its fixed Gaussian offset.
    pub target: Point,
    /// Marker area (points squared).
    pub size: f64,
    /// Fill color including opacity.
    pub color: Rgba8,
}

impl Particle {
    /// Noise-free position at eased progress `e`.
    pub fn position_at(&self, e: f64) -> Point {
        lerp_point(self.start, self.target, e)
    }
}

/// Particles and the frames of their flight.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Swarm {
    /// One particle per target, in target order.
    pub particles: Vec<Particle>,
    /// Frames; entity `i` of every frame is particle `i`.
    pub frames: Vec<Frame>,
}

/// Animate particles from random starts onto `targets` with default tuning.
pub fn animate(targets: &[Point], n_frames: usize, seed: u64) -> LoomResult<Swarm> {
    animate_with(targets, n_frames, seed, &SwarmParams::default())
}

/// Animate particles from random starts onto `targets` (unit-square coordinates).
///
/// Frame `i` sits at `t = i / (n_frames - 1)`; each particle is at
/// `(1 - e) start + e target + N(0, jitter (1 - e)^3)` with `e = smoothstep(t)`, clamped to the
/// unit square. Everything random comes from one RNG seeded with `seed`.
#[tracing::instrument(skip(targets, params), fields(targets = targets.len()))]
pub fn animate_with(
    targets: &[Point],
    n_frames: usize,
    seed: u64,
    params: &SwarmParams,
) -> LoomResult<Swarm> {
    if n_frames == 0 {
        return Err(LoomError::validation("swarm n_frames must be >= 1"));
    }
    if params.min_size < 0.0 || params.max_size < params.min_size {
        return Err(LoomError::validation(format!(
            "swarm size range [{}, {}] is invalid",
            params.min_size, params.max_size
        )));
    }

    let mut rng = LoomRng::new(seed);

    let starts: Vec<Point> = targets
        .iter()
        .map(|_| Point::new(rng.unit(), rng.unit()))
        .collect();
    let jittered: Vec<Point> = targets
        .iter()
        .map(|t| {
            *t + Vec2::new(
                rng.normal(params.target_jitter),
                rng.normal(params.target_jitter),
            )
        })
        .collect();

    let particles: Vec<Particle> = targets
        .iter()
        .zip(starts)
        .zip(jittered)
        .map(|((t, start), target)| {
            let (size, color) = depth_style(t.x, params, &mut rng);
            Particle {
                start,
                target,
                size,
                color,
            }
        })
        .collect();

    let frames = (0..n_frames)
        .map(|i| {
            let e = smoothstep(frame_progress(i, n_frames));
            let noise = params.jitter * (1.0 - e).powi(3);
            let entities = particles
                .iter()
                .map(|p| {
                    let pos = p.position_at(e) + Vec2::new(rng.normal(noise), rng.normal(noise));
                    Entity {
                        position: Point::new(pos.x.clamp(0.0, 1.0), pos.y.clamp(0.0, 1.0)),
                        deformation: Vec2::new(1.0, 1.0),
                        color: p.color,
                        size: p.size,
                    }
                })
                .collect();
            Frame {
                index: FrameIndex(i as u64),
                entities,
            }
        })
        .collect();

    tracing::debug!(particles = particles.len(), frames = n_frames, "swarm animated");
    Ok(Swarm { particles, frames })
}

/// Size and color from how far the particle's target is from the horizontal center.
///
/// Central particles get bigger and warmer, edge particles are dimmed.
fn depth_style(target_x: f64, params: &SwarmParams, rng: &mut LoomRng) -> (f64, Rgba8) {
    let dist = (target_x - 0.5).abs();
    let boost = (-(dist / 0.25).powi(2)).exp();
    let size = rng.uniform(params.min_size, params.max_size) * (0.7 + 0.8 * boost);

    let mut hue = rng.unit();
    if boost > 0.7 {
        hue = 0.05 + 0.1 * rng.unit();
    }
    let sat = rng.uniform(0.6, 1.0);
    let val = rng.uniform(0.7, 1.0);

    let falloff = 0.4 + 0.6 * (-(dist / 0.33).powi(2)).exp();
    let [r, g, b] = hsv_to_rgb(hue, sat, val);
    let color = Rgba8 {
        r: unit_to_u8(r * falloff),
        g: unit_to_u8(g * falloff),
        b: unit_to_u8(b * falloff),
        a: unit_to_u8(params.alpha),
    };
    (size, color)
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/swarm.rs"]
mod tests;
