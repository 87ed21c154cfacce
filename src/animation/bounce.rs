use crate::animation::pose::Pose;
use crate::foundation::error::{LoomError, LoomResult};
use crate::foundation::math::lerp;

/// How much the ball stretches vertically right above the ground.
pub const STRETCH_STRENGTH: f64 = 0.35;

/// `(sx, sy)` poses played at the landing point: squash in, peak squash, partial recovery.
pub const IMPACT_SQUASH: [(f64, f64); 3] = [(1.2, 0.8), (1.6, 0.5), (1.3, 0.7)];

/// One parabolic hop from `x_start` to `x_end`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BounceSpec {
    /// Take-off x.
    pub x_start: f64,
    /// Landing x.
    pub x_end: f64,
    /// Apex height above the ground.
    pub peak_height: f64,
}

impl BounceSpec {
    /// Bounce from `x_start` to `x_end` peaking at `peak_height`.
    pub const fn new(x_start: f64, x_end: f64, peak_height: f64) -> Self {
        Self {
            x_start,
            x_end,
            peak_height,
        }
    }
}

/// Three hops across an 18-unit floor with decaying height.
pub fn default_chain() -> Vec<BounceSpec> {
    vec![
        BounceSpec::new(0.0, 6.0, 9.0),
        BounceSpec::new(6.0, 12.0, 6.0),
        BounceSpec::new(12.0, 18.0, 3.0),
    ]
}

/// Airborne poses for a single hop plus an optional impact squash burst.
///
/// `air_steps` samples sit strictly inside `(0, 1)`; the take-off and landing instants are left
/// to the impact sequence. Deformation follows height: `sy = 1 + k(1 - y/peak)`, `sx = 1/sy`.
#[tracing::instrument]
pub fn bounce(
    x_start: f64,
    x_end: f64,
    peak_height: f64,
    air_steps: usize,
    include_squash: bool,
) -> LoomResult<Vec<Pose>> {
    if !peak_height.is_finite() || peak_height < 0.0 {
        return Err(LoomError::validation(format!(
            "bounce peak_height must be finite and >= 0, got {peak_height}"
        )));
    }
    if !x_start.is_finite() || !x_end.is_finite() {
        return Err(LoomError::validation("bounce x range must be finite"));
    }

    let squash_len = if include_squash { IMPACT_SQUASH.len() } else { 0 };
    let mut poses = Vec::with_capacity(air_steps + squash_len);

    for i in 1..=air_steps {
        let t = i as f64 / (air_steps + 1) as f64;
        let x = lerp(x_start, x_end, t);
        let y = peak_height * 4.0 * t * (1.0 - t);

        let height_ratio = if peak_height > 0.0 {
            y / peak_height
        } else {
            0.0
        };
        let sy = 1.0 + STRETCH_STRENGTH * (1.0 - height_ratio);
        let sx = 1.0 / sy;
        poses.push(Pose::scaled(x, y, sx, sy));
    }

    if include_squash {
        poses.extend(
            IMPACT_SQUASH
                .iter()
                .map(|&(sx, sy)| Pose::scaled(x_end, 0.0, sx, sy)),
        );
    }

    Ok(poses)
}

/// Generate each hop independently and concatenate them in order.
pub fn bounce_chain(
    bounces: &[BounceSpec],
    air_steps: usize,
    include_squash: bool,
) -> LoomResult<Vec<Pose>> {
    let mut out = Vec::new();
    for b in bounces {
        out.extend(bounce(
            b.x_start,
            b.x_end,
            b.peak_height,
            air_steps,
            include_squash,
        )?);
    }
    tracing::debug!(bounces = bounces.len(), poses = out.len(), "bounce chain built");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/bounce.rs"]
mod tests;
