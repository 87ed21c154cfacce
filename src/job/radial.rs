use crate::animation::ease::Ease;
use crate::effects::radial::{RadialCenter, growth_schedule, scatter_centers};
use crate::foundation::color::ColorDef;
use crate::foundation::core::{Canvas, Fps, Point, Rgba8};
use crate::foundation::error::{LoomError, LoomResult};
use crate::job::{FrameSource, Prepared, opaque};

/// One explicitly placed sun, in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SunDef {
    /// Center x.
    pub x: f64,
    /// Center y.
    pub y: f64,
    /// Radius when fully grown.
    pub radius: f64,
    /// Overrides the job's `center_color`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorDef>,
}

/// Random layout used when no suns are listed.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScatterDef {
    /// Number of suns.
    pub count: usize,
    /// Smallest radius.
    pub min_radius: f64,
    /// Largest radius; also the edge margin.
    pub max_radius: f64,
    /// RNG seed.
    pub seed: u64,
}

impl Default for ScatterDef {
    fn default() -> Self {
        Self {
            count: 10,
            min_radius: 100.0,
            max_radius: 550.0,
            seed: 42,
        }
    }
}

/// Radial sun gradient; one frame renders the fully grown still.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RadialJob {
    /// Output size.
    pub canvas: Canvas,
    /// Untouched pixel color.
    pub background: ColorDef,
    /// Sun color.
    pub center_color: ColorDef,
    /// Explicit suns in blend order; empty means scatter.
    pub suns: Vec<SunDef>,
    /// Random layout for an empty `suns` list.
    pub scatter: ScatterDef,
    /// Growth frames.
    pub n_frames: usize,
    /// Playback rate.
    pub fps: Fps,
    /// Growth curve.
    pub ease: Ease,
}

impl Default for RadialJob {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 800,
                height: 800,
            },
            background: ColorDef::from(Rgba8::WHITE),
            center_color: ColorDef::from(Rgba8::opaque(0xA3, 0x38, 0x00)),
            suns: Vec::new(),
            scatter: ScatterDef::default(),
            n_frames: 60,
            fps: Fps { num: 10, den: 1 },
            ease: Ease::Smoothstep,
        }
    }
}

impl RadialJob {
    /// Resolved suns in blend order.
    pub fn centers(&self) -> LoomResult<Vec<RadialCenter>> {
        let color = opaque(self.center_color);
        if self.suns.is_empty() {
            let s = self.scatter;
            return scatter_centers(
                self.canvas,
                s.count,
                s.min_radius,
                s.max_radius,
                color,
                s.seed,
            );
        }
        Ok(self
            .suns
            .iter()
            .map(|s| RadialCenter {
                position: Point::new(s.x, s.y),
                color: s.color.map_or(color, opaque),
                max_radius: s.radius,
            })
            .collect())
    }

    pub(crate) fn prepare(&self) -> LoomResult<Prepared> {
        if self.n_frames == 0 {
            return Err(LoomError::validation("radial n_frames must be >= 1"));
        }
        let centers = self.centers()?;
        if let Some(bad) = centers
            .iter()
            .find(|c| !c.max_radius.is_finite() || c.max_radius < 0.0)
        {
            return Err(LoomError::validation(format!(
                "sun radius must be finite and >= 0, got {}",
                bad.max_radius
            )));
        }
        Prepared::new(
            self.canvas,
            self.fps,
            FrameSource::Radial {
                centers,
                background: opaque(self.background),
                growth: growth_schedule(self.n_frames, self.ease),
            },
        )
    }
}
