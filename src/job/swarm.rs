use crate::foundation::color::ColorDef;
use crate::foundation::core::{Canvas, Fps, Rect, Rgba8};
use crate::foundation::error::{LoomError, LoomResult};
use crate::job::{FrameSource, Prepared, opaque};
use crate::pattern::skeleton::{self, UnitFit, word_skeleton};
use crate::pattern::swarm::{self, SwarmParams};
use crate::render::plan::{Scene, Viewport, marker_ops};

/// Particles flying in from random starts to spell the stroke skeleton.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SwarmJob {
    /// Output size.
    pub canvas: Canvas,
    /// Background color.
    pub background: ColorDef,
    /// Number of frames.
    pub n_frames: usize,
    /// RNG seed.
    pub seed: u64,
    /// Playback rate.
    pub fps: Fps,
    /// Samples per skeleton segment.
    pub points_per_segment: usize,
    /// Half-width of the rails around each stroke, in skeleton units.
    pub thickness: f64,
    /// Parallel copies per stroke.
    pub rails: usize,
    /// Placement of the word in the unit square.
    pub fit: UnitFit,
    /// Swarm tuning.
    pub swarm: SwarmParams,
    /// Resolution used to turn marker areas (points squared) into pixels.
    pub dpi: f64,
}

impl Default for SwarmJob {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 1600,
                height: 900,
            },
            background: ColorDef::from(Rgba8::WHITE),
            n_frames: 80,
            seed: 42,
            fps: Fps { num: 10, den: 1 },
            points_per_segment: 60,
            thickness: 0.18,
            rails: 3,
            fit: UnitFit::default(),
            swarm: SwarmParams::default(),
            dpi: 200.0,
        }
    }
}

impl SwarmJob {
    pub(crate) fn prepare(&self) -> LoomResult<Prepared> {
        if !self.dpi.is_finite() || self.dpi <= 0.0 {
            return Err(LoomError::validation(format!(
                "dpi must be finite and > 0, got {}",
                self.dpi
            )));
        }
        let samples = skeleton::sample(
            &word_skeleton(),
            self.points_per_segment,
            self.thickness,
            self.rails,
        );
        let targets = skeleton::fit_to_unit(&samples, self.fit);
        if targets.is_empty() {
            return Err(LoomError::validation(
                "swarm has no targets; points_per_segment must be >= 1",
            ));
        }
        let swarm = swarm::animate_with(&targets, self.n_frames, self.seed, &self.swarm)?;

        let viewport = Viewport::stretched(Rect::new(0.0, 0.0, 1.0, 1.0))?;
        let background = opaque(self.background);
        let scenes = swarm
            .frames
            .iter()
            .map(|f| Scene::single(self.canvas, background, viewport, marker_ops(f, self.dpi)))
            .collect();
        Prepared::new(self.canvas, self.fps, FrameSource::Scenes(scenes))
    }
}
