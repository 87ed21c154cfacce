//! JSON job documents.
//!
//! A job names one generator, its parameters and how to present the result. Every field has a
//! default, so `{ "kind": "flower" }` is a complete document. [`Job::prepare`] runs the generator
//! and returns everything the renderer needs.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::effects::radial::RadialCenter;
use crate::foundation::color::ColorDef;
use crate::foundation::core::{Canvas, Fps, Rgba8};
use crate::foundation::error::{LoomError, LoomResult};
use crate::render::plan::Scene;

/// Bouncing-ball jobs.
pub mod bounce;
/// Fibonacci flower jobs.
pub mod flower;
/// Radial sun jobs.
pub mod radial;
/// Letter swarm job.
pub mod swarm;
/// Recursive circle jobs.
pub mod tiling;

pub use bounce::{BounceJob, KeyPoseBounceJob};
pub use flower::{FlowerGridJob, FlowerJob};
pub use radial::{RadialJob, ScatterDef, SunDef};
pub use swarm::SwarmJob;
pub use tiling::{TilingGridJob, TilingJob};

/// Names accepted by [`Job::preset`].
pub const PRESET_NAMES: [&str; 10] = [
    "tiling",
    "tiling_grid",
    "key_pose_bounce",
    "bounce",
    "flower",
    "flower_grid",
    "flower_grid_outline",
    "swarm",
    "radial",
    "radial_static",
];

/// One renderable job.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Job {
    /// Single recursive circle pattern.
    Tiling(TilingJob),
    /// Grid of circle patterns with per-cell shrink fractions.
    TilingGrid(TilingGridJob),
    /// Tweened key poses of a bouncing ball.
    KeyPoseBounce(KeyPoseBounceJob),
    /// Parabolic multi-bounce with squash and stretch.
    Bounce(BounceJob),
    /// Single Fibonacci flower.
    Flower(FlowerJob),
    /// Grid of Fibonacci flowers, one color per cell.
    FlowerGrid(FlowerGridJob),
    /// Particles swarming into a word.
    Swarm(SwarmJob),
    /// Radial sun gradient, static or growing.
    Radial(RadialJob),
}

impl Job {
    /// Parse a job from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> LoomResult<Self> {
        serde_json::from_reader(r).map_err(|e| LoomError::serde(format!("parse job JSON: {e}")))
    }

    /// Parse a job from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> LoomResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            LoomError::validation(format!("open job JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Pretty JSON with every field spelled out.
    pub fn to_json_pretty(&self) -> LoomResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| LoomError::serde(e.to_string()))
    }

    /// Ready-made job by name; see [`PRESET_NAMES`].
    pub fn preset(name: &str) -> LoomResult<Self> {
        let job = match name {
            "tiling" => Self::Tiling(TilingJob::default()),
            "tiling_grid" => Self::TilingGrid(TilingGridJob::default()),
            "key_pose_bounce" => Self::KeyPoseBounce(KeyPoseBounceJob::default()),
            "bounce" => Self::Bounce(BounceJob::default()),
            "flower" => Self::Flower(FlowerJob::default()),
            "flower_grid" => Self::FlowerGrid(FlowerGridJob::default()),
            "flower_grid_outline" => Self::FlowerGrid(FlowerGridJob::outlined()),
            "swarm" => Self::Swarm(SwarmJob::default()),
            "radial" => Self::Radial(RadialJob::default()),
            "radial_static" => Self::Radial(RadialJob {
                n_frames: 1,
                ..RadialJob::default()
            }),
            other => {
                return Err(LoomError::validation(format!(
                    "unknown preset '{other}', expected one of: {}",
                    PRESET_NAMES.join(", ")
                )));
            }
        };
        Ok(job)
    }

    /// The `kind` tag of this job.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Tiling(_) => "tiling",
            Self::TilingGrid(_) => "tiling_grid",
            Self::KeyPoseBounce(_) => "key_pose_bounce",
            Self::Bounce(_) => "bounce",
            Self::Flower(_) => "flower",
            Self::FlowerGrid(_) => "flower_grid",
            Self::Swarm(_) => "swarm",
            Self::Radial(_) => "radial",
        }
    }

    /// Run the generator and lay out its frames.
    #[tracing::instrument(skip(self), fields(kind = self.kind()))]
    pub fn prepare(&self) -> LoomResult<Prepared> {
        let prepared = match self {
            Self::Tiling(j) => j.prepare(),
            Self::TilingGrid(j) => j.prepare(),
            Self::KeyPoseBounce(j) => j.prepare(),
            Self::Bounce(j) => j.prepare(),
            Self::Flower(j) => j.prepare(),
            Self::FlowerGrid(j) => j.prepare(),
            Self::Swarm(j) => j.prepare(),
            Self::Radial(j) => j.prepare(),
        }?;
        tracing::debug!(frames = prepared.frame_count(), "job prepared");
        Ok(prepared)
    }
}

/// Output of [`Job::prepare`].
#[derive(Clone, Debug, PartialEq)]
pub struct Prepared {
    /// Output size.
    pub canvas: Canvas,
    /// Playback rate; ignored by still outputs.
    pub fps: Fps,
    /// Frames to render.
    pub source: FrameSource,
}

/// Frames in the form their generator produces them.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameSource {
    /// Vector scenes for the rasterizer.
    Scenes(Vec<Scene>),
    /// Per-pixel radial composites, computed frame by frame.
    Radial {
        /// Suns in blend order.
        centers: Vec<RadialCenter>,
        /// Untouched pixel color.
        background: Rgba8,
        /// Growth factor of every frame.
        growth: Vec<f64>,
    },
}

impl Prepared {
    pub(crate) fn new(canvas: Canvas, fps: Fps, source: FrameSource) -> LoomResult<Self> {
        canvas.validate()?;
        let fps = Fps::new(fps.num, fps.den)?;
        let prepared = Self {
            canvas,
            fps,
            source,
        };
        if prepared.frame_count() == 0 {
            return Err(LoomError::validation("job produced no frames"));
        }
        Ok(prepared)
    }

    /// Single still scene.
    pub(crate) fn still(scene: Scene) -> LoomResult<Self> {
        Self::new(scene.canvas, still_fps(), FrameSource::Scenes(vec![scene]))
    }

    /// Number of frames.
    pub fn frame_count(&self) -> usize {
        match &self.source {
            FrameSource::Scenes(s) => s.len(),
            FrameSource::Radial { growth, .. } => growth.len(),
        }
    }
}

fn still_fps() -> Fps {
    Fps { num: 1, den: 1 }
}

pub(crate) fn named(name: &str) -> ColorDef {
    ColorDef::parse(name).unwrap_or_else(|_| ColorDef::from(Rgba8::BLACK))
}

pub(crate) fn opaque(c: ColorDef) -> Rgba8 {
    c.to_rgba8().with_alpha(1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/job/mod.rs"]
mod tests;
