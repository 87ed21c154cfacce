use crate::animation::bounce::{BounceSpec, bounce_chain, default_chain};
use crate::animation::frame::frames_from_poses;
use crate::animation::pose::Pose;
use crate::animation::tween::{classic_key_poses, tween};
use crate::foundation::color::ColorDef;
use crate::foundation::core::{Canvas, Fps, Rect, Rgba8};
use crate::foundation::error::{LoomError, LoomResult};
use crate::job::{FrameSource, Prepared, opaque};
use crate::render::plan::{Scene, Viewport, body_ops};

/// How the ball is shown; shared by both bounce jobs.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BallStage {
    /// Output size.
    pub canvas: Canvas,
    /// Background color.
    pub background: ColorDef,
    /// Ball color.
    pub color: ColorDef,
    /// Undeformed ball radius in world units.
    pub base_radius: f64,
    /// Shown world box, y up.
    pub view: Rect,
    /// Playback rate.
    pub fps: Fps,
}

impl Default for BallStage {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 800,
                height: 400,
            },
            background: ColorDef::from(Rgba8::WHITE),
            color: ColorDef::from(Rgba8::BLACK),
            base_radius: 1.0,
            view: Rect::new(0.0, -1.0, 19.0, 10.0),
            fps: Fps { num: 24, den: 1 },
        }
    }
}

impl BallStage {
    fn prepare(&self, poses: &[Pose]) -> LoomResult<Prepared> {
        if !self.base_radius.is_finite() || self.base_radius < 0.0 {
            return Err(LoomError::validation(format!(
                "base_radius must be finite and >= 0, got {}",
                self.base_radius
            )));
        }
        let viewport = Viewport::new(self.view)?;
        let background = opaque(self.background);
        let scenes = frames_from_poses(poses, self.color.to_rgba8(), self.base_radius)
            .iter()
            .map(|f| Scene::single(self.canvas, background, viewport, body_ops(f)))
            .collect();
        Prepared::new(self.canvas, self.fps, FrameSource::Scenes(scenes))
    }
}

/// Key poses in-betweened with smoothstep easing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct KeyPoseBounceJob {
    /// Presentation.
    #[serde(flatten)]
    pub stage: BallStage,
    /// Key poses in order.
    pub key_poses: Vec<Pose>,
    /// In-between poses per key-pose pair.
    pub steps_between: usize,
}

impl Default for KeyPoseBounceJob {
    fn default() -> Self {
        Self {
            stage: BallStage::default(),
            key_poses: classic_key_poses(),
            steps_between: 4,
        }
    }
}

impl KeyPoseBounceJob {
    pub(crate) fn prepare(&self) -> LoomResult<Prepared> {
        if self.key_poses.is_empty() {
            return Err(LoomError::validation(
                "key_pose_bounce needs at least one key pose",
            ));
        }
        let poses = tween(&self.key_poses, self.steps_between)?;
        self.stage.prepare(&poses)
    }
}

/// Parabolic hops with height-driven stretch and impact squash.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BounceJob {
    /// Presentation.
    #[serde(flatten)]
    pub stage: BallStage,
    /// Hops in order.
    pub bounces: Vec<BounceSpec>,
    /// Airborne poses per hop.
    pub air_steps: usize,
    /// Append the impact squash poses after each hop.
    pub include_squash: bool,
}

impl Default for BounceJob {
    fn default() -> Self {
        Self {
            stage: BallStage::default(),
            bounces: default_chain(),
            air_steps: 14,
            include_squash: true,
        }
    }
}

impl BounceJob {
    pub(crate) fn prepare(&self) -> LoomResult<Prepared> {
        let poses = bounce_chain(&self.bounces, self.air_steps, self.include_squash)?;
        if poses.is_empty() {
            return Err(LoomError::validation(
                "bounce produced no poses; add a bounce or raise air_steps",
            ));
        }
        self.stage.prepare(&poses)
    }
}
