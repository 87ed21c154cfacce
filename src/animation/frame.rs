use crate::animation::pose::Pose;
use crate::foundation::core::{FrameIndex, Point, Rgba8, Vec2};

/// One renderable thing at one time step.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Entity {
    /// Center in the generator's coordinate space.
    pub position: Point,
    /// Horizontal/vertical deformation scales.
    pub deformation: Vec2,
    /// Fill color.
    pub color: Rgba8,
    /// Base size; its unit is defined by the generator (radius, or marker area for swarms).
    pub size: f64,
}

/// Fully-resolved state of one animation step.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Frame {
    /// Position in the sequence.
    pub index: FrameIndex,
    /// Entities in draw order.
    pub entities: Vec<Entity>,
}

/// Turn a pose trajectory into single-entity frames of a body with radius `base_radius`.
pub fn frames_from_poses(poses: &[Pose], color: Rgba8, base_radius: f64) -> Vec<Frame> {
    poses
        .iter()
        .enumerate()
        .map(|(i, pose)| Frame {
            index: FrameIndex(i as u64),
            entities: vec![Entity {
                position: pose.position,
                deformation: pose.scale(),
                color,
                size: base_radius,
            }],
        })
        .collect()
}
