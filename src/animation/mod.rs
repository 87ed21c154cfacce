//! Pose trajectories and the frames built from them.

/// Parabolic hops with squash and stretch.
pub mod bounce;
/// Easing curves.
pub mod ease;
/// Renderable frames and entities.
pub mod frame;
/// Key and in-between poses.
pub mod pose;
/// Eased in-betweening of key poses.
pub mod tween;
