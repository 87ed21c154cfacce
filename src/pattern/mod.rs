//! Pure geometry generators.

/// Fibonacci flower petals.
pub mod flower;
/// Stroke skeletons sampled into point clouds.
pub mod skeleton;
/// Seeded particle swarm.
pub mod swarm;
/// Recursive tangent-circle trees.
pub mod tiling;
