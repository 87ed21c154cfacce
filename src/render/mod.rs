/// Frame type produced by rasterizers.
pub mod backend;
/// CPU rasterizer (`vello_cpu`).
pub mod cpu;
/// Draw plans and builders from generator output.
pub mod plan;
