//! genloom renders procedural generative-art patterns to PNG stills and animated GIFs.
//!
//! Generators are pure functions returning data:
//!
//! - recursive tangent circles ([`pattern::tiling`]),
//! - eased key-pose tweening and parabolic bounces ([`animation`]),
//! - Fibonacci flower petals ([`pattern::flower`]),
//! - a seeded particle swarm spelling a word ([`pattern::skeleton`], [`pattern::swarm`]),
//! - a radial sun gradient composited per pixel ([`effects::radial`]).
//!
//! Rendering is a separate final pass: a [`Job`] prepares [`render::plan::Scene`]s, the
//! [`CpuRasterizer`] turns them into [`FrameRGBA`]s and a [`FrameSink`] encodes them.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Pose trajectories and frames.
pub mod animation;
/// Per-pixel effects.
pub mod effects;
/// Encoding sinks.
pub mod encode;
/// JSON job documents.
pub mod job;
/// Pure geometry generators.
pub mod pattern;
/// Draw plans and rasterization.
pub mod render;
/// Job rendering entry points.
pub mod session;

pub use crate::foundation::color::{ColorDef, blend_rgb, hsv_to_rgb};
pub use crate::foundation::core::{Affine, BezPath, Canvas, Fps, FrameIndex, Point, Rect, Rgba8, Vec2};
pub use crate::foundation::error::{LoomError, LoomResult};
pub use crate::foundation::rng::LoomRng;

pub use crate::encode::gif::GifSink;
pub use crate::encode::png::{PngPick, PngSink};
pub use crate::encode::sink::{FrameSink, InMemorySink, MultiSink, SinkConfig};
pub use crate::job::{Job, Prepared};
pub use crate::render::backend::FrameRGBA;
pub use crate::render::cpu::CpuRasterizer;
pub use crate::session::{RenderStats, RenderThreading, render_job, render_job_to_path};
