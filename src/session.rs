//! Running jobs: generate, rasterize and stream frames into a sink.

use std::path::Path;

use rayon::prelude::*;

use crate::effects::radial;
use crate::encode::gif::GifSink;
use crate::encode::png::PngSink;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{LoomError, LoomResult};
use crate::job::{FrameSource, Job, Prepared};
use crate::render::cpu::CpuRasterizer;
use crate::render::plan::Scene;

/// Threading options for frame rasterization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderThreading {
    /// Rasterize frames of a chunk in parallel.
    pub parallel: bool,
    /// Frames rasterized per batch in parallel mode.
    pub chunk_size: usize,
    /// Worker count; `None` lets rayon decide.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 16,
            threads: None,
        }
    }
}

/// Counters reported by a render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames pushed into the sink.
    pub frames: u64,
}

/// Prepare `job` and stream its frames into `sink`.
pub fn render_job(
    job: &Job,
    sink: &mut dyn FrameSink,
    threading: &RenderThreading,
) -> LoomResult<RenderStats> {
    let prepared = job.prepare()?;
    render_prepared(&prepared, sink, threading)
}

/// Render `job` to `path`; the extension (`.png` or `.gif`) picks the format.
pub fn render_job_to_path(
    job: &Job,
    path: &Path,
    threading: &RenderThreading,
) -> LoomResult<RenderStats> {
    let mut sink = sink_for_path(path)?;
    render_job(job, sink.as_mut(), threading)
}

/// Sink writing to `path`, chosen by extension.
pub fn sink_for_path(path: &Path) -> LoomResult<Box<dyn FrameSink>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => Ok(Box::new(PngSink::new(path))),
        Some("gif") => Ok(Box::new(GifSink::new(path))),
        _ => Err(LoomError::validation(format!(
            "cannot infer output format from '{}'; use .png or .gif",
            path.display()
        ))),
    }
}

/// Stream already prepared frames into `sink` in index order.
#[tracing::instrument(skip(prepared, sink), fields(frames = prepared.frame_count()))]
pub fn render_prepared(
    prepared: &Prepared,
    sink: &mut dyn FrameSink,
    threading: &RenderThreading,
) -> LoomResult<RenderStats> {
    if threading.parallel && threading.chunk_size == 0 {
        return Err(LoomError::validation("chunk_size must be >= 1"));
    }

    sink.begin(SinkConfig {
        width: prepared.canvas.width,
        height: prepared.canvas.height,
        fps: prepared.fps,
        frame_count: prepared.frame_count() as u64,
    })?;

    let stats = if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        pool.install(|| push_frames(prepared, sink, threading))?
    } else {
        push_frames(prepared, sink, threading)?
    };

    sink.end()?;
    tracing::debug!(frames = stats.frames, "render finished");
    Ok(stats)
}

fn push_frames(
    prepared: &Prepared,
    sink: &mut dyn FrameSink,
    threading: &RenderThreading,
) -> LoomResult<RenderStats> {
    let mut stats = RenderStats::default();
    match &prepared.source {
        FrameSource::Scenes(scenes) if threading.parallel => {
            for chunk in scenes.chunks(threading.chunk_size) {
                let frames = chunk
                    .par_iter()
                    .map_init(CpuRasterizer::new, |r, s: &Scene| r.render(s))
                    .collect::<LoomResult<Vec<_>>>()?;
                for frame in &frames {
                    sink.push_frame(FrameIndex(stats.frames), frame)?;
                    stats.frames += 1;
                }
            }
        }
        FrameSource::Scenes(scenes) => {
            let mut rasterizer = CpuRasterizer::new();
            for scene in scenes {
                let frame = rasterizer.render(scene)?;
                sink.push_frame(FrameIndex(stats.frames), &frame)?;
                stats.frames += 1;
            }
        }
        FrameSource::Radial {
            centers,
            background,
            growth,
        } => {
            for &g in growth {
                let grid = radial::compose(prepared.canvas, centers, g, *background)?;
                sink.push_frame(FrameIndex(stats.frames), &grid.to_frame())?;
                stats.frames += 1;
            }
        }
    }
    Ok(stats)
}

fn build_thread_pool(threads: Option<usize>) -> LoomResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(LoomError::validation("'threads' must be >= 1 when set"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| LoomError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}
