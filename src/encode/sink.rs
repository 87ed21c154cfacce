use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{LoomError, LoomResult};
use crate::render::backend::FrameRGBA;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Playback rate for animated outputs.
    pub fps: Fps,
    /// Number of frames that will be pushed.
    pub frame_count: u64,
}

impl SinkConfig {
    pub(crate) fn check_frame(&self, frame: &FrameRGBA) -> LoomResult<()> {
        if frame.width != self.width || frame.height != self.height {
            return Err(LoomError::encode(format!(
                "frame is {}x{} but the sink was configured for {}x{}",
                frame.width, frame.height, self.width, self.height
            )));
        }
        let expected = (frame.width as usize) * (frame.height as usize) * 4;
        if frame.data.len() != expected {
            return Err(LoomError::encode(format!(
                "frame buffer holds {} bytes, expected {expected}",
                frame.data.len()
            )));
        }
        Ok(())
    }
}

/// Consumer of rendered frames.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order between
/// one `begin` and one `end`.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> LoomResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> LoomResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> LoomResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    finished: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Captured frames in push order.
    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    /// Whether `end` has been called since the last `begin`.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> LoomResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> LoomResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> LoomResult<()> {
        self.finished = true;
        Ok(())
    }
}

/// Forwards every call to each inner sink in order.
#[derive(Default)]
pub struct MultiSink {
    sinks: Vec<Box<dyn FrameSink>>,
}

impl MultiSink {
    /// Empty fan-out.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sink.
    pub fn with(mut self, sink: Box<dyn FrameSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Number of inner sinks.
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Whether no sinks were added.
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl FrameSink for MultiSink {
    fn begin(&mut self, cfg: SinkConfig) -> LoomResult<()> {
        self.sinks.iter_mut().try_for_each(|s| s.begin(cfg))
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> LoomResult<()> {
        self.sinks.iter_mut().try_for_each(|s| s.push_frame(idx, frame))
    }

    fn end(&mut self) -> LoomResult<()> {
        self.sinks.iter_mut().try_for_each(|s| s.end())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
