use std::path::{Path, PathBuf};

use crate::encode::ensure_parent_dir;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{LoomError, LoomResult};
use crate::render::backend::FrameRGBA;

/// Which pushed frame a [`PngSink`] keeps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PngPick {
    /// The first frame pushed.
    First,
    /// The last frame pushed.
    #[default]
    Last,
}

/// Writes a single frame as a PNG file when the sink ends.
#[derive(Debug)]
pub struct PngSink {
    path: PathBuf,
    pick: PngPick,
    cfg: Option<SinkConfig>,
    kept: Option<FrameRGBA>,
}

impl PngSink {
    /// Keep the last frame and write it to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_pick(path, PngPick::Last)
    }

    /// Keep the frame chosen by `pick`.
    pub fn with_pick(path: impl Into<PathBuf>, pick: PngPick) -> Self {
        Self {
            path: path.into(),
            pick,
            cfg: None,
            kept: None,
        }
    }

    /// Output path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FrameSink for PngSink {
    fn begin(&mut self, cfg: SinkConfig) -> LoomResult<()> {
        self.cfg = Some(cfg);
        self.kept = None;
        Ok(())
    }

    fn push_frame(&mut self, _idx: FrameIndex, frame: &FrameRGBA) -> LoomResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| LoomError::encode("PngSink::push_frame called before begin"))?;
        cfg.check_frame(frame)?;
        if self.pick == PngPick::Last || self.kept.is_none() {
            self.kept = Some(frame.clone());
        }
        Ok(())
    }

    fn end(&mut self) -> LoomResult<()> {
        let frame = self.kept.take().ok_or_else(|| {
            LoomError::encode(format!("no frame to write to '{}'", self.path.display()))
        })?;
        write_png(&self.path, &frame)
    }
}

/// Write one frame to `path` as RGBA8 PNG, creating parent directories.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> LoomResult<()> {
    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| LoomError::encode(format!("failed to write '{}': {e}", path.display())))?;
    tracing::debug!(path = %path.display(), "png written");
    Ok(())
}
