use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::gif::{GifEncoder, Repeat};

use crate::encode::ensure_parent_dir;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{LoomError, LoomResult};
use crate::render::backend::FrameRGBA;

/// Quantizer speed used unless overridden, on the `1..=30` NeuQuant scale.
pub const DEFAULT_GIF_SPEED: i32 = 10;

/// Streams frames into an infinitely looping animated GIF.
///
/// The file is created in `begin`; each frame is quantized and written as it arrives.
pub struct GifSink {
    path: PathBuf,
    speed: i32,
    state: Option<GifState>,
}

struct GifState {
    cfg: SinkConfig,
    encoder: GifEncoder<BufWriter<File>>,
    delay: image::Delay,
    written: u64,
}

impl GifSink {
    /// Write to `path` when frames arrive.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            speed: DEFAULT_GIF_SPEED,
            state: None,
        }
    }

    /// Set the quantizer speed. 1 is slowest and best, 30 fastest; values are clamped.
    pub fn with_speed(mut self, speed: i32) -> Self {
        self.speed = speed.clamp(1, 30);
        self
    }

    /// Quantizer speed in effect.
    pub fn speed(&self) -> i32 {
        self.speed
    }

    /// Output path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode_err(&self, e: impl std::fmt::Display) -> LoomError {
        LoomError::encode(format!("failed to write '{}': {e}", self.path.display()))
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> LoomResult<()> {
        ensure_parent_dir(&self.path)?;
        let file = File::create(&self.path).map_err(|e| self.encode_err(e))?;
        let mut encoder = GifEncoder::new_with_speed(BufWriter::new(file), self.speed);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| self.encode_err(e))?;

        let (numer, denom) = cfg.fps.frame_delay_ms();
        self.state = Some(GifState {
            cfg,
            encoder,
            delay: image::Delay::from_numer_denom_ms(numer, denom),
            written: 0,
        });
        Ok(())
    }

    fn push_frame(&mut self, _idx: FrameIndex, frame: &FrameRGBA) -> LoomResult<()> {
        let path = self.path.display().to_string();
        let state = self
            .state
            .as_mut()
            .ok_or_else(|| LoomError::encode("GifSink::push_frame called before begin"))?;
        state.cfg.check_frame(frame)?;

        let buf = image::RgbaImage::from_raw(frame.width, frame.height, frame.data.clone())
            .ok_or_else(|| LoomError::encode("frame buffer does not match its dimensions"))?;
        state
            .encoder
            .encode_frame(image::Frame::from_parts(buf, 0, 0, state.delay))
            .map_err(|e| LoomError::encode(format!("failed to write '{path}': {e}")))?;
        state.written += 1;
        Ok(())
    }

    fn end(&mut self) -> LoomResult<()> {
        let state = self
            .state
            .take()
            .ok_or_else(|| LoomError::encode("GifSink::end called before begin"))?;
        if state.written == 0 {
            return Err(LoomError::encode(format!(
                "no frames were written to '{}'",
                self.path.display()
            )));
        }
        // Dropping the encoder writes the trailer and flushes the file.
        drop(state.encoder);
        tracing::debug!(path = %self.path.display(), frames = state.written, "gif written");
        Ok(())
    }
}
