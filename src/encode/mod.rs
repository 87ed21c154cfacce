//! Encoding sinks.
//!
//! Sinks consume rendered frames in index order and are driven by [`crate::session`].

use std::path::Path;

use crate::foundation::error::{LoomError, LoomResult};

/// Animated GIF output.
pub mod gif;
/// PNG output.
pub mod png;
/// Generic frame sink trait and built-in sinks.
pub mod sink;

/// Create the parent directory of `path` if needed.
pub fn ensure_parent_dir(path: &Path) -> LoomResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            LoomError::encode(format!(
                "failed to create output directory '{}': {e}",
                parent.display()
            ))
        })?;
    }
    Ok(())
}
