//! Per-pixel effects.

/// Radial sun gradient compositor.
pub mod radial;
