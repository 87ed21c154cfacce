use std::collections::BTreeMap;

use crate::foundation::core::{Point, Vec2};

/// Horizontal deformation scale key.
pub const SCALE_X: &str = "sx";
/// Vertical deformation scale key.
pub const SCALE_Y: &str = "sy";

/// A key or in-between pose: a position plus named shape parameters.
///
/// Shape parameters are kept in a `BTreeMap` so iteration (and therefore interpolation and
/// serialization) order is stable.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pose {
    /// Center position in world units.
    pub position: Point,
    /// Deformation scales, radius, or any other scalar the renderer understands.
    #[serde(default)]
    pub shape: BTreeMap<String, f64>,
}

impl Pose {
    /// Pose with no shape parameters.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            shape: BTreeMap::new(),
        }
    }

    /// Pose with horizontal/vertical scales set.
    pub fn scaled(x: f64, y: f64, sx: f64, sy: f64) -> Self {
        Self::at(x, y).with(SCALE_X, sx).with(SCALE_Y, sy)
    }

    /// Builder-style setter for one shape parameter.
    pub fn with(mut self, key: &str, value: f64) -> Self {
        self.shape.insert(key.to_owned(), value);
        self
    }

    /// Shape parameter by name.
    pub fn param(&self, key: &str) -> Option<f64> {
        self.shape.get(key).copied()
    }

    /// `(sx, sy)`, defaulting missing scales to 1.
    pub fn scale(&self) -> Vec2 {
        Vec2::new(
            self.param(SCALE_X).unwrap_or(1.0),
            self.param(SCALE_Y).unwrap_or(1.0),
        )
    }
}
