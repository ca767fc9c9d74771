//! Core data models for the camera guard.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

/// A point in scene space, in the same units the renderer uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Position {
    /// The safe position a colliding camera falls back to.
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn offset(self, dx: f64, dy: f64, dz: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

/// What a single mouse-move did to the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// No collision; the camera was left alone.
    Idle,
    /// Collision detected; the camera was moved from `from` to the safe position.
    Reset { from: Position },
}

impl MoveOutcome {
    pub fn is_reset(&self) -> bool {
        matches!(self, MoveOutcome::Reset { .. })
    }
}

/// Diagnostics kept by the guard across events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GuardStats {
    pub events: u64,
    pub resets: u64,
}
