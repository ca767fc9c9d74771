use std::cell::Cell;

use crate::collision::{CollisionCheck, NeverCollides};
use crate::model::{GuardStats, MoveOutcome, Position};
use crate::state::CameraTarget;

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

/// Per-event collision handling for one camera.
///
/// Holds no DOM state so it can run outside the browser; the `listener`
/// module owns the wiring to `document`.
pub struct CollisionGuard<C, P = NeverCollides> {
    camera: C,
    check: P,
    safe_position: Position,
    stats: Cell<GuardStats>,
}

impl<C: CameraTarget> CollisionGuard<C, NeverCollides> {
    /// Guard with the placeholder check that never reports a collision.
    pub fn placeholder(camera: C) -> Self {
        Self::new(camera, NeverCollides)
    }
}

impl<C: CameraTarget, P: CollisionCheck> CollisionGuard<C, P> {
    pub fn new(camera: C, check: P) -> Self {
        Self {
            camera,
            check,
            safe_position: Position::ORIGIN,
            stats: Cell::new(GuardStats::default()),
        }
    }

    pub fn with_safe_position(mut self, safe_position: Position) -> Self {
        self.safe_position = safe_position;
        self
    }

    /// Runs the collision check once. On a hit the camera is moved to the
    /// safe position; otherwise nothing is touched.
    pub fn handle_move(&self) -> MoveOutcome {
        let mut stats = self.stats.get();
        stats.events += 1;
        let current = self.camera.position();
        let outcome = if self.check.is_colliding(&current) {
            self.camera.set_position(self.safe_position);
            stats.resets += 1;
            log::warn!("camera collision at {current}, reset to {}", self.safe_position);
            MoveOutcome::Reset { from: current }
        } else {
            log::trace!("camera clear at {current}");
            MoveOutcome::Idle
        };
        self.stats.set(stats);
        outcome
    }

    pub fn stats(&self) -> GuardStats {
        self.stats.get()
    }

    pub fn safe_position(&self) -> Position {
        self.safe_position
    }
}
