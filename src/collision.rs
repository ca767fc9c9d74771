//! Collision predicates.
//!
//! The guard asks a [`CollisionCheck`] whether the camera's current position
//! is invalid. Real collision geometry plugs in here; the handler's control
//! flow does not change.

use std::cell::Cell;
use std::rc::Rc;

use crate::model::Position;

#[cfg(test)]
#[path = "collision_test.rs"]
mod collision_test;

pub trait CollisionCheck {
    fn is_colliding(&self, position: &Position) -> bool;
}

/// Placeholder check: nothing ever collides.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCollides;

impl CollisionCheck for NeverCollides {
    fn is_colliding(&self, _position: &Position) -> bool {
        false
    }
}

/// Every position collides. Used to force a reset.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysCollides;

impl CollisionCheck for AlwaysCollides {
    fn is_colliding(&self, _position: &Position) -> bool {
        true
    }
}

/// A runtime switch the host can flip; clones share the flag.
#[derive(Debug, Clone, Default)]
pub struct Toggle(Rc<Cell<bool>>);

impl Toggle {
    pub fn new(on: bool) -> Self {
        Self(Rc::new(Cell::new(on)))
    }

    pub fn set(&self, on: bool) {
        self.0.set(on);
    }

    pub fn get(&self) -> bool {
        self.0.get()
    }
}

impl CollisionCheck for Toggle {
    fn is_colliding(&self, _position: &Position) -> bool {
        self.0.get()
    }
}

impl<F> CollisionCheck for F
where
    F: Fn(&Position) -> bool,
{
    fn is_colliding(&self, position: &Position) -> bool {
        self(position)
    }
}
