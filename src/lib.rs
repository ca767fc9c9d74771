//! Camera collision guard for browser scenes.
//!
//! Listens for mouse movement on the document and, whenever the injected
//! collision check reports a hit, moves the camera back to its safe position.
//! The default check is a placeholder that never reports a collision.
//!
//! | Module | Role |
//! |--------|------|
//! | [`guard`] | Per-event handler, independent of the DOM |
//! | [`collision`] | Pluggable collision predicates |
//! | [`state`] | Camera state and the [`state::CameraTarget`] capability |
//! | [`listener`] | Document subscription with a disposer handle |
//! | [`config`] | Settings loaded from `localStorage` |
//! | [`components`] | Yew demo app |

pub mod collision;
pub mod components;
pub mod config;
pub mod error;
pub mod guard;
pub mod listener;
pub mod model;
pub mod state;
pub mod util;
