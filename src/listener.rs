//! Document-level subscription for the collision guard.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{EventTarget, MouseEvent};

use crate::collision::CollisionCheck;
use crate::config::GuardConfig;
use crate::error::GuardError;
use crate::guard::CollisionGuard;
use crate::model::{GuardStats, MoveOutcome};
use crate::state::{CameraTarget, ElementCamera};

#[cfg(test)]
#[path = "listener_test.rs"]
mod listener_test;

/// A registered listener. Dropping it (or calling [`dispose`](Self::dispose))
/// runs its detach action exactly once.
pub struct MoveSubscription {
    event: String,
    detach: Option<Box<dyn FnOnce()>>,
}

impl MoveSubscription {
    pub fn new(event: &str, detach: impl FnOnce() + 'static) -> Self {
        Self {
            event: event.to_string(),
            detach: Some(Box::new(detach)),
        }
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn dispose(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
            log::debug!("{} listener removed", self.event);
        }
    }
}

impl Drop for MoveSubscription {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Registers `guard` for `event` on `target`.
pub fn subscribe<C, P>(
    target: &EventTarget,
    event: &str,
    guard: Rc<CollisionGuard<C, P>>,
) -> Result<MoveSubscription, GuardError>
where
    C: CameraTarget + 'static,
    P: CollisionCheck + 'static,
{
    subscribe_with(target, event, guard, |_, _| {})
}

/// Like [`subscribe`], but `on_move` is told about every handled event.
pub fn subscribe_with<C, P, F>(
    target: &EventTarget,
    event: &str,
    guard: Rc<CollisionGuard<C, P>>,
    mut on_move: F,
) -> Result<MoveSubscription, GuardError>
where
    C: CameraTarget + 'static,
    P: CollisionCheck + 'static,
    F: FnMut(MoveOutcome, GuardStats) + 'static,
{
    let callback = Closure::wrap(Box::new(move |_e: MouseEvent| {
        let outcome = guard.handle_move();
        on_move(outcome, guard.stats());
    }) as Box<dyn FnMut(MouseEvent)>);
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(|e| GuardError::from_js(&e))?;
    log::debug!("{event} listener registered");
    let target = target.clone();
    let name = event.to_string();
    Ok(MoveSubscription::new(event, move || {
        if let Err(e) =
            target.remove_event_listener_with_callback(&name, callback.as_ref().unchecked_ref())
        {
            log::warn!("could not remove {name} listener: {e:?}");
        }
    }))
}

/// Startup sequence with the DOM factored out: validate `config`, resolve the
/// camera by id, build the guard, then register it for the configured event.
/// `register` is never called when an earlier step fails.
pub fn attach_with<C, P, R, S>(
    config: &GuardConfig,
    check: P,
    resolve: R,
    register: S,
) -> Result<MoveSubscription, GuardError>
where
    C: CameraTarget,
    P: CollisionCheck,
    R: FnOnce(&str) -> Result<C, GuardError>,
    S: FnOnce(&str, Rc<CollisionGuard<C, P>>) -> Result<MoveSubscription, GuardError>,
{
    config.validate()?;
    let camera = resolve(&config.camera_id)?;
    log::info!("guarding camera #{} on {}", config.camera_id, config.event);
    let guard = CollisionGuard::new(camera, check).with_safe_position(config.safe_position);
    register(&config.event, Rc::new(guard))
}

/// Guards the `#camera_id` element of the current document.
pub fn attach_to_document<P>(config: &GuardConfig, check: P) -> Result<MoveSubscription, GuardError>
where
    P: CollisionCheck + 'static,
{
    let window = web_sys::window().ok_or(GuardError::NoWindow)?;
    let document = window.document().ok_or(GuardError::NoDocument)?;
    attach_with(
        config,
        check,
        |id| ElementCamera::resolve(&document, id),
        |event, guard| subscribe(&document, event, guard),
    )
}
