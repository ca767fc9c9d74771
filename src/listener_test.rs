use std::cell::{Cell, RefCell};

use super::*;
use crate::collision::{AlwaysCollides, NeverCollides};
use crate::model::Position;
use crate::state::{Camera, SharedCamera};

fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
    let count = Rc::new(Cell::new(0));
    let inner = count.clone();
    (count, move || inner.set(inner.get() + 1))
}

// --- MoveSubscription ---

#[test]
fn dispose_detaches_once() {
    let (count, detach) = counter();
    let sub = MoveSubscription::new("mousemove", detach);
    assert_eq!(count.get(), 0);
    sub.dispose();
    assert_eq!(count.get(), 1);
}

#[test]
fn drop_detaches() {
    let (count, detach) = counter();
    {
        let _sub = MoveSubscription::new("mousemove", detach);
    }
    assert_eq!(count.get(), 1);
}

#[test]
fn subscription_keeps_event_name() {
    let sub = MoveSubscription::new("pointermove", || {});
    assert_eq!(sub.event(), "pointermove");
}

// --- attach_with ---

#[test]
fn missing_camera_never_registers() {
    let registered = Rc::new(Cell::new(false));
    let flag = registered.clone();
    let result = attach_with(
        &GuardConfig::default(),
        NeverCollides,
        |id| Err::<SharedCamera, _>(GuardError::MissingCamera { id: id.to_string() }),
        move |event, _guard| {
            flag.set(true);
            Ok(MoveSubscription::new(event, || {}))
        },
    );
    match result {
        Err(GuardError::MissingCamera { id }) => assert_eq!(id, "camera"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("attached without a camera"),
    }
    assert!(!registered.get());
}

#[test]
fn missing_position_is_passed_through() {
    let result = attach_with(
        &GuardConfig::default(),
        NeverCollides,
        |id| Err::<SharedCamera, _>(GuardError::MissingPosition { id: id.to_string() }),
        |event, _guard| Ok(MoveSubscription::new(event, || {})),
    );
    assert!(matches!(result, Err(GuardError::MissingPosition { .. })));
}

#[test]
fn invalid_config_fails_before_resolve() {
    let resolved = Rc::new(Cell::new(false));
    let flag = resolved.clone();
    let config = GuardConfig { camera_id: String::new(), ..GuardConfig::default() };
    let result = attach_with(
        &config,
        NeverCollides,
        move |_id| {
            flag.set(true);
            Ok(SharedCamera::default())
        },
        |event, _guard| Ok(MoveSubscription::new(event, || {})),
    );
    assert!(matches!(result, Err(GuardError::InvalidConfig(_))));
    assert!(!resolved.get());
}

#[test]
fn configured_safe_position_reaches_guard() {
    let spawn = Position::new(0.0, 1.7, 0.0);
    let config = GuardConfig { safe_position: spawn, ..GuardConfig::default() };
    let camera = SharedCamera::new(Camera::at(Position::new(5.0, 3.0, -2.0)));
    let registered = Rc::new(RefCell::new(None));
    let slot = registered.clone();
    let sub = attach_with(
        &config,
        AlwaysCollides,
        |_id| Ok(camera.clone()),
        move |event, guard| {
            *slot.borrow_mut() = Some(guard);
            Ok(MoveSubscription::new(event, || {}))
        },
    )
    .unwrap();
    assert_eq!(sub.event(), "mousemove");

    let guard = registered.borrow_mut().take().unwrap();
    guard.handle_move();
    assert_eq!(camera.position(), spawn);
}

#[test]
fn resolve_receives_configured_id() {
    let config = GuardConfig { camera_id: "rig".into(), ..GuardConfig::default() };
    let seen = Rc::new(RefCell::new(String::new()));
    let seen_in = seen.clone();
    attach_with(
        &config,
        NeverCollides,
        move |id| {
            *seen_in.borrow_mut() = id.to_string();
            Ok(SharedCamera::default())
        },
        |event, _guard| Ok(MoveSubscription::new(event, || {})),
    )
    .unwrap();
    assert_eq!(*seen.borrow(), "rig");
}
