use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;

use crate::error::GuardError;
use crate::model::Position;

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

/// Camera state owned by the surrounding scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Camera {
    pub position: Position,
}

impl Camera {
    pub fn at(position: Position) -> Self {
        Self { position }
    }
}

/// Read/write access to a camera the guard does not own.
pub trait CameraTarget {
    fn position(&self) -> Position;
    fn set_position(&self, position: Position);
}

/// Shared handle to an in-process camera, as handed out by `use_mut_ref`.
#[derive(Debug, Clone, Default)]
pub struct SharedCamera(Rc<RefCell<Camera>>);

impl SharedCamera {
    pub fn new(camera: Camera) -> Self {
        Self(Rc::new(RefCell::new(camera)))
    }

    pub fn from_rc(inner: Rc<RefCell<Camera>>) -> Self {
        Self(inner)
    }

    pub fn snapshot(&self) -> Camera {
        self.0.borrow().clone()
    }
}

impl CameraTarget for SharedCamera {
    fn position(&self) -> Position {
        self.0.borrow().position
    }

    fn set_position(&self, position: Position) {
        self.0.borrow_mut().position = position;
    }
}

impl<T: CameraTarget + ?Sized> CameraTarget for Rc<T> {
    fn position(&self) -> Position {
        (**self).position()
    }

    fn set_position(&self, position: Position) {
        (**self).set_position(position);
    }
}

/// Camera living on a DOM element (A-Frame / three.js style) whose
/// `position` property is an object with numeric `x`, `y`, `z`. The
/// property is looked up on every access, so a host that swaps the
/// `position` object is still followed.
pub struct ElementCamera {
    element: web_sys::Element,
}

impl ElementCamera {
    /// Looks the camera up by element id. Fails if the element or its
    /// `position` object is missing.
    pub fn resolve(document: &web_sys::Document, id: &str) -> Result<Self, GuardError> {
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| GuardError::MissingCamera { id: id.to_string() })?;
        let camera = Self { element };
        if camera.position_object().is_none() {
            return Err(GuardError::MissingPosition { id: id.to_string() });
        }
        Ok(camera)
    }

    fn position_object(&self) -> Option<JsValue> {
        js_sys::Reflect::get(&self.element, &JsValue::from_str("position"))
            .ok()
            .filter(JsValue::is_object)
    }

    fn axis(&self, key: &str) -> f64 {
        self.position_object()
            .and_then(|pos| js_sys::Reflect::get(&pos, &JsValue::from_str(key)).ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn set_axis(&self, key: &str, value: f64) {
        let written = self.position_object().is_some_and(|pos| {
            js_sys::Reflect::set(&pos, &JsValue::from_str(key), &JsValue::from_f64(value))
                .unwrap_or(false)
        });
        if !written {
            log::warn!("camera #{}: could not write position.{key}", self.element.id());
        }
    }
}

impl CameraTarget for ElementCamera {
    fn position(&self) -> Position {
        Position::new(self.axis("x"), self.axis("y"), self.axis("z"))
    }

    fn set_position(&self, position: Position) {
        self.set_axis("x", position.x);
        self.set_axis("y", position.y);
        self.set_axis("z", position.z);
    }
}
