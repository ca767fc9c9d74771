pub mod camera;

pub use camera::{Camera, CameraTarget, ElementCamera, SharedCamera};
