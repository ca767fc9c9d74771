pub mod app;
pub mod camera_readout;
pub mod guard_controls;
