//! Layered crosshair reticle: configuration, composition and live settings sync

pub mod color;
pub mod compositor;
pub mod config;
pub mod constants;
pub mod error;
pub mod gui;
pub mod presets;
pub mod sync;
