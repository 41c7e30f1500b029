//! Settings window with live preview

pub mod components;
pub mod constants;
pub mod manager;
pub mod painter;

pub use manager::run_gui;
pub use painter::PreviewSurface;
