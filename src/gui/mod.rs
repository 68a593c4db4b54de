//! Builder window implemented with egui/eframe

mod builder;
mod components;
mod constants;

pub use builder::run_gui;
