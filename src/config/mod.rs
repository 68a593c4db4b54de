//! Configuration management for the portfolio builder

pub mod settings;

pub use settings::Settings;
