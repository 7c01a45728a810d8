//! GridFit Settings Crate
//!
//! Handles application configuration: defaults, validation, command-line
//! overrides, and persistence to TOML or JSON files.

pub mod config;
pub mod error;

pub use config::{Config, DisplaySettings, FitSettings, GridOverrides, GridSettings, ShapeKind};
pub use error::{ConfigError, SettingsError, SettingsResult};
