//! Configuration and settings management for GridFit
//!
//! Provides configuration file handling, defaults, and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Grid layout (point count, canvas, padding)
//! - Display and interaction (marker size, hit radius, outline resolution)
//! - Fitting preferences

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

use crate::error::{ConfigError, SettingsError, SettingsResult};

const APP_DIR: &str = "gridfit";
const CONFIG_FILE: &str = "config.toml";

/// Shape produced by the fitting modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Best-fit circle
    #[default]
    Circle,
    /// Best-fit ellipse
    Ellipse,
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Circle => write!(f, "circle"),
            Self::Ellipse => write!(f, "ellipse"),
        }
    }
}

impl FromStr for ShapeKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" => Ok(Self::Circle),
            "ellipse" => Ok(Self::Ellipse),
            _ => Err(ConfigError::InvalidValue {
                key: "shape".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Grid layout settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Points per side
    pub size: usize,
    /// Drawing canvas width
    pub canvas_width: u32,
    /// Drawing canvas height
    pub canvas_height: u32,
    /// Margin kept clear on every side of the canvas
    pub padding: u32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            size: 20,
            canvas_width: 800,
            canvas_height: 800,
            padding: 50,
        }
    }
}

/// Display and pointer interaction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Marker radius in drawing units
    pub point_radius: f64,
    /// Maximum pointer distance, in drawing units, for selecting a grid point
    pub hit_radius: f64,
    /// Polyline segments used to draw a fitted ellipse
    pub ellipse_segments: usize,
    /// Drag radius, in grid units, below which a drag is not rasterized
    pub min_drag_radius: f64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            point_radius: 4.0,
            hit_radius: 12.0,
            ellipse_segments: 360,
            min_drag_radius: 0.1,
        }
    }
}

/// Fitting preferences
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FitSettings {
    /// Fitting mode selected at startup
    pub default_shape: ShapeKind,
}

/// Command-line overrides for the grid section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridOverrides {
    pub size: Option<usize>,
    pub canvas: Option<(u32, u32)>,
    pub padding: Option<u32>,
}

impl GridOverrides {
    /// Parses a `WIDTHxHEIGHT` canvas size such as `800x600`.
    pub fn parse_canvas(s: &str) -> Result<(u32, u32), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: "canvas".to_string(),
            value: s.to_string(),
        };
        let (w, h) = s
            .trim()
            .split_once(|c: char| c == 'x' || c == 'X')
            .ok_or_else(invalid)?;
        let w = w.trim().parse::<u32>().map_err(|_| invalid())?;
        let h = h.trim().parse::<u32>().map_err(|_| invalid())?;
        Ok((w, h))
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_none() && self.canvas.is_none() && self.padding.is_none()
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Grid layout
    pub grid: GridSettings,
    /// Display and interaction
    pub display: DisplaySettings,
    /// Fitting preferences
    pub fitting: FitSettings,
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location: `<config_dir>/gridfit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::LoadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| SettingsError::SaveError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        debug!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Loads `path`, or the default location when `path` is `None`.
    ///
    /// A missing file yields the defaults silently; an unreadable or invalid
    /// file yields the defaults with a warning.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Ok(path) => path,
                Err(e) => {
                    warn!("{}; using default configuration", e);
                    return Self::default();
                }
            },
        };

        if !path.exists() {
            debug!("No configuration at {}, using defaults", path.display());
            return Self::default();
        }

        Self::load_from_file(&path).unwrap_or_else(|e| {
            warn!("Ignoring configuration {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let grid = &self.grid;
        if grid.size < 2 {
            return Err(SettingsError::invalid(
                "grid.size",
                format!("must be at least 2, got {}", grid.size),
            ));
        }

        if grid.canvas_width == 0 || grid.canvas_height == 0 {
            return Err(SettingsError::invalid(
                "grid.canvas",
                "canvas dimensions must be > 0",
            ));
        }

        let limit = grid.canvas_width.min(grid.canvas_height) as f64 / 2.0;
        if grid.padding as f64 >= limit {
            return Err(SettingsError::invalid(
                "grid.padding",
                format!("must be less than {}, got {}", limit, grid.padding),
            ));
        }

        let display = &self.display;
        if !(display.point_radius > 0.0) {
            return Err(SettingsError::invalid("display.point_radius", "must be > 0"));
        }

        if !(display.hit_radius > 0.0) {
            return Err(SettingsError::invalid("display.hit_radius", "must be > 0"));
        }

        if display.ellipse_segments < 3 {
            return Err(SettingsError::invalid(
                "display.ellipse_segments",
                format!("must be at least 3, got {}", display.ellipse_segments),
            ));
        }

        if !(display.min_drag_radius >= 0.0) {
            return Err(SettingsError::invalid(
                "display.min_drag_radius",
                "must be >= 0",
            ));
        }

        Ok(())
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn apply_overrides(&mut self, overrides: &GridOverrides) {
        if let Some(size) = overrides.size {
            self.grid.size = size;
        }
        if let Some((width, height)) = overrides.canvas {
            self.grid.canvas_width = width;
            self.grid.canvas_height = height;
        }
        if let Some(padding) = overrides.padding {
            self.grid.padding = padding;
        }
    }
}
