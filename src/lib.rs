//! # GridFit
//!
//! Circle rasterization on a discrete point grid, and best-fit circle and
//! ellipse estimation through selected grid points.
//!
//! ## Architecture
//!
//! GridFit is organized as a workspace with multiple crates:
//!
//! 1. **gridfit-core** - Point/circle/ellipse types, constants, error taxonomy
//! 2. **gridfit-grid** - Coordinate transform, point grid, rasterizer, bounding circles
//! 3. **gridfit-fitting** - Pratt circle fit and moment-based ellipse estimate
//! 4. **gridfit-settings** - Configuration defaults, validation, TOML/JSON persistence
//! 5. **gridfit-session** - Pointer-driven session state and overlay display lists
//! 6. **gridfit** - Command-line front end tying the crates together

pub mod cli;
pub mod report;

pub use gridfit_core::{constants, Circle, EllipseShape, FitError, GridError, Point};
pub use gridfit_fitting::{fit_circle, fit_ellipse, try_fit_circle, try_fit_ellipse};
pub use gridfit_grid::{
    compute_bounding_circles, BoundingCircles, CircleRasterizer, CoordinateTransform, GridModel,
    GridPoint,
};
pub use gridfit_session::{
    FitResult, InputEvent, MarkerStyle, Mode, Notice, Overlay, Primitive, RasterResult, Session,
};
pub use gridfit_settings::{Config, GridOverrides, SettingsError, ShapeKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, keeping stdout for command results
/// - RUST_LOG environment variable support
/// - `info` level by default, `debug` when `verbose` is set
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_level(true)
        .with_line_number(verbose);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
