//! # GridFit Session
//!
//! Glue between a pointer-driven front end and the geometric core.
//!
//! A [`Session`] owns the grid, the current [`Mode`], transient drag state and
//! the latest result. Front ends feed it [`InputEvent`]s in drawing
//! coordinates, show any returned [`Notice`], and draw the [`Overlay`] it
//! produces.

pub mod overlay;
pub mod session;

pub use overlay::{MarkerStyle, Overlay, Primitive};
pub use session::{FitResult, InputEvent, Mode, Notice, RasterResult, Session};
