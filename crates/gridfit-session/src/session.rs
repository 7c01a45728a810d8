//! Session state and input handling.
//!
//! All pointer positions arrive in drawing coordinates. Rasterization runs in
//! grid space; fits run on the flagged points' drawing positions, since the
//! fitters' degeneracy thresholds and sanity bound are in drawing units.
//! Results are stored in grid space and converted back to drawing space only
//! when the overlay is built.

use std::fmt;

use gridfit_core::constants::{MIN_CIRCLE_POINTS, MIN_ELLIPSE_POINTS};
use gridfit_core::{Circle, EllipseShape, GridError, Point};
use gridfit_fitting::{try_fit_circle, try_fit_ellipse};
use gridfit_grid::{
    compute_bounding_circles, BoundingCircles, CircleRasterizer, CoordinateTransform, GridModel,
};
use gridfit_settings::{Config, DisplaySettings, ShapeKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::overlay::{MarkerStyle, Overlay, Primitive};

/// Interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Drag out a circle and flag the grid points along it.
    #[default]
    Rasterize,
    /// Select grid points and fit a circle through them.
    FitCircle,
    /// Select grid points and fit an ellipse through them.
    FitEllipse,
}

impl Mode {
    pub fn is_fitting(&self) -> bool {
        matches!(self, Mode::FitCircle | Mode::FitEllipse)
    }

    /// Minimum number of flagged points `Generate` needs in this mode.
    pub fn min_points(&self) -> Option<usize> {
        match self {
            Mode::Rasterize => None,
            Mode::FitCircle => Some(MIN_CIRCLE_POINTS),
            Mode::FitEllipse => Some(MIN_ELLIPSE_POINTS),
        }
    }
}

impl From<ShapeKind> for Mode {
    fn from(shape: ShapeKind) -> Self {
        match shape {
            ShapeKind::Circle => Mode::FitCircle,
            ShapeKind::Ellipse => Mode::FitEllipse,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Rasterize => write!(f, "rasterize"),
            Mode::FitCircle => write!(f, "fit circle"),
            Mode::FitEllipse => write!(f, "fit ellipse"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
    /// Fit a shape through the flagged points.
    Generate,
    /// Clear every flag and result.
    Clear,
    SwitchMode(Mode),
}

/// A message for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "notice", rename_all = "snake_case")]
pub enum Notice {
    NotEnoughPoints { needed: usize, got: usize },
    InvalidConfiguration,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::NotEnoughPoints { .. } => "Not Enough Points",
            Notice::InvalidConfiguration => "Invalid Point Configuration",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notice::NotEnoughPoints { needed, got } => format!(
                "Select at least {} points to fit this shape ({} selected).",
                needed, got
            ),
            Notice::InvalidConfiguration => {
                "The selected points do not determine a valid shape. \
                 Try points that are not all on one line."
                    .to_string()
            }
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

/// Outcome of a drag that flagged at least one grid point, in grid space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RasterResult {
    pub circle: Circle,
    pub bounds: BoundingCircles,
}

/// Outcome of a successful fit, in grid space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum FitResult {
    Circle { circle: Circle },
    Ellipse { ellipse: EllipseShape },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    start: Point,
    end: Point,
}

/// Interactive state passed to every event handler.
#[derive(Debug, Clone)]
pub struct Session {
    grid: GridModel,
    display: DisplaySettings,
    mode: Mode,
    drag: Option<Drag>,
    raster: Option<RasterResult>,
    fit: Option<FitResult>,
}

impl Session {
    /// Builds a session from validated configuration.
    pub fn new(config: &Config) -> Result<Self, GridError> {
        let grid = GridModel::try_new(
            config.grid.size,
            config.grid.canvas_width,
            config.grid.canvas_height,
            config.grid.padding,
        )?;
        Ok(Self::with_grid(grid, config.display.clone()))
    }

    pub fn with_grid(grid: GridModel, display: DisplaySettings) -> Self {
        Self {
            grid,
            display,
            mode: Mode::default(),
            drag: None,
            raster: None,
            fit: None,
        }
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    pub fn transform(&self) -> &CoordinateTransform {
        self.grid.transform()
    }

    pub fn display(&self) -> &DisplaySettings {
        &self.display
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn raster_result(&self) -> Option<&RasterResult> {
        self.raster.as_ref()
    }

    pub fn fit_result(&self) -> Option<&FitResult> {
        self.fit.as_ref()
    }

    /// Dispatches one input event. Returns a notice when the user should be
    /// told why nothing happened.
    pub fn handle(&mut self, event: InputEvent) -> Option<Notice> {
        match event {
            InputEvent::SwitchMode(mode) => {
                info!("Switching mode: {} -> {}", self.mode, mode);
                self.mode = mode;
                self.reset();
                None
            }
            InputEvent::Clear => {
                self.reset();
                None
            }
            InputEvent::Generate => self.generate(),
            InputEvent::PointerDown(p) => {
                if self.mode.is_fitting() {
                    self.toggle_at(p);
                } else {
                    self.begin_drag(p);
                }
                None
            }
            InputEvent::PointerMove(p) => {
                if let Some(drag) = self.drag.as_mut() {
                    drag.end = p;
                }
                None
            }
            InputEvent::PointerUp(p) => {
                self.end_drag(p);
                None
            }
        }
    }

    /// Flips the flag at (row, col), hiding any result it would make stale.
    /// Returns the new flag state.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        self.fit = None;
        self.raster = None;
        self.grid.toggle(row, col)
    }

    fn reset(&mut self) {
        self.grid.reset_flags();
        self.drag = None;
        self.raster = None;
        self.fit = None;
    }

    fn toggle_at(&mut self, p: Point) {
        match self.grid.index_at(p, self.display.hit_radius) {
            Some((row, col)) => {
                let flagged = self.toggle(row, col);
                debug!("Toggled grid point ({}, {}) -> {}", row, col, flagged);
            }
            None => debug!("No grid point under {}", p),
        }
    }

    fn begin_drag(&mut self, p: Point) {
        self.reset();
        self.drag = Some(Drag { start: p, end: p });
    }

    fn end_drag(&mut self, p: Point) {
        let Some(mut drag) = self.drag.take() else {
            return;
        };
        drag.end = p;

        let t = *self.grid.transform();
        let center = t.to_logical(drag.start);
        let radius = center.distance_to(&t.to_logical(drag.end));
        if !(radius > self.display.min_drag_radius) {
            debug!("Drag radius {:.4} too small, ignoring", radius);
            return;
        }

        let circle = Circle::new(center, radius);
        CircleRasterizer::rasterize_bounded(&mut self.grid, &circle);
        let Some(bounds) = compute_bounding_circles(&self.grid, center) else {
            info!("Circle at {} radius {:.3} flagged no points", center, radius);
            return;
        };
        info!(
            "Rasterized circle at {} radius {:.3}: {} points flagged",
            center,
            radius,
            self.grid.flagged_count()
        );
        self.raster = Some(RasterResult { circle, bounds });
    }

    fn generate(&mut self) -> Option<Notice> {
        let needed = self.mode.min_points()?;
        let points = self.grid.flagged_draw_points();
        if points.len() < needed {
            return Some(Notice::NotEnoughPoints {
                needed,
                got: points.len(),
            });
        }

        let t = *self.grid.transform();
        let result = match self.mode {
            Mode::FitEllipse => try_fit_ellipse(&points).map(|ellipse| FitResult::Ellipse {
                ellipse: ellipse_to_logical(&t, &ellipse),
            }),
            _ => try_fit_circle(&points).map(|circle| FitResult::Circle {
                circle: circle_to_logical(&t, &circle),
            }),
        };

        match result {
            Ok(fit) => {
                info!("Fitted {} through {} points", self.mode, points.len());
                self.fit = Some(fit);
                None
            }
            Err(e) => {
                info!("Fit rejected: {}", e);
                self.fit = None;
                Some(Notice::InvalidConfiguration)
            }
        }
    }

    /// Builds the display list for the current state.
    pub fn overlay(&self) -> Overlay {
        let t = self.grid.transform();
        let mut overlay = Overlay::new();

        for point in self.grid.points() {
            overlay.push(Primitive::Marker {
                center: point.draw_position,
                radius: self.display.point_radius,
                style: if point.flag {
                    MarkerStyle::Flagged
                } else {
                    MarkerStyle::Idle
                },
            });
        }

        if let Some(drag) = &self.drag {
            overlay.push(Primitive::PreviewCircle {
                circle: Circle::new(drag.start, drag.start.distance_to(&drag.end)),
            });
        }

        if let Some(raster) = &self.raster {
            overlay.push(Primitive::RasterCircle {
                circle: circle_to_physical(t, &raster.circle),
            });
            if raster.bounds.inner.is_valid() {
                overlay.push(Primitive::InnerBound {
                    circle: circle_to_physical(t, &raster.bounds.inner),
                });
            }
            overlay.push(Primitive::OuterBound {
                circle: circle_to_physical(t, &raster.bounds.outer),
            });
        }

        match &self.fit {
            Some(FitResult::Circle { circle }) => overlay.push(Primitive::FittedCircle {
                circle: circle_to_physical(t, circle),
            }),
            Some(FitResult::Ellipse { ellipse }) => overlay.push(Primitive::FittedEllipse {
                outline: ellipse_to_physical(t, ellipse).outline(self.display.ellipse_segments),
            }),
            None => {}
        }

        overlay
    }
}

fn circle_to_physical(t: &CoordinateTransform, circle: &Circle) -> Circle {
    Circle::new(
        t.to_physical(circle.center),
        t.scale_distance_to_physical(circle.radius),
    )
}

fn circle_to_logical(t: &CoordinateTransform, circle: &Circle) -> Circle {
    Circle::new(
        t.to_logical(circle.center),
        t.scale_distance_to_logical(circle.radius),
    )
}

fn ellipse_to_logical(t: &CoordinateTransform, ellipse: &EllipseShape) -> EllipseShape {
    EllipseShape::new(
        t.to_logical(ellipse.center),
        t.scale_distance_to_logical(ellipse.semi_major),
        t.scale_distance_to_logical(ellipse.semi_minor),
        ellipse.angle,
    )
}

fn ellipse_to_physical(t: &CoordinateTransform, ellipse: &EllipseShape) -> EllipseShape {
    EllipseShape::new(
        t.to_physical(ellipse.center),
        t.scale_distance_to_physical(ellipse.semi_major),
        t.scale_distance_to_physical(ellipse.semi_minor),
        ellipse.angle,
    )
}
