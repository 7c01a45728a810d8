//! Display list produced by a session.
//!
//! Every coordinate and length here is in drawing space.

use gridfit_core::{Circle, Point};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStyle {
    Idle,
    Flagged,
}

/// A single drawable item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    /// A grid point.
    Marker {
        center: Point,
        radius: f64,
        style: MarkerStyle,
    },
    /// The circle being dragged out.
    PreviewCircle { circle: Circle },
    /// The circle that was rasterized.
    RasterCircle { circle: Circle },
    /// Largest circle about the raster center with no flagged point inside.
    InnerBound { circle: Circle },
    /// Smallest circle about the raster center containing every flagged point.
    OuterBound { circle: Circle },
    FittedCircle { circle: Circle },
    /// Closed polyline approximating the fitted ellipse.
    FittedEllipse { outline: Vec<Point> },
}

impl Primitive {
    pub fn is_marker(&self) -> bool {
        matches!(self, Primitive::Marker { .. })
    }
}

/// Ordered display list. Markers come first, results are drawn on top.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Overlay {
    primitives: Vec<Primitive>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Number of markers drawn with `style`.
    pub fn marker_count(&self, style: MarkerStyle) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Marker { style: s, .. } if *s == style))
            .count()
    }

    /// Everything except the grid markers.
    pub fn shapes(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(|p| !p.is_marker())
    }
}
