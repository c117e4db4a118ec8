//! Pure geometry used by the annotation renderers.
//!
//! This module provides:
//! - [`BoundingBox`]: the drag rectangle every annotation is drawn from
//! - Bezier approximation of an ellipse inscribed in a box
//! - Arrowhead rotation angle calculation
//! - Handle placement at corners and edge midpoints
//!
//! Nothing here touches a drawing surface.

use crate::error::{Result, ensure_finite};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Control-point offset factor for approximating a quarter circle with a cubic Bezier.
pub const ELLIPSE_KAPPA: f64 = 0.5522848;

/// A point in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Bounding Box
// ============================================================================

/// Opposite corners of a drawn shape's extent.
///
/// The corners are kept in the order the user dragged them, so
/// [`width`](Self::width) and [`height`](Self::height) may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Drag start X coordinate
    pub x1: f64,
    /// Drag start Y coordinate
    pub y1: f64,
    /// Drag end X coordinate
    pub x2: f64,
    /// Drag end Y coordinate
    pub y2: f64,
}

impl BoundingBox {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Signed horizontal extent (`x2 - x1`).
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Signed vertical extent (`y2 - y1`).
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Center of the box, independent of drag direction.
    pub fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Returns the same box with `x1 <= x2` and `y1 <= y2`.
    pub fn normalized(&self) -> Self {
        Self {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
        }
    }

    /// Fails with [`DrawError::InvalidGeometry`](crate::DrawError::InvalidGeometry)
    /// if any corner coordinate is NaN or infinite.
    pub fn validate(&self) -> Result<()> {
        ensure_finite("x1", self.x1)?;
        ensure_finite("y1", self.y1)?;
        ensure_finite("x2", self.x2)?;
        ensure_finite("y2", self.y2)?;
        Ok(())
    }
}

// ============================================================================
// Ellipse Geometry
// ============================================================================

/// A cubic Bezier curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierSegment {
    pub start: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub end: Point,
}

/// Calculates the four Bezier segments approximating an ellipse.
///
/// The ellipse is inscribed in the box `[x, x + w] × [y, y + h]`. The path
/// starts at the left midpoint and runs through the top, right, and bottom
/// midpoints back to where it started, so `segments[i].end` always equals
/// `segments[(i + 1) % 4].start`.
///
/// Negative `w`/`h` mirror the traversal but describe the same ellipse.
pub fn ellipse_control_points(x: f64, y: f64, w: f64, h: f64) -> [BezierSegment; 4] {
    let ox = (w / 2.0) * ELLIPSE_KAPPA;
    let oy = (h / 2.0) * ELLIPSE_KAPPA;
    let xe = x + w;
    let ye = y + h;
    let xm = x + w / 2.0;
    let ym = y + h / 2.0;

    let left = Point::new(x, ym);
    let top = Point::new(xm, y);
    let right = Point::new(xe, ym);
    let bottom = Point::new(xm, ye);

    [
        BezierSegment {
            start: left,
            ctrl1: Point::new(x, ym - oy),
            ctrl2: Point::new(xm - ox, y),
            end: top,
        },
        BezierSegment {
            start: top,
            ctrl1: Point::new(xm + ox, y),
            ctrl2: Point::new(xe, ym - oy),
            end: right,
        },
        BezierSegment {
            start: right,
            ctrl1: Point::new(xe, ym + oy),
            ctrl2: Point::new(xm + ox, ye),
            end: bottom,
        },
        BezierSegment {
            start: bottom,
            ctrl1: Point::new(xm - ox, ye),
            ctrl2: Point::new(x, ym + oy),
            end: left,
        },
    ]
}

// ============================================================================
// Arrowhead Geometry
// ============================================================================

/// Calculates the rotation for an arrowhead drawn at (x1, y1).
///
/// The arrowhead glyph points up (negative Y) before rotation. Rotating it
/// by the returned angle turns it away from (x2, y2), so the head marks the
/// start of the arrow.
///
/// # Returns
/// - `atan(slope) - π/2` when `x2 > x1`
/// - `atan(slope) + π/2` when `x2 < x1`
/// - exactly `π/2` for a vertical segment running down (`y2 > y1`) and
///   `-π/2` otherwise, including coincident points
pub fn arrow_angle(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;

    if dx == 0.0 {
        let angle = if dy > 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 };
        log::trace!("vertical arrow at ({x1}, {y1}), using fixed angle {angle}");
        return angle;
    }

    // atan(dy / dx) via atan2 with dx folded positive, finite even when
    // both differences overflow to infinity
    let slope_angle = if dx > 0.0 {
        dy.atan2(dx)
    } else {
        (-dy).atan2(-dx)
    };
    if dx > 0.0 {
        slope_angle - FRAC_PI_2
    } else {
        slope_angle + FRAC_PI_2
    }
}

// ============================================================================
// Handle Placement
// ============================================================================

/// The eight selection handles around a bounding box.
///
/// Order: the four corners `(x1,y1) (x2,y1) (x1,y2) (x2,y2)`, then the
/// top, left, bottom, and right edge midpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleSet {
    pub points: [Point; 8],
}

impl HandleSet {
    pub fn from_box(bbox: &BoundingBox) -> Self {
        let BoundingBox { x1, y1, x2, y2 } = *bbox;
        let Point { x: mx, y: my } = bbox.center();

        Self {
            points: [
                Point::new(x1, y1),
                Point::new(x2, y1),
                Point::new(x1, y2),
                Point::new(x2, y2),
                Point::new(mx, y1),
                Point::new(x1, my),
                Point::new(mx, y2),
                Point::new(x2, my),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }
}
