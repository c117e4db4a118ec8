//! Shape painting primitives built on [`Surface`].
//!
//! These functions paint with whatever stroke/fill paint the surface holds,
//! except where noted. They are the building blocks of [`crate::annotate`].

use super::color::Color;
use super::surface::{Surface, with_saved_state};
use crate::error::Result;
use crate::geometry::{BoundingBox, HandleSet, Point, ellipse_control_points};

/// Diameter of a selection handle in pixels.
pub const DEFAULT_HANDLE_SIZE: f64 = 12.0;

/// Line width used to outline handles.
pub const HANDLE_LINE_WIDTH: f64 = 2.0;

/// Arrowhead triangle in glyph space, pointing up: apex, then base corners.
pub const ARROW_HEAD: [Point; 3] = [
    Point::new(0.0, -8.0),
    Point::new(12.0, 30.0),
    Point::new(-12.0, 30.0),
];

/// Tunables for the primitives below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Handle diameter in pixels
    pub handle_size: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            handle_size: DEFAULT_HANDLE_SIZE,
        }
    }
}

/// Replaces the current path with an ellipse inscribed in `[x, x+w] × [y, y+h]`.
pub fn trace_ellipse<S: Surface + ?Sized>(surface: &mut S, x: f64, y: f64, w: f64, h: f64) {
    let segments = ellipse_control_points(x, y, w, h);

    surface.begin_path();
    surface.move_to(segments[0].start.x, segments[0].start.y);
    for seg in &segments {
        surface.curve_to(
            seg.ctrl1.x,
            seg.ctrl1.y,
            seg.ctrl2.x,
            seg.ctrl2.y,
            seg.end.x,
            seg.end.y,
        );
    }
}

/// Strokes the ellipse inscribed in `bbox`. Does not fill.
///
/// The ellipse path stays current, so a caller may fill it afterwards.
pub fn paint_ellipse<S: Surface + ?Sized>(surface: &mut S, bbox: &BoundingBox) -> Result<()> {
    trace_ellipse(surface, bbox.x1, bbox.y1, bbox.width(), bbox.height());
    surface.stroke()
}

/// Paints a round handle marker centered at (cx, cy).
///
/// The marker is outlined with the current stroke paint and filled with the
/// current fill paint. Line width is set to [`HANDLE_LINE_WIDTH`] and left
/// that way; the transform is restored before returning.
pub fn paint_handle<S: Surface + ?Sized>(
    surface: &mut S,
    cx: f64,
    cy: f64,
    options: &RenderOptions,
) -> Result<()> {
    let size = options.handle_size;
    surface.set_line_width(HANDLE_LINE_WIDTH);

    with_saved_state(surface, |s| {
        s.translate(cx - size / 2.0, cy - size / 2.0);
        paint_ellipse(s, &BoundingBox::new(0.0, 0.0, size, size))?;
        s.fill()
    })
}

/// Paints the eight handles around `bbox` and returns their positions.
pub fn paint_handle_set<S: Surface + ?Sized>(
    surface: &mut S,
    bbox: &BoundingBox,
    options: &RenderOptions,
) -> Result<HandleSet> {
    let handles = HandleSet::from_box(bbox);
    for p in handles.iter() {
        paint_handle(surface, p.x, p.y, options)?;
    }
    Ok(handles)
}

/// Paints a filled arrowhead at (x, y) rotated by `angle` radians.
///
/// Sets both stroke and fill paint to `color`; they stay set afterwards.
/// The triangle path is built under a saved transform and filled once the
/// transform is back, so the path keeps its rotated device coordinates.
pub fn paint_arrow_head<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    angle: f64,
    color: Color,
) -> Result<()> {
    surface.set_stroke_color(color);
    surface.set_fill_color(color);

    with_saved_state(surface, |s| {
        s.begin_path();
        s.translate(x, y);
        s.rotate(angle);
        let [apex, right, left] = ARROW_HEAD;
        s.move_to(apex.x, apex.y);
        s.line_to(right.x, right.y);
        s.line_to(left.x, left.y);
        s.close_path();
        Ok(())
    })?;

    surface.fill()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;
    use crate::draw::recording::{RecordingSurface, SurfaceOp, Transform};

    fn handle_centers(surface: &RecordingSurface, size: f64) -> Vec<Point> {
        surface
            .fill_transforms()
            .iter()
            .map(|t| t.apply(Point::new(size / 2.0, size / 2.0)))
            .collect()
    }

    #[test]
    fn ellipse_is_stroked_not_filled() {
        let mut surface = RecordingSurface::new(200, 200);
        paint_ellipse(&mut surface, &BoundingBox::new(10.0, 10.0, 110.0, 60.0)).unwrap();

        let ops = surface.ops();
        assert_eq!(ops[0], SurfaceOp::BeginPath);
        assert_eq!(ops[1], SurfaceOp::MoveTo(Point::new(10.0, 35.0)));
        let curves = ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::CurveTo { .. }))
            .count();
        assert_eq!(curves, 4);
        assert!(matches!(ops.last(), Some(SurfaceOp::Stroke { .. })));
        assert!(surface.fill_transforms().is_empty());
    }

    #[test]
    fn handle_restores_transform() {
        let mut surface = RecordingSurface::new(100, 100);
        paint_handle(&mut surface, 50.0, 40.0, &RenderOptions::default()).unwrap();

        assert_eq!(surface.transform(), Transform::IDENTITY);
        assert_eq!(surface.ops()[0], SurfaceOp::SetLineWidth(HANDLE_LINE_WIDTH));
        assert_eq!(surface.ops()[1], SurfaceOp::Save);
        assert_eq!(surface.ops()[2], SurfaceOp::Translate { tx: 44.0, ty: 34.0 });
        assert_eq!(surface.ops().last(), Some(&SurfaceOp::Restore));
        assert_eq!(
            handle_centers(&surface, DEFAULT_HANDLE_SIZE),
            vec![Point::new(50.0, 40.0)]
        );
    }

    #[test]
    fn handle_set_paints_corners_and_midpoints() {
        let options = RenderOptions { handle_size: 8.0 };
        for bbox in [
            BoundingBox::new(0.0, 0.0, 40.0, 20.0),
            BoundingBox::new(40.0, 20.0, 0.0, 0.0),
        ] {
            let mut surface = RecordingSurface::new(100, 100);
            let handles = paint_handle_set(&mut surface, &bbox, &options).unwrap();

            let centers = handle_centers(&surface, 8.0);
            assert_eq!(centers.len(), 8);
            assert_eq!(centers, handles.points.to_vec());
            for expected in [
                Point::new(0.0, 0.0),
                Point::new(40.0, 20.0),
                Point::new(20.0, 0.0),
                Point::new(0.0, 10.0),
                Point::new(20.0, 20.0),
                Point::new(40.0, 10.0),
            ] {
                assert!(centers.contains(&expected), "missing {expected:?}");
            }
        }
    }

    #[test]
    fn arrow_head_is_filled_after_restore() {
        let mut surface = RecordingSurface::new(100, 100);
        paint_arrow_head(&mut surface, 20.0, 30.0, std::f64::consts::FRAC_PI_2, RED).unwrap();

        let ops = surface.ops();
        assert_eq!(ops[0], SurfaceOp::SetStrokeColor(RED));
        assert_eq!(ops[1], SurfaceOp::SetFillColor(RED));
        let restore = ops.iter().position(|op| *op == SurfaceOp::Restore).unwrap();
        let fill = ops
            .iter()
            .position(|op| matches!(op, SurfaceOp::Fill { .. }))
            .unwrap();
        assert!(fill > restore);
        assert_eq!(surface.fill_transforms(), vec![Transform::IDENTITY]);

        // Apex rotated a quarter turn lands 8px to the right of the anchor.
        assert!(surface.is_point_in_path(27.0, 30.0).unwrap());
        assert!(!surface.is_point_in_path(30.0, 30.0).unwrap());
        assert!(!surface.is_point_in_path(20.0, 10.0).unwrap());
    }
}
