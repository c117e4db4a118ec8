//! A [`Surface`] that records calls instead of rasterizing them.
//!
//! Useful for asserting exact draw sequences, and for callers that want to
//! replay annotation output onto a backend of their own.

use super::color::Color;
use super::font::FontDescriptor;
use super::surface::Surface;
use crate::error::{DrawError, Result};
use crate::geometry::Point;
use std::cell::RefCell;

/// 2D affine transform `[a c e; b d f]`, matching Cairo's matrix layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub xx: f64,
    pub yx: f64,
    pub xy: f64,
    pub yy: f64,
    pub x0: f64,
    pub y0: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        xx: 1.0,
        yx: 0.0,
        xy: 0.0,
        yy: 1.0,
        x0: 0.0,
        y0: 0.0,
    };

    /// Maps a user-space point to device space.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.xx * p.x + self.xy * p.y + self.x0,
            self.yx * p.x + self.yy * p.y + self.y0,
        )
    }

    /// Post-multiplies by `other`, so `other` acts first on user coordinates.
    fn then_user(&self, other: Transform) -> Self {
        Self {
            xx: self.xx * other.xx + self.xy * other.yx,
            yx: self.yx * other.xx + self.yy * other.yx,
            xy: self.xx * other.xy + self.xy * other.yy,
            yy: self.yx * other.xy + self.yy * other.yy,
            x0: self.xx * other.x0 + self.xy * other.y0 + self.x0,
            y0: self.yx * other.x0 + self.yy * other.y0 + self.y0,
        }
    }

    pub fn translated(&self, tx: f64, ty: f64) -> Self {
        self.then_user(Self {
            x0: tx,
            y0: ty,
            ..Self::IDENTITY
        })
    }

    pub fn rotated(&self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        self.then_user(Self {
            xx: cos,
            yx: sin,
            xy: -sin,
            yy: cos,
            ..Self::IDENTITY
        })
    }

    pub fn scaled(&self, sx: f64, sy: f64) -> Self {
        self.then_user(Self {
            xx: sx,
            yy: sy,
            ..Self::IDENTITY
        })
    }
}

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Resize { width: u32, height: u32 },
    Save,
    Restore,
    Translate { tx: f64, ty: f64 },
    Rotate(f64),
    Scale { sx: f64, sy: f64 },
    SetStrokeColor(Color),
    SetFillColor(Color),
    SetLineWidth(f64),
    /// Canvas shorthand such as `bold 30px Avenir Next`
    SetFont(String),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    CurveTo { ctrl1: Point, ctrl2: Point, end: Point },
    ClosePath,
    /// Stroke of the current path, with the transform in effect at the time
    Stroke { transform: Transform },
    /// Fill of the current path, with the transform in effect at the time
    Fill { transform: Transform },
    StrokeRect { x: f64, y: f64, w: f64, h: f64 },
    ClearRect { x: f64, y: f64, w: f64, h: f64 },
    FillText { text: String, x: f64, y: f64 },
}

/// Records every call; keeps just enough state to answer queries.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    ops: Vec<SurfaceOp>,
    transform: Transform,
    saved: Vec<Transform>,
    /// Current path as device-space polygons, one per subpath
    path: Vec<Vec<Point>>,
    hit_queries: RefCell<Vec<Point>>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Device-space points passed to [`Surface::is_point_in_path`], in order.
    pub fn hit_queries(&self) -> Vec<Point> {
        self.hit_queries.borrow().clone()
    }

    /// Transform currently in effect.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Transforms recorded with every fill, in order.
    pub fn fill_transforms(&self) -> Vec<Transform> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Fill { transform } => Some(*transform),
                _ => None,
            })
            .collect()
    }

    fn push_point(&mut self, p: Point, new_subpath: bool) {
        let device = self.transform.apply(p);
        match self.path.last_mut() {
            Some(subpath) if !new_subpath => subpath.push(device),
            _ => self.path.push(vec![device]),
        }
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.width = width;
        self.height = height;
        self.transform = Transform::IDENTITY;
        self.saved.clear();
        self.path.clear();
        self.ops.push(SurfaceOp::Resize { width, height });
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        self.saved.push(self.transform);
        self.ops.push(SurfaceOp::Save);
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        self.transform = self
            .saved
            .pop()
            .ok_or_else(|| DrawError::Surface("restore without matching save".into()))?;
        self.ops.push(SurfaceOp::Restore);
        Ok(())
    }

    fn translate(&mut self, tx: f64, ty: f64) {
        self.transform = self.transform.translated(tx, ty);
        self.ops.push(SurfaceOp::Translate { tx, ty });
    }

    fn rotate(&mut self, radians: f64) {
        self.transform = self.transform.rotated(radians);
        self.ops.push(SurfaceOp::Rotate(radians));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.transform = self.transform.scaled(sx, sy);
        self.ops.push(SurfaceOp::Scale { sx, sy });
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ops.push(SurfaceOp::SetStrokeColor(color));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ops.push(SurfaceOp::SetFillColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(SurfaceOp::SetLineWidth(width));
    }

    fn set_font(&mut self, font: &FontDescriptor, size_px: f64) {
        self.ops.push(SurfaceOp::SetFont(font.to_css_string(size_px)));
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.ops.push(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push_point(Point::new(x, y), true);
        self.ops.push(SurfaceOp::MoveTo(Point::new(x, y)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push_point(Point::new(x, y), false);
        self.ops.push(SurfaceOp::LineTo(Point::new(x, y)));
    }

    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        // Hit testing treats the curve as its control polygon.
        self.push_point(Point::new(x1, y1), false);
        self.push_point(Point::new(x2, y2), false);
        self.push_point(Point::new(x3, y3), false);
        self.ops.push(SurfaceOp::CurveTo {
            ctrl1: Point::new(x1, y1),
            ctrl2: Point::new(x2, y2),
            end: Point::new(x3, y3),
        });
    }

    fn close_path(&mut self) {
        self.ops.push(SurfaceOp::ClosePath);
    }

    fn stroke(&mut self) -> Result<()> {
        self.ops.push(SurfaceOp::Stroke {
            transform: self.transform,
        });
        Ok(())
    }

    fn fill(&mut self) -> Result<()> {
        self.ops.push(SurfaceOp::Fill {
            transform: self.transform,
        });
        Ok(())
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<()> {
        self.ops.push(SurfaceOp::StrokeRect { x, y, w, h });
        Ok(())
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<()> {
        self.ops.push(SurfaceOp::ClearRect { x, y, w, h });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<()> {
        self.ops.push(SurfaceOp::FillText {
            text: text.to_string(),
            x,
            y,
        });
        Ok(())
    }

    fn is_point_in_path(&self, x: f64, y: f64) -> Result<bool> {
        self.hit_queries.borrow_mut().push(Point::new(x, y));
        Ok(self
            .path
            .iter()
            .filter(|subpath| polygon_contains(subpath, x, y))
            .count()
            % 2
            == 1)
    }
}

/// Even-odd ray casting against a closed polygon.
fn polygon_contains(polygon: &[Point], x: f64, y: f64) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (pi, pj) = (polygon[i], polygon[j]);
        if (pi.y > y) != (pj.y > y) && x < (pj.x - pi.x) * (y - pi.y) / (pj.y - pi.y) + pi.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}
