//! High-density display scaling.
//!
//! [`scale_for_display`] grows a surface's backing store by the device pixel
//! ratio while keeping its on-screen footprint, then scales all drawing by the
//! same ratio so callers keep working in display coordinates.

use crate::draw::color::Color;
use crate::draw::font::FontDescriptor;
use crate::draw::surface::Surface;
use crate::error::{DrawError, Result};
use log::debug;

/// A surface adjusted for a device pixel ratio.
///
/// Every [`Surface`] call is forwarded to the wrapped surface, except
/// [`is_point_in_path`](Surface::is_point_in_path), which takes display-space
/// coordinates and multiplies them by the ratio before delegating.
#[derive(Debug)]
pub struct ScaledSurface<S> {
    inner: S,
    ratio: f64,
    display_width: u32,
    display_height: u32,
}

/// Scales `surface` for a display with the given device pixel ratio.
///
/// With a ratio other than 1, the current size is recorded as the display
/// size, the backing store is resized to `round(size × ratio)`, and a uniform
/// `ratio` scale is applied to subsequent drawing. A ratio of exactly 1 leaves
/// the surface untouched.
///
/// # Errors
/// [`DrawError::InvalidRatio`] when `ratio` is not finite or not positive;
/// otherwise whatever the surface reports while resizing.
pub fn scale_for_display<S: Surface>(mut surface: S, ratio: f64) -> Result<ScaledSurface<S>> {
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(DrawError::InvalidRatio(ratio));
    }

    let display_width = surface.width();
    let display_height = surface.height();

    if ratio != 1.0 {
        let backing_width = (display_width as f64 * ratio).round() as u32;
        let backing_height = (display_height as f64 * ratio).round() as u32;
        surface.resize(backing_width, backing_height)?;
        surface.scale(ratio, ratio);
        debug!(
            "Scaled {display_width}x{display_height} surface by {ratio} to {backing_width}x{backing_height}"
        );
    }

    Ok(ScaledSurface {
        inner: surface,
        ratio,
        display_width,
        display_height,
    })
}

impl<S> ScaledSurface<S> {
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// On-screen size in display pixels: the surface size before scaling.
    pub fn display_size(&self) -> (u32, u32) {
        (self.display_width, self.display_height)
    }

    /// Display size as CSS lengths, e.g. `("100px", "50px")`.
    pub fn css_size(&self) -> (String, String) {
        (
            format!("{}px", self.display_width),
            format!("{}px", self.display_height),
        )
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Surface> Surface for ScaledSurface<S> {
    fn width(&self) -> u32 {
        self.inner.width()
    }

    fn height(&self) -> u32 {
        self.inner.height()
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.inner.resize(width, height)
    }

    fn save(&mut self) -> Result<()> {
        self.inner.save()
    }

    fn restore(&mut self) -> Result<()> {
        self.inner.restore()
    }

    fn translate(&mut self, tx: f64, ty: f64) {
        self.inner.translate(tx, ty);
    }

    fn rotate(&mut self, radians: f64) {
        self.inner.rotate(radians);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.inner.scale(sx, sy);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.inner.set_stroke_color(color);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.inner.set_fill_color(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.inner.set_line_width(width);
    }

    fn set_font(&mut self, font: &FontDescriptor, size_px: f64) {
        self.inner.set_font(font, size_px);
    }

    fn begin_path(&mut self) {
        self.inner.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.inner.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.inner.line_to(x, y);
    }

    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        self.inner.curve_to(x1, y1, x2, y2, x3, y3);
    }

    fn close_path(&mut self) {
        self.inner.close_path();
    }

    fn stroke(&mut self) -> Result<()> {
        self.inner.stroke()
    }

    fn fill(&mut self) -> Result<()> {
        self.inner.fill()
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<()> {
        self.inner.stroke_rect(x, y, w, h)
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<()> {
        self.inner.clear_rect(x, y, w, h)
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<()> {
        self.inner.fill_text(text, x, y)
    }

    fn is_point_in_path(&self, x: f64, y: f64) -> Result<bool> {
        self.inner.is_point_in_path(x * self.ratio, y * self.ratio)
    }
}
