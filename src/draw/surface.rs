//! The drawing-surface seam every annotation is painted through.

use super::color::Color;
use super::font::FontDescriptor;
use crate::error::Result;

/// A 2D drawing surface with canvas-style semantics.
///
/// Implementations follow the HTML canvas model rather than raw Cairo:
/// - stroke and fill colors are separate pieces of paint state;
/// - [`stroke`](Self::stroke) and [`fill`](Self::fill) keep the current path,
///   only [`begin_path`](Self::begin_path) discards it;
/// - [`stroke_rect`](Self::stroke_rect) and [`clear_rect`](Self::clear_rect)
///   leave the current path alone;
/// - [`is_point_in_path`](Self::is_point_in_path) takes device-space
///   coordinates, unaffected by the current transform.
///
/// Paint state (colors, line width, font, transform) persists on the surface
/// between calls. Wrap calls in [`save`](Self::save)/[`restore`](Self::restore)
/// or use [`with_saved_state`] to isolate them.
pub trait Surface {
    /// Backing-store width in device pixels.
    fn width(&self) -> u32;
    /// Backing-store height in device pixels.
    fn height(&self) -> u32;
    /// Replaces the backing store with one of the given size.
    ///
    /// Contents and paint state are reset, as when a canvas is resized.
    fn resize(&mut self, width: u32, height: u32) -> Result<()>;

    fn save(&mut self) -> Result<()>;
    fn restore(&mut self) -> Result<()>;

    fn translate(&mut self, tx: f64, ty: f64);
    fn rotate(&mut self, radians: f64);
    fn scale(&mut self, sx: f64, sy: f64);

    fn set_stroke_color(&mut self, color: Color);
    fn set_fill_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &FontDescriptor, size_px: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64);
    fn close_path(&mut self);

    fn stroke(&mut self) -> Result<()>;
    fn fill(&mut self) -> Result<()>;
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<()>;
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<()>;
    /// Draws `text` with its alphabetic baseline starting at (x, y).
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<()>;

    /// Tests whether the device-space point lies inside the current path.
    fn is_point_in_path(&self, x: f64, y: f64) -> Result<bool>;

    /// Clears the whole backing store.
    fn clear(&mut self) -> Result<()> {
        let (w, h) = (self.width() as f64, self.height() as f64);
        self.clear_rect(0.0, 0.0, w, h)
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn width(&self) -> u32 {
        (**self).width()
    }
    fn height(&self) -> u32 {
        (**self).height()
    }
    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        (**self).resize(width, height)
    }
    fn save(&mut self) -> Result<()> {
        (**self).save()
    }
    fn restore(&mut self) -> Result<()> {
        (**self).restore()
    }
    fn translate(&mut self, tx: f64, ty: f64) {
        (**self).translate(tx, ty)
    }
    fn rotate(&mut self, radians: f64) {
        (**self).rotate(radians)
    }
    fn scale(&mut self, sx: f64, sy: f64) {
        (**self).scale(sx, sy)
    }
    fn set_stroke_color(&mut self, color: Color) {
        (**self).set_stroke_color(color)
    }
    fn set_fill_color(&mut self, color: Color) {
        (**self).set_fill_color(color)
    }
    fn set_line_width(&mut self, width: f64) {
        (**self).set_line_width(width)
    }
    fn set_font(&mut self, font: &FontDescriptor, size_px: f64) {
        (**self).set_font(font, size_px)
    }
    fn begin_path(&mut self) {
        (**self).begin_path()
    }
    fn move_to(&mut self, x: f64, y: f64) {
        (**self).move_to(x, y)
    }
    fn line_to(&mut self, x: f64, y: f64) {
        (**self).line_to(x, y)
    }
    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        (**self).curve_to(x1, y1, x2, y2, x3, y3)
    }
    fn close_path(&mut self) {
        (**self).close_path()
    }
    fn stroke(&mut self) -> Result<()> {
        (**self).stroke()
    }
    fn fill(&mut self) -> Result<()> {
        (**self).fill()
    }
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<()> {
        (**self).stroke_rect(x, y, w, h)
    }
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<()> {
        (**self).clear_rect(x, y, w, h)
    }
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<()> {
        (**self).fill_text(text, x, y)
    }
    fn is_point_in_path(&self, x: f64, y: f64) -> Result<bool> {
        (**self).is_point_in_path(x, y)
    }
    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }
}

/// Runs `f` between [`Surface::save`] and [`Surface::restore`].
///
/// The state is restored even when `f` fails; the first error wins.
pub fn with_saved_state<S, T>(surface: &mut S, f: impl FnOnce(&mut S) -> Result<T>) -> Result<T>
where
    S: Surface + ?Sized,
{
    surface.save()?;
    let result = f(surface);
    let restored = surface.restore();
    let value = result?;
    restored?;
    Ok(value)
}
