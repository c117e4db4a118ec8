//! Cairo-backed [`Surface`] implementation.
//!
//! Cairo has a single source pattern and consumes the path on stroke/fill;
//! this adapter layers canvas semantics on top: separate stroke and fill
//! paint tracked alongside Cairo's own save/restore stack, path-preserving
//! stroke/fill, and hit testing in device space. Text goes through Pango.

use super::color::{BLACK, Color};
use super::font::{FontDescriptor, TEXT_FONT_SIZE};
use super::surface::Surface;
use crate::error::{DrawError, Result};
use cairo::{Context, Format, ImageSurface, Operator};
use log::debug;
use std::fs::File;
use std::path::Path;

/// Paint state Cairo itself does not keep for us.
#[derive(Debug, Clone)]
struct PaintState {
    stroke: Color,
    fill: Color,
    font: FontDescriptor,
    font_size: f64,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            stroke: BLACK,
            fill: BLACK,
            font: FontDescriptor::default(),
            font_size: TEXT_FONT_SIZE,
        }
    }
}

/// An ARGB32 image surface plus the context drawing into it.
pub struct CairoSurface {
    surface: ImageSurface,
    ctx: Context,
    state: PaintState,
    saved: Vec<PaintState>,
}

impl CairoSurface {
    /// Creates a transparent surface of the given size in device pixels.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let (surface, ctx) = create_backing(width, height)?;
        Ok(Self {
            surface,
            ctx,
            state: PaintState::default(),
            saved: Vec::new(),
        })
    }

    /// Releases the context and hands back the image surface.
    ///
    /// Pixel data can only be borrowed once no context references the surface.
    pub fn into_image_surface(self) -> ImageSurface {
        let Self { surface, ctx, .. } = self;
        drop(ctx);
        surface
    }

    /// Writes the current contents as a PNG file.
    pub fn write_png(&self, path: &Path) -> Result<()> {
        self.surface.flush();
        let mut file = File::create(path)
            .map_err(|e| DrawError::Surface(format!("{}: {e}", path.display())))?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|e| DrawError::Surface(format!("{}: {e}", path.display())))?;
        debug!(
            "Wrote {}x{} PNG to {}",
            self.surface.width(),
            self.surface.height(),
            path.display()
        );
        Ok(())
    }

    fn apply_color(&self, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    }

    /// Runs `f` on an empty path, then puts the caller's path back.
    fn with_detached_path<T>(&self, f: impl FnOnce(&Context) -> Result<T>) -> Result<T> {
        let path = self.ctx.copy_path()?;
        self.ctx.new_path();
        let result = f(&self.ctx);
        self.ctx.new_path();
        self.ctx.append_path(&path);
        result
    }
}

fn create_backing(width: u32, height: u32) -> Result<(ImageSurface, Context)> {
    let surface = ImageSurface::create(Format::ARgb32, width as i32, height as i32)?;
    let ctx = Context::new(&surface)?;
    ctx.set_antialias(cairo::Antialias::Best);
    Ok((surface, ctx))
}

impl Surface for CairoSurface {
    fn width(&self) -> u32 {
        self.surface.width() as u32
    }

    fn height(&self) -> u32 {
        self.surface.height() as u32
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let (surface, ctx) = create_backing(width, height)?;
        self.surface = surface;
        self.ctx = ctx;
        self.state = PaintState::default();
        self.saved.clear();
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        self.ctx.save()?;
        self.saved.push(self.state.clone());
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        let Some(state) = self.saved.pop() else {
            return Err(DrawError::Surface("restore without matching save".into()));
        };
        self.ctx.restore()?;
        self.state = state;
        Ok(())
    }

    fn translate(&mut self, tx: f64, ty: f64) {
        self.ctx.translate(tx, ty);
    }

    fn rotate(&mut self, radians: f64) {
        self.ctx.rotate(radians);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.ctx.scale(sx, sy);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.fill = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_font(&mut self, font: &FontDescriptor, size_px: f64) {
        self.state.font = font.clone();
        self.state.font_size = size_px;
    }

    fn begin_path(&mut self) {
        self.ctx.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        self.ctx.curve_to(x1, y1, x2, y2, x3, y3);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn stroke(&mut self) -> Result<()> {
        self.apply_color(self.state.stroke);
        self.ctx.stroke_preserve()?;
        Ok(())
    }

    fn fill(&mut self) -> Result<()> {
        self.apply_color(self.state.fill);
        self.ctx.fill_preserve()?;
        Ok(())
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<()> {
        let stroke = self.state.stroke;
        self.with_detached_path(|ctx| {
            ctx.rectangle(x, y, w, h);
            ctx.set_source_rgba(stroke.r, stroke.g, stroke.b, stroke.a);
            ctx.stroke()?;
            Ok(())
        })
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<()> {
        self.with_detached_path(|ctx| {
            ctx.save()?;
            ctx.set_operator(Operator::Clear);
            ctx.rectangle(x, y, w, h);
            let filled = ctx.fill();
            ctx.restore()?;
            filled?;
            Ok(())
        })
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<()> {
        let fill = self.state.fill;
        let font_desc_str = self.state.font.to_pango_string();
        let size_px = self.state.font_size;

        self.with_detached_path(|ctx| {
            let layout = pangocairo::functions::create_layout(ctx);
            let mut font_desc = pango::FontDescription::from_string(&font_desc_str);
            font_desc.set_absolute_size(size_px * pango::SCALE as f64);
            layout.set_font_description(Some(&font_desc));
            layout.set_text(text);

            // Pango positions the layout by its top-left corner; canvas by baseline.
            let baseline = layout.baseline() as f64 / pango::SCALE as f64;
            ctx.move_to(x, y - baseline);
            ctx.set_source_rgba(fill.r, fill.g, fill.b, fill.a);
            pangocairo::functions::show_layout(ctx, &layout);
            Ok(())
        })
    }

    fn is_point_in_path(&self, x: f64, y: f64) -> Result<bool> {
        let (ux, uy) = self.ctx.device_to_user(x, y)?;
        Ok(self.ctx.in_fill(ux, uy)?)
    }
}
