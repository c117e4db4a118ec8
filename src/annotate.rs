//! Annotation drawing operations.
//!
//! Every operation takes the surface explicitly together with a
//! [`BoundingBox`] and a [`StrokeStyle`], validates the input, and issues a
//! fixed sequence of surface calls. Nothing is remembered between calls.
//!
//! # Paint state
//!
//! Stroke color, fill color, line width, and font are surface-global and stay
//! set after an operation returns: `draw_circle` with red leaves the surface
//! stroking red. Callers that need isolation wrap the call in
//! [`with_saved_state`].
//!
//! # Edit mode
//!
//! The `*_in_edit` variants clear the *entire* surface, draw the shape, then
//! overlay its selection handles filled with the shape color. Anything else on
//! the same surface is erased.

use crate::draw::color::{BLACK, Color};
use crate::draw::font::{FontDescriptor, TEXT_FONT_SIZE};
use crate::draw::render::{
    RenderOptions, paint_arrow_head, paint_ellipse, paint_handle, paint_handle_set,
};
use crate::draw::surface::Surface;
use crate::error::{DrawError, Result, ensure_finite};
use crate::geometry::{BoundingBox, arrow_angle};
use log::debug;
use serde::{Deserialize, Serialize};

pub use crate::draw::surface::with_saved_state;

// ============================================================================
// Inputs
// ============================================================================

/// Color and line thickness for one draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    /// Line thickness in pixels; must be positive
    pub thickness: f64,
}

impl StrokeStyle {
    pub fn new(color: Color, thickness: f64) -> Self {
        Self { color, thickness }
    }

    /// Builds a style from a color token such as `"red"` or `"#ff8800"`.
    pub fn parse(color: &str, thickness: f64) -> Result<Self> {
        Ok(Self::new(color.parse()?, thickness))
    }

    pub fn validate(&self) -> Result<()> {
        if self.thickness.is_finite() && self.thickness > 0.0 {
            Ok(())
        } else {
            Err(DrawError::InvalidThickness(self.thickness))
        }
    }
}

/// One pre-measured line of a [`TextBlock`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    /// Text of the line as it should be rendered
    pub line: String,
    /// Measured pixel width of `line`
    pub size: f64,
    /// Baseline Y coordinate of the line
    pub total: f64,
}

impl TextLine {
    pub fn validate(&self) -> Result<()> {
        ensure_finite("size", self.size)?;
        ensure_finite("total", self.total)?;
        Ok(())
    }
}

/// Lines produced by an external text-layout step, in drawing order.
///
/// Serialized as a plain JSON array of `{ "line", "size", "total" }` objects.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextBlock {
    pub lines: Vec<TextLine>,
}

impl TextBlock {
    pub fn new(lines: Vec<TextLine>) -> Self {
        Self { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// X position for `line`, centered in the box unless it is the only
    /// line and exactly fills the box width.
    fn line_x(&self, bbox: &BoundingBox, line: &TextLine) -> f64 {
        let area = bbox.normalized();
        let width = area.width();
        if self.lines.len() > 1 || width - line.size != 0.0 {
            area.x1 + (width - line.size) / 2.0
        } else {
            area.x1
        }
    }
}

/// A complete annotation description, for callers that keep shapes as data.
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    /// Ellipse outline inscribed in the box
    Circle { bbox: BoundingBox, style: StrokeStyle },
    /// Line from (x1, y1) to (x2, y2) with the head at (x1, y1)
    Arrow { bbox: BoundingBox, style: StrokeStyle },
    /// Rectangle outline
    Rect { bbox: BoundingBox, style: StrokeStyle },
    /// Filled ellipse with a fixed outline color
    Option { bbox: BoundingBox, style: StrokeStyle },
    /// Pre-laid-out text lines
    Text {
        bbox: BoundingBox,
        style: StrokeStyle,
        text: TextBlock,
    },
}

// ============================================================================
// Annotator
// ============================================================================

/// Drawing settings shared by every operation.
///
/// The free functions in this module use [`Annotator::default`].
#[derive(Debug, Clone, PartialEq)]
pub struct Annotator {
    /// Handle geometry
    pub render: RenderOptions,
    /// Font for text annotations
    pub font: FontDescriptor,
    /// Text size in pixels
    pub font_size: f64,
    /// Outline color of option markers, independent of the requested color
    pub option_outline: Color,
}

impl Default for Annotator {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            font: FontDescriptor::default(),
            font_size: TEXT_FONT_SIZE,
            option_outline: BLACK,
        }
    }
}

impl Annotator {
    /// Strokes the ellipse inscribed in `bbox`.
    pub fn draw_circle<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        bbox: &BoundingBox,
        style: &StrokeStyle,
    ) -> Result<()> {
        validate(bbox, style)?;
        debug!("draw circle {bbox:?}");

        surface.set_line_width(style.thickness);
        surface.set_stroke_color(style.color);
        paint_ellipse(surface, bbox)
    }

    /// Clears the surface, strokes the ellipse, and adds eight handles.
    pub fn draw_circle_in_edit<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        bbox: &BoundingBox,
        style: &StrokeStyle,
    ) -> Result<()> {
        validate(bbox, style)?;
        surface.clear()?;
        self.draw_circle(surface, bbox, style)?;
        surface.set_fill_color(style.color);
        paint_handle_set(surface, bbox, &self.render)?;
        Ok(())
    }

    /// Strokes a line from (x1, y1) to (x2, y2) and marks the start with an
    /// arrowhead pointing away from the end.
    pub fn draw_arrow<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        bbox: &BoundingBox,
        style: &StrokeStyle,
    ) -> Result<()> {
        validate(bbox, style)?;
        debug!("draw arrow {bbox:?}");

        let BoundingBox { x1, y1, x2, y2 } = *bbox;
        surface.set_line_width(style.thickness);
        surface.set_stroke_color(style.color);
        surface.begin_path();
        surface.move_to(x1, y1);
        surface.line_to(x2, y2);
        surface.stroke()?;

        paint_arrow_head(surface, x1, y1, arrow_angle(x1, y1, x2, y2), style.color)
    }

    /// Clears the surface, draws the arrow, and adds handles at both ends.
    pub fn draw_arrow_in_edit<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        bbox: &BoundingBox,
        style: &StrokeStyle,
    ) -> Result<()> {
        validate(bbox, style)?;
        surface.clear()?;
        self.draw_arrow(surface, bbox, style)?;
        surface.set_fill_color(style.color);
        paint_handle(surface, bbox.x1, bbox.y1, &self.render)?;
        paint_handle(surface, bbox.x2, bbox.y2, &self.render)
    }

    /// Strokes the rectangle spanning `bbox`.
    pub fn draw_rect<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        bbox: &BoundingBox,
        style: &StrokeStyle,
    ) -> Result<()> {
        validate(bbox, style)?;
        debug!("draw rect {bbox:?}");

        surface.set_stroke_color(style.color);
        surface.set_line_width(style.thickness);
        surface.stroke_rect(bbox.x1, bbox.y1, bbox.width(), bbox.height())
    }

    /// Clears the surface, strokes the rectangle, and adds eight handles.
    pub fn draw_rect_in_edit<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        bbox: &BoundingBox,
        style: &StrokeStyle,
    ) -> Result<()> {
        validate(bbox, style)?;
        surface.clear()?;
        self.draw_rect(surface, bbox, style)?;
        surface.set_fill_color(style.color);
        paint_handle_set(surface, bbox, &self.render)?;
        Ok(())
    }

    /// Fills the ellipse inscribed in `bbox` with the style color, outlined
    /// in [`option_outline`](Self::option_outline).
    ///
    /// The fill color is scoped to this call; the outline color and width
    /// stay set on the surface.
    pub fn draw_option<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        bbox: &BoundingBox,
        style: &StrokeStyle,
    ) -> Result<()> {
        validate(bbox, style)?;
        debug!("draw option {bbox:?}");

        surface.set_stroke_color(self.option_outline);
        surface.set_line_width(style.thickness);
        with_saved_state(surface, |s| {
            s.set_fill_color(style.color);
            paint_ellipse(s, bbox)?;
            s.fill()
        })
    }

    /// Fills each line of `text` with the style color.
    ///
    /// Line positions come from the layout: `total` is the baseline, and the
    /// line is centered horizontally within the box unless it is the only
    /// line and its `size` equals the box width, in which case it starts at
    /// the left edge. Thickness is not used.
    pub fn draw_text<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        bbox: &BoundingBox,
        style: &StrokeStyle,
        text: &TextBlock,
    ) -> Result<()> {
        bbox.validate()?;
        for line in &text.lines {
            line.validate()?;
        }
        debug!("draw text {bbox:?}, {} line(s)", text.lines.len());

        surface.set_fill_color(style.color);
        surface.set_font(&self.font, self.font_size);
        for line in &text.lines {
            let x = text.line_x(bbox, line);
            surface.fill_text(&line.line, x, line.total)?;
        }
        Ok(())
    }

    /// Draws `annotation`, using the edit variant when `edit` is set.
    ///
    /// Option markers and text have no edit variant and draw the same either way.
    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        annotation: &Annotation,
        edit: bool,
    ) -> Result<()> {
        match (annotation, edit) {
            (Annotation::Circle { bbox, style }, false) => self.draw_circle(surface, bbox, style),
            (Annotation::Circle { bbox, style }, true) => {
                self.draw_circle_in_edit(surface, bbox, style)
            }
            (Annotation::Arrow { bbox, style }, false) => self.draw_arrow(surface, bbox, style),
            (Annotation::Arrow { bbox, style }, true) => {
                self.draw_arrow_in_edit(surface, bbox, style)
            }
            (Annotation::Rect { bbox, style }, false) => self.draw_rect(surface, bbox, style),
            (Annotation::Rect { bbox, style }, true) => self.draw_rect_in_edit(surface, bbox, style),
            (Annotation::Option { bbox, style }, _) => self.draw_option(surface, bbox, style),
            (Annotation::Text { bbox, style, text }, _) => {
                self.draw_text(surface, bbox, style, text)
            }
        }
    }
}

fn validate(bbox: &BoundingBox, style: &StrokeStyle) -> Result<()> {
    bbox.validate()?;
    style.validate()
}

// ============================================================================
// Free functions with default settings
// ============================================================================

pub fn draw_circle<S: Surface + ?Sized>(
    surface: &mut S,
    bbox: &BoundingBox,
    style: &StrokeStyle,
) -> Result<()> {
    Annotator::default().draw_circle(surface, bbox, style)
}

pub fn draw_circle_in_edit<S: Surface + ?Sized>(
    surface: &mut S,
    bbox: &BoundingBox,
    style: &StrokeStyle,
) -> Result<()> {
    Annotator::default().draw_circle_in_edit(surface, bbox, style)
}

pub fn draw_arrow<S: Surface + ?Sized>(
    surface: &mut S,
    bbox: &BoundingBox,
    style: &StrokeStyle,
) -> Result<()> {
    Annotator::default().draw_arrow(surface, bbox, style)
}

pub fn draw_arrow_in_edit<S: Surface + ?Sized>(
    surface: &mut S,
    bbox: &BoundingBox,
    style: &StrokeStyle,
) -> Result<()> {
    Annotator::default().draw_arrow_in_edit(surface, bbox, style)
}

pub fn draw_rect<S: Surface + ?Sized>(
    surface: &mut S,
    bbox: &BoundingBox,
    style: &StrokeStyle,
) -> Result<()> {
    Annotator::default().draw_rect(surface, bbox, style)
}

pub fn draw_rect_in_edit<S: Surface + ?Sized>(
    surface: &mut S,
    bbox: &BoundingBox,
    style: &StrokeStyle,
) -> Result<()> {
    Annotator::default().draw_rect_in_edit(surface, bbox, style)
}

pub fn draw_option<S: Surface + ?Sized>(
    surface: &mut S,
    bbox: &BoundingBox,
    style: &StrokeStyle,
) -> Result<()> {
    Annotator::default().draw_option(surface, bbox, style)
}

pub fn draw_text<S: Surface + ?Sized>(
    surface: &mut S,
    bbox: &BoundingBox,
    style: &StrokeStyle,
    text: &TextBlock,
) -> Result<()> {
    Annotator::default().draw_text(surface, bbox, style, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED};
    use crate::draw::recording::{RecordingSurface, SurfaceOp};
    use crate::geometry::Point;

    fn red(thickness: f64) -> StrokeStyle {
        StrokeStyle::new(RED, thickness)
    }

    fn handle_centers(surface: &RecordingSurface) -> Vec<Point> {
        surface
            .fill_transforms()
            .iter()
            .map(|t| t.apply(Point::new(6.0, 6.0)))
            .collect()
    }

    fn line(text: &str, size: f64, total: f64) -> TextLine {
        TextLine {
            line: text.to_string(),
            size,
            total,
        }
    }

    #[test]
    fn circle_in_edit_clears_strokes_and_adds_handles() {
        let mut surface = RecordingSurface::new(300, 200);
        let bbox = BoundingBox::new(10.0, 10.0, 110.0, 60.0);
        draw_circle_in_edit(&mut surface, &bbox, &red(2.0)).unwrap();

        let ops = surface.ops();
        assert_eq!(
            ops[0],
            SurfaceOp::ClearRect {
                x: 0.0,
                y: 0.0,
                w: 300.0,
                h: 200.0
            }
        );
        assert_eq!(ops[1], SurfaceOp::SetLineWidth(2.0));
        assert_eq!(ops[2], SurfaceOp::SetStrokeColor(RED));
        assert_eq!(ops[3], SurfaceOp::BeginPath);
        assert_eq!(ops[4], SurfaceOp::MoveTo(Point::new(10.0, 35.0)));
        assert!(ops.contains(&SurfaceOp::SetFillColor(RED)));

        assert_eq!(
            handle_centers(&surface),
            vec![
                Point::new(10.0, 10.0),
                Point::new(110.0, 10.0),
                Point::new(10.0, 60.0),
                Point::new(110.0, 60.0),
                Point::new(60.0, 10.0),
                Point::new(10.0, 35.0),
                Point::new(60.0, 60.0),
                Point::new(110.0, 35.0),
            ]
        );
    }

    #[test]
    fn circle_leaves_stroke_state_on_surface() {
        let mut surface = RecordingSurface::new(100, 100);
        draw_circle(&mut surface, &BoundingBox::new(0.0, 0.0, 10.0, 10.0), &red(3.0)).unwrap();
        assert!(!surface.ops().contains(&SurfaceOp::Save));
        assert!(!surface.ops().contains(&SurfaceOp::Restore));
    }

    #[test]
    fn arrow_line_runs_start_to_end_with_head_at_start() {
        let mut surface = RecordingSurface::new(200, 200);
        let bbox = BoundingBox::new(20.0, 20.0, 120.0, 20.0);
        draw_arrow(&mut surface, &bbox, &red(4.0)).unwrap();

        let ops = surface.ops();
        assert!(ops.contains(&SurfaceOp::MoveTo(Point::new(20.0, 20.0))));
        assert!(ops.contains(&SurfaceOp::LineTo(Point::new(120.0, 20.0))));
        assert!(ops.contains(&SurfaceOp::Translate { tx: 20.0, ty: 20.0 }));
        assert!(ops.contains(&SurfaceOp::Rotate(-std::f64::consts::FRAC_PI_2)));

        // The head's path is current: its apex pokes 8px past the start,
        // its base lies back along the line.
        assert!(surface.is_point_in_path(14.0, 20.0).unwrap());
        assert!(surface.is_point_in_path(45.0, 20.0).unwrap());
        assert!(!surface.is_point_in_path(10.0, 20.0).unwrap());
    }

    #[test]
    fn vertical_arrow_draws_without_nan() {
        let mut surface = RecordingSurface::new(200, 200);
        draw_arrow(&mut surface, &BoundingBox::new(50.0, 10.0, 50.0, 90.0), &red(2.0)).unwrap();
        for op in surface.ops() {
            if let SurfaceOp::Rotate(angle) = op {
                assert!(angle.is_finite());
            }
        }
    }

    #[test]
    fn arrow_in_edit_has_exactly_two_handles() {
        let mut surface = RecordingSurface::new(200, 200);
        let bbox = BoundingBox::new(30.0, 40.0, 150.0, 90.0);
        draw_arrow_in_edit(&mut surface, &bbox, &red(2.0)).unwrap();

        let fills = surface.fill_transforms();
        // One fill for the arrowhead, then one per handle.
        assert_eq!(fills.len(), 3);
        let handles: Vec<Point> = handle_centers(&surface).into_iter().skip(1).collect();
        assert_eq!(
            handles,
            vec![Point::new(30.0, 40.0), Point::new(150.0, 90.0)]
        );
    }

    #[test]
    fn rect_strokes_signed_extent() {
        let mut surface = RecordingSurface::new(200, 200);
        draw_rect(&mut surface, &BoundingBox::new(100.0, 80.0, 20.0, 10.0), &red(1.0)).unwrap();
        assert_eq!(
            surface.ops().last(),
            Some(&SurfaceOp::StrokeRect {
                x: 100.0,
                y: 80.0,
                w: -80.0,
                h: -70.0
            })
        );
    }

    #[test]
    fn rect_in_edit_adds_eight_handles() {
        let mut surface = RecordingSurface::new(200, 200);
        draw_rect_in_edit(&mut surface, &BoundingBox::new(0.0, 0.0, 50.0, 50.0), &red(1.0))
            .unwrap();
        assert!(matches!(surface.ops()[0], SurfaceOp::ClearRect { .. }));
        assert_eq!(surface.fill_transforms().len(), 8);
    }

    #[test]
    fn option_outlines_in_black_and_fills_requested_color() {
        let mut surface = RecordingSurface::new(100, 100);
        let style = StrokeStyle::new(BLUE, 2.0);
        draw_option(&mut surface, &BoundingBox::new(0.0, 0.0, 20.0, 20.0), &style).unwrap();

        let ops = surface.ops();
        assert_eq!(ops[0], SurfaceOp::SetStrokeColor(BLACK));
        assert_eq!(ops[1], SurfaceOp::SetLineWidth(2.0));
        assert_eq!(ops[2], SurfaceOp::Save);
        assert_eq!(ops[3], SurfaceOp::SetFillColor(BLUE));
        assert!(!ops.contains(&SurfaceOp::SetStrokeColor(BLUE)));
        assert_eq!(surface.fill_transforms().len(), 1);
        assert_eq!(ops.last(), Some(&SurfaceOp::Restore));
    }

    #[test]
    fn single_line_filling_box_starts_at_left_edge() {
        let mut surface = RecordingSurface::new(300, 300);
        let text = TextBlock::new(vec![line("Hello", 100.0, 40.0)]);
        draw_text(
            &mut surface,
            &BoundingBox::new(10.0, 10.0, 110.0, 60.0),
            &red(1.0),
            &text,
        )
        .unwrap();

        assert!(
            surface
                .ops()
                .contains(&SurfaceOp::SetFont("bold 30px Avenir Next".to_string()))
        );
        assert_eq!(
            surface.ops().last(),
            Some(&SurfaceOp::FillText {
                text: "Hello".to_string(),
                x: 10.0,
                y: 40.0
            })
        );
    }

    #[test]
    fn narrower_lines_are_centered() {
        let mut surface = RecordingSurface::new(300, 300);
        let text = TextBlock::new(vec![line("one", 60.0, 40.0), line("three", 100.0, 75.0)]);
        draw_text(
            &mut surface,
            &BoundingBox::new(110.0, 10.0, 10.0, 100.0),
            &red(1.0),
            &text,
        )
        .unwrap();

        let placed: Vec<(f64, f64)> = surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::FillText { x, y, .. } => Some((*x, *y)),
                _ => None,
            })
            .collect();
        assert_eq!(placed, vec![(30.0, 40.0), (10.0, 75.0)]);
    }

    #[test]
    fn single_narrow_line_is_centered() {
        let mut surface = RecordingSurface::new(300, 300);
        let text = TextBlock::new(vec![line("hi", 40.0, 30.0)]);
        draw_text(
            &mut surface,
            &BoundingBox::new(10.0, 10.0, 110.0, 60.0),
            &red(1.0),
            &text,
        )
        .unwrap();

        let placed: Vec<(f64, f64)> = surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::FillText { x, y, .. } => Some((*x, *y)),
                _ => None,
            })
            .collect();
        assert_eq!(placed, vec![(40.0, 30.0)]);
    }

    #[test]
    fn empty_text_block_draws_nothing() {
        let mut surface = RecordingSurface::new(10, 10);
        draw_text(
            &mut surface,
            &BoundingBox::default(),
            &red(1.0),
            &TextBlock::default(),
        )
        .unwrap();
        assert!(TextBlock::default().is_empty());
        assert!(
            !surface
                .ops()
                .iter()
                .any(|op| matches!(op, SurfaceOp::FillText { .. }))
        );
    }

    #[test]
    fn invalid_input_fails_before_drawing() {
        let mut surface = RecordingSurface::new(10, 10);
        let err = draw_circle_in_edit(
            &mut surface,
            &BoundingBox::new(0.0, f64::NAN, 1.0, 1.0),
            &red(1.0),
        )
        .unwrap_err();
        assert!(matches!(err, DrawError::InvalidGeometry { field: "y1", .. }));

        let err = draw_rect(&mut surface, &BoundingBox::default(), &red(0.0)).unwrap_err();
        assert!(matches!(err, DrawError::InvalidThickness(_)));
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn non_finite_text_line_fails_before_drawing() {
        let mut surface = RecordingSurface::new(50, 50);
        let bbox = BoundingBox::new(0.0, 0.0, 50.0, 50.0);

        let text = TextBlock::new(vec![line("ok", 10.0, 20.0), line("x", f64::NAN, 40.0)]);
        let err = draw_text(&mut surface, &bbox, &red(1.0), &text).unwrap_err();
        assert!(matches!(err, DrawError::InvalidGeometry { field: "size", .. }));

        let text = TextBlock::new(vec![line("x", 10.0, f64::INFINITY)]);
        let err = draw_text(&mut surface, &bbox, &red(1.0), &text).unwrap_err();
        assert!(matches!(err, DrawError::InvalidGeometry { field: "total", .. }));

        assert!(surface.ops().is_empty());
    }

    #[test]
    fn zero_size_box_is_not_an_error() {
        let mut surface = RecordingSurface::new(10, 10);
        draw_circle(&mut surface, &BoundingBox::new(5.0, 5.0, 5.0, 5.0), &red(1.0)).unwrap();
    }

    #[test]
    fn annotation_dispatches_edit_variants() {
        let mut surface = RecordingSurface::new(100, 100);
        let annotation = Annotation::Rect {
            bbox: BoundingBox::new(0.0, 0.0, 10.0, 10.0),
            style: red(1.0),
        };
        Annotator::default()
            .draw(&mut surface, &annotation, true)
            .unwrap();
        assert!(matches!(surface.ops()[0], SurfaceOp::ClearRect { .. }));

        let mut surface = RecordingSurface::new(100, 100);
        Annotator::default()
            .draw(&mut surface, &annotation, false)
            .unwrap();
        assert!(surface.fill_transforms().is_empty());
    }

    #[test]
    fn saved_state_isolates_style() {
        let mut surface = RecordingSurface::new(100, 100);
        with_saved_state(&mut surface, |s| {
            draw_circle(s, &BoundingBox::new(0.0, 0.0, 10.0, 10.0), &red(2.0))
        })
        .unwrap();
        assert_eq!(surface.ops().first(), Some(&SurfaceOp::Save));
        assert_eq!(surface.ops().last(), Some(&SurfaceOp::Restore));
    }

    #[test]
    fn text_block_deserializes_from_json_array() {
        let block: TextBlock =
            serde_json::from_str(r#"[{"line":"Hi","size":20.5,"total":30}]"#).unwrap();
        assert_eq!(block.lines, vec![line("Hi", 20.5, 30.0)]);
    }

    #[test]
    fn stroke_style_parses_color_tokens() {
        assert_eq!(StrokeStyle::parse("red", 2.0).unwrap(), red(2.0));
        assert!(StrokeStyle::parse("mauve-ish", 2.0).is_err());
    }
}
