//! Annotation drawing helpers for 2D surfaces.
//!
//! Draws circles, arrows, rectangles, option markers, and pre-laid-out text
//! onto any [`Surface`], with "edit mode" variants that redraw the shape with
//! selection handles, and scales surfaces for high-density displays.
//!
//! ```
//! use autoscribe::annotate::{StrokeStyle, draw_circle_in_edit};
//! use autoscribe::draw::RecordingSurface;
//! use autoscribe::geometry::BoundingBox;
//! use autoscribe::scale::scale_for_display;
//!
//! let mut surface = scale_for_display(RecordingSurface::new(100, 50), 2.0).unwrap();
//! let style = StrokeStyle::parse("red", 2.0).unwrap();
//! draw_circle_in_edit(&mut surface, &BoundingBox::new(10.0, 10.0, 90.0, 40.0), &style).unwrap();
//! assert_eq!(surface.display_size(), (100, 50));
//! ```

pub mod annotate;
pub mod config;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod scale;

pub use annotate::{Annotation, Annotator, StrokeStyle, TextBlock, TextLine};
pub use config::Config;
pub use draw::Surface;
pub use error::DrawError;
pub use geometry::BoundingBox;
