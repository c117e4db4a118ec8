//! Drawing surfaces and shape painting primitives.
//!
//! This module defines the drawing layer annotations are built on:
//! - [`Surface`]: the canvas-style trait everything paints through
//! - [`CairoSurface`]: Cairo/Pango-backed implementation rendering to pixels
//! - [`RecordingSurface`]: implementation that records calls for inspection
//! - [`Color`]: RGBA color representation with predefined color constants
//! - Painting primitives for ellipses, handles, and arrowheads

pub mod cairo_surface;
pub mod color;
pub mod font;
pub mod recording;
pub mod render;
pub mod surface;

// Re-export commonly used types at module level
pub use cairo_surface::CairoSurface;
pub use color::Color;
pub use font::FontDescriptor;
pub use recording::{RecordingSurface, SurfaceOp, Transform};
pub use render::{RenderOptions, paint_arrow_head, paint_ellipse, paint_handle, paint_handle_set};
pub use surface::{Surface, with_saved_state};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
