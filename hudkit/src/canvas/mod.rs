//! Drawing surface and per-frame render context.
//!
//! The crate never talks to a graphics API. Widgets describe what to draw
//! through [`Canvas`], and the host maps those calls onto its renderer.

mod recording;

pub use recording::{DrawCommand, RecordingCanvas};

use crate::layout::Rect;
use crate::types::Rgba;

/// The drawing primitives a host renderer must provide.
pub trait Canvas {
    /// Fill `rect` with a flat colour.
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Draw a single line of text with its top-left corner at `(x, y)`.
    ///
    /// Shaping and rasterisation are entirely up to the host.
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Rgba);
}

/// Everything a widget needs to paint one frame.
pub struct Frame<'a> {
    pub canvas: &'a mut dyn Canvas,
    /// Cursor position in window coordinates, as last reported by the window.
    pub cursor: (i32, i32),
}

impl<'a> Frame<'a> {
    pub fn new(canvas: &'a mut dyn Canvas, cursor: (i32, i32)) -> Self {
        Self { canvas, cursor }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        if rect.is_empty() {
            return;
        }
        self.canvas.fill_rect(rect, color);
    }

    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Rgba) {
        self.canvas.draw_text(x, y, text, color);
    }

    pub fn cursor_in(&self, rect: Rect) -> bool {
        rect.contains(self.cursor.0, self.cursor.1)
    }
}
