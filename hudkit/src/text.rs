//! Text measurement.
//!
//! Shaping and rasterising text is the host's job. Widgets only need to
//! know how much room a string takes so they can size and place themselves.

use unicode_width::UnicodeWidthStr;

/// Reports the pixel size of a line of text in some font.
pub trait TextMeasurer {
    /// Height of an empty line, used when there is no text to measure.
    fn line_height(&self) -> i32;

    /// Width and height of `text` drawn on a single line.
    fn measure(&self, text: &str) -> (i32, i32);
}

/// Fixed-pitch measurer: every terminal column is `cell_width` pixels.
///
/// Wide characters (CJK, most emoji) count as two columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonospaceMeasurer {
    pub cell_width: i32,
    pub line_height: i32,
}

impl MonospaceMeasurer {
    pub const fn new(cell_width: i32, line_height: i32) -> Self {
        Self {
            cell_width,
            line_height,
        }
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self::new(8, 16)
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn line_height(&self) -> i32 {
        self.line_height
    }

    fn measure(&self, text: &str) -> (i32, i32) {
        let columns = i32::try_from(display_width(text)).unwrap_or(i32::MAX);
        (columns.saturating_mul(self.cell_width), self.line_height)
    }
}

pub fn display_width(s: &str) -> usize {
    s.width()
}
