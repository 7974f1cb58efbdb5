//! Scrollbar appearance and sizing.
//!
//! Both structs are plain values owned by the widget that uses them. Hosts
//! that want a shared look build one and clone it into each scrollbar.

use crate::types::Color;

/// Colours used to paint a scrollbar.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollbarStyle {
    /// Track background. Also used for the grip lines.
    pub track_color: Color,
    /// Thumb fill when the cursor is elsewhere.
    pub thumb_color: Color,
    /// Thumb fill while the cursor is over it.
    pub hover_color: Color,
}

impl Default for ScrollbarStyle {
    fn default() -> Self {
        Self {
            track_color: Color::rgba(10, 10, 10, 220),
            thumb_color: Color::rgba(100, 100, 100, 220),
            hover_color: Color::rgba(122, 122, 122, 220),
        }
    }
}

impl ScrollbarStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    pub fn thumb_color(mut self, color: Color) -> Self {
        self.thumb_color = color;
        self
    }

    pub fn hover_color(mut self, color: Color) -> Self {
        self.hover_color = color;
        self
    }
}

/// Pixel sizes and row counts governing scrollbar behaviour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarMetrics {
    /// Width of the whole scrollbar widget.
    pub width: i32,
    /// Gap between the track edge and the thumb. Grip lines are this tall.
    pub border: i32,
    /// Extra horizontal inset of the grip lines inside the thumb.
    pub grip_inset: i32,
    /// Thumbs shorter than this get no grip lines.
    pub grip_min_height: i32,
    /// Rows shown per page; one click on the track moves this many rows.
    pub visible_rows: i32,
    /// Wheel delta that makes up one row step.
    pub wheel_step: f32,
}

impl Default for ScrollbarMetrics {
    fn default() -> Self {
        Self {
            width: 22,
            border: 2,
            grip_inset: 3,
            grip_min_height: 20,
            visible_rows: 8,
            wheel_step: 1.0,
        }
    }
}

impl ScrollbarMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: i32) -> Self {
        self.width = width;
        self
    }

    pub fn border(mut self, border: i32) -> Self {
        self.border = border;
        self
    }

    pub fn grip_inset(mut self, inset: i32) -> Self {
        self.grip_inset = inset;
        self
    }

    pub fn grip_min_height(mut self, height: i32) -> Self {
        self.grip_min_height = height;
        self
    }

    pub fn visible_rows(mut self, rows: i32) -> Self {
        self.visible_rows = rows;
        self
    }

    pub fn wheel_step(mut self, step: f32) -> Self {
        self.wheel_step = step;
        self
    }
}
