use std::ops::Range;

use crate::config::ScrollbarMetrics;
use crate::error::ScrollError;
use crate::event::{EventResult, MouseButton};
use crate::layout::Rect;

use super::WheelAccumulator;

/// Vertical position and height of the thumb, relative to the track top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbGeometry {
    pub y: i32,
    pub height: i32,
}

impl ThumbGeometry {
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

/// Scroll position of a list showing `visible_rows` out of `total_rows`.
///
/// Owns the row offset, converts between pixels and rows for the track it
/// is laid out in, and reacts to wheel, click, drag and release input.
///
/// Invariant: `0 <= offset <= max(0, total_rows - visible_rows)` after every
/// public method returns.
#[derive(Debug, Clone)]
pub struct ScrollRegion {
    /// Track bounds in window coordinates.
    bounds: Rect,
    border: i32,
    visible_rows: i32,
    total_rows: i32,
    offset: i32,
    dragging: bool,
    /// Distance from the thumb top to where it was grabbed. Zero unless dragging.
    drag_anchor: i32,
    wheel: WheelAccumulator,
}

impl Default for ScrollRegion {
    fn default() -> Self {
        Self::with_metrics(&ScrollbarMetrics::default())
    }
}

impl ScrollRegion {
    pub fn new(visible_rows: i32) -> Self {
        Self::with_metrics(&ScrollbarMetrics::default().visible_rows(visible_rows))
    }

    pub fn with_metrics(metrics: &ScrollbarMetrics) -> Self {
        Self {
            bounds: Rect::default(),
            border: metrics.border.max(0),
            visible_rows: metrics.visible_rows.max(1),
            total_rows: 0,
            offset: 0,
            dragging: false,
            drag_anchor: 0,
            wheel: WheelAccumulator::new(metrics.wheel_step),
        }
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Called by the owning widget whenever it is laid out.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn border(&self) -> i32 {
        self.border
    }

    pub fn visible_rows(&self) -> i32 {
        self.visible_rows
    }

    pub fn total_rows(&self) -> i32 {
        self.total_rows
    }

    /// Called by the owning list whenever its row count changes.
    pub fn set_total_rows(&mut self, rows: usize) {
        self.total_rows = i32::try_from(rows).unwrap_or(i32::MAX);
        self.clamp();
    }

    /// Index of the first visible row.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Jump to `offset`, clamped into range.
    pub fn scroll_to(&mut self, offset: i32) {
        self.offset = offset;
        self.clamp();
    }

    /// Largest offset that still fills a page, or zero for short lists.
    pub fn max_offset(&self) -> i32 {
        (self.total_rows - self.visible_rows).max(0)
    }

    /// Rows currently on screen.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.offset.max(0) as usize;
        let end = (self.offset + self.visible_rows).min(self.total_rows).max(0) as usize;
        start..end.max(start)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn drag_anchor(&self) -> i32 {
        self.drag_anchor
    }

    pub fn wheel(&self) -> &WheelAccumulator {
        &self.wheel
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    /// Track pixels per row.
    pub fn scale(&self) -> Result<f32, ScrollError> {
        self.scale_exact().map(|scale| scale as f32)
    }

    /// Row counts past 2^24 are not exact in `f32`, so the geometry maths
    /// runs in `f64`.
    fn scale_exact(&self) -> Result<f64, ScrollError> {
        if self.total_rows <= 0 {
            return Err(ScrollError::no_scale(self.bounds.height));
        }
        let span = self.bounds.height - self.border * 2;
        if span < 0 {
            return Err(ScrollError::track_too_short(self.bounds.height, self.border));
        }
        Ok(span as f64 / self.total_rows as f64)
    }

    /// Thumb extent relative to the top of the track. Never extends past the
    /// bottom border.
    pub fn thumb_geometry(&self) -> Result<ThumbGeometry, ScrollError> {
        let scale = self.scale_exact()?;
        let limit = self.bounds.height - self.border;
        let y = ((self.offset as f64 * scale).ceil() as i32 + self.border).min(limit);
        let raw_height = (self.visible_rows as f64 * scale).ceil() as i32;
        let height = y.saturating_add(raw_height).min(limit) - y;
        Ok(ThumbGeometry { y, height })
    }

    /// Pull the offset back into range. The upper bound is applied first so
    /// a list shorter than a page ends up at zero.
    pub fn clamp(&mut self) {
        let max_offset = self.total_rows - self.visible_rows;
        if self.offset >= max_offset {
            self.offset = max_offset;
        }
        if self.offset < 0 {
            self.offset = 0;
        }
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Positive deltas scroll towards the top. Always consumed.
    pub fn on_wheel(&mut self, delta: f32) -> EventResult {
        let steps = self.wheel.accumulate(delta);
        self.offset = self.offset.saturating_sub(steps);
        self.clamp();
        log::trace!("[scroll] wheel delta={} steps={} offset={}", delta, steps, self.offset);
        EventResult::Consumed
    }

    /// Follows the cursor while the thumb is held; ignored otherwise.
    pub fn on_mouse_move(&mut self, _x: i32, y: i32) -> EventResult {
        if !self.dragging {
            return EventResult::Ignored;
        }

        let local_y = y.saturating_sub(self.bounds.y);
        if let Ok(scale) = self.scale_exact() {
            if scale > 0.0 {
                let grabbed_y = local_y.saturating_sub(self.drag_anchor);
                self.offset = (grabbed_y as f64 / scale).floor() as i32;
                self.clamp();
            }
        }
        log::trace!("[scroll] drag y={} offset={}", local_y, self.offset);
        EventResult::Consumed
    }

    /// Pages up or down when the track is clicked above or below the thumb,
    /// grabs the thumb when it is clicked directly.
    ///
    /// Only the horizontal extent is checked; the owner decides which
    /// clicks reach the region vertically.
    pub fn on_mouse_down(&mut self, x: i32, y: i32, button: MouseButton) -> EventResult {
        if self.dragging {
            return EventResult::Consumed;
        }
        if !button.is_primary() || !self.bounds.contains_x(x) {
            return EventResult::Ignored;
        }

        let local_y = y.saturating_sub(self.bounds.y);
        let mut result = EventResult::Consumed;
        match self.thumb_geometry() {
            Ok(thumb) if local_y < thumb.y => {
                self.offset = self.offset.saturating_sub(self.visible_rows);
                log::debug!("[scroll] page up at y={}", local_y);
            }
            Ok(thumb) if local_y >= thumb.bottom() => {
                self.offset = self.offset.saturating_add(self.visible_rows);
                log::debug!("[scroll] page down at y={}", local_y);
            }
            Ok(thumb) => {
                self.dragging = true;
                self.drag_anchor = local_y - thumb.y;
                result = EventResult::StartDrag;
                log::debug!("[scroll] drag start anchor={}", self.drag_anchor);
            }
            Err(err) => {
                log::trace!("[scroll] click without thumb: {}", err);
            }
        }
        self.clamp();
        result
    }

    /// Ends any drag. Always consumed.
    pub fn on_mouse_up(&mut self, _x: i32, _y: i32, _button: MouseButton) -> EventResult {
        if self.dragging {
            log::debug!("[scroll] drag end offset={}", self.offset);
        }
        self.dragging = false;
        self.drag_anchor = 0;
        EventResult::Consumed
    }
}
