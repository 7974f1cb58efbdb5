use std::any::Any;

use crate::canvas::Frame;
use crate::config::{ScrollbarMetrics, ScrollbarStyle};
use crate::event::{EventResult, MouseButton};
use crate::layout::{Placement, Rect};
use crate::scroll::ScrollRegion;

use super::Widget;

/// Vertical scrollbar for a list or table.
///
/// The owning list keeps the row count current with
/// [`Scrollbar::set_total_rows`] and reads back the first visible row from
/// [`Scrollbar::offset`].
///
/// # Example
///
/// ```ignore
/// let mut bar = Scrollbar::new()
///     .placement(Placement::new(Anchor::End, Anchor::Centre).offset(10, 0))
///     .height(240);
/// bar.set_total_rows(players.len());
/// tree.push("players-scroll", bar);
/// ```
#[derive(Debug, Clone)]
pub struct Scrollbar {
    region: ScrollRegion,
    style: ScrollbarStyle,
    metrics: ScrollbarMetrics,
    /// `None` when the owner positions the scrollbar with `set_bounds`.
    placement: Option<Placement>,
    height: i32,
}

impl Default for Scrollbar {
    fn default() -> Self {
        Self::new()
    }
}

impl Scrollbar {
    pub fn new() -> Self {
        let metrics = ScrollbarMetrics::default();
        Self {
            region: ScrollRegion::with_metrics(&metrics),
            style: ScrollbarStyle::default(),
            metrics,
            placement: None,
            height: 0,
        }
    }

    pub fn style(mut self, style: ScrollbarStyle) -> Self {
        self.style = style;
        self
    }

    /// Replaces sizing. Resets the scroll position, so call this before
    /// rows are set.
    pub fn metrics(mut self, metrics: ScrollbarMetrics) -> Self {
        let bounds = self.region.bounds();
        let rows = self.region.total_rows().max(0) as usize;
        self.metrics = metrics;
        self.region = ScrollRegion::with_metrics(&metrics);
        self.region.set_bounds(Rect::new(bounds.x, bounds.y, metrics.width, bounds.height));
        self.region.set_total_rows(rows);
        self
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    /// Track height in pixels.
    pub fn height(mut self, height: i32) -> Self {
        self.height = height;
        self
    }

    /// Place the scrollbar explicitly. Window resizes no longer move it.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.placement = None;
        self.height = bounds.height;
        self.region.set_bounds(bounds);
    }

    pub fn set_total_rows(&mut self, rows: usize) {
        self.region.set_total_rows(rows);
    }

    pub fn offset(&self) -> i32 {
        self.region.offset()
    }

    pub fn region(&self) -> &ScrollRegion {
        &self.region
    }

    pub fn region_mut(&mut self) -> &mut ScrollRegion {
        &mut self.region
    }

    /// Screen rectangle of the thumb, if there are rows to show.
    pub fn thumb_rect(&self) -> Option<Rect> {
        let bounds = self.region.bounds();
        let border = self.region.border();
        let thumb = self.region.thumb_geometry().ok()?;
        Some(Rect::new(
            bounds.x + border,
            bounds.y + thumb.y,
            bounds.width - border * 2,
            thumb.height,
        ))
    }

    fn render_grip(&self, frame: &mut Frame<'_>, thumb: Rect) {
        let inset = self.metrics.grip_inset;
        let x = thumb.x + inset;
        let width = thumb.width - inset * 2;
        let mid = thumb.y + thumb.height / 2;
        let line = self.region.border();
        let color = self.style.track_color.to_rgba();

        for dy in [-1 - 4, -1, -1 + 4] {
            frame.fill_rect(Rect::new(x, mid + dy, width, line), color);
        }
    }
}

impl Widget for Scrollbar {
    fn bounds(&self) -> Rect {
        self.region.bounds()
    }

    fn reposition(&mut self, window_width: i32, window_height: i32) {
        if let Some(placement) = self.placement {
            let bounds = placement.place(window_width, window_height, self.metrics.width, self.height);
            self.region.set_bounds(bounds);
        }
    }

    fn render(&self, frame: &mut Frame<'_>) {
        frame.fill_rect(self.region.bounds(), self.style.track_color.to_rgba());

        let Some(thumb) = self.thumb_rect() else {
            return;
        };
        let color = if frame.cursor_in(thumb) {
            self.style.hover_color
        } else {
            self.style.thumb_color
        };
        frame.fill_rect(thumb, color.to_rgba());

        if thumb.height >= self.metrics.grip_min_height {
            self.render_grip(frame, thumb);
        }
    }

    fn handle_wheel(&mut self, delta: f32) -> EventResult {
        self.region.on_wheel(delta)
    }

    fn handle_mouse_move(&mut self, x: i32, y: i32) -> EventResult {
        self.region.on_mouse_move(x, y)
    }

    fn handle_mouse_down(&mut self, x: i32, y: i32, button: MouseButton) -> EventResult {
        self.region.on_mouse_down(x, y, button)
    }

    fn handle_mouse_up(&mut self, x: i32, y: i32, button: MouseButton) -> EventResult {
        self.region.on_mouse_up(x, y, button)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
