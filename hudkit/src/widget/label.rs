use std::any::Any;

use crate::canvas::Frame;
use crate::layout::{Placement, Rect};
use crate::text::TextMeasurer;
use crate::types::Color;

use super::Widget;

/// A single line of text, sized to fit it.
///
/// Empty text draws nothing and collapses to zero width but keeps the
/// font's line height, so rows of labels don't jump when one is cleared.
/// Whitespace is real text and is measured like any other.
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
    color: Color,
    placement: Placement,
    default_height: i32,
    width: i32,
    height: i32,
    bounds: Rect,
    window: (i32, i32),
}

impl Label {
    pub fn new(measurer: &dyn TextMeasurer) -> Self {
        let default_height = measurer.line_height();
        Self {
            text: String::new(),
            color: Color::rgb(255, 255, 255),
            placement: Placement::default(),
            default_height,
            width: 0,
            height: default_height,
            bounds: Rect::new(0, 0, 0, default_height),
            window: (0, 0),
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Builder form of [`Label::set_text`].
    pub fn text(mut self, text: impl Into<String>, measurer: &dyn TextMeasurer) -> Self {
        self.set_text(text, measurer);
        self
    }

    pub fn content(&self) -> &str {
        &self.text
    }

    /// Replace the text, resize to fit and re-place within the last known
    /// window size.
    pub fn set_text(&mut self, text: impl Into<String>, measurer: &dyn TextMeasurer) {
        self.text = text.into();
        if self.text.is_empty() {
            self.width = 0;
            self.height = self.default_height;
        } else {
            let (width, height) = measurer.measure(&self.text);
            self.width = width;
            self.height = height;
        }
        let (w, h) = self.window;
        self.reposition(w, h);
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl Widget for Label {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn reposition(&mut self, window_width: i32, window_height: i32) {
        self.window = (window_width, window_height);
        self.bounds = self
            .placement
            .place(window_width, window_height, self.width, self.height);
    }

    fn render(&self, frame: &mut Frame<'_>) {
        if self.text.is_empty() {
            return;
        }
        frame.draw_text(self.bounds.x, self.bounds.y, &self.text, self.color.to_rgba());
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
