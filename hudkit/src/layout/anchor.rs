use super::Rect;

/// Which edge of the window a widget is placed against on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    /// Left or top edge.
    #[default]
    Start,
    Centre,
    /// Right or bottom edge. The offset moves the widget inwards.
    End,
}

impl Anchor {
    /// Position of a span of `size` pixels inside `extent` pixels.
    pub fn resolve(self, extent: i32, size: i32, offset: i32) -> i32 {
        match self {
            Anchor::Start => offset,
            Anchor::Centre => (extent - size) / 2 + offset,
            Anchor::End => extent - size - offset,
        }
    }
}

/// Anchored placement of a widget within the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    pub horizontal: Anchor,
    pub vertical: Anchor,
    pub x_offset: i32,
    pub y_offset: i32,
}

impl Placement {
    pub fn new(horizontal: Anchor, vertical: Anchor) -> Self {
        Self {
            horizontal,
            vertical,
            ..Default::default()
        }
    }

    pub fn offset(mut self, x: i32, y: i32) -> Self {
        self.x_offset = x;
        self.y_offset = y;
        self
    }

    /// Place a `width` x `height` box inside a window of the given size.
    pub fn place(&self, window_width: i32, window_height: i32, width: i32, height: i32) -> Rect {
        Rect::new(
            self.horizontal.resolve(window_width, width, self.x_offset),
            self.vertical.resolve(window_height, height, self.y_offset),
            width,
            height,
        )
    }
}
