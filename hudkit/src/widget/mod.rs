//! Widgets and the tree that hosts them.
//!
//! A widget is anything implementing [`Widget`]: it knows its bounds, paints
//! itself into a [`Frame`] and may react to pointer input. Widgets compose
//! through [`WidgetTree`], which paints them in order and routes input from
//! the top-most widget down.

mod label;
mod scrollbar;
mod tree;

use std::any::Any;

pub use label::Label;
pub use scrollbar::Scrollbar;
pub use tree::WidgetTree;

use crate::canvas::Frame;
use crate::event::{EventResult, InputEvent, MouseButton};
use crate::layout::Rect;

/// The capability set every widget provides.
///
/// Input handlers default to [`EventResult::Ignored`], so purely visual
/// widgets only implement `bounds`, `render` and the `Any` accessors.
pub trait Widget {
    /// Current bounds in window coordinates.
    fn bounds(&self) -> Rect;

    /// Recompute bounds after the window was resized.
    fn reposition(&mut self, _window_width: i32, _window_height: i32) {}

    fn render(&self, frame: &mut Frame<'_>);

    fn handle_wheel(&mut self, _delta: f32) -> EventResult {
        EventResult::Ignored
    }

    fn handle_mouse_move(&mut self, _x: i32, _y: i32) -> EventResult {
        EventResult::Ignored
    }

    fn handle_mouse_down(&mut self, _x: i32, _y: i32, _button: MouseButton) -> EventResult {
        EventResult::Ignored
    }

    fn handle_mouse_up(&mut self, _x: i32, _y: i32, _button: MouseButton) -> EventResult {
        EventResult::Ignored
    }

    /// Route an input event to the matching handler.
    fn handle(&mut self, event: &InputEvent) -> EventResult {
        match *event {
            InputEvent::Wheel { delta } => self.handle_wheel(delta),
            InputEvent::MouseMove { x, y } => self.handle_mouse_move(x, y),
            InputEvent::MouseDown { x, y, button } => self.handle_mouse_down(x, y, button),
            InputEvent::MouseUp { x, y, button } => self.handle_mouse_up(x, y, button),
        }
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
