use std::any::Any;

use crate::canvas::Frame;
use crate::event::{EventResult, InputEvent, MouseButton};
use crate::layout::Rect;

use super::Widget;

struct Child {
    id: String,
    widget: Box<dyn Widget>,
}

/// An ordered collection of widgets, painted first to last.
///
/// Input goes to the last (top-most) widget first and stops at the first one
/// that handles it. Mouse release is the exception: every widget sees it, so
/// a drag can always end even if a widget above consumes the release.
///
/// A tree is itself a [`Widget`], so panels nest.
#[derive(Default)]
pub struct WidgetTree {
    children: Vec<Child>,
    window: (i32, i32),
}

impl WidgetTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a widget on top of the existing ones. Replaces any widget with the
    /// same id in place.
    pub fn push(&mut self, id: impl Into<String>, widget: impl Widget + 'static) {
        let id = id.into();
        let mut widget: Box<dyn Widget> = Box::new(widget);
        widget.reposition(self.window.0, self.window.1);

        if let Some(child) = self.children.iter_mut().find(|c| c.id == id) {
            log::debug!("[tree] replacing widget {}", id);
            child.widget = widget;
        } else {
            log::debug!("[tree] adding widget {}", id);
            self.children.push(Child { id, widget });
        }
    }

    pub fn child(mut self, id: impl Into<String>, widget: impl Widget + 'static) -> Self {
        self.push(id, widget);
        self
    }

    pub fn remove(&mut self, id: &str) -> Option<Box<dyn Widget>> {
        let index = self.children.iter().position(|c| c.id == id)?;
        Some(self.children.remove(index).widget)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(|c| c.id.as_str())
    }

    /// Typed access to a child, e.g. to update a scrollbar's row count.
    pub fn get<T: Widget + 'static>(&self, id: &str) -> Option<&T> {
        self.children
            .iter()
            .find(|c| c.id == id)
            .and_then(|c| c.widget.as_any().downcast_ref::<T>())
    }

    pub fn get_mut<T: Widget + 'static>(&mut self, id: &str) -> Option<&mut T> {
        self.children
            .iter_mut()
            .find(|c| c.id == id)
            .and_then(|c| c.widget.as_any_mut().downcast_mut::<T>())
    }

    /// Window size last passed to [`WidgetTree::resize`].
    pub fn window_size(&self) -> (i32, i32) {
        self.window
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.reposition(width, height);
    }

    /// Route an event to the children. Returns the first handling result, or
    /// for mouse release, `Consumed` if any child consumed it.
    pub fn dispatch(&mut self, event: &InputEvent) -> EventResult {
        if let InputEvent::MouseUp { x, y, button } = *event {
            return self.broadcast_mouse_up(x, y, button);
        }

        for child in self.children.iter_mut().rev() {
            let result = child.widget.handle(event);
            if result.is_handled() {
                log::trace!("[tree] {:?} handled by {}", event, child.id);
                return result;
            }
        }
        EventResult::Ignored
    }

    fn broadcast_mouse_up(&mut self, x: i32, y: i32, button: MouseButton) -> EventResult {
        let mut handled = false;
        for child in self.children.iter_mut().rev() {
            handled |= child.widget.handle_mouse_up(x, y, button).is_handled();
        }
        if handled {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

impl Widget for WidgetTree {
    fn bounds(&self) -> Rect {
        Rect::from_size(self.window.0, self.window.1)
    }

    fn reposition(&mut self, window_width: i32, window_height: i32) {
        self.window = (window_width, window_height);
        for child in &mut self.children {
            child.widget.reposition(window_width, window_height);
        }
    }

    fn render(&self, frame: &mut Frame<'_>) {
        for child in &self.children {
            child.widget.render(frame);
        }
    }

    fn handle(&mut self, event: &InputEvent) -> EventResult {
        self.dispatch(event)
    }

    fn handle_wheel(&mut self, delta: f32) -> EventResult {
        self.dispatch(&InputEvent::Wheel { delta })
    }

    fn handle_mouse_move(&mut self, x: i32, y: i32) -> EventResult {
        self.dispatch(&InputEvent::MouseMove { x, y })
    }

    fn handle_mouse_down(&mut self, x: i32, y: i32, button: MouseButton) -> EventResult {
        self.dispatch(&InputEvent::MouseDown { x, y, button })
    }

    fn handle_mouse_up(&mut self, x: i32, y: i32, button: MouseButton) -> EventResult {
        self.broadcast_mouse_up(x, y, button)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
