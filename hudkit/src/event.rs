/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    pub fn is_primary(self) -> bool {
        self == MouseButton::Left
    }
}

/// Pointer input forwarded from the host's event loop.
///
/// Coordinates are window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Wheel movement. Positive is away from the user (scroll up).
    Wheel { delta: f32 },
    MouseMove { x: i32, y: i32 },
    MouseDown { x: i32, y: i32, button: MouseButton },
    MouseUp { x: i32, y: i32, button: MouseButton },
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
    /// Event started a drag operation on this widget.
    StartDrag,
}

impl EventResult {
    /// Check if the event was handled (consumed or started drag).
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

impl InputEvent {
    /// Convert a terminal mouse event, treating each cell as one pixel.
    ///
    /// Horizontal wheel events have no counterpart and yield `None`.
    pub fn from_crossterm(mouse: &crossterm::event::MouseEvent) -> Option<Self> {
        use crossterm::event::MouseEventKind;

        let x = mouse.column as i32;
        let y = mouse.row as i32;
        match mouse.kind {
            MouseEventKind::Down(btn) => Some(InputEvent::MouseDown {
                x,
                y,
                button: btn.into(),
            }),
            MouseEventKind::Up(btn) => Some(InputEvent::MouseUp {
                x,
                y,
                button: btn.into(),
            }),
            MouseEventKind::Drag(_) | MouseEventKind::Moved => Some(InputEvent::MouseMove { x, y }),
            MouseEventKind::ScrollUp => Some(InputEvent::Wheel { delta: 1.0 }),
            MouseEventKind::ScrollDown => Some(InputEvent::Wheel { delta: -1.0 }),
            MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_from_crossterm_buttons() {
        let down = mouse(
            MouseEventKind::Down(crossterm::event::MouseButton::Left),
            3,
            7,
        );
        assert_eq!(
            InputEvent::from_crossterm(&down),
            Some(InputEvent::MouseDown {
                x: 3,
                y: 7,
                button: MouseButton::Left
            })
        );

        let up = mouse(MouseEventKind::Up(crossterm::event::MouseButton::Right), 1, 2);
        assert_eq!(
            InputEvent::from_crossterm(&up),
            Some(InputEvent::MouseUp {
                x: 1,
                y: 2,
                button: MouseButton::Right
            })
        );
    }

    #[test]
    fn test_from_crossterm_wheel_and_motion() {
        assert_eq!(
            InputEvent::from_crossterm(&mouse(MouseEventKind::ScrollUp, 0, 0)),
            Some(InputEvent::Wheel { delta: 1.0 })
        );
        assert_eq!(
            InputEvent::from_crossterm(&mouse(MouseEventKind::ScrollDown, 0, 0)),
            Some(InputEvent::Wheel { delta: -1.0 })
        );
        assert_eq!(
            InputEvent::from_crossterm(&mouse(
                MouseEventKind::Drag(crossterm::event::MouseButton::Left),
                4,
                5
            )),
            Some(InputEvent::MouseMove { x: 4, y: 5 })
        );
        assert_eq!(
            InputEvent::from_crossterm(&mouse(MouseEventKind::ScrollLeft, 0, 0)),
            None
        );
    }

    #[test]
    fn test_event_result_is_handled() {
        assert!(!EventResult::Ignored.is_handled());
        assert!(EventResult::Consumed.is_handled());
        assert!(EventResult::StartDrag.is_handled());
    }
}
