pub mod canvas;
pub mod config;
pub mod error;
pub mod event;
pub mod layout;
pub mod scroll;
pub mod text;
pub mod types;
pub mod widget;

pub use canvas::{Canvas, DrawCommand, Frame, RecordingCanvas};
pub use config::{ScrollbarMetrics, ScrollbarStyle};
pub use error::ScrollError;
pub use event::{EventResult, InputEvent, MouseButton};
pub use layout::{Anchor, Placement, Rect};
pub use scroll::{ScrollRegion, ThumbGeometry, WheelAccumulator};
pub use text::{MonospaceMeasurer, TextMeasurer};
pub use types::*;
pub use widget::{Label, Scrollbar, Widget, WidgetTree};
