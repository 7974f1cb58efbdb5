mod anchor;
mod rect;

pub use anchor::{Anchor, Placement};
pub use rect::Rect;
