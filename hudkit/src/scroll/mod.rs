//! Row-based scrolling for lists and tables.

mod region;
mod wheel;

pub use region::{ScrollRegion, ThumbGeometry};
pub use wheel::WheelAccumulator;
