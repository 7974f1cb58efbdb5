//! Error types.

/// Errors raised by scroll geometry queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScrollError {
    /// The region has no rows, so pixels-per-row is undefined.
    #[error("no scale available: scroll region has no rows (track height {track_height}px)")]
    NoScale { track_height: i32 },

    /// The track is shorter than its two borders, leaving no room for a thumb.
    #[error("track height {track_height}px is less than twice the {border}px border")]
    TrackTooShort { track_height: i32, border: i32 },
}

impl ScrollError {
    pub fn no_scale(track_height: i32) -> Self {
        Self::NoScale { track_height }
    }

    pub fn track_too_short(track_height: i32, border: i32) -> Self {
        Self::TrackTooShort {
            track_height,
            border,
        }
    }
}
