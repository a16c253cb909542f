use crate::range::{BoundsError, DateBounds};
use crate::segments::DateSegments;
use crate::CalendarDate;

/// The composed date fell outside the configured bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{date} is outside the allowed range {bounds}")]
pub struct RangeViolation {
    pub date: CalendarDate,
    pub bounds: DateBounds,
}

/// Why a focus loss produced no date.
///
/// These never leave the field broken; every case stays editable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    /// Out of bounds. The segments were cleared and the error callback ran.
    #[error(transparent)]
    RangeViolation(#[from] RangeViolation),

    /// The segments do not name a real day (Feb 31, or a segment still
    /// empty). Normalized segments were kept.
    #[error("segments do not form a calendar date: {segments:?}")]
    CalendarInvalid { segments: DateSegments },

    /// The segment gating submission is empty. Nothing changed.
    #[error("date entry is incomplete")]
    IncompleteInput,
}

/// Rejected field configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Bounds(#[from] BoundsError),

    #[error("Invalid century pivot: {0} (must be 0-100)")]
    CenturyPivot(u8),

    #[error("Invalid segment order: {0} (expected each of D, M, Y once)")]
    SegmentOrder(String),
}
