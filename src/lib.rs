//! Segmented date entry.
//!
//! A date field made of three numeric text segments (date, month, year) shown
//! Month-Date-Year or Year-Month-Date. [`DateFieldController`] sanitizes and
//! clamps each keystroke, advances focus when a segment fills up, normalizes
//! partial input when focus leaves the field and reports either a valid
//! [`CalendarDate`] or an [`EntryError`].
//!
//! ```
//! use date_field::{DateFieldConfig, DateFieldController, FixedClock, NoFocus, SegmentRole};
//!
//! let mut field = DateFieldController::new(DateFieldConfig::mdy(), NoFocus, FixedClock(2026))?;
//! field.on_change(SegmentRole::Month, "3");
//! field.on_change(SegmentRole::Date, "5");
//! field.on_change(SegmentRole::Year, "24");
//!
//! let date = field.on_blur()?;
//! assert_eq!(date.to_string(), "2024-03-05");
//! assert_eq!(field.segments().month(), "03");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod clock;
mod config;
mod consts;
mod controller;
mod date;
mod error;
mod focus;
mod order;
mod prelude;
mod range;
mod segments;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{DateFieldConfig, SegmentLabels};
pub use consts::*;
pub use controller::{DateFieldController, EntryState, ReturnKey, SegmentView};
pub use date::{CalendarDate, Composed, ParseError};
pub use error::{ConfigError, EntryError, RangeViolation};
pub use focus::{FocusController, FocusEvent, NoFocus};
pub use order::{SegmentOrder, SubmitGate};
pub use range::{BoundsError, DateBounds};
pub use segments::{CenturyPivot, Change, DateSegments, SegmentRole, sanitize};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
