//! The date field state machine.
//!
//! [`DateFieldController`] owns one [`DateSegments`] value and reacts to the
//! events a text-field layer delivers: text changes, the return key, focus
//! loss and external value updates. Focus moves go through a
//! [`FocusController`]; the current year comes from a [`Clock`].

use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::config::DateFieldConfig;
use crate::error::{ConfigError, EntryError, RangeViolation};
use crate::focus::{FocusController, NoFocus};
use crate::order::SegmentOrder;
use crate::range::DateBounds;
use crate::segments::{DateSegments, SegmentRole};
use crate::CalendarDate;

/// Where the entry stands, derived from the segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    Empty,
    PartiallyEntered,
    /// All segments full but not a real day, e.g. `02/31/2023`.
    CompleteInvalid,
    CompleteValid,
    /// The last focus loss was out of bounds and nothing has been typed since.
    Error(RangeViolation),
}

/// Label shown on the return key of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnKey {
    Next,
    Done,
}

/// Everything a text field needs to render one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentView<'a> {
    pub role: SegmentRole,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub max_length: usize,
    pub editable: bool,
    pub return_key: ReturnKey,
}

type SubmitCallback = Box<dyn FnMut(CalendarDate)>;
type ErrorCallback = Box<dyn FnMut()>;

pub struct DateFieldController<F = NoFocus, C = SystemClock> {
    config: DateFieldConfig,
    bounds: DateBounds,
    segments: DateSegments,
    /// Last controlled value seen, initial or through `sync_value`.
    synced_value: Option<CalendarDate>,
    range_error: Option<RangeViolation>,
    focus: F,
    clock: C,
    on_submit: Option<SubmitCallback>,
    handle_errors: Option<ErrorCallback>,
}

impl DateFieldController {
    /// A controller without focus side effects, reading the system clock.
    ///
    /// # Errors
    /// Returns `ConfigError` if the configured bounds are inverted.
    pub fn headless(config: DateFieldConfig) -> Result<Self, ConfigError> {
        Self::new(config, NoFocus, SystemClock)
    }
}

impl<F: FocusController, C: Clock> DateFieldController<F, C> {
    /// # Errors
    /// Returns `ConfigError` if the configured bounds are inverted.
    pub fn new(config: DateFieldConfig, focus: F, clock: C) -> Result<Self, ConfigError> {
        let bounds = config.bounds()?;
        let initial = config.initial_value();
        Ok(Self {
            segments: DateSegments::from_date(initial.as_ref()),
            synced_value: config.value,
            bounds,
            config,
            range_error: None,
            focus,
            clock,
            on_submit: None,
            handle_errors: None,
        })
    }

    /// Called with each date accepted on focus loss.
    #[must_use]
    pub fn on_submit(mut self, callback: impl FnMut(CalendarDate) + 'static) -> Self {
        self.on_submit = Some(Box::new(callback));
        self
    }

    /// Called when a focus loss lands outside the bounds.
    #[must_use]
    pub fn handle_errors(mut self, callback: impl FnMut() + 'static) -> Self {
        self.handle_errors = Some(Box::new(callback));
        self
    }

    /// Returns the current digit buffers
    pub const fn segments(&self) -> &DateSegments {
        &self.segments
    }

    /// Returns the configuration the controller was built from
    pub const fn config(&self) -> &DateFieldConfig {
        &self.config
    }

    /// Returns the display order of the segments
    pub const fn order(&self) -> &SegmentOrder {
        &self.config.order
    }

    /// Returns the validated bounds
    pub const fn bounds(&self) -> &DateBounds {
        &self.bounds
    }

    /// Returns the focus controller
    pub const fn focus_controller(&self) -> &F {
        &self.focus
    }

    /// Returns the host test identifier, if configured
    pub fn test_id(&self) -> Option<&str> {
        self.config.test_id.as_deref()
    }

    /// Focuses the first segment when `auto_focus` is set.
    pub fn mount(&mut self) {
        if self.config.auto_focus && self.config.editable {
            let first = self.config.order.first();
            debug!(segment = %first, "auto focus");
            self.focus.focus(first);
        }
    }

    /// Text changed in `role`'s field. Returns false if the field is read-only.
    pub fn on_change(&mut self, role: SegmentRole, raw: &str) -> bool {
        if !self.config.editable {
            return false;
        }

        let change = self.segments.apply_change(role, raw);
        trace!(
            segment = %role,
            raw,
            value = change.segments.get(role),
            date = change.segments.date(),
            "segment changed"
        );
        self.segments = change.segments;
        self.range_error = None;

        if change.advance {
            self.advance_from(role);
        }
        true
    }

    /// Return key pressed in `role`'s field.
    pub fn on_submit_editing(&mut self, role: SegmentRole) {
        if self.config.editable {
            self.advance_from(role);
        }
    }

    fn advance_from(&mut self, role: SegmentRole) {
        match self.config.order.next(role) {
            Some(next) => {
                debug!(from = %role, to = %next, "advance focus");
                self.focus.focus(next);
            }
            None => {
                debug!(from = %role, "dismiss keyboard");
                self.focus.dismiss();
            }
        }
    }

    /// Any segment lost focus: normalize, range-check and submit.
    ///
    /// # Errors
    /// * `EntryError::IncompleteInput` if the gating segment is empty;
    ///   nothing changes. Other empty segments read as zero.
    /// * `EntryError::RangeViolation` if bounds are set and the composed date
    ///   is outside them; segments are cleared and `handle_errors` runs.
    /// * `EntryError::CalendarInvalid` if the segments do not name a real
    ///   day; the normalized segments are kept.
    pub fn on_blur(&mut self) -> Result<CalendarDate, EntryError> {
        // Gate on what was typed. Normalization fills every empty buffer.
        if !self
            .config
            .submit_gate
            .allows(&self.config.order, &self.segments)
        {
            trace!(gate = ?self.config.submit_gate, "blur ignored, entry incomplete");
            return Err(EntryError::IncompleteInput);
        }

        let current_year = self.clock.current_year();
        let normalized = self
            .segments
            .normalize(current_year, self.config.century_pivot);

        let composed = match normalized.compose() {
            Ok(composed) => composed,
            Err(err) => {
                debug!(error = %err, "blur without a composable date");
                self.segments = normalized.clone();
                return Err(EntryError::CalendarInvalid {
                    segments: normalized,
                });
            }
        };

        if self.bounds.is_bounded() && !self.bounds.contains(&composed.date) {
            let violation = RangeViolation {
                date: composed.date,
                bounds: self.bounds,
            };
            debug!(date = %composed.date, bounds = %self.bounds, "date out of range");
            self.segments = DateSegments::default();
            self.range_error = Some(violation);
            if let Some(callback) = self.handle_errors.as_mut() {
                callback();
            }
            return Err(violation.into());
        }

        self.segments = normalized;
        if !composed.exact {
            debug!(rolled = %composed.date, "segments do not name a calendar date");
            return Err(EntryError::CalendarInvalid {
                segments: self.segments.clone(),
            });
        }

        debug!(date = %composed.date, "date submitted");
        if let Some(callback) = self.on_submit.as_mut() {
            callback(composed.date);
        }
        Ok(composed.date)
    }

    /// The externally controlled value changed.
    ///
    /// A value equal to the last one seen is ignored so in-progress edits
    /// survive. Returns true if the segments were replaced.
    pub fn sync_value(&mut self, value: Option<CalendarDate>) -> bool {
        if value == self.synced_value {
            return false;
        }
        self.synced_value = value;

        let next = DateSegments::from_date(value.as_ref());
        if next == self.segments {
            return false;
        }
        debug!(value = ?value.map(|d| d.to_string()), "segments replaced by external value");
        self.segments = next;
        self.range_error = None;
        true
    }

    /// Returns the entry state derived from the current segments
    pub fn state(&self) -> EntryState {
        if self.segments.is_empty() {
            return self
                .range_error
                .map_or(EntryState::Empty, EntryState::Error);
        }
        if !self.segments.is_all_complete() {
            return EntryState::PartiallyEntered;
        }
        match self.segments.compose() {
            Ok(composed) if composed.exact => EntryState::CompleteValid,
            _ => EntryState::CompleteInvalid,
        }
    }

    /// The segments in display order.
    pub fn views(&self) -> Vec<SegmentView<'_>> {
        let order = self.config.order;
        order
            .roles()
            .into_iter()
            .map(|role| SegmentView {
                role,
                value: self.segments.get(role),
                placeholder: self.config.labels.get(role),
                max_length: role.max_len(),
                editable: self.config.editable,
                return_key: if order.next(role).is_some() {
                    ReturnKey::Next
                } else {
                    ReturnKey::Done
                },
            })
            .collect()
    }
}
