//! Focus side effects on the text fields, kept behind a small capability so
//! the controller runs without any UI toolkit.

use crate::segments::SegmentRole;

/// What the controller asks of the presentation layer.
pub trait FocusController {
    /// Move input focus to `role`'s text field.
    fn focus(&mut self, role: SegmentRole);

    /// Drop input focus and hide the keyboard.
    fn dismiss(&mut self);
}

/// Ignores every request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoFocus;

impl FocusController for NoFocus {
    fn focus(&mut self, _role: SegmentRole) {}

    fn dismiss(&mut self) {}
}

/// A recorded focus request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusEvent {
    Focus(SegmentRole),
    Dismiss,
}

/// Records requests in order, handy for driving a controller in tests.
impl FocusController for Vec<FocusEvent> {
    fn focus(&mut self, role: SegmentRole) {
        self.push(FocusEvent::Focus(role));
    }

    fn dismiss(&mut self) {
        self.push(FocusEvent::Dismiss);
    }
}

impl<T: FocusController + ?Sized> FocusController for &mut T {
    fn focus(&mut self, role: SegmentRole) {
        (**self).focus(role);
    }

    fn dismiss(&mut self) {
        (**self).dismiss();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_records_in_order() {
        let mut events: Vec<FocusEvent> = Vec::new();
        events.focus(SegmentRole::Date);
        events.dismiss();
        assert_eq!(
            events,
            vec![FocusEvent::Focus(SegmentRole::Date), FocusEvent::Dismiss]
        );
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn drive(mut focus: impl FocusController) {
            focus.focus(SegmentRole::Year);
        }

        let mut events: Vec<FocusEvent> = Vec::new();
        drive(&mut events);
        assert_eq!(events, vec![FocusEvent::Focus(SegmentRole::Year)]);
    }
}
