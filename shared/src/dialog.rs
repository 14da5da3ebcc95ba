//! Types crossing the dialog widget boundary.

use crate::config::ClockFormat;

/// What the time chooser is seeded with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimePickerRequest {
    pub tag: &'static str,
    pub title: String,
    pub hour: u32,
    pub minute: u32,
    pub clock_format: ClockFormat,
}

/// What the date chooser is seeded with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePickerRequest {
    pub tag: &'static str,
    pub title: String,
    /// UTC midnight of the currently selected date
    pub selection_millis: i64,
}

/// How a dialog ended. Only `Confirmed` carries a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome<T> {
    Confirmed(T),
    Cancelled,
    Dismissed,
    Negative,
}

/// Hour and minute chosen in the time dialog, always in 24-hour terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeChoice {
    pub hour: u32,
    pub minute: u32,
}

impl<T> DialogOutcome<T> {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, DialogOutcome::Confirmed(_))
    }

    /// Transform the confirmed payload, keeping the other outcomes as they are
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DialogOutcome<U> {
        match self {
            DialogOutcome::Confirmed(value) => DialogOutcome::Confirmed(f(value)),
            DialogOutcome::Cancelled => DialogOutcome::Cancelled,
            DialogOutcome::Dismissed => DialogOutcome::Dismissed,
            DialogOutcome::Negative => DialogOutcome::Negative,
        }
    }
}

impl TimeChoice {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Build from a 12-hour clock reading. `hour12` is 1..=12.
    pub fn from_12h(hour12: u32, minute: u32, pm: bool) -> Self {
        let base = hour12 % 12;
        let hour = if pm { base + 12 } else { base };
        Self { hour, minute }
    }

    /// `(hour12, minute, pm)` for showing this choice on a 12-hour clock
    pub fn to_12h(self) -> (u32, u32, bool) {
        let pm = self.hour >= 12;
        let hour12 = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        (hour12, self.minute, pm)
    }
}
