//! # Modal State Module
//!
//! Draft state of the two chooser dialogs while they are open.
//!
//! ## Responsibilities:
//! - Hold the request a dialog was opened with
//! - Hold the value the user is editing before confirming
//! - Convert the edited value into the payload the reducer expects
//!
//! ## Purpose:
//! Drafts live only as long as the dialog. Nothing here is committed until the
//! user presses OK, so cancelling never touches the screen's selection.

use chrono::NaiveDate;
use picker_shared::{
    date_to_epoch_millis, epoch_millis_to_date, ClockFormat, DatePickerRequest, TimeChoice,
    TimePickerRequest,
};

/// Editing state of an open time dialog
#[derive(Debug, Clone)]
pub struct TimeDialogState {
    pub request: TimePickerRequest,

    /// Hour as shown on the dial: 0-23 in 24-hour mode, 1-12 in 12-hour mode
    pub hour: u32,

    pub minute: u32,

    /// Afternoon half of the day, only meaningful in 12-hour mode
    pub pm: bool,
}

impl TimeDialogState {
    pub fn new(request: TimePickerRequest) -> Self {
        let seed = TimeChoice::new(request.hour, request.minute);
        let (hour, minute, pm) = match request.clock_format {
            ClockFormat::H24 => (seed.hour, seed.minute, seed.hour >= 12),
            ClockFormat::H12 => seed.to_12h(),
        };

        Self {
            request,
            hour,
            minute,
            pm,
        }
    }

    pub fn is_12h(&self) -> bool {
        self.request.clock_format == ClockFormat::H12
    }

    /// The edited value in 24-hour terms
    pub fn choice(&self) -> TimeChoice {
        match self.request.clock_format {
            ClockFormat::H24 => TimeChoice::new(self.hour, self.minute),
            ClockFormat::H12 => TimeChoice::from_12h(self.hour, self.minute, self.pm),
        }
    }
}

/// Editing state of an open date dialog
#[derive(Debug, Clone)]
pub struct DateDialogState {
    pub request: DatePickerRequest,
    pub date: NaiveDate,
}

impl DateDialogState {
    pub fn new(request: DatePickerRequest) -> Self {
        // Unconvertible seeds fall back to the epoch day
        let date = epoch_millis_to_date(request.selection_millis).unwrap_or_default();
        Self { request, date }
    }

    /// Payload for a confirmation: UTC midnight of the chosen date
    pub fn selection_millis(&self) -> Option<i64> {
        Some(date_to_epoch_millis(self.date))
    }
}
