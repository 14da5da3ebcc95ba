//! # Selection Store
//!
//! The committed date and date-time of the screen. Both are seeded from a
//! [`Clock`] at mount and only change through confirmed dialog choices.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::PickerError;

const TIME_DISPLAY_FORMAT: &str = "%H:%M";
const DATE_DISPLAY_FORMAT: &str = "%Y-%m-%d";

/// Source of "now" for seeding the selection
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time of the host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_date: NaiveDate,
    pub selected_date_time: NaiveDateTime,
}

impl SelectionState {
    /// Seed both values from the current moment
    pub fn now(clock: &impl Clock) -> Self {
        let now = clock.now();
        Self {
            selected_date: now.date(),
            selected_date_time: now,
        }
    }

    /// Replace the time of day, keeping the date part of the selected date-time.
    /// Seconds and fractions are dropped.
    pub fn with_time(self, hour: u32, minute: u32) -> Result<Self, PickerError> {
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or(PickerError::InvalidTime { hour, minute })?;
        Ok(Self {
            selected_date_time: self.selected_date_time.date().and_time(time),
            ..self
        })
    }

    pub fn with_date(self, date: NaiveDate) -> Self {
        Self {
            selected_date: date,
            ..self
        }
    }

    /// 24-hour `HH:mm`
    pub fn time_text(&self) -> String {
        self.selected_date_time.format(TIME_DISPLAY_FORMAT).to_string()
    }

    /// `yyyy-MM-dd`
    pub fn date_text(&self) -> String {
        self.selected_date.format(DATE_DISPLAY_FORMAT).to_string()
    }
}
