//! Conversion between calendar dates and the UTC epoch milliseconds the date
//! dialog exchanges.

use chrono::{DateTime, NaiveDate, NaiveTime};

use crate::error::PickerError;

/// UTC midnight of `date`, in milliseconds since the epoch
pub fn date_to_epoch_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// UTC calendar date containing the instant `millis`
pub fn epoch_millis_to_date(millis: i64) -> Result<NaiveDate, PickerError> {
    DateTime::from_timestamp_millis(millis)
        .map(|instant| instant.date_naive())
        .ok_or(PickerError::EpochOutOfRange(millis))
}
