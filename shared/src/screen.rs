//! # Screen State
//!
//! The whole screen as one value. [`ScreenState::apply`] is the only way the
//! state changes: it consumes the current state and an event and returns the
//! next state.
//!
//! ## Rules
//! - Checkbox events set the matching flag to the given value.
//! - Every dialog outcome resets the matching flag to `false`.
//! - Only a confirmed, convertible payload touches the selection.

use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::dialog::{DialogOutcome, TimeChoice};
use crate::epoch::epoch_millis_to_date;
use crate::kind::{DialogPhase, PickerKind};
use crate::selection::{Clock, SelectionState};
use crate::visibility::VisibilityState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    TimeCheckboxChanged(bool),
    DateCheckboxChanged(bool),
    TimeDialog(DialogOutcome<TimeChoice>),
    /// Confirmed payload is the chosen date as UTC epoch millis, if any
    DateDialog(DialogOutcome<Option<i64>>),
    /// The host could not present the dialog for this kind
    HostUnavailable(PickerKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenState {
    pub visibility: VisibilityState,
    pub selection: SelectionState,
}

impl ScreenState {
    /// State at mount: both dialogs hidden, selection seeded from `clock`
    pub fn mount(clock: &impl Clock) -> Self {
        Self {
            visibility: VisibilityState::new(),
            selection: SelectionState::now(clock),
        }
    }

    pub fn apply(self, event: ScreenEvent) -> Self {
        match event {
            ScreenEvent::TimeCheckboxChanged(visible) => {
                info!("Time picker checkbox changed to {}", visible);
                Self {
                    visibility: self.visibility.set_time_visible(visible),
                    ..self
                }
            }
            ScreenEvent::DateCheckboxChanged(visible) => {
                info!("Date picker checkbox changed to {}", visible);
                Self {
                    visibility: self.visibility.set_date_visible(visible),
                    ..self
                }
            }
            ScreenEvent::TimeDialog(outcome) => self.apply_time_outcome(outcome),
            ScreenEvent::DateDialog(outcome) => self.apply_date_outcome(outcome),
            ScreenEvent::HostUnavailable(kind) => {
                warn!("Could not present {} picker, hiding it", kind);
                self.hidden(kind)
            }
        }
    }

    pub fn phase(&self, kind: PickerKind) -> DialogPhase {
        self.visibility.phase(kind)
    }

    pub fn time_text(&self) -> String {
        self.selection.time_text()
    }

    pub fn date_text(&self) -> String {
        self.selection.date_text()
    }

    fn hidden(self, kind: PickerKind) -> Self {
        Self {
            visibility: self.visibility.set_visible(kind, false),
            ..self
        }
    }

    fn apply_time_outcome(self, outcome: DialogOutcome<TimeChoice>) -> Self {
        let state = self.hidden(PickerKind::Time);
        let DialogOutcome::Confirmed(choice) = outcome else {
            debug!("Time picker closed without a selection: {:?}", outcome);
            return state;
        };

        match state.selection.with_time(choice.hour, choice.minute) {
            Ok(selection) => {
                info!("Time selected: {}", selection.time_text());
                Self { selection, ..state }
            }
            Err(e) => {
                warn!("Ignoring time picker result: {}", e);
                state
            }
        }
    }

    fn apply_date_outcome(self, outcome: DialogOutcome<Option<i64>>) -> Self {
        let state = self.hidden(PickerKind::Date);
        let DialogOutcome::Confirmed(millis) = outcome else {
            debug!("Date picker closed without a selection: {:?}", outcome);
            return state;
        };

        match millis.map(epoch_millis_to_date) {
            Some(Ok(date)) => state.with_date(date),
            Some(Err(e)) => {
                debug!("Ignoring date picker result: {}", e);
                state
            }
            None => {
                debug!("Date picker confirmed without a value");
                state
            }
        }
    }

    fn with_date(self, date: NaiveDate) -> Self {
        let selection = self.selection.with_date(date);
        info!("Date selected: {}", selection.date_text());
        Self { selection, ..self }
    }
}
