//! # Dialog Presenter
//!
//! Turns visibility flags into dialog requests against a [`PickerHost`]. The
//! host is whatever can actually show a chooser (an egui window, a test fake).
//!
//! ## Contract
//! - flag true, not open: build the request, ask the host, mark open
//! - flag true, already open: nothing, so one instance per kind at most
//! - flag false, open: ask the host to hide it
//!
//! When the host cannot present, the presenter does nothing on the host side
//! and hands back [`ScreenEvent::HostUnavailable`] so the flag gets cleared.

use std::collections::HashSet;

use chrono::Timelike;
use log::{info, warn};

use crate::config::PickerConfig;
use crate::dialog::{DatePickerRequest, TimePickerRequest};
use crate::epoch::date_to_epoch_millis;
use crate::error::HostError;
use crate::kind::PickerKind;
use crate::screen::{ScreenEvent, ScreenState};

/// Capability to show and hide the platform choosers
pub trait PickerHost {
    /// Whether a screen context exists to attach dialogs to
    fn is_available(&self) -> bool;

    fn show_time_picker(&mut self, request: TimePickerRequest) -> Result<(), HostError>;

    fn show_date_picker(&mut self, request: DatePickerRequest) -> Result<(), HostError>;

    fn hide(&mut self, kind: PickerKind);
}

#[derive(Debug, Default)]
pub struct DialogPresenter {
    config: PickerConfig,
    open: HashSet<PickerKind>,
}

impl DialogPresenter {
    pub fn new(config: PickerConfig) -> Self {
        Self {
            config,
            open: HashSet::new(),
        }
    }

    pub fn is_open(&self, kind: PickerKind) -> bool {
        self.open.contains(&kind)
    }

    /// Bring the host in line with `state`. Returns follow-up events for the
    /// reducer; empty when everything was presented as requested.
    pub fn sync<H: PickerHost>(&mut self, state: &ScreenState, host: &mut H) -> Vec<ScreenEvent> {
        let mut events = Vec::new();

        for kind in PickerKind::ALL {
            let visible = state.visibility.is_visible(kind);
            let open = self.is_open(kind);

            if visible && !open {
                match self.present(kind, state, host) {
                    Ok(()) => {
                        info!("Presented {} picker ({})", kind, kind.tag());
                        self.open.insert(kind);
                    }
                    Err(e) => {
                        warn!("Failed to present {} picker: {}", kind, e);
                        events.push(ScreenEvent::HostUnavailable(kind));
                    }
                }
            } else if !visible && open {
                info!("Hiding {} picker", kind);
                host.hide(kind);
                self.open.remove(&kind);
            }
        }

        events
    }

    /// The host reported a terminal action for `kind`; its instance is gone.
    pub fn closed(&mut self, kind: PickerKind) {
        self.open.remove(&kind);
    }

    pub fn time_request(&self, state: &ScreenState) -> TimePickerRequest {
        let seed = state.selection.selected_date_time;
        TimePickerRequest {
            tag: PickerKind::Time.tag(),
            title: self.config.title(PickerKind::Time).to_string(),
            hour: seed.hour(),
            minute: seed.minute(),
            clock_format: self.config.clock_format,
        }
    }

    pub fn date_request(&self, state: &ScreenState) -> DatePickerRequest {
        DatePickerRequest {
            tag: PickerKind::Date.tag(),
            title: self.config.title(PickerKind::Date).to_string(),
            selection_millis: date_to_epoch_millis(state.selection.selected_date),
        }
    }

    fn present<H: PickerHost>(
        &self,
        kind: PickerKind,
        state: &ScreenState,
        host: &mut H,
    ) -> Result<(), HostError> {
        if !host.is_available() {
            return Err(HostError::Unavailable);
        }

        match kind {
            PickerKind::Time => host.show_time_picker(self.time_request(state)),
            PickerKind::Date => host.show_date_picker(self.date_request(state)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClockFormat;
    use crate::selection::FixedClock;
    use chrono::NaiveDate;

    #[derive(Default)]
    struct RecordingHost {
        unavailable: bool,
        time_requests: Vec<TimePickerRequest>,
        date_requests: Vec<DatePickerRequest>,
        hidden: Vec<PickerKind>,
    }

    impl PickerHost for RecordingHost {
        fn is_available(&self) -> bool {
            !self.unavailable
        }

        fn show_time_picker(&mut self, request: TimePickerRequest) -> Result<(), HostError> {
            self.time_requests.push(request);
            Ok(())
        }

        fn show_date_picker(&mut self, request: DatePickerRequest) -> Result<(), HostError> {
            self.date_requests.push(request);
            Ok(())
        }

        fn hide(&mut self, kind: PickerKind) {
            self.hidden.push(kind);
        }
    }

    fn mounted() -> ScreenState {
        let now = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(7, 4, 0)
            .unwrap();
        ScreenState::mount(&FixedClock(now))
    }

    #[test]
    fn test_nothing_presented_while_hidden() {
        let mut presenter = DialogPresenter::default();
        let mut host = RecordingHost::default();
        assert!(presenter.sync(&mounted(), &mut host).is_empty());
        assert!(host.time_requests.is_empty());
        assert!(host.date_requests.is_empty());
    }

    #[test]
    fn test_time_request_seeded_from_selection() {
        let config = PickerConfig {
            clock_format: ClockFormat::H12,
            ..PickerConfig::default()
        };
        let mut presenter = DialogPresenter::new(config);
        let mut host = RecordingHost::default();
        let state = mounted().apply(ScreenEvent::TimeCheckboxChanged(true));

        presenter.sync(&state, &mut host);

        let request = &host.time_requests[0];
        assert_eq!((request.hour, request.minute), (7, 4));
        assert_eq!(request.tag, "time_picker_frag");
        assert_eq!(request.title, "Select time");
        assert_eq!(request.clock_format, ClockFormat::H12);
    }

    #[test]
    fn test_date_request_seeded_with_epoch_millis() {
        let mut presenter = DialogPresenter::default();
        let mut host = RecordingHost::default();
        let state = mounted().apply(ScreenEvent::DateCheckboxChanged(true));

        presenter.sync(&state, &mut host);

        assert_eq!(host.date_requests.len(), 1);
        assert_eq!(host.date_requests[0].selection_millis, 1_709_769_600_000);
        assert!(presenter.is_open(PickerKind::Date));
    }

    #[test]
    fn test_repeated_sync_does_not_duplicate() {
        let mut presenter = DialogPresenter::default();
        let mut host = RecordingHost::default();
        let state = mounted()
            .apply(ScreenEvent::TimeCheckboxChanged(true))
            .apply(ScreenEvent::TimeCheckboxChanged(true));

        presenter.sync(&state, &mut host);
        presenter.sync(&state, &mut host);

        assert_eq!(host.time_requests.len(), 1);
    }

    #[test]
    fn test_unchecking_hides_open_dialog() {
        let mut presenter = DialogPresenter::default();
        let mut host = RecordingHost::default();
        let shown = mounted().apply(ScreenEvent::DateCheckboxChanged(true));
        presenter.sync(&shown, &mut host);

        let hidden = shown.apply(ScreenEvent::DateCheckboxChanged(false));
        presenter.sync(&hidden, &mut host);

        assert_eq!(host.hidden, vec![PickerKind::Date]);
        assert!(!presenter.is_open(PickerKind::Date));
    }

    #[test]
    fn test_unavailable_host_is_a_no_op() {
        let mut presenter = DialogPresenter::default();
        let mut host = RecordingHost {
            unavailable: true,
            ..RecordingHost::default()
        };
        let state = mounted().apply(ScreenEvent::TimeCheckboxChanged(true));

        let events = presenter.sync(&state, &mut host);

        assert_eq!(events, vec![ScreenEvent::HostUnavailable(PickerKind::Time)]);
        assert!(host.time_requests.is_empty());
        assert!(!presenter.is_open(PickerKind::Time));
    }

    #[test]
    fn test_closed_allows_fresh_instance() {
        let mut presenter = DialogPresenter::default();
        let mut host = RecordingHost::default();
        let state = mounted().apply(ScreenEvent::TimeCheckboxChanged(true));
        presenter.sync(&state, &mut host);

        presenter.closed(PickerKind::Time);
        presenter.sync(&state, &mut host);

        assert_eq!(host.time_requests.len(), 2);
    }
}
