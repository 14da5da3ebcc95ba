use std::collections::HashMap;

use chrono::NaiveDate;
use picker_shared::*;
use proptest::prelude::*;

/// Host that keeps open requests around so a test can "press" dialog buttons
#[derive(Default)]
struct FakeHost {
    open_time: Option<TimePickerRequest>,
    open_date: Option<DatePickerRequest>,
    shows: HashMap<PickerKind, usize>,
}

impl PickerHost for FakeHost {
    fn is_available(&self) -> bool {
        true
    }

    fn show_time_picker(&mut self, request: TimePickerRequest) -> Result<(), HostError> {
        assert!(self.open_time.is_none(), "time picker shown twice");
        *self.shows.entry(PickerKind::Time).or_default() += 1;
        self.open_time = Some(request);
        Ok(())
    }

    fn show_date_picker(&mut self, request: DatePickerRequest) -> Result<(), HostError> {
        assert!(self.open_date.is_none(), "date picker shown twice");
        *self.shows.entry(PickerKind::Date).or_default() += 1;
        self.open_date = Some(request);
        Ok(())
    }

    fn hide(&mut self, kind: PickerKind) {
        match kind {
            PickerKind::Time => self.open_time = None,
            PickerKind::Date => self.open_date = None,
        }
    }
}

impl FakeHost {
    fn is_showing(&self, kind: PickerKind) -> bool {
        match kind {
            PickerKind::Time => self.open_time.is_some(),
            PickerKind::Date => self.open_date.is_some(),
        }
    }
}

/// Screen, presenter and host driven the way the frontend drives them
struct Harness {
    state: ScreenState,
    presenter: DialogPresenter,
    host: FakeHost,
}

impl Harness {
    fn new(today: NaiveDate) -> Self {
        let now = today.and_hms_opt(10, 0, 0).unwrap();
        let mut harness = Self {
            state: ScreenState::mount(&FixedClock(now)),
            presenter: DialogPresenter::default(),
            host: FakeHost::default(),
        };
        harness.render();
        harness
    }

    fn send(&mut self, event: ScreenEvent) {
        let closed_kind = match event {
            ScreenEvent::TimeDialog(_) => Some(PickerKind::Time),
            ScreenEvent::DateDialog(_) => Some(PickerKind::Date),
            _ => None,
        };
        if let Some(kind) = closed_kind {
            self.host.hide(kind);
            self.presenter.closed(kind);
        }
        self.state = self.state.apply(event);
        self.render();
    }

    fn render(&mut self) {
        for event in self.presenter.sync(&self.state, &mut self.host) {
            self.state = self.state.apply(event);
        }
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

#[test]
fn test_date_selection_end_to_end() {
    let mut harness = Harness::new(today());
    assert_eq!(harness.state.date_text(), "2026-10-16");

    harness.send(ScreenEvent::DateCheckboxChanged(true));
    assert!(harness.host.is_showing(PickerKind::Date));

    let chosen = date_to_epoch_millis(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
    harness.send(ScreenEvent::DateDialog(DialogOutcome::Confirmed(Some(chosen))));

    assert!(!harness.state.visibility.date_visible);
    assert!(!harness.host.is_showing(PickerKind::Date));
    assert_eq!(harness.state.date_text(), "2024-03-07");
}

#[test]
fn test_time_dialog_seeded_with_last_confirmed_time() {
    let mut harness = Harness::new(today());

    harness.send(ScreenEvent::TimeCheckboxChanged(true));
    harness.send(ScreenEvent::TimeDialog(DialogOutcome::Confirmed(TimeChoice::new(9, 5))));
    assert_eq!(harness.state.time_text(), "09:05");

    harness.send(ScreenEvent::TimeCheckboxChanged(true));
    let request = harness.host.open_time.clone().unwrap();
    assert_eq!((request.hour, request.minute), (9, 5));
    assert_eq!(harness.host.shows[&PickerKind::Time], 2);
}

#[test]
fn test_cancel_keeps_previous_values() {
    let mut harness = Harness::new(today());
    let before = harness.state.selection;

    harness.send(ScreenEvent::TimeCheckboxChanged(true));
    harness.send(ScreenEvent::TimeDialog(DialogOutcome::Negative));
    harness.send(ScreenEvent::DateCheckboxChanged(true));
    harness.send(ScreenEvent::DateDialog(DialogOutcome::Cancelled));

    assert_eq!(harness.state.selection, before);
    assert_eq!(harness.state.phase(PickerKind::Time), DialogPhase::Hidden);
    assert_eq!(harness.state.phase(PickerKind::Date), DialogPhase::Hidden);
}

fn outcome_strategy<T: Clone + std::fmt::Debug + 'static>(
    payload: impl Strategy<Value = T> + 'static,
) -> impl Strategy<Value = DialogOutcome<T>> {
    prop_oneof![
        payload.prop_map(DialogOutcome::Confirmed),
        Just(DialogOutcome::Cancelled),
        Just(DialogOutcome::Dismissed),
        Just(DialogOutcome::Negative),
    ]
}

fn event_strategy() -> impl Strategy<Value = ScreenEvent> {
    prop_oneof![
        any::<bool>().prop_map(ScreenEvent::TimeCheckboxChanged),
        any::<bool>().prop_map(ScreenEvent::DateCheckboxChanged),
        outcome_strategy((0u32..30, 0u32..70).prop_map(|(h, m)| TimeChoice::new(h, m)))
            .prop_map(ScreenEvent::TimeDialog),
        outcome_strategy(proptest::option::of(-5_000_000_000_000i64..5_000_000_000_000))
            .prop_map(ScreenEvent::DateDialog),
    ]
}

proptest! {
    #[test]
    fn prop_flags_follow_last_action(events in proptest::collection::vec(event_strategy(), 0..40)) {
        let mut harness = Harness::new(today());

        for event in events {
            let before = harness.state.selection;
            harness.send(event);
            let visibility = harness.state.visibility;

            match event {
                ScreenEvent::TimeCheckboxChanged(v) => prop_assert_eq!(visibility.time_visible, v),
                ScreenEvent::DateCheckboxChanged(v) => prop_assert_eq!(visibility.date_visible, v),
                ScreenEvent::TimeDialog(outcome) => {
                    prop_assert!(!visibility.time_visible);
                    if !outcome.is_confirmed() {
                        prop_assert_eq!(harness.state.selection, before);
                    }
                    prop_assert_eq!(harness.state.selection.selected_date, before.selected_date);
                }
                ScreenEvent::DateDialog(outcome) => {
                    prop_assert!(!visibility.date_visible);
                    if !outcome.is_confirmed() {
                        prop_assert_eq!(harness.state.selection, before);
                    }
                    prop_assert_eq!(
                        harness.state.selection.selected_date_time,
                        before.selected_date_time
                    );
                }
                ScreenEvent::HostUnavailable(_) => {}
            }

            for kind in PickerKind::ALL {
                prop_assert_eq!(harness.host.is_showing(kind), visibility.is_visible(kind));
            }
        }
    }
}
