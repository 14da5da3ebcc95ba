//! # egui Picker Host
//!
//! [`PickerHost`] implementation backed by egui modal dialogs. The presenter
//! asks for a dialog; the host keeps its draft until the user ends it or the
//! presenter hides it.
//!
//! The host only counts as available once it has been attached to a running
//! egui context, which happens at the top of every frame.

use eframe::egui;
use log::info;
use picker_shared::{
    DatePickerRequest, HostError, PickerHost, PickerKind, ScreenEvent, TimePickerRequest,
};

use crate::ui::components::modals::{show_date_dialog, show_time_dialog};
use crate::ui::state::{DateDialogState, TimeDialogState};

#[derive(Debug, Default)]
pub struct EguiPickerHost {
    attached: bool,
    /// Open kinds, oldest first. The last one is drawn on top.
    open_order: Vec<PickerKind>,
    pub time_dialog: Option<TimeDialogState>,
    pub date_dialog: Option<DateDialogState>,
}

impl EguiPickerHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the host as having a screen to draw on
    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn is_showing(&self, kind: PickerKind) -> bool {
        match kind {
            PickerKind::Time => self.time_dialog.is_some(),
            PickerKind::Date => self.date_dialog.is_some(),
        }
    }

    /// Kind of the dialog drawn above the others, if any is open
    pub fn topmost(&self) -> Option<PickerKind> {
        self.open_order.last().copied()
    }

    /// Draw the open dialogs in opening order and collect the outcomes of any
    /// the user ended. Escape only reaches the topmost dialog.
    pub fn render(&mut self, ctx: &egui::Context) -> Vec<ScreenEvent> {
        let escape = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        let topmost = self.topmost();
        let mut events = Vec::new();

        for kind in self.open_order.clone() {
            let escape_pressed = escape && topmost == Some(kind);
            let event = match kind {
                PickerKind::Time => self
                    .time_dialog
                    .as_mut()
                    .and_then(|dialog| show_time_dialog(ctx, dialog, escape_pressed))
                    .map(ScreenEvent::TimeDialog),
                PickerKind::Date => self
                    .date_dialog
                    .as_mut()
                    .and_then(|dialog| show_date_dialog(ctx, dialog, escape_pressed))
                    .map(ScreenEvent::DateDialog),
            };
            events.extend(event);
        }

        events
    }
}

impl PickerHost for EguiPickerHost {
    fn is_available(&self) -> bool {
        self.attached
    }

    fn show_time_picker(&mut self, request: TimePickerRequest) -> Result<(), HostError> {
        if self.time_dialog.is_some() {
            return Err(HostError::Rejected(format!("{} is already shown", request.tag)));
        }
        info!("🕒 Showing time picker at {:02}:{:02}", request.hour, request.minute);
        self.time_dialog = Some(TimeDialogState::new(request));
        self.open_order.push(PickerKind::Time);
        Ok(())
    }

    fn show_date_picker(&mut self, request: DatePickerRequest) -> Result<(), HostError> {
        if self.date_dialog.is_some() {
            return Err(HostError::Rejected(format!("{} is already shown", request.tag)));
        }
        info!("📅 Showing date picker at {} ms", request.selection_millis);
        self.date_dialog = Some(DateDialogState::new(request));
        self.open_order.push(PickerKind::Date);
        Ok(())
    }

    fn hide(&mut self, kind: PickerKind) {
        match kind {
            PickerKind::Time => self.time_dialog = None,
            PickerKind::Date => self.date_dialog = None,
        }
        self.open_order.retain(|open| *open != kind);
    }
}

/// Kind a dialog outcome event belongs to, if it is one
pub fn closed_kind(event: &ScreenEvent) -> Option<PickerKind> {
    match event {
        ScreenEvent::TimeDialog(_) => Some(PickerKind::Time),
        ScreenEvent::DateDialog(_) => Some(PickerKind::Date),
        _ => None,
    }
}
