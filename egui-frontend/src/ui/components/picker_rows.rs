//! # Picker Rows
//!
//! The screen body: for each kind, a caption, a checkbox that drives the
//! visibility flag, and the formatted committed value.

use eframe::egui;
use picker_shared::{PickerKind, ScreenEvent, ScreenState};

use crate::ui::components::theme::colors;

/// Render both rows. Returns the checkbox events raised this frame.
pub fn render_picker_rows(ui: &mut egui::Ui, screen: &ScreenState) -> Vec<ScreenEvent> {
    let mut events = Vec::new();

    ui.vertical(|ui| {
        for kind in PickerKind::ALL {
            if let Some(event) = picker_row(ui, screen, kind) {
                events.push(event);
            }
            ui.add_space(16.0);
        }
    });

    events
}

fn picker_row(ui: &mut egui::Ui, screen: &ScreenState, kind: PickerKind) -> Option<ScreenEvent> {
    let (caption, value_text) = match kind {
        PickerKind::Time => ("Show Time Picker", format!("Selected Time: {}", screen.time_text())),
        PickerKind::Date => ("Show Date Picker", format!("Selected Date: {}", screen.date_text())),
    };

    ui.label(
        egui::RichText::new(caption)
            .color(colors::TEXT_SECONDARY)
            .size(14.0),
    );

    let mut checked = screen.visibility.is_visible(kind);
    let mut event = None;

    ui.horizontal(|ui| {
        if ui.checkbox(&mut checked, "").changed() {
            event = Some(match kind {
                PickerKind::Time => ScreenEvent::TimeCheckboxChanged(checked),
                PickerKind::Date => ScreenEvent::DateCheckboxChanged(checked),
            });
        }
        ui.label(egui::RichText::new(value_text).color(colors::TEXT_PRIMARY));
    });

    event
}
