//! # Date Dialog
//!
//! Modal calendar chooser built on the egui_extras date picker. Confirms with
//! the UTC midnight epoch millis of the chosen day.

use eframe::egui;
use picker_shared::DialogOutcome;

use super::shared::show_modal;
use crate::ui::components::theme::colors;
use crate::ui::state::DateDialogState;

pub fn show_date_dialog(
    ctx: &egui::Context,
    state: &mut DateDialogState,
    escape_pressed: bool,
) -> Option<DialogOutcome<Option<i64>>> {
    let id = egui::Id::new(state.request.tag);
    let title = state.request.title.clone();
    let tag = state.request.tag;

    let date = &mut state.date;

    let outcome = show_modal(
        ctx,
        id,
        &title,
        escape_pressed,
        |ui| {
            ui.label(
                egui::RichText::new(date.format("%a, %b %-d").to_string())
                    .size(28.0)
                    .color(colors::TEXT_HEADING),
            );
            ui.add_space(8.0);
            ui.add(egui_extras::DatePickerButton::new(date).id_source(tag));
        },
    );

    outcome.map(|outcome| outcome.map(|()| state.selection_millis()))
}
