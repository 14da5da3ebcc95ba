//! # Time Dialog
//!
//! Modal hour/minute chooser. In 12-hour mode the hour input runs 1-12 and an
//! AM/PM toggle sits beside it; the payload is always a 24-hour [`TimeChoice`].

use eframe::egui;
use picker_shared::{DialogOutcome, TimeChoice};

use super::shared::show_modal;
use crate::ui::components::theme::colors;
use crate::ui::state::TimeDialogState;

/// Render the time dialog for one frame.
///
/// `escape_pressed` is set when Escape is routed to this dialog.
pub fn show_time_dialog(
    ctx: &egui::Context,
    state: &mut TimeDialogState,
    escape_pressed: bool,
) -> Option<DialogOutcome<TimeChoice>> {
    let id = egui::Id::new(state.request.tag);
    let title = state.request.title.clone();
    let is_12h = state.is_12h();

    let hour = &mut state.hour;
    let minute = &mut state.minute;
    let pm = &mut state.pm;

    let outcome = show_modal(
        ctx,
        id,
        &title,
        escape_pressed,
        |ui| {
            ui.horizontal(|ui| {
                let hours = if is_12h { 1..=12 } else { 0..=23 };
                dial_input(ui, hour, hours);
                ui.label(
                    egui::RichText::new(":")
                        .size(40.0)
                        .color(colors::TEXT_PRIMARY),
                );
                dial_input(ui, minute, 0..=59);

                if is_12h {
                    ui.add_space(8.0);
                    ui.vertical(|ui| {
                        ui.selectable_value(pm, false, "AM");
                        ui.selectable_value(pm, true, "PM");
                    });
                }
            });
        },
    );

    outcome.map(|outcome| outcome.map(|()| state.choice()))
}

/// Large two-digit drag/typing input
fn dial_input(ui: &mut egui::Ui, value: &mut u32, range: std::ops::RangeInclusive<u32>) {
    ui.add(
        egui::DragValue::new(value)
            .clamp_range(range)
            .speed(0.1)
            .custom_formatter(|n, _| format!("{:02}", n as u32)),
    )
    .on_hover_text("Drag or type a value");
}
