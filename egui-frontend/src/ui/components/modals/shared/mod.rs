//! # Shared Modal Utilities
//!
//! Scaffolding both chooser dialogs share: the dimmed scrim, the centered
//! surface with its title bar, and the action row.
//!
//! ## Outcome rules:
//! - OK confirms, Cancel is the negative action
//! - The close button, Escape and a click on the scrim outside the surface
//!   dismiss the dialog. Escape goes to the topmost dialog only, so the
//!   caller decides and routes it in.

use eframe::egui;
use picker_shared::DialogOutcome;

use crate::ui::components::styling::{
    dialog_frame, styled_cancel_button, styled_close_button, styled_confirm_button,
};
use crate::ui::components::theme::colors;

const DIALOG_WIDTH: f32 = 320.0;

/// What the user did to a dialog this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    Confirm,
    Negative,
    Close,
    Escape,
    ClickedOutside,
}

impl ModalAction {
    pub fn outcome(self) -> DialogOutcome<()> {
        match self {
            ModalAction::Confirm => DialogOutcome::Confirmed(()),
            ModalAction::Negative => DialogOutcome::Negative,
            ModalAction::Close | ModalAction::Escape | ModalAction::ClickedOutside => {
                DialogOutcome::Dismissed
            }
        }
    }
}

/// Show a modal surface titled `title` above a scrim, with `add_contents`
/// between the title bar and the OK/Cancel row.
///
/// Returns the terminal outcome if the user ended the dialog this frame. The
/// caller attaches its payload to `Confirmed`.
pub fn show_modal(
    ctx: &egui::Context,
    id: egui::Id,
    title: &str,
    escape_pressed: bool,
    add_contents: impl FnOnce(&mut egui::Ui),
) -> Option<DialogOutcome<()>> {
    let screen_rect = ctx.screen_rect();

    let action = egui::Area::new(id)
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.painter()
                .rect_filled(screen_rect, egui::Rounding::ZERO, colors::SCRIM);
            let scrim = ui.interact(screen_rect, id.with("scrim"), egui::Sense::click());

            let frame = dialog_frame(ui.style()).show(ui, |ui| {
                ui.set_width(DIALOG_WIDTH);

                let closed = title_bar(ui, title);
                ui.add_space(12.0);

                add_contents(ui);

                ui.add_space(16.0);
                let pressed = action_row(ui);

                if closed {
                    Some(ModalAction::Close)
                } else {
                    pressed
                }
            });

            let clicked_outside = scrim.clicked()
                && scrim
                    .interact_pointer_pos()
                    .map_or(true, |pos| !frame.response.rect.contains(pos));

            frame
                .inner
                .or(escape_pressed.then_some(ModalAction::Escape))
                .or(clicked_outside.then_some(ModalAction::ClickedOutside))
        })
        .inner;

    action.map(ModalAction::outcome)
}

/// Title on the left, close button on the right. True when close was clicked.
fn title_bar(ui: &mut egui::Ui, title: &str) -> bool {
    let mut closed = false;

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(title)
                .color(colors::TEXT_SECONDARY)
                .size(14.0),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add(styled_close_button())
                .on_hover_text("Close")
                .clicked()
            {
                closed = true;
            }
        });
    });

    closed
}

fn action_row(ui: &mut egui::Ui) -> Option<ModalAction> {
    let mut pressed = None;

    ui.horizontal(|ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add(styled_confirm_button("OK")).clicked() {
                pressed = Some(ModalAction::Confirm);
            }
            if ui.add(styled_cancel_button("Cancel")).clicked() {
                pressed = Some(ModalAction::Negative);
            }
        });
    });

    pressed
}
