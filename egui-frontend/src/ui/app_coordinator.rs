//! # App Coordinator Module
//!
//! The eframe update loop.
//!
//! ## Application Flow:
//! 1. Attach the host to the live context
//! 2. Render the checkbox rows and dispatch their events
//! 3. Sync dialogs with the flags (presents or hides as needed)
//! 4. Render open dialogs and dispatch their outcomes
//! 5. Sync again so closed dialogs are gone before the next frame

use eframe::egui;

use crate::ui::app_state::PickerDemoApp;
use crate::ui::components::render_picker_rows;

impl eframe::App for PickerDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.host.attach();

        let row_events = egui::CentralPanel::default()
            .show(ctx, |ui| {
                ui.add_space(16.0);
                render_picker_rows(ui, &self.screen)
            })
            .inner;

        for event in row_events {
            self.dispatch(event);
        }
        self.sync_dialogs();

        let outcomes = self.host.render(ctx);
        if !outcomes.is_empty() {
            for event in outcomes {
                self.dispatch(event);
            }
            self.sync_dialogs();
            ctx.request_repaint();
        }
    }
}
