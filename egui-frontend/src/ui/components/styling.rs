//! # Styling Module
//!
//! Global egui style setup and the shared drawing helpers for dialogs.
//!
//! ## Key Functions:
//! - `setup_material_style()` - Configure global egui styling
//! - `dialog_frame()` - Frame used by both chooser dialogs
//! - `styled_confirm_button()` / `styled_cancel_button()` - Dialog action buttons
//! - `styled_close_button()` - Dismiss control in the dialog title bar

use eframe::egui;

use super::theme::colors;

/// Setup the light Material-like styling for the entire application
pub fn setup_material_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals = egui::Visuals::light();
        style.visuals.panel_fill = colors::BACKGROUND;
        style.visuals.window_fill = colors::SURFACE;
        style.visuals.window_rounding = egui::Rounding::same(28.0);
        style.visuals.selection.bg_fill = colors::PRIMARY;
        style.visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.5, colors::PRIMARY);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(22.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );

        style.spacing.item_spacing = egui::vec2(12.0, 10.0);
        style.spacing.button_padding = egui::vec2(16.0, 8.0);
        style
    });
}

/// Frame for the chooser dialogs
pub fn dialog_frame(style: &egui::Style) -> egui::Frame {
    egui::Frame::window(style)
        .fill(colors::SURFACE)
        .stroke(egui::Stroke::new(1.0, colors::OUTLINE))
        .rounding(egui::Rounding::same(28.0))
        .inner_margin(egui::Margin::same(24.0))
}

/// Filled button for the positive action
pub fn styled_confirm_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string()).color(colors::ON_PRIMARY).strong())
        .fill(colors::PRIMARY)
        .rounding(egui::Rounding::same(20.0))
        .min_size(egui::vec2(72.0, 36.0))
}

/// Text-style button for the negative action
pub fn styled_cancel_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string()).color(colors::PRIMARY))
        .fill(egui::Color32::TRANSPARENT)
        .stroke(egui::Stroke::NONE)
        .rounding(egui::Rounding::same(20.0))
        .min_size(egui::vec2(72.0, 36.0))
}

/// Small borderless "✕" for the dialog title bar
pub fn styled_close_button() -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new("✕").color(colors::TEXT_SECONDARY))
        .fill(egui::Color32::TRANSPARENT)
        .stroke(egui::Stroke::NONE)
        .rounding(egui::Rounding::same(14.0))
        .min_size(egui::vec2(28.0, 28.0))
}
