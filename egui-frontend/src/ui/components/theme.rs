//! # Theme Configuration
//!
//! Centralized color configuration for the picker demo. All visual styling
//! should use these constants so the checkbox rows and both dialogs match.
//!
//! ## Usage
//! ```rust
//! use picker_egui::ui::components::theme::colors;
//!
//! assert_ne!(colors::SURFACE, colors::SCRIM);
//! ```

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Buttons, checkboxes and the dial inputs
    pub interactive: InteractiveColors,
    /// Backgrounds, dialog surfaces and the scrim behind open dialogs
    pub layout: LayoutColors,
    /// Text and typography colors
    pub typography: TypographyColors,
}

#[derive(Debug, Clone)]
pub struct InteractiveColors {
    /// Filled "OK" button
    pub primary: Color32,
    /// Text on top of `primary`
    pub on_primary: Color32,
    pub outline: Color32,
}

#[derive(Debug, Clone)]
pub struct LayoutColors {
    pub background: Color32,
    pub surface: Color32,
    /// Dimmed overlay drawn behind a modal dialog
    pub scrim: Color32,
}

#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub primary: Color32,
    pub secondary: Color32,
    pub heading: Color32,
}

/// The current active theme - light Material palette
pub const CURRENT_THEME: Theme = Theme {
    interactive: InteractiveColors {
        primary: Color32::from_rgb(103, 80, 164),
        on_primary: Color32::WHITE,
        outline: Color32::from_rgb(121, 116, 126),
    },
    layout: LayoutColors {
        background: Color32::from_rgb(255, 251, 254),
        surface: Color32::from_rgb(236, 230, 240),
        scrim: Color32::from_rgba_premultiplied(0, 0, 0, 110),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(28, 27, 31),
        secondary: Color32::from_rgb(73, 69, 79),
        heading: Color32::from_rgb(28, 27, 31),
    },
};

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const PRIMARY: Color32 = CURRENT_THEME.interactive.primary;
    pub const ON_PRIMARY: Color32 = CURRENT_THEME.interactive.on_primary;
    pub const OUTLINE: Color32 = CURRENT_THEME.interactive.outline;

    pub const BACKGROUND: Color32 = CURRENT_THEME.layout.background;
    pub const SURFACE: Color32 = CURRENT_THEME.layout.surface;
    pub const SCRIM: Color32 = CURRENT_THEME.layout.scrim;

    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_SECONDARY: Color32 = CURRENT_THEME.typography.secondary;
    pub const TEXT_HEADING: Color32 = CURRENT_THEME.typography.heading;
}
