//! # UI Components Module
//!
//! ## Module Organization:
//! - `picker_rows` - Checkbox rows and the selected value labels
//! - `modals` - The time and date chooser dialogs
//! - `styling` - Global style and shared dialog drawing helpers
//! - `theme` - Color constants

pub mod modals;
pub mod picker_rows;
pub mod styling;
pub mod theme;

pub use picker_rows::render_picker_rows;
pub use styling::setup_material_style;
pub use theme::*;
