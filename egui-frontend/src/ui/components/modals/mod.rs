//! # Modals Module
//!
//! The two chooser dialogs the host presents.
//!
//! ## Module Organization:
//! - `time_dialog` - Hour/minute chooser
//! - `date_dialog` - Calendar day chooser
//! - `shared` - Scrim, surface and action row used by both

pub mod date_dialog;
pub mod shared;
pub mod time_dialog;

pub use date_dialog::show_date_dialog;
pub use time_dialog::show_time_dialog;
