//! # State Module
//!
//! UI-side state that is not part of the screen's committed state.

pub mod modal_state;

pub use modal_state::*;
