//! # Visibility Controller
//!
//! Two independent flags driven by the checkboxes. A dialog is presented if
//! and only if its flag is true.

use crate::kind::{DialogPhase, PickerKind};

/// Visibility flags for both dialog kinds, both `false` at mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityState {
    pub time_visible: bool,
    pub date_visible: bool,
}

impl VisibilityState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_time_visible(self, visible: bool) -> Self {
        Self {
            time_visible: visible,
            ..self
        }
    }

    pub fn set_date_visible(self, visible: bool) -> Self {
        Self {
            date_visible: visible,
            ..self
        }
    }

    pub fn set_visible(self, kind: PickerKind, visible: bool) -> Self {
        match kind {
            PickerKind::Time => self.set_time_visible(visible),
            PickerKind::Date => self.set_date_visible(visible),
        }
    }

    pub fn is_visible(&self, kind: PickerKind) -> bool {
        match kind {
            PickerKind::Time => self.time_visible,
            PickerKind::Date => self.date_visible,
        }
    }

    pub fn phase(&self, kind: PickerKind) -> DialogPhase {
        DialogPhase::from_flag(self.is_visible(kind))
    }
}
