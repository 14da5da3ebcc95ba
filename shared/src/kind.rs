//! Dialog kinds and their per-kind state machine.

use std::fmt;

/// The two kinds of chooser the screen can present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerKind {
    Time,
    Date,
}

/// Per-kind dialog state. Every terminal user action lands in `Hidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogPhase {
    #[default]
    Hidden,
    Shown,
}

impl PickerKind {
    pub const ALL: [PickerKind; 2] = [PickerKind::Time, PickerKind::Date];

    /// Identity of the dialog instance on the host side
    pub fn tag(self) -> &'static str {
        match self {
            PickerKind::Time => "time_picker_frag",
            PickerKind::Date => "date_picker_frag",
        }
    }

    pub fn default_title(self) -> &'static str {
        match self {
            PickerKind::Time => "Select time",
            PickerKind::Date => "Select date",
        }
    }
}

impl fmt::Display for PickerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickerKind::Time => write!(f, "time"),
            PickerKind::Date => write!(f, "date"),
        }
    }
}

impl DialogPhase {
    pub fn from_flag(visible: bool) -> Self {
        if visible {
            DialogPhase::Shown
        } else {
            DialogPhase::Hidden
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_distinct() {
        assert_eq!(PickerKind::Time.tag(), "time_picker_frag");
        assert_eq!(PickerKind::Date.tag(), "date_picker_frag");
    }

    #[test]
    fn test_phase_follows_flag() {
        assert_eq!(DialogPhase::from_flag(true), DialogPhase::Shown);
        assert_eq!(DialogPhase::from_flag(false), DialogPhase::Hidden);
        assert_eq!(DialogPhase::default(), DialogPhase::Hidden);
    }
}
