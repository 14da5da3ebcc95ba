use thiserror::Error;

/// Errors raised while turning dialog payloads into selection values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    #[error("invalid time of day {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },

    #[error("epoch value {0} ms is outside the supported date range")]
    EpochOutOfRange(i64),
}

/// Failures reported by a [`crate::PickerHost`] when asked to present a dialog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("host screen context is not available")]
    Unavailable,

    #[error("host rejected dialog: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
