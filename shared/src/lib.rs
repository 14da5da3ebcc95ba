//! # Picker Shared
//!
//! Toolkit-independent core of the material picker demo: the two visibility
//! flags, the committed date and date-time selection, and the presenter that
//! turns flags into dialog requests against an injected [`PickerHost`].
//!
//! All state transitions go through [`ScreenState::apply`], which consumes the
//! current state and returns the next one. The frontend only renders what the
//! returned state says.

pub mod config;
pub mod dialog;
pub mod epoch;
pub mod error;
pub mod kind;
pub mod presenter;
pub mod screen;
pub mod selection;
pub mod visibility;

pub use config::{ClockFormat, PickerConfig};
pub use dialog::{DatePickerRequest, DialogOutcome, TimeChoice, TimePickerRequest};
pub use epoch::{date_to_epoch_millis, epoch_millis_to_date};
pub use error::{ConfigError, HostError, PickerError};
pub use kind::{DialogPhase, PickerKind};
pub use presenter::{DialogPresenter, PickerHost};
pub use screen::{ScreenEvent, ScreenState};
pub use selection::{Clock, FixedClock, SelectionState, SystemClock};
pub use visibility::VisibilityState;
