//! # App State Module
//!
//! This module defines the central application struct and the single entry
//! point through which screen state changes.
//!
//! ## Key Types:
//! - `PickerDemoApp` - Main application state struct
//!
//! ## Key Functions:
//! - `new()` - Mount the screen with both dialogs hidden and "now" selected
//! - `dispatch()` - Run one event through the reducer
//! - `sync_dialogs()` - Let the presenter bring the host in line with the flags
//!
//! ## State Management:
//! `screen` is replaced wholesale by `ScreenState::apply` on every event. The
//! presenter and host are the only pieces that keep their own state, and only
//! to know which dialog instances exist.

use log::info;
use picker_shared::{
    DialogPresenter, PickerConfig, PickerHost, ScreenEvent, ScreenState, SystemClock,
};

use crate::ui::host::{closed_kind, EguiPickerHost};

/// Main application struct for the picker demo
pub struct PickerDemoApp {
    pub screen: ScreenState,
    pub presenter: DialogPresenter,
    pub host: EguiPickerHost,
    pub config: PickerConfig,
}

impl PickerDemoApp {
    /// Create the app and apply the global style
    pub fn new(cc: &eframe::CreationContext<'_>, config: PickerConfig) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing PickerDemoApp");

        crate::ui::components::setup_material_style(&cc.egui_ctx);

        Ok(Self::with_screen(ScreenState::mount(&SystemClock), config))
    }

    pub fn with_screen(screen: ScreenState, config: PickerConfig) -> Self {
        Self {
            screen,
            presenter: DialogPresenter::new(config.clone()),
            host: EguiPickerHost::new(),
            config,
        }
    }

    /// Apply `event` to the screen. Dialog outcomes also retire the dialog
    /// instance on the host and in the presenter.
    pub fn dispatch(&mut self, event: ScreenEvent) {
        if let Some(kind) = closed_kind(&event) {
            self.host.hide(kind);
            self.presenter.closed(kind);
        }
        self.screen = self.screen.apply(event);
    }

    pub fn sync_dialogs(&mut self) {
        let follow_ups = self.presenter.sync(&self.screen, &mut self.host);
        for event in follow_ups {
            self.dispatch(event);
        }
    }
}
