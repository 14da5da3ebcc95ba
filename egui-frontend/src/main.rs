use eframe::egui;
use log::{error, info};

use picker_egui::ui::PickerDemoApp;
use picker_shared::PickerConfig;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting material picker demo");

    let config = PickerConfig::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([360.0, 280.0])
            .with_title("Material Time Picker")
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Material Time Picker",
        options,
        Box::new(move |cc| match PickerDemoApp::new(cc, config) {
            Ok(app) => {
                info!("Picker demo initialized");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
