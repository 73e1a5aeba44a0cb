use eframe::egui;
use log::{error, info, warn};

mod config;
mod ui;

use config::WalletUiConfig;
use ui::WalletApp;

fn main() -> Result<(), eframe::Error> {
    // RUST_LOG overrides the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting Wallet egui application");

    let config_path = WalletUiConfig::default_path();
    let config = match &config_path {
        Some(path) => WalletUiConfig::load(path).unwrap_or_else(|e| {
            error!("Failed to load config, using defaults: {:#}", e);
            WalletUiConfig::default()
        }),
        None => {
            warn!("No platform config directory; settings will not be saved");
            WalletUiConfig::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([360.0, 560.0])
            .with_title("Wallet")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Wallet",
        options,
        Box::new(move |cc| {
            let app = WalletApp::new(cc, config, config_path);
            info!("Successfully initialized Wallet app");
            Ok(Box::new(app))
        }),
    )
}
