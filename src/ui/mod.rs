//! UI components and application module
//!
//! This module provides the egui/eframe-based user interface for TinyQR.

mod app;
pub mod components;
mod theme;

pub use app::TinyQrApp;
pub use components::{ABOUT_TITLE, INPUT_PROMPT};
pub use theme::Theme;

use crate::config::AppConfig;
use tracing::info;

/// Open the TinyQR window and block until it is closed
pub fn run(config: AppConfig) -> eframe::Result<()> {
    let title = config.window.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window.inner_size)
            .with_min_inner_size(config.window.min_inner_size)
            .with_title(title.as_str()),
        ..Default::default()
    };

    info!("[UI] Opening window \"{}\"", title);
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Ok(Box::new(TinyQrApp::new(cc, config)))),
    )
}
