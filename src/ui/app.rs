//! Main TinyQR application struct and eframe integration
//!
//! This module contains the TinyQrApp that implements eframe::App.

use crate::config::AppConfig;
use crate::processor::GenerateHandler;
use crate::qr::{QrPipeline, QrRenderer};
use crate::state::AppState;
use crate::ui::components::{
    AboutPanel, GenerateButton, InputField, QrDisplay, QrTexture, ToastOverlay,
};
use crate::ui::theme::Theme;
use egui::{CentralPanel, RichText, TopBottomPanel};
use std::sync::Arc;
use tracing::{debug, info};

/// Main TinyQR application
pub struct TinyQrApp {
    /// Whether the app has been initialized
    initialized: bool,
    /// Startup configuration
    config: AppConfig,
    /// UI state
    state: AppState,
    /// Generate action
    generate: GenerateHandler,
    /// Uploaded texture of the displayed QR code
    texture: QrTexture,
    /// UI theme
    theme: Theme,
}

impl TinyQrApp {
    /// Create the application with the production QR pipeline
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let theme = Theme::for_context(&cc.egui_ctx);
        theme.apply(&cc.egui_ctx);

        let renderer = Arc::new(QrPipeline::from_config(&config.qr));
        Self::with_renderer(config, renderer).with_theme(theme)
    }

    /// Create the application with a custom renderer
    pub fn with_renderer(config: AppConfig, renderer: Arc<dyn QrRenderer>) -> Self {
        Self {
            initialized: false,
            state: AppState::new(config.notice_timeout),
            generate: GenerateHandler::new(renderer),
            texture: QrTexture::new(),
            theme: Theme::default(),
            config,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn generate(&self) -> &GenerateHandler {
        &self.generate
    }

    /// Initialize the application (called on first frame)
    fn initialize(&mut self, ctx: &egui::Context) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        self.generate.set_repaint_context(ctx.clone());
        info!("[UI] TinyQR UI initialized");
    }

    /// Run the generate handler for the current input
    fn trigger_generate(&mut self) {
        let outcome = self
            .generate
            .trigger(&self.state.input_text, &mut self.state.notices);
        debug!("[UI] Generate triggered: {:?}", outcome);
    }

    /// Show the header bar
    fn show_header(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing_sm),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                    }

                    ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(self.config.window.title.as_str())
                                .strong()
                                .color(self.theme.text_primary),
                        );
                        ui.label(
                            RichText::new("QR Code Generator")
                                .small()
                                .color(self.theme.text_muted),
                        );
                    });
                });
            });
    }

    /// Show the main content: QR display, input and generate button
    fn show_content(&mut self, ctx: &egui::Context) {
        let texture = self.texture.sync(ctx, &self.state.display);
        let display_size = self.config.qr.display_size as f32;

        let mut triggered = false;
        CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.content_margin),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    QrDisplay::new(texture, &self.theme, display_size).show(ui);

                    ui.add_space(self.theme.spacing_lg);

                    if InputField::new(&mut self.state.input_text, &self.theme).show(ui) {
                        triggered = true;
                    }

                    ui.add_space(self.theme.spacing);

                    if GenerateButton::new(&self.generate, &self.theme)
                        .show(ui)
                        .clicked()
                    {
                        triggered = true;
                    }
                });
            });

        if triggered {
            self.trigger_generate();
        }
    }

    /// Render one frame
    pub fn show(&mut self, ctx: &egui::Context) {
        self.initialize(ctx);

        if let Some(done) = self
            .generate
            .poll(&mut self.state.display, &mut self.state.notices)
        {
            debug!(
                "[UI] Generation finished (succeeded: {}, {:?})",
                done.succeeded, done.elapsed
            );
        }

        self.show_header(ctx);
        self.show_content(ctx);

        ToastOverlay::new(&mut self.state.notices, &self.theme).show(ctx);
        AboutPanel::new(&mut self.state.show_about, &self.theme).show(ctx);
    }
}

impl eframe::App for TinyQrApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if self.generate.is_generating() {
            info!("[UI] Exiting with a generation still in flight");
        }
        info!("[UI] TinyQR shutting down");
    }
}
