//! QR code display surface
//!
//! Shows the latest generated bitmap inside a card, or a placeholder when
//! nothing has been generated yet.

use crate::state::DisplaySurface;
use crate::ui::theme::Theme;
use egui::load::SizedTexture;
use egui::{RichText, TextureHandle, TextureOptions, Vec2};
use tracing::debug;

/// GPU texture for the displayed image, re-uploaded only when the surface
/// revision changes
#[derive(Default)]
pub struct QrTexture {
    revision: u64,
    handle: Option<TextureHandle>,
}

impl QrTexture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure the texture matches the surface and return it
    pub fn sync(&mut self, ctx: &egui::Context, display: &DisplaySurface) -> Option<&TextureHandle> {
        if self.revision != display.revision() {
            self.handle = display
                .image()
                .map(|image| ctx.load_texture("qr-code", image.clone(), TextureOptions::LINEAR));
            self.revision = display.revision();
            debug!("[UI] Uploaded QR texture revision {}", self.revision);
        }
        self.handle.as_ref()
    }
}

pub struct QrDisplay<'a> {
    texture: Option<&'a TextureHandle>,
    theme: &'a Theme,
    size: f32,
}

impl<'a> QrDisplay<'a> {
    pub fn new(texture: Option<&'a TextureHandle>, theme: &'a Theme, size: f32) -> Self {
        Self {
            texture,
            theme,
            size,
        }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(self.theme.bg_secondary)
            .rounding(self.theme.card_rounding)
            .stroke(egui::Stroke::new(1.0, self.theme.bg_tertiary))
            .inner_margin(12.0)
            .show(ui, |ui| {
                let size = Vec2::splat(self.size);
                match self.texture {
                    Some(texture) => {
                        let response = ui.add(egui::Image::from_texture(SizedTexture::new(
                            texture.id(),
                            size,
                        )));
                        response.widget_info(|| {
                            egui::WidgetInfo::labeled(egui::WidgetType::Other, true, "QR code image")
                        });
                    }
                    None => {
                        ui.add_sized(
                            size,
                            egui::Label::new(
                                RichText::new("Your QR code will appear here")
                                    .color(self.theme.text_muted),
                            ),
                        );
                    }
                }
            });
    }
}
