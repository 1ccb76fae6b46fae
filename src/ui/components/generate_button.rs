//! Generate button component
//!
//! The trigger control. Disabled with a "Generating..." label while a
//! generation is in flight.

use crate::processor::GenerateHandler;
use crate::ui::theme::Theme;
use egui::{Color32, RichText, Vec2};

pub struct GenerateButton<'a> {
    handler: &'a GenerateHandler,
    theme: &'a Theme,
}

impl<'a> GenerateButton<'a> {
    pub fn new(handler: &'a GenerateHandler, theme: &'a Theme) -> Self {
        Self { handler, theme }
    }

    /// Show the button and return its response
    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let enabled = self.handler.is_enabled();
        let label = self.handler.button_label();

        let fill = if enabled {
            self.theme.primary
        } else {
            self.theme.primary.gamma_multiply(0.5)
        };

        let button = egui::Button::new(RichText::new(label).size(15.0).strong().color(Color32::WHITE))
            .min_size(Vec2::new(180.0, 40.0))
            .rounding(self.theme.pill_rounding)
            .fill(fill);

        let response = ui.add_enabled(enabled, button);
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, enabled, label)
        });

        if enabled {
            response.on_hover_text("Encode the text above (Enter)")
        } else {
            response
        }
    }
}
