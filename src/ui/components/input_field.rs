//! Text input component

use crate::ui::theme::Theme;
use egui::{Key, RichText};

/// Label above the text field
pub const INPUT_PROMPT: &str = "Enter URL or text to encode:";

/// Single-line text field with a heading label
pub struct InputField<'a> {
    value: &'a mut String,
    theme: &'a Theme,
}

impl<'a> InputField<'a> {
    pub fn new(value: &'a mut String, theme: &'a Theme) -> Self {
        Self { value, theme }
    }

    /// Show the field. Returns true when Enter was pressed in it.
    pub fn show(self, ui: &mut egui::Ui) -> bool {
        ui.vertical(|ui| {
            ui.label(
                RichText::new(INPUT_PROMPT)
                    .strong()
                    .color(self.theme.text_primary),
            );

            ui.add_space(self.theme.spacing_sm);

            let text_edit = egui::TextEdit::singleline(self.value)
                .hint_text("Text or URL")
                .desired_width(f32::INFINITY)
                .margin(egui::Margin::symmetric(12.0, 8.0))
                .id(egui::Id::new("qr_text_input"));

            let response = ui.add(text_edit);
            response.widget_info(|| {
                egui::WidgetInfo::labeled(egui::WidgetType::TextEdit, true, "Text input")
            });

            response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter))
        })
        .inner
    }
}
