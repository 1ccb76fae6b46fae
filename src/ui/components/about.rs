//! About panel

use crate::ui::theme::Theme;
use egui::{Align2, RichText};

pub const ABOUT_TITLE: &str = "About TinyQR";

const ISSUE_URL: &str = "https://github.com/Karimiprogramer/TinyQR/issues";
const SUPPORT_URL: &str = "https://github.com/Karimiprogramer/TinyQR";

pub struct AboutPanel<'a> {
    open: &'a mut bool,
    theme: &'a Theme,
}

impl<'a> AboutPanel<'a> {
    pub fn new(open: &'a mut bool, theme: &'a Theme) -> Self {
        Self { open, theme }
    }

    pub fn show(self, ctx: &egui::Context) {
        let theme = self.theme;
        egui::Window::new(ABOUT_TITLE)
            .open(self.open)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("TinyQR")
                            .size(22.0)
                            .strong()
                            .color(theme.text_primary),
                    );
                    ui.label(
                        RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                            .color(theme.text_muted),
                    );
                    ui.add_space(theme.spacing_sm);
                    ui.label(RichText::new(env!("CARGO_PKG_DESCRIPTION")).color(theme.text_secondary));
                    ui.add_space(theme.spacing_sm);
                    ui.hyperlink_to("Website", SUPPORT_URL);
                    ui.hyperlink_to("Report an issue", ISSUE_URL);
                    ui.add_space(theme.spacing_sm);
                    ui.label(
                        RichText::new(format!("License: {}", env!("CARGO_PKG_LICENSE")))
                            .small()
                            .color(theme.text_muted),
                    );
                });
            });
    }
}
