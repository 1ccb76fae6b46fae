//! Theme and styling for the TinyQR window

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Vec2, Visuals};

/// Application theme configuration
#[derive(Clone, Debug)]
pub struct Theme {
    /// Accent color for the generate button
    pub primary: Color32,
    /// Success notice color
    pub success: Color32,
    /// Error notice color
    pub error: Color32,

    /// Background colors
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,

    /// Text colors
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    /// Rounding for the pill-shaped generate button
    pub pill_rounding: Rounding,
    /// Rounding for cards and notices
    pub card_rounding: Rounding,

    /// Standard spacing
    pub spacing: f32,
    /// Large spacing
    pub spacing_lg: f32,
    /// Small spacing
    pub spacing_sm: f32,
    /// Margin around the main content
    pub content_margin: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Pick a theme matching the context's current dark/light mode
    pub fn for_context(ctx: &egui::Context) -> Self {
        if ctx.style().visuals.dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Create a dark theme
    pub fn dark() -> Self {
        Self {
            primary: Color32::from_rgb(53, 132, 228),  // Blue
            success: Color32::from_rgb(38, 162, 105),  // Green
            error: Color32::from_rgb(224, 27, 36),     // Red

            bg_primary: Color32::from_rgb(36, 36, 36),
            bg_secondary: Color32::from_rgb(48, 48, 48),
            bg_tertiary: Color32::from_rgb(64, 64, 64),

            text_primary: Color32::from_rgb(255, 255, 255),
            text_secondary: Color32::from_rgb(222, 221, 218),
            text_muted: Color32::from_rgb(154, 153, 150),

            pill_rounding: Rounding::same(20.0),
            card_rounding: Rounding::same(12.0),

            spacing: 16.0,
            spacing_lg: 24.0,
            spacing_sm: 8.0,
            content_margin: 32.0,
        }
    }

    /// Create a light theme
    pub fn light() -> Self {
        Self {
            primary: Color32::from_rgb(53, 132, 228),  // Blue
            success: Color32::from_rgb(46, 194, 126),  // Green
            error: Color32::from_rgb(192, 28, 40),     // Red

            bg_primary: Color32::from_rgb(250, 250, 250),
            bg_secondary: Color32::from_rgb(255, 255, 255),
            bg_tertiary: Color32::from_rgb(235, 235, 235),

            text_primary: Color32::from_rgb(36, 36, 36),
            text_secondary: Color32::from_rgb(61, 56, 70),
            text_muted: Color32::from_rgb(119, 118, 123),

            pill_rounding: Rounding::same(20.0),
            card_rounding: Rounding::same(12.0),

            spacing: 16.0,
            spacing_lg: 24.0,
            spacing_sm: 8.0,
            content_margin: 32.0,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.bg_primary.r() < 128
    }

    /// Apply this theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark() {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.bg_primary;
        visuals.window_fill = self.bg_secondary;
        visuals.extreme_bg_color = self.bg_secondary;

        visuals.widgets.noninteractive.bg_fill = self.bg_secondary;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.inactive.bg_fill = self.bg_tertiary;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.selection.bg_fill = self.primary.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.primary);
        visuals.hyperlink_color = self.primary;

        visuals.window_rounding = self.card_rounding;
        visuals.window_stroke = Stroke::new(1.0, self.bg_tertiary);

        ctx.set_visuals(visuals);

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = Vec2::splat(self.spacing_sm);
        style.spacing.window_margin = egui::Margin::same(self.spacing);
        style.spacing.button_padding = Vec2::new(self.spacing, self.spacing_sm);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            FontId::new(20.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            FontId::new(14.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            FontId::new(14.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            FontId::new(12.0, FontFamily::Proportional),
        );

        ctx.set_style(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_and_light_detection() {
        assert!(Theme::dark().is_dark());
        assert!(!Theme::light().is_dark());
    }
}
