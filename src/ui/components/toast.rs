//! Transient notice overlay
//!
//! Draws the visible notice near the bottom of the window and schedules a
//! repaint for when it expires.

use crate::state::{NoticeKind, Notices};
use crate::ui::theme::Theme;
use egui::{Align2, Color32, RichText, Vec2};
use std::time::Instant;

pub struct ToastOverlay<'a> {
    notices: &'a mut Notices,
    theme: &'a Theme,
}

impl<'a> ToastOverlay<'a> {
    pub fn new(notices: &'a mut Notices, theme: &'a Theme) -> Self {
        Self { notices, theme }
    }

    pub fn show(self, ctx: &egui::Context) {
        let Some((notice, remaining)) = self.notices.visible(Instant::now()) else {
            return;
        };

        let accent = match notice.kind {
            NoticeKind::Info => self.theme.text_muted,
            NoticeKind::Success => self.theme.success,
            NoticeKind::Error => self.theme.error,
        };
        let message = notice.message.clone();

        let mut dismissed = false;
        egui::Area::new(egui::Id::new("toast_overlay"))
            .anchor(Align2::CENTER_BOTTOM, Vec2::new(0.0, -self.theme.spacing_lg))
            .order(egui::Order::Foreground)
            .interactable(true)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(Color32::from_rgb(48, 48, 48))
                    .rounding(self.theme.card_rounding)
                    .stroke(egui::Stroke::new(1.0, accent))
                    .inner_margin(egui::Margin::symmetric(self.theme.spacing, 10.0))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&message).color(Color32::WHITE));
                            if ui.small_button("x").on_hover_text("Dismiss").clicked() {
                                dismissed = true;
                            }
                        });
                    });
            });

        if dismissed {
            self.notices.dismiss();
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(remaining);
        }
    }
}
