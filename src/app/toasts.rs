//! Toast notification (bottom-right, 3s visible then fade, pause on hover)

use super::App;
use crate::theme;
use crate::types::ToastKind;
use eframe::egui;

const VISIBLE_SECS: f32 = 3.0;
const FADE_SECS: f32 = 0.5;

/// Opacity for a toast shown `elapsed` seconds ago
pub(crate) fn toast_alpha(elapsed: f32) -> f32 {
    if elapsed <= VISIBLE_SECS {
        1.0
    } else {
        ((VISIBLE_SECS + FADE_SECS - elapsed) / FADE_SECS).clamp(0.0, 1.0)
    }
}

impl App {
    pub fn render_toast(&mut self, ctx: &egui::Context) {
        let Some(toast) = self.toast.clone() else {
            return;
        };

        let margin = 16.0;
        let screen = ctx.screen_rect();
        let pos = egui::pos2(screen.right() - margin, screen.bottom() - margin);
        let elapsed = toast.start.elapsed().as_secs_f32();
        let alpha = toast_alpha(elapsed);

        let (accent, icon) = match toast.kind {
            ToastKind::Success => (theme::STATUS_SUCCESS, egui_phosphor::regular::CHECK_CIRCLE),
            ToastKind::Error => (theme::STATUS_ERROR, egui_phosphor::regular::WARNING_CIRCLE),
        };

        let response = egui::Area::new(egui::Id::new("toast"))
            .fixed_pos(pos)
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .order(egui::Order::Tooltip)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(theme::fade(theme::BG_ELEVATED, alpha))
                    .stroke(egui::Stroke::new(1.0, theme::fade(accent, alpha * 0.6)))
                    .corner_radius(theme::RADIUS_MEDIUM)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.set_max_width(360.0);
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(icon).size(18.0).color(theme::fade(accent, alpha)));
                            ui.vertical(|ui| {
                                ui.label(
                                    egui::RichText::new(&toast.title)
                                        .strong()
                                        .color(theme::fade(theme::TEXT_PRIMARY, alpha)),
                                );
                                ui.label(
                                    egui::RichText::new(&toast.description)
                                        .size(theme::FONT_LABEL)
                                        .color(theme::fade(theme::TEXT_MUTED, alpha)),
                                );
                            });
                        });
                    });
            });

        if response.response.hovered() {
            if let Some(t) = self.toast.as_mut() {
                t.start = std::time::Instant::now();
            }
            ctx.request_repaint();
        } else if elapsed >= VISIBLE_SECS + FADE_SECS {
            self.toast = None;
        } else {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_fades_after_visible_period() {
        assert_eq!(toast_alpha(0.0), 1.0);
        assert_eq!(toast_alpha(VISIBLE_SECS), 1.0);
        assert!((toast_alpha(VISIBLE_SECS + FADE_SECS / 2.0) - 0.5).abs() < 1e-4);
        assert_eq!(toast_alpha(VISIBLE_SECS + FADE_SECS + 1.0), 0.0);
    }
}
