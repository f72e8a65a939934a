//! Reusable UI components
//!
//! Form fields, progress step rows and the large submit button.

use crate::form::FormState;
use crate::progress::StepState;
use crate::theme;
use eframe::egui;
use std::path::PathBuf;

/// Small bold label above a form field
pub fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_LABEL)
                .strong()
                .color(theme::ACCENT),
        )
        .selectable(false),
    );
}

/// Single-line text input styled like the file pickers
pub fn text_input(ui: &mut egui::Ui, value: &mut String, hint: &str, enabled: bool) -> egui::Response {
    egui::Frame::new()
        .fill(theme::BG_INPUT)
        .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_DEFAULT))
        .corner_radius(theme::RADIUS_MEDIUM)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.add_enabled(
                enabled,
                egui::TextEdit::singleline(value)
                    .hint_text(hint)
                    .frame(false)
                    .desired_width(f32::INFINITY)
                    .font(egui::FontId::proportional(theme::FONT_BODY)),
            )
        })
        .inner
}

/// Path box plus browse button. Returns true when a new file was picked.
pub fn file_picker(
    ui: &mut egui::Ui,
    selected: &mut Option<PathBuf>,
    filter_name: &str,
    extensions: &[&str],
    enabled: bool,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        let browse_width = 110.0;
        let text_width = (ui.available_width() - browse_width - ui.spacing().item_spacing.x).max(80.0);

        let shown = selected
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "No file chosen".to_string());
        let color = if selected.is_some() { theme::TEXT_SECONDARY } else { theme::TEXT_DIM };

        egui::Frame::new()
            .fill(theme::BG_INPUT)
            .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_DEFAULT))
            .corner_radius(theme::RADIUS_MEDIUM)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.set_width(text_width - 22.0);
                ui.horizontal(|ui| {
                    ui.colored_label(theme::TEXT_DIM, egui_phosphor::regular::UPLOAD_SIMPLE);
                    ui.add(
                        egui::Label::new(egui::RichText::new(shown).color(color).size(theme::FONT_BODY))
                            .truncate(),
                    );
                });
            });

        let browse = ui.add_enabled(
            enabled,
            theme::button_accent(format!("{}  Browse", egui_phosphor::regular::FOLDER_OPEN))
                .min_size(egui::vec2(browse_width, 34.0)),
        );
        if browse.clicked() {
            let mut dialog = rfd::FileDialog::new().add_filter(filter_name, extensions);
            if let Some(dir) = selected.as_ref().and_then(|p| p.parent()) {
                dialog = dialog.set_directory(dir);
            }
            if let Some(path) = dialog.pick_file() {
                *selected = Some(path);
                changed = true;
            }
        }
    });

    if let Some(name) = FormState::selected_name(selected) {
        ui.horizontal(|ui| {
            ui.colored_label(theme::STATUS_SUCCESS, egui_phosphor::regular::CHECK_CIRCLE);
            ui.colored_label(theme::STATUS_SUCCESS, format!("Uploaded: {}", name));
        });
    }
    changed
}

/// One row of the progress list
pub fn step_row(ui: &mut egui::Ui, label: &str, icon: &str, state: StepState) {
    let (fill, stroke, circle, text_color, glyph) = match state {
        StepState::Active => (
            theme::fade(theme::ACCENT, 0.12),
            theme::fade(theme::ACCENT, 0.45),
            theme::ACCENT,
            theme::ACCENT,
            egui_phosphor::regular::CIRCLE_NOTCH,
        ),
        StepState::Completed => (
            theme::fade(theme::STATUS_SUCCESS, 0.08),
            theme::fade(theme::STATUS_SUCCESS, 0.35),
            theme::STATUS_SUCCESS,
            theme::STATUS_SUCCESS,
            egui_phosphor::regular::CHECK_CIRCLE,
        ),
        StepState::Pending => (
            theme::BG_INPUT,
            theme::BORDER_DEFAULT,
            theme::BTN_DEFAULT,
            theme::TEXT_DIM,
            icon,
        ),
    };

    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), theme::STEP_ROW_HEIGHT),
        egui::Sense::hover(),
    );
    let painter = ui.painter();
    painter.rect_filled(rect, theme::RADIUS_LARGE, fill);
    painter.rect_stroke(rect, theme::RADIUS_LARGE, egui::Stroke::new(1.5, stroke), egui::StrokeKind::Inside);

    let center = egui::pos2(rect.min.x + 26.0, rect.center().y);
    painter.circle_filled(center, 15.0, circle);

    // Spin the notch while active
    if state == StepState::Active {
        let t = ui.input(|i| i.time) as f32;
        let angle = t * std::f32::consts::TAU;
        let galley = painter.layout_no_wrap(
            glyph.to_string(),
            egui::FontId::proportional(16.0),
            theme::TEXT_PRIMARY,
        );
        let offset = galley.size() / 2.0;
        let rot = egui::emath::Rot2::from_angle(angle);
        let pos = center - rot * offset;
        painter.add(
            egui::epaint::TextShape::new(pos, galley, theme::TEXT_PRIMARY).with_angle(angle),
        );
        ui.ctx().request_repaint();
    } else {
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            glyph,
            egui::FontId::proportional(16.0),
            theme::TEXT_PRIMARY,
        );
    }

    painter.text(
        egui::pos2(rect.min.x + 54.0, rect.center().y),
        egui::Align2::LEFT_CENTER,
        label,
        egui::FontId::proportional(theme::FONT_BODY),
        text_color,
    );
}

/// Full-width primary action. Returns true if clicked while enabled.
pub fn primary_button(ui: &mut egui::Ui, icon: &str, label: &str, enabled: bool) -> bool {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), theme::BUTTON_HEIGHT_LARGE),
        if enabled { egui::Sense::click() } else { egui::Sense::hover() },
    );
    let (fill, draw_rect, text_color) = if enabled {
        let (fill, draw_rect) = theme::button_visual(&response, theme::BTN_ACCENT, rect);
        (fill, draw_rect, theme::TEXT_PRIMARY)
    } else {
        (theme::BTN_DISABLED, rect, theme::BTN_DISABLED_TEXT)
    };
    if enabled && response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    ui.painter().rect_filled(draw_rect, theme::RADIUS_LARGE, fill);
    ui.painter().text(
        draw_rect.center(),
        egui::Align2::CENTER_CENTER,
        format!("{}  {}", icon, label),
        egui::FontId::proportional(theme::FONT_HEADING + 2.0),
        text_color,
    );
    enabled && response.clicked()
}
