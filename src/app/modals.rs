//! Settings modal

use super::App;
use crate::constants::{MAX_STEP_DURATION_MS, REQUEST_TIMEOUT_RANGE_SECS};
use crate::settings::Settings;
use crate::theme;
use crate::ui::components::{field_label, text_input};
use eframe::egui;
use std::path::PathBuf;
use tracing::info;

impl App {
    pub fn open_settings(&mut self) {
        self.settings_draft = self.settings.clone();
        self.show_settings = true;
    }

    pub fn render_settings_modal(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }

        let mut apply = false;
        let mut cancel = false;
        let draft = &mut self.settings_draft;

        let modal = egui::Modal::new(egui::Id::new("settings_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());
        let modal_response = modal.show(ctx, |ui| {
            ui.set_width(440.0);
            ui.horizontal(|ui| {
                ui.colored_label(theme::ACCENT, egui_phosphor::regular::GEAR);
                ui.label(egui::RichText::new("Settings").size(theme::FONT_TITLE).strong());
            });
            ui.add_space(theme::SPACING_MD);

            field_label(ui, "Conversion service URL");
            text_input(ui, &mut draft.backend_url, "http://localhost:8080", true);
            ui.add_space(theme::SPACING_SM);

            field_label(ui, "Request timeout (seconds)");
            ui.add(egui::DragValue::new(&mut draft.request_timeout_secs).range(REQUEST_TIMEOUT_RANGE_SECS));
            ui.add_space(theme::SPACING_SM);

            field_label(ui, "Progress step duration (ms)");
            ui.add(egui::DragValue::new(&mut draft.step_duration_ms).range(0..=MAX_STEP_DURATION_MS).speed(50));
            ui.add_space(theme::SPACING_SM);

            field_label(ui, "Demo conversion success rate");
            ui.add(egui::Slider::new(&mut draft.mock_success_rate, 0.0..=1.0).fixed_decimals(2));
            ui.add_space(theme::SPACING_SM);

            field_label(ui, "Output folder");
            ui.horizontal(|ui| {
                let mut path_str = draft
                    .output_path
                    .clone()
                    .unwrap_or_else(|| draft.output_path_or_default().to_string_lossy().to_string());
                let width = ui.available_width() - 40.0;
                ui.allocate_ui(egui::vec2(width, 36.0), |ui| {
                    if text_input(ui, &mut path_str, "", true).changed() {
                        draft.output_path = Some(path_str.clone());
                    }
                });
                let browse = ui.add(theme::button(egui_phosphor::regular::FOLDER_OPEN).min_size(egui::vec2(32.0, 32.0)));
                if browse.clicked() {
                    let start = PathBuf::from(&path_str);
                    let mut dialog = rfd::FileDialog::new();
                    if start.is_dir() {
                        dialog = dialog.set_directory(&start);
                    }
                    if let Some(dir) = dialog.pick_folder() {
                        draft.output_path = Some(dir.to_string_lossy().to_string());
                    }
                }
            });
            ui.add_space(theme::SPACING_SM);

            if theme::settings_checkbox(ui, draft.auto_save, "Save converted output automatically", true) {
                draft.auto_save = !draft.auto_save;
            }

            ui.add_space(theme::SPACING_LG);
            ui.separator();
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(theme::button_accent("Save").min_size(egui::vec2(80.0, theme::BUTTON_HEIGHT)))
                        .clicked()
                    {
                        apply = true;
                    }
                    if ui
                        .add(theme::button("Cancel").min_size(egui::vec2(80.0, theme::BUTTON_HEIGHT)))
                        .clicked()
                    {
                        cancel = true;
                    }
                    if ui.add(theme::button("Reset")).clicked() {
                        *draft = Settings {
                            mode: draft.mode,
                            ..Settings::default()
                        };
                    }
                });
            });
        });

        if apply {
            let draft = self.settings_draft.clone();
            self.settings.backend_url = draft.backend_url.trim().to_string();
            self.settings.request_timeout_secs = draft.request_timeout_secs;
            self.settings.step_duration_ms = draft.step_duration_ms;
            self.settings.mock_success_rate = draft.mock_success_rate;
            self.settings.output_path = draft.output_path.filter(|p| !p.trim().is_empty());
            self.settings.auto_save = draft.auto_save;
            info!(backend = %self.settings.backend_url, "Settings updated");
            self.save_settings();
            self.show_settings = false;
        } else if cancel || modal_response.should_close() {
            self.show_settings = false;
        }
    }
}
