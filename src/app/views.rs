//! Main window rendering: header, form card, progress, output card, footer

use super::App;
use crate::constants::{APP_VERSION, ARCHIVE_EXTENSIONS, SOURCE_EXTENSIONS};
use crate::form::extension_list;
use crate::progress::{ProgressTracker, PROGRESS_STEPS};
use crate::theme;
use crate::types::ConversionMode;
use crate::ui::components::{field_label, file_picker, primary_button, step_row, text_input};
use crate::utils::format_bytes;
use eframe::egui;
use egui_phosphor::regular as icons;

const STEP_ICONS: [&str; 3] = [icons::ROBOT, icons::LIGHTNING, icons::FILE_CODE];

impl App {
    pub fn render_main(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let (running, progress, received) = {
            let s = self.conversion_state.lock().unwrap();
            (s.status.is_running(), s.progress, s.received_bytes)
        };

        egui::ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            let width = ui.available_width().min(theme::CONTENT_MAX_WIDTH);
            let side = ((ui.available_width() - width) / 2.0).max(0.0);
            ui.horizontal(|ui| {
                ui.add_space(side);
                ui.vertical(|ui| {
                    ui.set_width(width);
                    self.render_header(ui);
                    ui.add_space(theme::SPACING_XL * 2.0);
                    theme::card_frame().show(ui, |ui| {
                        self.render_form(ui, ctx, running, progress, received);
                    });
                    if self.output.is_some() {
                        ui.add_space(theme::SPACING_XL * 2.0);
                        self.render_output(ui, ctx);
                    }
                    ui.add_space(theme::SPACING_XL * 3.0);
                    Self::render_footer(ui);
                });
            });
        });
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.add_space(theme::SPACING_XL);
        ui.horizontal(|ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add(theme::button(icons::GEAR).min_size(egui::vec2(32.0, 32.0)))
                    .on_hover_text("Settings")
                    .clicked()
                {
                    self.open_settings();
                }
            });
        });
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                let title = "TIBCO to Spring Boot Converter";
                let title_w = ui.fonts(|f| {
                    f.layout_no_wrap(title.to_string(), egui::FontId::proportional(theme::FONT_HERO), theme::ACCENT)
                        .rect
                        .width()
                });
                let total = theme::LOGO_SIZE + theme::SPACING_LG + title_w;
                ui.add_space(((ui.available_width() - total) / 2.0).max(0.0));
                if let Some(tex) = &self.logo_texture {
                    ui.add(egui::Image::new(egui::load::SizedTexture::from_handle(tex)).fit_to_exact_size(egui::vec2(theme::LOGO_SIZE, theme::LOGO_SIZE)));
                }
                ui.add_space(theme::SPACING_LG - ui.spacing().item_spacing.x);
                ui.label(
                    egui::RichText::new(title)
                        .size(theme::FONT_HERO)
                        .strong()
                        .color(theme::ACCENT),
                );
            });
            ui.add_space(theme::SPACING_MD);
            ui.label(
                egui::RichText::new(
                    "Transform your TIBCO BusinessWorks source code into modern Spring Boot applications with the power of AI-driven code generation.",
                )
                .size(theme::FONT_HEADING)
                .color(theme::TEXT_MUTED),
            );
        });
    }

    fn render_form(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        running: bool,
        progress: ProgressTracker,
        received: u64,
    ) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(format!("{}  AI-Powered Code Conversion", icons::LIGHTNING))
                    .size(theme::FONT_TITLE)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
            ui.label(
                egui::RichText::new(self.form.mode.description())
                    .size(theme::FONT_BODY)
                    .color(theme::TEXT_MUTED),
            );
        });
        ui.add_space(theme::SPACING_LG);

        // Mode selector
        ui.add_enabled_ui(!running, |ui| {
            ui.horizontal(|ui| {
                for mode in ConversionMode::ALL {
                    let selected = self.form.mode == mode;
                    let text = egui::RichText::new(mode.label()).color(if selected {
                        theme::TEXT_PRIMARY
                    } else {
                        theme::TEXT_MUTED
                    });
                    if ui.selectable_label(selected, text).clicked() && !selected {
                        self.form.mode = mode;
                    }
                }
            });
        });
        ui.add_space(theme::SPACING_MD);

        self.render_fields(ui, !running);
        ui.add_space(theme::SPACING_LG);

        if running {
            Self::render_progress(ui, progress, received);
        } else {
            self.render_placeholder(ui);
        }
        ui.add_space(theme::SPACING_LG);

        let (icon, label) = if running {
            (icons::CIRCLE_NOTCH, "Converting Code...")
        } else {
            (icons::LIGHTNING, "Convert to Spring Boot")
        };
        let enabled = !running && self.form.can_submit();
        let clicked = primary_button(ui, icon, label, enabled);
        if !running && !enabled {
            let missing = self.form.missing_fields().join(", ");
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(format!("Required: {}", missing))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                );
            });
        }
        if clicked {
            self.submit(ctx);
        }
    }

    fn render_fields(&mut self, ui: &mut egui::Ui, enabled: bool) {
        match self.form.mode {
            ConversionMode::SingleFile => {
                field_label(ui, "Upload TIBCO BW Files");
                file_picker(ui, &mut self.form.source_file, "TIBCO BW sources", SOURCE_EXTENSIONS, enabled);
            }
            ConversionMode::Repository => {
                field_label(ui, "TIBCO BW Source Repository URL");
                text_input(ui, &mut self.form.source_repo, "https://git.example.com/team/bw-project.git", enabled);
                ui.add_space(theme::SPACING_SM);
                field_label(ui, "Target Spring Boot Repository URL");
                text_input(ui, &mut self.form.target_repo, "https://git.example.com/team/spring-service.git", enabled);
            }
            ConversionMode::Project => {
                field_label(ui, "TIBCO BW Project Archive (.zip)");
                file_picker(ui, &mut self.form.project_archive, "Project archive", ARCHIVE_EXTENSIONS, enabled);
                ui.add_space(theme::SPACING_SM);
                field_label(ui, "Work Directory");
                text_input(ui, &mut self.form.work_dir, "Project folder name inside the archive", enabled);
                ui.add_space(theme::SPACING_SM);
                field_label(ui, "Configuration File");
                file_picker(ui, &mut self.form.config_file, "Configuration", &["properties", "xml", "yml", "yaml", "json"], enabled);
                ui.add_space(theme::SPACING_SM);
                field_label(ui, "Target Git Repository");
                text_input(ui, &mut self.form.target_git, "https://git.example.com/team/spring-service.git", enabled);
            }
        }
    }

    fn render_progress(ui: &mut egui::Ui, progress: ProgressTracker, received: u64) {
        theme::section_frame().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("AI Conversion in Progress")
                        .size(theme::FONT_HEADING)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                );
            });
            ui.add_space(theme::SPACING_MD);
            let fraction = progress.fraction();
            let bar = egui::ProgressBar::new(ui.ctx().animate_value_with_time(
                egui::Id::new("conversion_progress"),
                fraction,
                0.8,
            ))
            .desired_height(10.0)
            .corner_radius(5.0)
            .fill(theme::ACCENT);
            ui.add(bar);
            ui.add_space(theme::SPACING_LG);

            for (idx, label) in PROGRESS_STEPS.iter().enumerate() {
                step_row(ui, label, STEP_ICONS[idx], progress.step_state(idx));
            }

            if received > 0 {
                ui.add_space(theme::SPACING_SM);
                ui.label(
                    egui::RichText::new(format!("Received {}", format_bytes(received)))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_MUTED),
                );
            }
        });
    }

    fn render_placeholder(&self, ui: &mut egui::Ui) {
        let ready = self.form.can_submit();
        let (icon, title, detail) = match (ready, self.form.mode) {
            (true, _) => (
                icons::ROBOT,
                "Ready to convert your TIBCO BW code".to_string(),
                "Click the button below to start the AI-powered conversion".to_string(),
            ),
            (false, ConversionMode::SingleFile) => (
                icons::UPLOAD_SIMPLE,
                "Upload your TIBCO BW files".to_string(),
                format!("Supported formats: {}", extension_list(SOURCE_EXTENSIONS)),
            ),
            (false, ConversionMode::Repository) => (
                icons::GIT_BRANCH,
                "Enter the source and target repositories".to_string(),
                "Both repository URLs are required".to_string(),
            ),
            (false, ConversionMode::Project) => (
                icons::ARCHIVE,
                "Upload your zipped TIBCO BW project".to_string(),
                "Archive, work directory, configuration and target repository are required".to_string(),
            ),
        };

        theme::placeholder_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(icon).size(40.0).color(theme::TEXT_DIM));
                ui.add_space(theme::SPACING_SM);
                ui.label(egui::RichText::new(title).strong().color(theme::TEXT_SECONDARY));
                ui.label(egui::RichText::new(detail).size(theme::FONT_LABEL).color(theme::TEXT_DIM));
            });
        });
    }

    fn render_output(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let Some(output) = self.output.clone() else {
            return;
        };

        theme::output_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(theme::STATUS_SUCCESS, icons::CODE);
                let heading = if output.text().is_some() {
                    "Generated Spring Boot Code"
                } else {
                    "Converted Spring Boot Project"
                };
                ui.label(egui::RichText::new(heading).size(theme::FONT_TITLE).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(output.completed_at.format("%H:%M:%S").to_string())
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_DIM),
                    );
                });
            });
            ui.add_space(theme::SPACING_SM);

            ui.horizontal(|ui| {
                if ui.add(theme::button_accent(format!("{}  Download", icons::DOWNLOAD_SIMPLE))).clicked() {
                    self.save_output_dialog();
                }
                if ui
                    .add(theme::button(format!("{}  Save to Output Folder", icons::FLOPPY_DISK)))
                    .clicked()
                {
                    self.save_output_quick();
                }
                if output.text().is_some()
                    && ui.add(theme::button(format!("{}  Copy Code", icons::COPY))).clicked()
                {
                    self.copy_output(ctx);
                }
                if self.last_saved.is_some()
                    && ui.add(theme::button(format!("{}  Open Folder", icons::FOLDER_OPEN))).clicked()
                {
                    self.open_output_folder();
                }
            });
            ui.add_space(theme::SPACING_SM);

            match output.text() {
                Some(code) => {
                    let mut shown = code;
                    egui::ScrollArea::vertical()
                        .max_height(theme::OUTPUT_MIN_HEIGHT * 1.5)
                        .show(ui, |ui| {
                            ui.add(
                                egui::TextEdit::multiline(&mut shown)
                                    .font(egui::TextStyle::Monospace)
                                    .desired_width(f32::INFINITY)
                                    .desired_rows(20)
                                    .min_size(egui::vec2(0.0, theme::OUTPUT_MIN_HEIGHT)),
                            );
                        });
                }
                None => {
                    ui.horizontal(|ui| {
                        ui.colored_label(theme::ACCENT, icons::FILE_ZIP);
                        ui.label(
                            egui::RichText::new(format!("{}  ({})", output.file_name, format_bytes(output.size())))
                                .color(theme::TEXT_SECONDARY),
                        );
                    });
                }
            }

            if let Some(path) = &self.last_saved {
                ui.add_space(theme::SPACING_SM);
                ui.label(
                    egui::RichText::new(format!("Saved to {}", path.display()))
                        .size(theme::FONT_SMALL)
                        .color(theme::STATUS_SUCCESS),
                );
            }
        });
    }

    fn render_footer(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(format!("{}  v{}  –  Powered by Azure OpenAI", icons::ROBOT, APP_VERSION))
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_MUTED),
            );
            ui.label(
                egui::RichText::new("© 2025 ABC. Advanced AI-driven code transformation platform.")
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_DIM),
            );
        });
        ui.add_space(theme::SPACING_XL);
    }
}
