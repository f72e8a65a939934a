//! Actions on the converted output: save, copy, reveal

use super::App;
use crate::output::{save_output, save_output_as};
use crate::types::ToastKind;
use eframe::egui;
use tracing::{debug, error, info};

impl App {
    /// Ask where to save, pre-filled with the output's own name
    pub fn save_output_dialog(&mut self) {
        let Some(output) = self.output.as_ref() else {
            return;
        };

        let dir = self.settings.output_path_or_default();
        std::fs::create_dir_all(&dir).ok();
        let Some(path) = rfd::FileDialog::new()
            .set_directory(&dir)
            .set_file_name(&output.file_name)
            .save_file()
        else {
            debug!("Save dialog dismissed");
            return;
        };

        match save_output_as(&path, output) {
            Ok(()) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                self.last_saved = Some(path);
                self.notify(ToastKind::Success, "Download Complete", format!("Saved {}", name));
            }
            Err(e) => {
                error!(error = %e, path = %path.display(), "Failed to save output");
                self.notify(ToastKind::Error, "Save Failed", e.to_string());
            }
        }
    }

    /// Save straight into the configured output folder
    pub fn save_output_quick(&mut self) {
        let Some(output) = self.output.as_ref() else {
            return;
        };
        let dir = self.settings.output_path_or_default();
        match save_output(&dir, output) {
            Ok(path) => {
                let shown = path.display().to_string();
                self.last_saved = Some(path);
                self.notify(ToastKind::Success, "Download Complete", format!("Saved to {}", shown));
            }
            Err(e) => {
                error!(error = %e, dir = %dir.display(), "Failed to save output");
                self.notify(ToastKind::Error, "Save Failed", e.to_string());
            }
        }
    }

    pub fn copy_output(&mut self, ctx: &egui::Context) {
        let Some(code) = self.output.as_ref().and_then(|o| o.text()) else {
            return;
        };
        ctx.copy_text(code.to_string());
        info!(chars = code.len(), "Generated code copied to clipboard");
        self.notify(
            ToastKind::Success,
            "Code Copied!",
            "The generated Spring Boot code has been copied to your clipboard.",
        );
    }

    pub fn open_output_folder(&self) {
        let dir = self
            .last_saved
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| self.settings.output_path_or_default());
        std::fs::create_dir_all(&dir).ok();
        if let Err(e) = open::that(&dir) {
            error!(error = %e, dir = %dir.display(), "Failed to open output folder");
        }
    }
}
