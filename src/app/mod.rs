//! App module - contains the main application state and logic

mod conversion;
mod modals;
mod output;
mod toasts;
mod views;

use crate::form::FormState;
use crate::output::ConversionOutput;
use crate::settings::Settings;
use crate::theme;
use crate::types::*;
use crate::utils::rasterize_icon;
use eframe::egui;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) form: FormState,
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    // Conversion
    pub(crate) conversion_state: Arc<Mutex<ConversionState>>,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) output: Option<ConversionOutput>,
    pub(crate) last_saved: Option<PathBuf>,
    // Settings modal (edited copy, applied on save)
    pub(crate) show_settings: bool,
    pub(crate) settings_draft: Settings,
    // Toast notification
    pub(crate) toast: Option<Toast>,
    // Window
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let logo_texture = rasterize_icon(theme::LOGO_SIZE as u32 * 2).map(|(rgba, w, h)| {
            cc.egui_ctx.load_texture(
                "logo",
                egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &rgba),
                egui::TextureOptions::LINEAR,
            )
        });

        let form = FormState {
            mode: settings.mode,
            ..Default::default()
        };

        Self {
            form,
            settings_draft: settings.clone(),
            settings,
            data_dir,
            logo_texture,
            conversion_state: Arc::new(Mutex::new(ConversionState::default())),
            runtime,
            output: None,
            last_saved: None,
            show_settings: false,
            toast: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
        }
    }

    pub fn save_settings(&mut self) {
        self.settings.window_x = self.window_pos.map(|p| p.x);
        self.settings.window_y = self.window_pos.map(|p| p.y);
        self.settings.window_w = self.window_size.map(|s| s.x);
        self.settings.window_h = self.window_size.map(|s| s.y);
        self.settings.mode = self.form.mode;
        self.settings.save(&self.data_dir);
    }

    pub fn is_converting(&self) -> bool {
        self.conversion_state.lock().unwrap().status.is_running()
    }

    pub fn notify(&mut self, kind: ToastKind, title: impl Into<String>, description: impl Into<String>) {
        self.toast = Some(Toast::new(kind, title, description));
    }
}
