#![windows_subsystem = "windows"]
//! TIBCO to Spring Boot Converter - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod backend;
mod constants;
mod error;
mod form;
mod output;
mod progress;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use constants::*;
use eframe::egui;
use tracing::{error, info};
use utils::{get_data_dir, rasterize_icon};

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "tibco-converter.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tibco_converter=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "TIBCO Converter starting");

    let settings = settings::Settings::load(&data_dir);
    info!(backend = %settings.backend_url, "Using conversion service");

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "Failed to start async runtime");
            panic!("Failed to start async runtime: {}", e);
        }
    };

    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(1000.0, 860.0)))
        .with_min_inner_size([720.0, 600.0])
        .with_title("TIBCO to Spring Boot Converter");

    if let Some((rgba, width, height)) = rasterize_icon(256) {
        viewport = viewport.with_icon(std::sync::Arc::new(egui::IconData { rgba, width, height }));
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "TIBCO to Spring Boot Converter",
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, settings, data_dir, runtime);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        self.poll_conversion();

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::BG_BASE).inner_margin(egui::Margin::symmetric(24, 0)))
            .show(ctx, |ui| {
                self.render_main(ui, ctx);
            });

        self.render_settings_modal(ctx);
        self.render_toast(ctx);

        // Keep polling while the background task runs
        if self.is_converting() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}
