//! Centralized theme constants for the converter window
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x08, 0x12, 0x3a); // deep navy
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x0f, 0x1c, 0x4d);
pub const BG_INPUT: Color32 = Color32::from_rgb(0x0b, 0x16, 0x42);
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x1e, 0x29, 0x3b); // slate-800
pub const BG_HOVER: Color32 = Color32::from_rgb(0x13, 0x24, 0x5c);

// =============================================================================
// COLORS - Brand
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x38, 0xbd, 0xf8); // sky-400
pub const ACCENT_DEEP: Color32 = Color32::from_rgb(0x25, 0x63, 0xeb); // blue-600

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe2, 0xe8, 0xf0); // slate-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x94, 0xa3, 0xb8); // slate-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x64, 0x74, 0x8b); // slate-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x1e, 0x2e, 0x5e);
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x33, 0x41, 0x55); // slate-700

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x4a, 0xde, 0x80); // green-400
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x33, 0x41, 0x55);
pub const BTN_ACCENT: Color32 = ACCENT_DEEP;
pub const BTN_DISABLED: Color32 = Color32::from_rgb(0x1e, 0x29, 0x3b);
pub const BTN_DISABLED_TEXT: Color32 = TEXT_DIM;

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_HERO: f32 = 30.0;
pub const FONT_TITLE: f32 = 20.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const CONTENT_MAX_WIDTH: f32 = 820.0;
pub const LOGO_SIZE: f32 = 44.0;
pub const BUTTON_HEIGHT: f32 = 28.0;
pub const BUTTON_HEIGHT_LARGE: f32 = 48.0;
pub const STEP_ROW_HEIGHT: f32 = 44.0;
pub const OUTPUT_MIN_HEIGHT: f32 = 360.0;

// =============================================================================
// CORNER RADIUS / STROKES / SPACING
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_MEDIUM: f32 = 6.0;
pub const RADIUS_LARGE: f32 = 8.0;

pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_ELEVATED,
        extreme_bg_color: BG_INPUT,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: Color32::from_rgb(0x1d, 0x4e, 0x89),
            stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT),
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_ELEVATED,
                weak_bg_fill: BG_SURFACE,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: BG_INPUT,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: BG_HOVER,
                weak_bg_fill: BG_HOVER,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT),
                fg_stroke: egui::Stroke::new(STROKE_MEDIUM, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: BG_HOVER,
                weak_bg_fill: BG_HOVER,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -1.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: BG_SURFACE,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(Color32::from_rgba_unmultiplied(0x0f, 0x1c, 0x4d, 235))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(20))
}

/// Output card, tinted green like a success state
pub fn output_frame() -> egui::Frame {
    card_frame().stroke(egui::Stroke::new(STROKE_MEDIUM, Color32::from_rgb(0x16, 0x65, 0x34)))
}

pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(SPACING_XL)
}

/// Dashed-looking placeholder panel for empty/ready states
pub fn placeholder_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_INPUT)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(24))
}

/// Panel around the progress steps
pub fn section_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(Color32::from_rgb(0x0b, 0x1a, 0x52))
        .stroke(egui::Stroke::new(STROKE_MEDIUM, Color32::from_rgba_unmultiplied(0x38, 0xbd, 0xf8, 60)))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(16))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Default gray button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(text.into())
        .fill(BTN_DEFAULT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Accent blue button for primary actions
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_PRIMARY))
        .fill(BTN_ACCENT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Settings checkbox row. Returns true if toggled.
pub fn settings_checkbox(ui: &mut egui::Ui, checked: bool, label: &str, enabled: bool) -> bool {
    let full_width = ui.available_width();
    let row_height = 20.0;
    let (row_rect, row_resp) = ui.allocate_exact_size(
        egui::vec2(full_width, row_height),
        egui::Sense::click(),
    );
    if enabled && row_resp.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    let painter = ui.painter();
    let cb_size = 16.0;
    let cb_rect = egui::Rect::from_min_size(
        egui::pos2(row_rect.min.x, row_rect.center().y - cb_size / 2.0),
        egui::vec2(cb_size, cb_size),
    );
    if checked {
        painter.rect_stroke(cb_rect, 3.0, egui::Stroke::new(1.5, ACCENT), egui::StrokeKind::Inside);
        painter.rect_filled(cb_rect.shrink(3.0), 2.0, ACCENT);
    } else {
        painter.rect_stroke(cb_rect, 3.0, egui::Stroke::new(1.5, BORDER_DEFAULT), egui::StrokeKind::Inside);
    }
    let color = if enabled { TEXT_PRIMARY } else { TEXT_DIM };
    painter.text(
        egui::pos2(cb_rect.max.x + 8.0, row_rect.center().y),
        egui::Align2::LEFT_CENTER,
        label,
        egui::FontId::proportional(FONT_BODY),
        color,
    );
    enabled && row_resp.clicked()
}

/// Returns (fill, draw_rect) for a custom-painted button with hover/press effects.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (lighten(base_fill, 0.06), rect.shrink(1.5))
    } else if response.hovered() {
        (lighten(base_fill, 0.12), rect)
    } else {
        (base_fill, rect)
    }
}

pub fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}

/// Same color with alpha scaled by `alpha` in `[0, 1]`
pub fn fade(c: Color32, alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), (c.a() as f32 * alpha.clamp(0.0, 1.0)) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighten_moves_toward_white() {
        let c = lighten(Color32::from_rgb(0, 0, 0), 0.5);
        assert_eq!(c, Color32::from_rgb(127, 127, 127));
        assert_eq!(lighten(Color32::WHITE, 0.3), Color32::WHITE);
    }

    #[test]
    fn fade_scales_alpha_only() {
        let c = fade(Color32::from_rgb(10, 20, 30), 0.0);
        assert_eq!(c.a(), 0);
        assert_eq!(fade(ACCENT, 1.0), ACCENT);
    }
}
