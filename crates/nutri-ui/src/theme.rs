//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(17, 24, 39);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(31, 41, 55);
pub const BG_SURFACE: Color32 = Color32::from_rgb(55, 65, 81);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(243, 244, 246);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(156, 163, 175);
pub const ACCENT: Color32 = Color32::from_rgb(34, 197, 94);
pub const ACCENT_DIM: Color32 = Color32::from_rgb(22, 101, 52);
pub const LINK: Color32 = Color32::from_rgb(96, 165, 250);
pub const ERROR: Color32 = Color32::from_rgb(248, 113, 113);
pub const ERROR_BG: Color32 = Color32::from_rgb(69, 26, 26);
pub const SUCCESS_BG: Color32 = Color32::from_rgb(20, 56, 34);
pub const LISTENING: Color32 = Color32::from_rgb(239, 68, 68);
pub const CODE_BG: Color32 = Color32::from_rgb(31, 31, 36);
pub const CODE_FG: Color32 = Color32::from_rgb(252, 165, 165);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(8);
pub const PANEL_PADDING: Vec2 = Vec2::new(16.0, 12.0);
pub const CARD_MAX_WIDTH: f32 = 560.0;

/// Apply the dark green theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;
    style.visuals.extreme_bg_color = BG_SURFACE;
    style.visuals.hyperlink_color = LINK;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.weak_bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = ACCENT_DIM;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);
    style.spacing.button_padding = Vec2::new(10.0, 6.0);

    ctx.set_style(style);
}
