//! Transient notification in the top-right corner.

use egui::{self, Align2, RichText};
use nutri_core::scan::Toast;

use crate::theme::*;

pub fn toast_overlay(ctx: &egui::Context, toast: Option<&Toast>) {
    let Some(toast) = toast else {
        return;
    };

    egui::Area::new(egui::Id::new("nutri_toast"))
        .anchor(Align2::RIGHT_TOP, egui::vec2(-16.0, 48.0))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(ACCENT_DIM)
                .corner_radius(PANEL_ROUNDING)
                .inner_margin(PANEL_PADDING)
                .show(ui, |ui| {
                    ui.label(RichText::new(&toast.text).color(TEXT_PRIMARY).strong());
                });
        });
}
