//! Forgot-password panel.

use egui::{self, RichText, Vec2};
use nutri_core::reset::ResetForm;

use crate::theme::*;

/// Render the reset form. Returns true when the user asked to send the link.
pub fn reset_panel(ui: &mut egui::Ui, form: &mut ResetForm) -> bool {
    let mut submitted = false;

    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        ui.set_max_width(CARD_MAX_WIDTH);

        egui::Frame::default()
            .fill(BG_SECONDARY)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(24.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("📧").size(32.0));
                    ui.heading(RichText::new("Forgot Password?").color(ACCENT).strong());
                    ui.label(
                        RichText::new("Enter your email to receive a reset link")
                            .color(TEXT_SECONDARY)
                            .small(),
                    );
                });
                ui.add_space(12.0);

                if let Some(message) = form.message() {
                    banner(ui, message, ACCENT, SUCCESS_BG);
                }
                if let Some(error) = form.error() {
                    banner(ui, error, ERROR, ERROR_BG);
                }

                ui.label(RichText::new("Email Address").color(TEXT_SECONDARY));
                let pending = form.is_pending();
                let input = egui::TextEdit::singleline(&mut form.email)
                    .id_salt("reset_email")
                    .hint_text("you@example.com")
                    .desired_width(f32::INFINITY);
                let response = ui.add_enabled(!pending, input);

                ui.add_space(12.0);
                let label = if pending { "Sending..." } else { "Send Reset Link" };
                let button = ui.add_enabled(
                    !pending,
                    egui::Button::new(RichText::new(label).color(TEXT_PRIMARY).strong())
                        .fill(if pending { BG_SURFACE } else { ACCENT })
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(ui.available_width(), 36.0)),
                );

                let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if button.clicked() || (enter && !pending) {
                    submitted = true;
                }
            });
    });

    submitted
}

fn banner(ui: &mut egui::Ui, text: &str, color: egui::Color32, fill: egui::Color32) {
    egui::Frame::default()
        .fill(fill)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(text).color(color));
            });
        });
    ui.add_space(8.0);
}
