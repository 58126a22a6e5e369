//! Scan panel: pick an image, upload it and show its AI summary.

use egui::{self, RichText, Vec2};
use nutri_core::scan::{ScanPhase, ScanPipeline};

use crate::theme::*;

const URL_PREVIEW_CHARS: usize = 50;
const PREVIEW_MAX_HEIGHT: f32 = 384.0;

/// What the caller should do after rendering the scan panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanAction {
    None,
    PickFile,
    Upload,
    OpenLink(String),
}

pub fn scan_panel(ui: &mut egui::Ui, pipeline: &ScanPipeline) -> ScanAction {
    let mut action = ScanAction::None;
    let busy = pipeline.is_busy();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(CARD_MAX_WIDTH);
                ui.add_space(24.0);
                ui.heading(
                    RichText::new("Upload Image & Get AI Summary")
                        .color(ACCENT)
                        .strong()
                        .size(26.0),
                );
                ui.label(
                    RichText::new("Select an image file, upload it, and get an AI-generated summary.")
                        .color(TEXT_SECONDARY),
                );
                ui.add_space(16.0);

                if let Some(error) = pipeline.error() {
                    egui::Frame::default()
                        .fill(ERROR_BG)
                        .corner_radius(PANEL_ROUNDING)
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(RichText::new(format!("⚠ {}", error)).color(ERROR));
                        });
                    ui.add_space(12.0);
                }

                egui::Frame::default()
                    .fill(BG_SECONDARY)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(20.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(RichText::new("📁 Choose and Upload").color(ACCENT).strong().size(18.0));
                        ui.add_space(8.0);

                        if ui
                            .add_enabled(!busy, egui::Button::new("Choose image...").corner_radius(PANEL_ROUNDING))
                            .clicked()
                        {
                            action = ScanAction::PickFile;
                        }
                        ui.label(
                            RichText::new("or drop an image onto the page")
                                .color(TEXT_SECONDARY)
                                .small(),
                        );

                        if let Some(file) = pipeline.file() {
                            ui.label(RichText::new(format!("Selected: {}", file.name)).color(TEXT_SECONDARY));
                        }
                        ui.add_space(8.0);

                        let uploading = *pipeline.phase() == ScanPhase::Uploading;
                        let label = if uploading { "Uploading..." } else { "⬆ Upload Image" };
                        let enabled = pipeline.can_upload();
                        let upload = ui.add_enabled(
                            enabled,
                            egui::Button::new(RichText::new(label).color(TEXT_PRIMARY).strong())
                                .fill(if enabled { ACCENT } else { BG_SURFACE })
                                .corner_radius(PANEL_ROUNDING)
                                .min_size(Vec2::new(180.0, 36.0)),
                        );
                        if uploading {
                            ui.spinner();
                        }
                        if upload.clicked() {
                            action = ScanAction::Upload;
                        }

                        if let Some(url) = pipeline.image_url() {
                            ui.add_space(12.0);
                            ui.separator();
                            ui.label(RichText::new("Uploaded Image Preview:").color(ACCENT).strong());
                            egui::Frame::default()
                                .fill(BG_SURFACE)
                                .corner_radius(PANEL_ROUNDING)
                                .inner_margin(8.0)
                                .show(ui, |ui| {
                                    ui.add(
                                        egui::Image::new(preview_source(url))
                                            .max_width(ui.available_width())
                                            .max_height(PREVIEW_MAX_HEIGHT)
                                            .corner_radius(PANEL_ROUNDING)
                                            .show_loading_spinner(true),
                                    );
                                });
                            ui.horizontal_wrapped(|ui| {
                                ui.label(RichText::new("Image URL:").color(TEXT_SECONDARY));
                                let link = ui
                                    .link(RichText::new(preview_url(url)).color(LINK))
                                    .on_hover_text("Open image URL in new tab");
                                if link.clicked() {
                                    action = ScanAction::OpenLink(url.to_string());
                                }
                            });
                        }

                        let summarizing = *pipeline.phase() == ScanPhase::Summarizing;
                        if summarizing || pipeline.summary().is_some() {
                            ui.add_space(12.0);
                            ui.separator();
                            ui.label(RichText::new("AI Generated Summary:").color(ACCENT).strong());
                            if summarizing {
                                ui.horizontal(|ui| {
                                    ui.spinner();
                                    ui.label(RichText::new("Generating summary...").color(TEXT_SECONDARY));
                                });
                            } else if let Some(summary) = pipeline.summary() {
                                egui::Frame::default()
                                    .fill(BG_SURFACE)
                                    .corner_radius(PANEL_ROUNDING)
                                    .inner_margin(10.0)
                                    .show(ui, |ui| {
                                        ui.set_width(ui.available_width());
                                        ui.label(RichText::new(summary).color(TEXT_PRIMARY));
                                    });
                            }
                        }
                    });
            });
        });

    action
}

/// Long URLs are shortened for display; the full URL stays on hover and click
pub fn preview_url(url: &str) -> String {
    if url.chars().count() > URL_PREVIEW_CHARS {
        let head: String = url.chars().take(URL_PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        url.to_string()
    }
}

/// Remote image source for the preview; fetched by the installed http loader
pub fn preview_source(url: &str) -> egui::ImageSource<'static> {
    egui::ImageSource::Uri(url.to_string().into())
}
