//! Chat panel: suggestions sidebar, transcript and input row.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use nutri_core::chat::ChatSession;
use nutri_types::message::{Message, MessageKind};

use crate::markdown::{render_blocks, MessageBody};
use crate::state::{ChatView, SUGGESTIONS};
use crate::theme::*;

const INPUT_HINT: &str = "Ask about nutrition, calories, or recipes...";
const THINKING: &str = "Thinking...";

/// What the caller should do after rendering the chat panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    None,
    /// Submit the current input
    Send,
    ToggleDictation,
    OpenLink(String),
}

/// Render the chat screen. `dictation_available` hides the mic control when
/// the platform has no speech recognition.
pub fn chat_panel(
    ui: &mut egui::Ui,
    session: &mut ChatSession,
    view: &mut ChatView,
    dictation_available: bool,
) -> ChatAction {
    let mut action = ChatAction::None;
    view.sync(session.transcript());

    if view.show_suggestions {
        egui::SidePanel::left("chat_suggestions")
            .resizable(false)
            .exact_width(240.0)
            .frame(egui::Frame::default().fill(BG_SECONDARY).inner_margin(PANEL_PADDING))
            .show_inside(ui, |ui| {
                suggestions_sidebar(ui, session, view);
            });
    }

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            // Header
            ui.horizontal(|ui| {
                ui.heading(RichText::new("🤖 NutriChat AI").color(TEXT_PRIMARY).strong());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let label = if view.show_suggestions { "Hide suggestions" } else { "Suggestions" };
                    if ui.small_button(label).clicked() {
                        view.show_suggestions = !view.show_suggestions;
                    }
                });
            });
            ui.separator();

            // Messages
            let scroll = view.take_scroll();
            let available_height = ui.available_height() - 64.0;
            ScrollArea::vertical()
                .max_height(available_height)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for (message, body) in session.transcript().iter().zip(view.bodies()) {
                        if let Some(url) = render_message(ui, message, body) {
                            action = ChatAction::OpenLink(url);
                        }
                        ui.add_space(6.0);
                    }

                    if session.is_loading() {
                        bubble(ui, false, BG_SECONDARY, |ui| {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(RichText::new(THINKING).color(TEXT_SECONDARY));
                            });
                        });
                    }

                    if scroll {
                        ui.scroll_to_cursor(Some(Align::BOTTOM));
                    }
                });

            ui.add_space(8.0);

            // Input row
            ui.horizontal(|ui| {
                let editable = session.is_ready() && !session.is_loading();
                let hint = if session.is_loading() { THINKING } else { INPUT_HINT };
                let mic_width = if dictation_available { 48.0 } else { 0.0 };
                let input = egui::TextEdit::singleline(&mut session.input)
                    .id_salt("chat_input")
                    .hint_text(hint)
                    .desired_width(ui.available_width() - 76.0 - mic_width)
                    .font(egui::FontId::proportional(14.0));
                let response = ui.add_enabled(editable, input);

                if dictation_available {
                    let listening = session.is_dictating();
                    let (icon, fill, tip) = if listening {
                        ("⏹", LISTENING, "Stop voice input")
                    } else {
                        ("🎤", BG_SURFACE, "Start voice input")
                    };
                    let mic = ui
                        .add_enabled(
                            session.is_ready(),
                            egui::Button::new(RichText::new(icon).color(TEXT_PRIMARY))
                                .fill(fill)
                                .corner_radius(PANEL_ROUNDING)
                                .min_size(Vec2::new(40.0, 0.0)),
                        )
                        .on_hover_text(tip);
                    if mic.clicked() {
                        action = ChatAction::ToggleDictation;
                    }
                }

                let send_enabled = session.can_send();
                let send_btn = ui.add_enabled(
                    send_enabled,
                    egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                        .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(64.0, 0.0)),
                );

                let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if (enter && send_enabled) || send_btn.clicked() {
                    action = ChatAction::Send;
                    response.request_focus();
                }
            });
        });

    action
}

fn suggestions_sidebar(ui: &mut egui::Ui, session: &mut ChatSession, view: &mut ChatView) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Suggestions").color(ACCENT).strong().size(18.0));
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.small_button("✕").clicked() {
                view.show_suggestions = false;
            }
        });
    });
    ui.add_space(8.0);

    for suggestion in SUGGESTIONS {
        let button = egui::Button::new(RichText::new(suggestion).color(TEXT_PRIMARY))
            .fill(BG_SURFACE)
            .corner_radius(PANEL_ROUNDING)
            .min_size(Vec2::new(ui.available_width(), 32.0));
        if ui.add(button).clicked() {
            session.set_input(suggestion);
            view.show_suggestions = false;
        }
    }
}

fn render_message(ui: &mut egui::Ui, message: &Message, body: &MessageBody) -> Option<String> {
    let mut clicked = None;
    let from_user = message.is_user();
    let fill = match message.kind {
        MessageKind::Error => ERROR_BG,
        _ if from_user => ACCENT_DIM,
        _ => BG_SECONDARY,
    };

    bubble(ui, from_user, fill, |ui| match body {
        MessageBody::Plain(text) => {
            let color = if message.kind == MessageKind::Error { ERROR } else { TEXT_PRIMARY };
            ui.label(RichText::new(text).color(color));
        }
        MessageBody::Markdown(blocks) => {
            clicked = render_blocks(ui, blocks);
        }
    });

    clicked
}

/// A message frame aligned to the sender's side, at most 75% of the row
fn bubble(ui: &mut egui::Ui, right: bool, fill: egui::Color32, add_contents: impl FnOnce(&mut egui::Ui)) {
    let align = if right { Align::Max } else { Align::Min };
    let max_width = ui.available_width() * 0.75;
    ui.with_layout(Layout::top_down(align), |ui| {
        egui::Frame::default()
            .fill(fill)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                add_contents(ui);
            });
    });
}
