//! Floating chat widget rendered with egui
//!
//! Requests run on a worker thread so a slow reply never stalls the render
//! loop. While a request is in flight the input stays visible but submission
//! is disabled and a spinner shows in the message list.

use std::sync::mpsc::{self, Receiver};
use std::thread;

use egui::{Align2, Color32, RichText, Rounding, ScrollArea, Stroke};

use crate::chat::{ChatClient, ChatMessage, ChatSession, Role};

const PANEL_WIDTH: f32 = 340.0;
const HISTORY_HEIGHT: f32 = 320.0;

pub struct ChatUi {
    session: ChatSession,
    draft: String,
    open: bool,
    pending: Option<Receiver<ChatMessage>>,
}

impl ChatUi {
    pub fn new(client: ChatClient, greeting: &str) -> Self {
        Self {
            session: ChatSession::new(client, greeting),
            draft: String::new(),
            open: false,
            pending: None,
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }

    /// Poll the worker and draw the widget
    pub fn show(&mut self, ctx: &egui::Context) {
        if let Some(rx) = &self.pending {
            match rx.try_recv() {
                Ok(reply) => {
                    self.session.messages.push(reply);
                    self.pending = None;
                }
                Err(mpsc::TryRecvError::Empty) => {}
                Err(mpsc::TryRecvError::Disconnected) => {
                    log::error!("chat worker dropped its channel");
                    self.session.messages.push(ChatMessage {
                        role: Role::Model,
                        text: crate::chat::ERROR_REPLY.to_string(),
                        is_error: true,
                    });
                    self.pending = None;
                }
            }
        }

        if !self.open {
            egui::Area::new(egui::Id::new("chat_toggle"))
                .anchor(Align2::RIGHT_BOTTOM, [-24.0, -24.0])
                .show(ctx, |ui| {
                    let button = egui::Button::new(RichText::new("\u{1f4ac}").size(22.0))
                        .min_size(egui::vec2(52.0, 52.0))
                        .rounding(Rounding::same(26.0));
                    if ui.add(button).clicked() {
                        self.open = true;
                    }
                });
            return;
        }

        egui::Window::new("AI Assistant")
            .anchor(Align2::RIGHT_BOTTOM, [-24.0, -24.0])
            .fixed_size([PANEL_WIDTH, HISTORY_HEIGHT + 60.0])
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Ask about this portfolio").strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("\u{2715}").clicked() {
                            self.open = false;
                        }
                    });
                });
                ui.separator();

                ScrollArea::vertical()
                    .max_height(HISTORY_HEIGHT)
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for message in &self.session.messages {
                            bubble(ui, message);
                        }
                        if self.pending.is_some() {
                            ui.horizontal(|ui| {
                                ui.add(egui::Spinner::new());
                                ui.weak("thinking...");
                            });
                        }
                    });

                ui.separator();
                ui.horizontal(|ui| {
                    let input = ui.add_sized(
                        [PANEL_WIDTH - 70.0, 24.0],
                        egui::TextEdit::singleline(&mut self.draft)
                            .hint_text("Type a message..."),
                    );
                    let submitted =
                        input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    let clicked = ui
                        .add_enabled(self.pending.is_none(), egui::Button::new("Send"))
                        .clicked();
                    if (submitted || clicked) && self.pending.is_none() {
                        self.submit();
                    }
                });
            });
    }

    fn submit(&mut self) {
        let text = self.draft.trim().to_string();
        if text.is_empty() {
            return;
        }
        self.draft.clear();

        let history = self.session.messages.clone();
        self.session.messages.push(ChatMessage::user(&text));

        let client = self.session.client.clone();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let reply = client.reply(&text, &history);
            // receiver may be gone if the app shut down mid-request
            let _ = tx.send(reply);
        });
        self.pending = Some(rx);
    }
}

fn bubble(ui: &mut egui::Ui, message: &ChatMessage) {
    let (align, fill, stroke) = match (message.role, message.is_error) {
        (Role::User, _) => (
            egui::Align::RIGHT,
            Color32::from_rgb(42, 48, 84),
            Stroke::NONE,
        ),
        (Role::Model, false) => (
            egui::Align::LEFT,
            Color32::from_rgb(28, 30, 38),
            Stroke::NONE,
        ),
        (Role::Model, true) => (
            egui::Align::LEFT,
            Color32::from_rgb(58, 22, 28),
            Stroke::new(1.0, Color32::from_rgb(180, 60, 70)),
        ),
    };

    ui.with_layout(egui::Layout::top_down(align), |ui| {
        egui::Frame::none()
            .fill(fill)
            .stroke(stroke)
            .rounding(Rounding::same(8.0))
            .inner_margin(egui::Margin::symmetric(8.0, 6.0))
            .show(ui, |ui| {
                ui.set_max_width(PANEL_WIDTH * 0.8);
                ui.label(&message.text);
            });
        ui.add_space(4.0);
    });
}
