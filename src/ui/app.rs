use std::time::Duration;

use chrono::Utc;
use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{ApiCommand, ApiEvent};

use super::components::{chat_area, input_bar, login, sidebar, toasts};
use super::state::{Action, AppState, Screen};

/// Responses are polled once per frame, so keep frames coming while idle.
const REPAINT_INTERVAL: Duration = Duration::from_millis(200);

pub struct ChatApp {
    state: AppState,
    command_sender: mpsc::Sender<ApiCommand>,
    event_receiver: mpsc::Receiver<ApiEvent>,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        command_sender: mpsc::Sender<ApiCommand>,
        event_receiver: mpsc::Receiver<ApiEvent>,
    ) -> Self {
        Self {
            state: AppState::new(),
            command_sender,
            event_receiver,
        }
    }

    fn handle_api_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            let commands = self.state.apply(event);
            self.send_commands(commands);
        }
    }

    fn dispatch(&mut self, action: Action) {
        let commands = self.state.update(action);
        self.send_commands(commands);
    }

    fn send_commands(&mut self, commands: Vec<ApiCommand>) {
        for command in commands {
            let kind = command.kind();
            if let Err(err) = self.command_sender.try_send(command) {
                log::warn!("Failed to send {kind} command to API worker: {err}");
            }
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_api_events();
        self.state.notifications.prune(Utc::now());

        let mut actions = Vec::new();
        match self.state.screen {
            Screen::Login | Screen::Registration => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    actions.extend(login::render(ui, &mut self.state));
                });
            }
            Screen::Main => {
                egui::SidePanel::left("chat_sidebar")
                    .resizable(true)
                    .default_width(280.0)
                    .show(ctx, |ui| {
                        actions.extend(sidebar::render(ui, &mut self.state));
                    });

                egui::CentralPanel::default().show(ctx, |ui| {
                    if self.state.thread().is_some() {
                        chat_area::render_header(ui, &self.state);
                        ui.separator();
                        chat_area::render(ui, &self.state);

                        ui.separator();
                        let can_send = self.state.can_send();
                        if input_bar::render(ui, &mut self.state.input_text, can_send) {
                            actions.push(Action::SendMessage);
                        }
                    } else {
                        chat_area::render(ui, &self.state);
                    }
                });
            }
        }

        actions.extend(toasts::render(ctx, &self.state.notifications));

        for action in actions {
            self.dispatch(action);
        }

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}
