use chrono::{Local, Utc};
use eframe::egui;

use crate::common::time::format_last_seen;
use crate::ui::state::AppState;

/// Header of the open conversation. Prefers the user record and falls back
/// to the profile copied onto the chat.
pub fn render_header(ui: &mut egui::Ui, state: &AppState) {
    let Some(thread) = state.thread() else {
        return;
    };

    let store = state.store();
    let now = Utc::now();
    ui.horizontal(|ui| {
        if let Some(user) = store.user(&thread.contact_id) {
            super::profile::avatar(ui, &user.initials(), user.is_online());
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.strong(user.display_name());
                    super::profile::badge(ui, user.badge());
                });
                let presence = format_last_seen(user.last_seen, user.is_online, now);
                ui.label(egui::RichText::new(presence).weak());
            });
        } else if let Some(chat) = store.chat(&thread.contact_id) {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.strong(chat.display_name());
                    super::profile::badge(ui, chat.badge());
                });
                let presence = format_last_seen(chat.last_seen, chat.is_online, now);
                ui.label(egui::RichText::new(presence).weak());
            });
        } else {
            ui.strong(&thread.contact_id);
        }
    });
}

pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let Some(thread) = state.thread() else {
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new("Pick a chat to start messaging").weak());
        });
        return;
    };

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .max_height(ui.available_height() - 48.0)
        .show(ui, |ui| {
            if thread.loading && thread.messages.is_empty() {
                ui.spinner();
                return;
            }

            for message in &thread.messages {
                let own = state.is_own(message);
                let layout = if own {
                    egui::Layout::right_to_left(egui::Align::TOP)
                } else {
                    egui::Layout::left_to_right(egui::Align::TOP)
                };
                ui.with_layout(layout, |ui| {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.vertical(|ui| {
                            ui.label(&message.text);
                            let time = message
                                .timestamp
                                .map(|time| time.with_timezone(&Local).format("%H:%M").to_string())
                                .unwrap_or_default();
                            ui.label(egui::RichText::new(time).small().weak());
                        });
                    });
                });
            }
        });
}
