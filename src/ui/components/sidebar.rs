use chrono::Local;
use eframe::egui;

use crate::ui::state::{Action, AppState, SidebarTab};

use super::profile;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> Option<Action> {
    let mut action = None;

    if let Some(user) = state.session() {
        ui.horizontal(|ui| {
            profile::avatar(ui, &user.initials(), true);
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.strong(&user.first_name);
                    profile::badge(ui, user.badge());
                });
                ui.label(egui::RichText::new(format!("@{}", user.username)).weak());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Log out").clicked() {
                    action = Some(Action::Logout);
                }
            });
        });
    }
    ui.separator();

    let mut tab = state.tab;
    ui.horizontal(|ui| {
        ui.selectable_value(&mut tab, SidebarTab::Chats, "Chats");
        ui.selectable_value(&mut tab, SidebarTab::Contacts, "Contacts");
    });
    if tab != state.tab {
        action = Some(Action::SelectTab(tab));
    }
    ui.separator();

    let picked = match state.tab {
        SidebarTab::Chats => chat_list(ui, state),
        SidebarTab::Contacts => contact_list(ui, state),
    };

    picked.map(Action::SelectContact).or(action)
}

fn chat_list(ui: &mut egui::Ui, state: &AppState) -> Option<String> {
    let chats = state.store().visible_chats();
    if chats.is_empty() {
        ui.label("No conversations yet");
        return None;
    }

    let selected = state.thread().map(|thread| thread.contact_id.as_str());
    let mut picked = None;
    egui::ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
        for (chat, user) in chats {
            let is_selected = selected == Some(chat.user_id.as_str());
            ui.horizontal(|ui| {
                profile::avatar(ui, &user.initials(), user.is_online());
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui.selectable_label(is_selected, user.display_name()).clicked() {
                            picked = Some(chat.user_id.clone());
                        }
                        profile::badge(ui, user.badge());
                        if let Some(time) = chat.last_message_time {
                            let local = time.with_timezone(&Local);
                            let time = local.format("%H:%M").to_string();
                            ui.label(egui::RichText::new(time).small().weak());
                        }
                    });
                    let preview = chat.last_message.as_deref().unwrap_or_default();
                    ui.label(egui::RichText::new(preview).weak());
                });
            });
            ui.separator();
        }
    });

    picked
}

fn contact_list(ui: &mut egui::Ui, state: &mut AppState) -> Option<String> {
    ui.add(egui::TextEdit::singleline(&mut state.search_query).hint_text("Search by username"));
    let total = state.store().user_count();
    ui.label(egui::RichText::new(format!("{total} users registered")).small().weak());
    ui.separator();

    let contacts = state.contacts();
    if contacts.is_empty() {
        ui.label("Nobody found");
        return None;
    }

    let mut picked = None;
    egui::ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
        for user in contacts {
            ui.horizontal(|ui| {
                profile::avatar(ui, &user.initials(), user.is_online());
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(user.display_name());
                        profile::badge(ui, user.badge());
                    });
                    ui.label(egui::RichText::new(format!("@{}", user.username)).weak());
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Write").clicked() {
                        picked = Some(user.id.clone());
                    }
                });
            });
            ui.separator();
        }
    });

    picked
}
