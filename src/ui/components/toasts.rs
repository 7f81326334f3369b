use eframe::egui;

use crate::ui::notifications::{NotificationKind, Notifications};
use crate::ui::state::Action;

pub fn render(ctx: &egui::Context, notifications: &Notifications) -> Option<Action> {
    if notifications.is_empty() {
        return None;
    }

    let mut action = None;
    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .show(ctx, |ui| {
            for toast in notifications.iter() {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_max_width(280.0);
                    ui.horizontal(|ui| {
                        let color = match toast.kind {
                            NotificationKind::Info => ui.visuals().text_color(),
                            NotificationKind::Error => ui.visuals().error_fg_color,
                        };
                        ui.colored_label(color, egui::RichText::new(&toast.title).strong());
                        if ui.small_button("✕").clicked() {
                            action = Some(Action::DismissNotification(toast.id));
                        }
                    });
                    ui.label(&toast.body);
                });
                ui.add_space(6.0);
            }
        });

    action
}
