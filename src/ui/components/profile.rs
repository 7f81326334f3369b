use eframe::egui;

use crate::common::Badge;

const DEVELOPER_COLOR: egui::Color32 = egui::Color32::from_rgb(14, 165, 233);
const FRIEND_COLOR: egui::Color32 = egui::Color32::from_rgb(34, 197, 94);

/// Vòng tròn chữ cái đầu thay cho ảnh đại diện.
pub fn avatar(ui: &mut egui::Ui, initials: &str, online: bool) {
    let size = egui::vec2(32.0, 32.0);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), 16.0, ui.visuals().widgets.inactive.bg_fill);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials,
        egui::FontId::proportional(13.0),
        ui.visuals().text_color(),
    );
    if online {
        let dot = rect.right_bottom() - egui::vec2(4.0, 4.0);
        painter.circle_filled(dot, 4.0, egui::Color32::GREEN);
    }
}

pub fn badge(ui: &mut egui::Ui, badge: Option<Badge>) {
    let Some(badge) = badge else {
        return;
    };

    let (mark, color) = match badge {
        Badge::Developer => ("✔✔", DEVELOPER_COLOR),
        Badge::Friend => ("✔", FRIEND_COLOR),
    };
    ui.colored_label(color, mark).on_hover_text(badge.title());
}
