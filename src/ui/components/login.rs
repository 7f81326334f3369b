use eframe::egui;

use crate::ui::state::{Action, AppState, Screen};

/// Login and account-request forms.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> Option<Action> {
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.heading("FriendsMess");
        ui.label(egui::RichText::new("Messenger for the chosen few").weak());
        ui.add_space(20.0);

        let registering = state.screen == Screen::Registration;
        if registering {
            ui.strong("Account request");
        }

        ui.label("Login");
        let login = ui.add(
            egui::TextEdit::singleline(&mut state.credentials.username)
                .hint_text(if registering { "Choose a login" } else { "Enter login" }),
        );
        ui.label("Password");
        let password = ui.add(
            egui::TextEdit::singleline(&mut state.credentials.password)
                .password(true)
                .hint_text(if registering { "Choose a password" } else { "Enter password" }),
        );
        let submitted = (login.lost_focus() || password.lost_focus())
            && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.add_space(12.0);
        if registering {
            if ui.button("Send request").clicked() || submitted {
                action = Some(Action::SubmitRegistration);
            }
            if ui.button("Back").clicked() {
                action = Some(Action::BackToLogin);
            }
        } else {
            let busy = state.is_logging_in();
            let label = if busy { "Signing in..." } else { "Sign in" };
            if ui.add_enabled(!busy, egui::Button::new(label)).clicked() || (submitted && !busy) {
                action = Some(Action::SubmitLogin);
            }
            if ui.button("Request an account").clicked() {
                action = Some(Action::OpenRegistration);
            }
        }
    });

    action
}
