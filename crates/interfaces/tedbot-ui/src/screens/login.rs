use eframe::egui;

use crate::app::UiKernel;
use crate::theme::COL_TEXT_DIM;
use crate::utils::{cmd_button, ButtonVariant};

#[derive(Default)]
pub struct LoginForm {
    username: String,
}

pub fn draw(ui: &mut egui::Ui, kernel: &mut UiKernel, form: &mut LoginForm, accent: egui::Color32) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.25);
        ui.heading("Log in to Twitch");
        ui.label(egui::RichText::new("Your Twitch username").color(COL_TEXT_DIM));
        ui.add_space(8.0);

        let edit = ui.add(
            egui::TextEdit::singleline(&mut form.username)
                .hint_text("username")
                .desired_width(240.0),
        );
        let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let name = form.username.trim().to_string();
        let can_submit = !name.is_empty();
        let clicked = cmd_button(ui, "Login", ButtonVariant::Primary, accent, can_submit).clicked();

        if can_submit && (clicked || submitted) {
            kernel.register_login(name);
            form.username.clear();
        }
    });
}
