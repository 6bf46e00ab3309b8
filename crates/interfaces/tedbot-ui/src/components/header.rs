use crate::theme::*;
use crate::utils::{cmd_button, ButtonVariant};
use eframe::egui;

pub struct HeaderResponse {
    pub logout_clicked: bool,
    pub debug_changed: Option<bool>,
}

pub fn draw(
    ui: &mut egui::Ui,
    username: Option<&str>,
    is_busy: bool,
    debug: bool,
    accent: egui::Color32,
) -> HeaderResponse {
    let mut logout_clicked = false;
    let mut debug_changed = None;

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("TEDBOT")
                .size(14.0)
                .extra_letter_spacing(2.0)
                .strong()
                .color(COL_TEXT),
        );
        if let Some(name) = username {
            ui.label(egui::RichText::new(name).color(accent));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if username.is_some() {
                logout_clicked = cmd_button(ui, "Logout", ButtonVariant::Outline, accent, true)
                    .clicked();
            }

            let mut dbg = debug;
            if ui.checkbox(&mut dbg, "Debug").changed() {
                debug_changed = Some(dbg);
            }

            if is_busy {
                ui.add(egui::Spinner::new());
            }
        });
    });

    HeaderResponse {
        logout_clicked,
        debug_changed,
    }
}
