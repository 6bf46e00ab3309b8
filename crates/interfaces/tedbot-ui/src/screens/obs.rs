use eframe::egui;
use tedbot_app_core::{obs_vm, AppCommand};

use crate::app::UiKernel;
use crate::theme::*;
use crate::utils::{cmd_button, section_label, ButtonVariant};

pub fn draw(ui: &mut egui::Ui, kernel: &mut UiKernel, accent: egui::Color32) {
    let vm = obs_vm(kernel.state());

    section_label(ui, "OBS CONNECTION");
    ui.horizontal(|ui| {
        let color = if vm.connected { COL_SUCCESS } else { COL_WARN };
        ui.label(egui::RichText::new(&vm.status_label).color(color));
        if cmd_button(ui, "Refresh", ButtonVariant::Outline, accent, !kernel.is_busy()).clicked() {
            kernel.dispatch(AppCommand::RefreshObs);
        }
    });

    if let Some(hint) = vm.hint {
        ui.label(egui::RichText::new(hint).color(COL_TEXT_DIM));
    }
}
