use eframe::egui;
use tedbot_app_core::{logs_vm, AppCommand};
use tedbot_core::LogLevel;

use crate::app::UiKernel;
use crate::theme::*;
use crate::utils::{cmd_button, section_label, ButtonVariant};

fn level_color(level: Option<LogLevel>) -> egui::Color32 {
    match level {
        Some(LogLevel::Error) => COL_DANGER,
        Some(LogLevel::Warn) => COL_WARN,
        Some(LogLevel::Info) | None => COL_TEXT,
        Some(LogLevel::Debug | LogLevel::Trace) => COL_TEXT_DIM,
    }
}

pub fn draw(ui: &mut egui::Ui, kernel: &mut UiKernel, accent: egui::Color32) {
    let vm = logs_vm(kernel.state());

    ui.horizontal(|ui| {
        section_label(ui, "LATEST LOG");
        if cmd_button(ui, "Refresh", ButtonVariant::Outline, accent, !kernel.is_busy()).clicked() {
            kernel.dispatch(AppCommand::RefreshLog);
        }
        if vm.hidden_debug_lines > 0 {
            ui.label(
                egui::RichText::new(format!(
                    "{} debug lines hidden",
                    vm.hidden_debug_lines
                ))
                .color(COL_TEXT_DIM),
            );
        }
    });

    if let Some(msg) = vm.empty_message {
        ui.label(egui::RichText::new(msg).color(COL_TEXT_DIM));
        return;
    }

    egui::ScrollArea::vertical()
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for line in &vm.lines {
                ui.label(
                    egui::RichText::new(&line.text)
                        .monospace()
                        .color(level_color(line.level)),
                );
            }
        });
}
