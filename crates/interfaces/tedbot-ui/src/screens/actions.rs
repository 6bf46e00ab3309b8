use eframe::egui;
use serde_json::Value;
use tedbot_app_core::{action_rows, kind_options, ActionRowVm, AppCommand};
use tedbot_core::{Action, ActionKind, Trigger, TriggerKind};

use crate::app::UiKernel;
use crate::theme::*;
use crate::utils::{cmd_button, section_label, ButtonVariant};

pub struct ActionForm {
    trigger: TriggerKind,
    name: String,
    kind: ActionKind,
    params: String,
    error: Option<String>,
}

impl Default for ActionForm {
    fn default() -> Self {
        Self {
            trigger: TriggerKind::Command,
            name: String::new(),
            kind: ActionKind::ChatMsg,
            params: String::new(),
            error: None,
        }
    }
}

impl ActionForm {
    fn build(&self) -> Result<Action, String> {
        let trigger = Trigger::new(self.trigger, self.name.as_str()).map_err(|e| e.to_string())?;
        let params = if self.params.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&self.params).map_err(|e| format!("Invalid parameters: {e}"))?
        };
        Ok(Action::new(trigger, self.kind, params))
    }
}

pub fn draw(ui: &mut egui::Ui, kernel: &mut UiKernel, form: &mut ActionForm, accent: egui::Color32) {
    let rows = action_rows(kernel.state());
    let mut delete = None;

    ui.horizontal(|ui| {
        section_label(ui, "CONFIGURED ACTIONS");
        if cmd_button(ui, "Refresh", ButtonVariant::Outline, accent, !kernel.is_busy()).clicked() {
            kernel.dispatch(AppCommand::RefreshActions);
        }
    });

    if rows.is_empty() {
        ui.label(egui::RichText::new("No actions yet").color(COL_TEXT_DIM));
    }

    egui::ScrollArea::vertical()
        .max_height(ui.available_height() * 0.5)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for row in &rows {
                draw_row(ui, row, accent, &mut delete);
            }
        });

    if let Some(name) = delete {
        kernel.dispatch(AppCommand::DeleteAction(name));
    }

    ui.separator();
    section_label(ui, "NEW ACTION");
    draw_form(ui, kernel, form, accent);
}

fn draw_row(ui: &mut egui::Ui, row: &ActionRowVm, accent: egui::Color32, delete: &mut Option<String>) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(&row.trigger_label).strong().color(COL_TEXT));
        ui.label(egui::RichText::new(&row.kind_label).color(accent));
        if !row.params_preview.is_empty() {
            ui.label(
                egui::RichText::new(&row.params_preview)
                    .monospace()
                    .color(COL_TEXT_DIM),
            );
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if cmd_button(ui, "Delete", ButtonVariant::Danger, accent, true).clicked() {
                *delete = Some(row.trigger_name.clone());
            }
        });
    });
    if let Some(description) = row.description {
        ui.collapsing(format!("About {}", row.kind_label), |ui| {
            ui.label(egui::RichText::new(description).color(COL_TEXT_DIM));
        });
    }
}

fn draw_form(ui: &mut egui::Ui, kernel: &mut UiKernel, form: &mut ActionForm, accent: egui::Color32) {
    let options = kind_options();

    ui.horizontal(|ui| {
        egui::ComboBox::from_id_salt("trigger-kind")
            .selected_text(match form.trigger {
                TriggerKind::Command => "Command",
                TriggerKind::Redeem => "Redeem",
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut form.trigger, TriggerKind::Command, "Command");
                ui.selectable_value(&mut form.trigger, TriggerKind::Redeem, "Redeem");
            });
        ui.add(
            egui::TextEdit::singleline(&mut form.name)
                .hint_text(match form.trigger {
                    TriggerKind::Command => "command name",
                    TriggerKind::Redeem => "redeem name",
                })
                .desired_width(200.0),
        );
    });

    egui::ComboBox::from_id_salt("action-kind")
        .selected_text(form.kind.label())
        .show_ui(ui, |ui| {
            for option in &options {
                ui.selectable_value(&mut form.kind, option.kind, option.label);
            }
        });

    if let Some(description) = form.kind.description() {
        ui.collapsing("Description", |ui| {
            ui.label(egui::RichText::new(description).color(COL_TEXT_DIM));
        });
    }

    ui.add(
        egui::TextEdit::multiline(&mut form.params)
            .code_editor()
            .hint_text("parameters (JSON)")
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    );

    if let Some(err) = &form.error {
        ui.label(egui::RichText::new(err).color(COL_DANGER));
    }

    if cmd_button(ui, "Save", ButtonVariant::Primary, accent, !form.name.trim().is_empty()).clicked()
    {
        match form.build() {
            Ok(action) => {
                kernel.dispatch(AppCommand::SaveAction(action));
                *form = ActionForm::default();
            }
            Err(err) => form.error = Some(err),
        }
    }
}
