use crate::theme::*;
use eframe::egui;
use eframe::egui::Color32;

pub fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(11.0)
            .color(COL_TEXT_DIM)
            .strong(),
    );
}

pub enum ButtonVariant {
    Primary,
    Danger,
    Outline,
}

pub fn cmd_button(
    ui: &mut egui::Ui,
    label: &str,
    variant: ButtonVariant,
    accent: Color32,
    enabled: bool,
) -> egui::Response {
    let (fill, stroke_col, text_col) = match variant {
        ButtonVariant::Primary => (accent, accent, COL_BG_DARK),
        ButtonVariant::Danger => (Color32::TRANSPARENT, COL_DANGER, COL_DANGER),
        ButtonVariant::Outline => (Color32::TRANSPARENT, accent, accent),
    };

    let text = egui::RichText::new(label).color(if enabled { text_col } else { COL_TEXT_DIM });
    let btn = egui::Button::new(text)
        .min_size(egui::vec2(72.0, 24.0))
        .fill(if enabled { fill } else { Color32::TRANSPARENT })
        .stroke(egui::Stroke::new(
            1.0,
            if enabled { stroke_col } else { COL_BORDER },
        ));

    ui.add_enabled(enabled, btn)
}
