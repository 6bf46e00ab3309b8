use eframe::egui;
use tedbot_app_core::Tab;

/// Returns the tab the user clicked, if it differs from `current`.
pub fn draw(ui: &mut egui::Ui, current: Tab) -> Option<Tab> {
    let mut selected = None;
    ui.horizontal(|ui| {
        for tab in Tab::ALL {
            if ui.selectable_label(tab == current, tab.title()).clicked() && tab != current {
                selected = Some(tab);
            }
        }
    });
    selected
}
