use std::collections::BTreeMap;

use eframe::egui::{self, Color32, FontFamily, FontId, Stroke, TextStyle, Visuals};
use tedbot_app_core::ThemePort;
use tedbot_core::Accent;

pub const COL_BG: Color32 = Color32::from_rgb(14, 14, 16);
pub const COL_BG_DARK: Color32 = Color32::from_rgb(9, 9, 11);
pub const COL_BORDER: Color32 = Color32::from_rgb(39, 39, 42);
pub const COL_TEXT: Color32 = Color32::from_rgb(228, 228, 231);
pub const COL_TEXT_DIM: Color32 = Color32::from_rgb(161, 161, 170);
pub const COL_WARN: Color32 = Color32::from_rgb(250, 204, 21);
pub const COL_DANGER: Color32 = Color32::from_rgb(225, 29, 72);
pub const COL_SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
pub const COL_FALLBACK_ACCENT: Color32 = Color32::from_rgb(145, 70, 255);

/// Theme variables set through [`ThemePort`]; the egui visuals are derived from them.
#[derive(Debug, Default)]
pub struct CssVars {
    vars: BTreeMap<String, String>,
}

impl CssVars {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    fn color(&self, name: &str) -> Option<Color32> {
        let (r, g, b) = Accent::parse_hex(self.get(name)?).ok()?.rgb()?;
        Some(Color32::from_rgb(r, g, b))
    }

    pub fn primary(&self) -> Color32 {
        self.color("--primary").unwrap_or(COL_FALLBACK_ACCENT)
    }

    pub fn ring(&self) -> Color32 {
        self.color("--ring").unwrap_or(COL_FALLBACK_ACCENT)
    }
}

impl ThemePort for CssVars {
    fn set_property(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.to_string());
    }
}

pub fn setup(ctx: &egui::Context, css: &CssVars) {
    let primary = css.primary();
    let ring = css.ring();

    let mut visuals = Visuals::dark();
    visuals.window_fill = COL_BG;
    visuals.panel_fill = COL_BG;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, COL_BORDER);
    visuals.widgets.inactive.bg_fill = COL_BG_DARK;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, COL_TEXT);

    visuals.widgets.hovered.bg_fill = primary.linear_multiply(0.15);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ring);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, primary);

    visuals.widgets.active.bg_fill = primary;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, COL_BG);

    visuals.selection.bg_fill = primary.linear_multiply(0.35);
    visuals.selection.stroke = Stroke::new(1.0, ring);
    visuals.hyperlink_color = primary;

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (TextStyle::Heading, FontId::new(18.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(13.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace)),
        (TextStyle::Button, FontId::new(13.0, FontFamily::Proportional)),
        (TextStyle::Small, FontId::new(10.0, FontFamily::Proportional)),
    ]
    .into();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    ctx.set_style(style);
}
