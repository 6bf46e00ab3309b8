use std::time::{Duration, Instant};

use eframe::egui;
use tedbot_app_core::Notifier;
use tedbot_core::{Notice, Severity};

use crate::theme::{COL_BG_DARK, COL_DANGER, COL_TEXT, COL_WARN};

struct Toast {
    notice: Notice,
    expires_at: Instant,
}

/// Stack of transient banners in the bottom right corner.
#[derive(Default)]
pub struct Toasts {
    active: Vec<Toast>,
}

impl Toasts {
    pub fn expire(&mut self, now: Instant) {
        self.active.retain(|t| t.expires_at > now);
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn draw(&self, ctx: &egui::Context, now: Instant) {
        let Some(next_expiry) = self.active.iter().map(|t| t.expires_at).min() else {
            return;
        };
        ctx.request_repaint_after(next_expiry.saturating_duration_since(now));

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-12.0, -12.0))
            .show(ctx, |ui| {
                for toast in &self.active {
                    let accent = match toast.notice.severity {
                        Severity::Warning => COL_WARN,
                        Severity::Error => COL_DANGER,
                    };
                    egui::Frame::new()
                        .fill(COL_BG_DARK)
                        .stroke(egui::Stroke::new(1.0, accent))
                        .inner_margin(egui::Margin::same(8))
                        .show(ui, |ui| {
                            ui.set_max_width(320.0);
                            ui.label(egui::RichText::new(&toast.notice.message).color(COL_TEXT));
                        });
                    ui.add_space(4.0);
                }
            });
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, notice: Notice) {
        let ttl: Duration = notice.duration;
        self.active.push(Toast {
            notice,
            expires_at: Instant::now() + ttl,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tedbot_core::ErrorKind;

    #[test]
    fn toasts_expire_after_their_duration() {
        let mut toasts = Toasts::default();
        tedbot_app_core::notify(&mut toasts, ErrorKind::TwitchAuth);
        assert!(!toasts.is_empty());

        toasts.expire(Instant::now() + Duration::from_millis(2_900));
        assert!(!toasts.is_empty());

        toasts.expire(Instant::now() + Duration::from_millis(3_100));
        assert!(toasts.is_empty());
    }
}
