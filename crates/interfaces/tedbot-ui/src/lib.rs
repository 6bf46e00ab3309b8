mod app;
mod components;
mod router;
mod screens;
mod theme;
mod toasts;
mod utils;

use std::path::PathBuf;

use tedbot_app_core::{AppState, AppStore, LocalBackend};
use tedbot_core::Accent;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

pub use router::UiRouter;
pub use theme::CssVars;
pub use toasts::Toasts;

/// Start-up options, usually parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct UiOptions {
    pub debug: bool,
    pub accent: Option<Accent>,
    pub log_dir: Option<PathBuf>,
}

fn setup_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tedbot_config::log_filter(debug)));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn run(options: UiOptions) -> eframe::Result<()> {
    setup_logging(options.debug);

    let native = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([640.0, 420.0])
            .with_title("Tedbot"),
        ..Default::default()
    };

    eframe::run_native(
        "Tedbot",
        native,
        Box::new(move |cc| {
            let accent = match options.accent {
                Some(accent) => accent,
                None => Accent::parse_hex(tedbot_config::DEFAULT_ACCENT_HEX)?,
            };
            let mut css = CssVars::default();
            tedbot_app_core::set_accent(&mut css, &accent);
            theme::setup(&cc.egui_ctx, &css);

            let kernel = app::UiKernel::new(
                AppStore::new(AppState::new(options.debug)),
                UiRouter::default(),
                Toasts::default(),
                LocalBackend::new(options.log_dir),
            );
            tracing::info!(debug = options.debug, "dashboard started");

            Ok(Box::new(app::TedbotUiApp::new(kernel, css)))
        }),
    )
}
