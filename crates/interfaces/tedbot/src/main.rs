#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use clap::Parser;
use directories::ProjectDirs;
use tedbot_core::Accent;
use tedbot_ui::UiOptions;

#[derive(Parser)]
#[command(author, version, about = "Dashboard for the Tedbot Twitch bot")]
struct Cli {
    /// Start with debug mode on
    #[arg(short, long, env = "TEDBOT_DEBUG")]
    debug: bool,
    /// Accent color as #rrggbb, instead of the OS scheme color
    #[arg(long, env = "TEDBOT_ACCENT", value_parser = Accent::parse_hex)]
    accent: Option<Accent>,
    /// Directory holding the bot's log files
    #[arg(long, env = "TEDBOT_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

fn default_log_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tedbot").map(|dirs| dirs.config_dir().join("logs"))
}

fn main() {
    let cli = Cli::parse();

    let options = UiOptions {
        debug: cli.debug,
        accent: cli.accent,
        log_dir: cli.log_dir.or_else(default_log_dir),
    };

    if let Err(err) = tedbot_ui::run(options) {
        eprintln!("Tedbot failed: {err}");
        std::process::exit(1);
    }
}
