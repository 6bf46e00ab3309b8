//! Central configuration constants for the dashboard.

/// How long a notification toast stays on screen, in milliseconds.
pub const NOTIFICATION_DURATION_MS: u64 = 3_000;

/// Path of the login screen.
pub const LOGIN_ROUTE_PATH: &str = "/";

/// Path of the bot dashboard, the target of a successful login.
pub const BOT_ROUTE_PATH: &str = "/bot";

/// File name prefix of the backend's hourly rolling log files.
pub const LOG_FILE_PREFIX: &str = "tedbot_log";

/// Accent used until the OS color scheme (or the user) provides one. Twitch purple.
pub const DEFAULT_ACCENT_HEX: &str = "#9146ff";

/// Log filter when neither `RUST_LOG` nor the debug flag says otherwise.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Log filter when the debug flag is on.
pub const DEBUG_LOG_FILTER: &str = "debug";

/// Capacity of the worker -> UI event channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Picks the log filter for the given debug flag.
pub fn log_filter(debug: bool) -> &'static str {
    if debug {
        DEBUG_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    }
}
