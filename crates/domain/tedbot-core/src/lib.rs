pub mod accent;
pub mod actions;
pub mod classes;
pub mod error;
pub mod logs;

pub use accent::{Accent, AccentError, ACCENT_PROPERTIES};
pub use actions::{
    all_kinds, description_for, label_for, Action, ActionKind, Trigger, TriggerError, TriggerKind,
    UnknownActionKind, TEDDY_WIP,
};
pub use classes::{merge_classes, ClassValue};
pub use error::{ErrorKind, Notice, Severity};
pub use logs::{latest_log_name, LogFileName, LogLevel, LogLine, UnknownLogLevel};
