use tedbot_core::{Action, Notice};

use crate::domain::{ObsStatus, Route};
use crate::error::BackendError;

/// Moves the UI to another screen.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// Shows a transient banner; the implementor owns its timing.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Document-level theme variables (`--primary` and friends).
pub trait ThemePort {
    fn set_property(&mut self, name: &str, value: &str);
}

/// Calls into the bot backend. Runs on worker threads.
pub trait BackendPort: Send + Sync + 'static {
    fn list_actions(&self) -> Result<Vec<Action>, BackendError>;
    fn save_action(&self, action: &Action) -> Result<(), BackendError>;
    fn delete_action(&self, trigger_name: &str) -> Result<(), BackendError>;
    fn latest_log(&self) -> Result<Option<String>, BackendError>;
    fn obs_status(&self) -> Result<ObsStatus, BackendError>;
}
