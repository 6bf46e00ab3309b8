use tedbot_core::Action;

use crate::domain::Tab;

#[derive(Debug, Clone)]
pub enum AppCommand {
    // Session
    RegisterLogin(String),
    Logout,
    SelectTab(Tab),
    SetDebug(bool),

    // Actions panel
    RefreshActions,
    SaveAction(Action),
    DeleteAction(String),

    // Logs / OBS panels
    RefreshLog,
    RefreshObs,
}
