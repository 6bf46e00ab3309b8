use tedbot_core::Action;

use crate::domain::{ObsStatus, Tab};
use crate::error::BackendError;

#[derive(Debug, Clone)]
pub enum DomainEvent {
    // Session
    LoggedIn(String),
    LoggedOut,
    TabSelected(Tab),
    DebugSet(bool),

    // Backend results
    ActionsLoaded(Vec<Action>),
    ActionSaved(Action),
    ActionDeleted(String),
    LogLoaded(Option<String>),
    ObsStatusLoaded(ObsStatus),

    // User-visible errors
    BackendFailed(BackendError),
}
