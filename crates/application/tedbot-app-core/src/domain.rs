use serde::{Deserialize, Serialize};
use tedbot_core::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Actions,
    Obs,
    Logs,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Actions, Tab::Obs, Tab::Logs];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Actions => "Actions",
            Tab::Obs => "OBS",
            Tab::Logs => "Logs",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Login,
    Bot,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => tedbot_config::LOGIN_ROUTE_PATH,
            Route::Bot => tedbot_config::BOT_ROUTE_PATH,
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        [Route::Login, Route::Bot]
            .into_iter()
            .find(|r| r.path() == path)
    }
}

/// Login and dashboard state of the running UI.
///
/// `username` has no public setter: the reducer is the only writer, and
/// [`SessionState::logged_in`] is computed from it on every read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    username: Option<String>,
    pub current_tab: Tab,
    pub debug: bool,
}

impl SessionState {
    pub fn new(debug: bool) -> Self {
        Self {
            debug,
            ..Default::default()
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn logged_in(&self) -> bool {
        self.username.is_some()
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObsStatus {
    /// Not asked yet.
    #[default]
    Unknown,
    Disabled,
    Disconnected,
    Connected {
        version: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub session: SessionState,
    pub actions: Vec<Action>,
    pub log: Option<String>,
    pub obs: ObsStatus,
}

impl AppState {
    pub fn new(debug: bool) -> Self {
        Self {
            session: SessionState::new(debug),
            ..Default::default()
        }
    }
}
