use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error categories the backend reports to the dashboard.
///
/// Identifiers this build does not know deserialize to [`ErrorKind::Unknown`],
/// so a newer backend never breaks the mapping.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TokenLoad,
    TokenSave,
    TwitchAuth,
    GetColorScheme,
    ObsWs,
    #[default]
    Unknown,
}

impl ErrorKind {
    pub const fn name(self) -> &'static str {
        match self {
            ErrorKind::TokenLoad => "TokenLoad",
            ErrorKind::TokenSave => "TokenSave",
            ErrorKind::TwitchAuth => "TwitchAuth",
            ErrorKind::GetColorScheme => "GetColorScheme",
            ErrorKind::ObsWs => "ObsWS",
            ErrorKind::Unknown => "Unknown",
        }
    }

    /// Total over all strings.
    pub fn from_name(name: &str) -> Self {
        match name {
            "TokenLoad" => ErrorKind::TokenLoad,
            "TokenSave" => ErrorKind::TokenSave,
            "TwitchAuth" => ErrorKind::TwitchAuth,
            "GetColorScheme" => ErrorKind::GetColorScheme,
            "ObsWS" => ErrorKind::ObsWs,
            _ => ErrorKind::Unknown,
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            ErrorKind::TokenLoad | ErrorKind::TokenSave => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::TokenLoad => "Error loading the token from storage. Please log in again",
            ErrorKind::TokenSave => {
                "Error saving the login. You will have to log in again next time"
            }
            ErrorKind::TwitchAuth => "Error logging into Twitch",
            _ => "An unknown error occured. Go slap Teddy",
        }
    }

    pub fn notice(self) -> Notice {
        Notice::new(self.severity(), self.message())
    }
}

impl Serialize for ErrorKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ErrorKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// A transient, auto-dismissing banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
    pub duration: Duration,
}

impl Notice {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            duration: Duration::from_millis(tedbot_config::NOTIFICATION_DURATION_MS),
        }
    }
}
