use tedbot_core::{all_kinds, ActionKind, LogLevel, LogLine, TEDDY_WIP};

use crate::domain::{AppState, ObsStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindOptionVm {
    pub kind: ActionKind,
    pub label: &'static str,
    pub description: Option<&'static str>,
}

/// Entries of the action kind picker, in table order.
pub fn kind_options() -> Vec<KindOptionVm> {
    all_kinds()
        .iter()
        .map(|&kind| KindOptionVm {
            kind,
            label: kind.label(),
            description: kind.description(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRowVm {
    pub trigger_name: String,
    pub trigger_label: String,
    pub kind_label: String,
    pub description: Option<&'static str>,
    pub params_preview: String,
}

pub fn action_rows(state: &AppState) -> Vec<ActionRowVm> {
    state
        .actions
        .iter()
        .map(|a| {
            let kind = a.kind();
            ActionRowVm {
                trigger_name: a.trigger.name.clone(),
                trigger_label: a.trigger.to_string(),
                kind_label: kind
                    .map(|k| k.label().to_string())
                    .unwrap_or_else(|| format!("Unknown ({})", a.action)),
                description: kind.and_then(ActionKind::description),
                params_preview: if a.params.is_null() {
                    String::new()
                } else {
                    a.params.to_string()
                },
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogsVm {
    pub lines: Vec<LogLine>,
    pub hidden_debug_lines: usize,
    pub empty_message: Option<&'static str>,
}

/// Lines of the latest log. Debug and trace lines only show in debug mode.
pub fn logs_vm(state: &AppState) -> LogsVm {
    let Some(content) = state.log.as_deref() else {
        return LogsVm {
            lines: Vec::new(),
            hidden_debug_lines: 0,
            empty_message: Some("No log file found"),
        };
    };

    let (lines, hidden): (Vec<_>, Vec<_>) = LogLine::parse_all(content)
        .into_iter()
        .partition(|l| state.session.debug || l.level.is_none_or(|lvl| lvl >= LogLevel::Info));

    LogsVm {
        empty_message: lines.is_empty().then_some("The log is empty"),
        hidden_debug_lines: hidden.len(),
        lines,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObsVm {
    pub status_label: String,
    pub connected: bool,
    pub hint: Option<&'static str>,
}

pub fn obs_vm(state: &AppState) -> ObsVm {
    match &state.obs {
        ObsStatus::Unknown => ObsVm {
            status_label: "Checking OBS connection...".to_string(),
            connected: false,
            hint: None,
        },
        ObsStatus::Disabled => ObsVm {
            status_label: "OBS Websocket disabled".to_string(),
            connected: false,
            hint: Some(TEDDY_WIP),
        },
        ObsStatus::Disconnected => ObsVm {
            status_label: "Not connected to OBS".to_string(),
            connected: false,
            hint: Some("Check that the OBS websocket server is enabled"),
        },
        ObsStatus::Connected { version } => ObsVm {
            status_label: format!("Connected to OBS {version}"),
            connected: true,
            hint: None,
        },
    }
}
