use tedbot_app_core::app_core::{reduce, DomainEvent};
use tedbot_app_core::domain::{AppState, ObsStatus};
use tedbot_app_core::{action_rows, kind_options, logs_vm, obs_vm};
use tedbot_core::{Action, ActionKind, LogLevel, Trigger, TriggerKind, TEDDY_WIP};

#[test]
fn kind_options_follow_the_table() {
    let options = kind_options();
    assert_eq!(options.len(), 5);
    assert_eq!(options[0].label, "Ban User");
    let counter = options
        .iter()
        .find(|o| o.kind == ActionKind::Counter)
        .unwrap();
    assert_eq!(counter.description, None);
}

#[test]
fn action_rows_label_known_and_unknown_kinds() {
    let known = Action::new(
        Trigger::new(TriggerKind::Command, "dice").unwrap(),
        ActionKind::Chance,
        serde_json::json!({ "chance": 0.5 }),
    );
    let unknown = Action {
        trigger: Trigger::new(TriggerKind::Redeem, "dance").unwrap(),
        action: serde_json::json!("Dance"),
        params: serde_json::Value::Null,
    };
    let state = reduce(
        AppState::default(),
        DomainEvent::ActionsLoaded(vec![known, unknown]),
    );

    let rows = action_rows(&state);
    assert_eq!(rows[0].trigger_label, "Redeem: dance");
    assert_eq!(rows[0].kind_label, "Unknown (\"Dance\")");
    assert_eq!(rows[0].params_preview, "");
    assert_eq!(rows[1].trigger_label, "!dice");
    assert_eq!(rows[1].kind_label, "Random");
    assert!(rows[1].description.is_some());
}

#[test]
fn debug_lines_only_show_in_debug_mode() {
    let log = "\
t  INFO tedbot: up
t DEBUG tedbot: details
t  WARN tedbot: careful
";
    let mut state = reduce(AppState::default(), DomainEvent::LogLoaded(Some(log.into())));

    let vm = logs_vm(&state);
    assert_eq!(vm.lines.len(), 2);
    assert_eq!(vm.hidden_debug_lines, 1);
    assert!(vm.lines.iter().all(|l| l.level >= Some(LogLevel::Info)));

    state = reduce(state, DomainEvent::DebugSet(true));
    let vm = logs_vm(&state);
    assert_eq!(vm.lines.len(), 3);
    assert_eq!(vm.hidden_debug_lines, 0);
}

#[test]
fn missing_log_has_a_message() {
    let vm = logs_vm(&AppState::default());
    assert!(vm.lines.is_empty());
    assert_eq!(vm.empty_message, Some("No log file found"));
}

#[test]
fn obs_panel_reflects_status() {
    let mut state = AppState::default();
    assert!(!obs_vm(&state).connected);

    state.obs = ObsStatus::Disabled;
    assert_eq!(obs_vm(&state).hint, Some(TEDDY_WIP));

    state.obs = ObsStatus::Connected {
        version: "30.2".into(),
    };
    let vm = obs_vm(&state);
    assert!(vm.connected);
    assert_eq!(vm.status_label, "Connected to OBS 30.2");
}
