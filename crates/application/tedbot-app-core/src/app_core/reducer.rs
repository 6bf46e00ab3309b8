use crate::domain::AppState;

use super::events::DomainEvent;

pub fn reduce(mut state: AppState, ev: DomainEvent) -> AppState {
    match ev {
        DomainEvent::LoggedIn(username) => state.session.set_username(Some(username)),

        // Nothing from the previous account survives a logout.
        DomainEvent::LoggedOut => {
            return AppState::new(state.session.debug);
        }

        DomainEvent::TabSelected(tab) => state.session.current_tab = tab,
        DomainEvent::DebugSet(debug) => state.session.debug = debug,

        DomainEvent::ActionsLoaded(mut actions) => {
            actions.sort_by(|a, b| a.trigger.name.cmp(&b.trigger.name));
            state.actions = actions;
        }

        DomainEvent::ActionSaved(action) => {
            if let Some(ix) = state
                .actions
                .iter()
                .position(|a| a.trigger.name == action.trigger.name)
            {
                state.actions[ix] = action;
            } else {
                state.actions.push(action);
            }
        }

        DomainEvent::ActionDeleted(name) => state.actions.retain(|a| a.trigger.name != name),

        DomainEvent::LogLoaded(log) => state.log = log,
        DomainEvent::ObsStatusLoaded(status) => state.obs = status,

        // Surfaced as a notice by the kernel; nothing to store.
        DomainEvent::BackendFailed(_) => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Tab;
    use tedbot_core::{Action, ActionKind, Trigger, TriggerKind};

    fn action(name: &str, kind: ActionKind) -> Action {
        Action::new(
            Trigger::new(TriggerKind::Command, name).unwrap(),
            kind,
            serde_json::Value::Null,
        )
    }

    #[test]
    fn saved_action_replaces_same_trigger_name() {
        let state = reduce(
            AppState::default(),
            DomainEvent::ActionsLoaded(vec![action("lurk", ActionKind::ChatMsg)]),
        );
        let state = reduce(
            state,
            DomainEvent::ActionSaved(action("lurk", ActionKind::Counter)),
        );
        let state = reduce(
            state,
            DomainEvent::ActionSaved(action("dice", ActionKind::Chance)),
        );

        assert_eq!(state.actions.len(), 2);
        assert_eq!(state.actions[0].kind(), Some(ActionKind::Counter));

        let state = reduce(state, DomainEvent::ActionDeleted("lurk".into()));
        assert_eq!(state.actions.len(), 1);
        assert_eq!(state.actions[0].trigger.name, "dice");
    }

    #[test]
    fn logout_resets_everything_but_debug() {
        let mut state = AppState::new(true);
        state = reduce(state, DomainEvent::LoggedIn("alice".into()));
        state = reduce(state, DomainEvent::TabSelected(Tab::Logs));
        state = reduce(state, DomainEvent::LogLoaded(Some("line".into())));

        let state = reduce(state, DomainEvent::LoggedOut);
        assert_eq!(state.session.username(), None);
        assert!(!state.session.logged_in());
        assert_eq!(state.session.current_tab, Tab::Actions);
        assert!(state.session.debug);
        assert_eq!(state.log, None);
    }

    #[test]
    fn loaded_actions_are_sorted_by_trigger() {
        let state = reduce(
            AppState::default(),
            DomainEvent::ActionsLoaded(vec![
                action("so", ActionKind::ChatMsg),
                action("ban", ActionKind::Ban),
            ]),
        );
        let names: Vec<_> = state.actions.iter().map(|a| a.trigger.name.as_str()).collect();
        assert_eq!(names, ["ban", "so"]);
    }
}
