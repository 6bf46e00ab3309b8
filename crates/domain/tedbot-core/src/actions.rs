//! Action model shared with the backend, and the display table for action kinds.
//!
//! The payload of an [`Action`] stays opaque JSON: the backend owns its shape.
//! Only the kind tag is read here, to pick a label for it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const TEDDY_WIP: &str = "Teddy is still working on it 🧸⚙️";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerKind {
    Command,
    Redeem,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TriggerError {
    #[error("trigger name cannot be empty")]
    EmptyName,
}

/// The chat event that fires an action: a `!command` or a channel points redeem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    pub trigger: TriggerKind,
    pub name: String,
}

impl Trigger {
    pub fn new(trigger: TriggerKind, name: impl Into<String>) -> Result<Self, TriggerError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(TriggerError::EmptyName);
        }
        Ok(Self { trigger, name })
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.trigger {
            TriggerKind::Command => write!(f, "!{}", self.name),
            TriggerKind::Redeem => write!(f, "Redeem: {}", self.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub trigger: Trigger,
    pub action: Value,
    pub params: Value,
}

impl Action {
    pub fn new(trigger: Trigger, kind: ActionKind, params: Value) -> Self {
        Self {
            trigger,
            action: Value::String(kind.name().to_string()),
            params,
        }
    }

    /// Reads the kind tag from `action`, either `"Ban"` or `{"Ban": ...}`.
    pub fn kind(&self) -> Option<ActionKind> {
        match &self.action {
            Value::String(tag) => tag.parse().ok(),
            Value::Object(map) if map.len() == 1 => map.keys().next()?.parse().ok(),
            _ => None,
        }
    }
}

// The enum and its selection list come from one variant list, so a new kind
// cannot be left out of `all_kinds()`.
macro_rules! action_kinds {
    ($($kind:ident),+ $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum ActionKind {
            $($kind),+
        }

        const ALL_KINDS: &[ActionKind] = &[$(ActionKind::$kind),+];
    };
}

action_kinds! {
    Ban,
    Chance,
    ChatMsg,
    Counter,
    Timeout,
}

// ALL_KINDS must list every kind once, in declaration order.
const _: () = {
    let mut i = 0;
    while i < ALL_KINDS.len() {
        assert!(ALL_KINDS[i].ordinal() == i);
        i += 1;
    }
};

impl ActionKind {
    /// Number of kinds.
    pub const COUNT: usize = ALL_KINDS.len();

    /// Position in [`all_kinds`].
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Identifier used by the backend.
    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::Ban => "Ban",
            ActionKind::Chance => "Chance",
            ActionKind::ChatMsg => "ChatMsg",
            ActionKind::Counter => "Counter",
            ActionKind::Timeout => "Timeout",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ActionKind::Ban => "Ban User",
            ActionKind::Chance => "Random",
            ActionKind::ChatMsg => "Chat-Message",
            ActionKind::Counter => "Count something",
            ActionKind::Timeout => "Timeout User",
        }
    }

    pub const fn description(self) -> Option<&'static str> {
        match self {
            ActionKind::Ban | ActionKind::Timeout => Some(
                "Other: A user specified by the one activating the action. User: The one activating the action",
            ),
            ActionKind::Chance => Some(
                "Randomly executes one of the two options with the chance given. You can technically chain them into multiple randoms, but the UI is really not made for it.",
            ),
            ActionKind::ChatMsg => Some(
                "Say a message in chat. You can use {a..b} to generate a random number, in the range of `a` up to and including `b`. For example {1..6} would be like rolling a 6-sided dice.",
            ),
            ActionKind::Counter => None,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown action kind: {0}")]
pub struct UnknownActionKind(pub String);

impl FromStr for ActionKind {
    type Err = UnknownActionKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_KINDS
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| UnknownActionKind(s.to_string()))
    }
}

pub fn label_for(kind: ActionKind) -> &'static str {
    kind.label()
}

pub fn description_for(kind: ActionKind) -> Option<&'static str> {
    kind.description()
}

/// Every kind, in the order selection lists show them.
pub fn all_kinds() -> &'static [ActionKind] {
    ALL_KINDS
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_is_read_from_string_or_single_key_object() {
        let trigger = Trigger::new(TriggerKind::Command, "ban").unwrap();

        let plain = Action::new(trigger.clone(), ActionKind::Ban, json!({}));
        assert_eq!(plain.kind(), Some(ActionKind::Ban));

        let tagged = Action {
            trigger: trigger.clone(),
            action: json!({ "ChatMsg": "hello" }),
            params: Value::Null,
        };
        assert_eq!(tagged.kind(), Some(ActionKind::ChatMsg));

        let unknown = Action {
            trigger,
            action: json!({ "Dance": 1, "Sing": 2 }),
            params: Value::Null,
        };
        assert_eq!(unknown.kind(), None);
    }

    #[test]
    fn trigger_rejects_blank_names() {
        assert_eq!(
            Trigger::new(TriggerKind::Redeem, "   "),
            Err(TriggerError::EmptyName)
        );
        let t = Trigger::new(TriggerKind::Redeem, " hydrate ").unwrap();
        assert_eq!(t.name, "hydrate");
        assert_eq!(t.to_string(), "Redeem: hydrate");
    }

    #[test]
    fn trigger_kind_serializes_lowercase() {
        let t = Trigger::new(TriggerKind::Command, "dice").unwrap();
        assert_eq!(
            serde_json::to_value(&t).unwrap(),
            json!({ "trigger": "command", "name": "dice" })
        );
    }

    #[test]
    fn ordinals_index_the_selection_list() {
        for (i, kind) in all_kinds().iter().enumerate() {
            assert_eq!(kind.ordinal(), i);
        }
        assert_eq!(all_kinds().len(), ActionKind::COUNT);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for kind in all_kinds() {
            assert_eq!(kind.name().parse::<ActionKind>(), Ok(*kind));
        }
        assert!("Dance".parse::<ActionKind>().is_err());
    }
}
