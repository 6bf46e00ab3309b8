use std::collections::HashSet;

use tedbot_core::{all_kinds, description_for, label_for, Action, ActionKind};

#[test]
fn every_kind_has_a_label_and_appears_once() {
    let kinds = all_kinds();
    assert_eq!(kinds.len(), ActionKind::COUNT);

    let unique: HashSet<_> = kinds.iter().collect();
    assert_eq!(unique.len(), kinds.len());

    for (i, kind) in kinds.iter().enumerate() {
        assert_eq!(kind.ordinal(), i);
        assert!(!label_for(*kind).is_empty());
        assert_eq!(kind.name().parse::<ActionKind>(), Ok(*kind));
    }
}

#[test]
fn order_is_stable() {
    assert_eq!(
        all_kinds(),
        &[
            ActionKind::Ban,
            ActionKind::Chance,
            ActionKind::ChatMsg,
            ActionKind::Counter,
            ActionKind::Timeout,
        ]
    );
    let labels: Vec<_> = all_kinds().iter().map(|k| label_for(*k)).collect();
    assert_eq!(
        labels,
        [
            "Ban User",
            "Random",
            "Chat-Message",
            "Count something",
            "Timeout User"
        ]
    );
}

#[test]
fn counter_has_no_description() {
    assert_eq!(description_for(ActionKind::Counter), None);
    assert_eq!(
        description_for(ActionKind::Ban),
        Some(
            "Other: A user specified by the one activating the action. User: The one activating the action"
        )
    );
    assert_eq!(
        description_for(ActionKind::Timeout),
        description_for(ActionKind::Ban)
    );
}

#[test]
fn actions_keep_their_payload_opaque() {
    let raw = serde_json::json!({
        "trigger": { "trigger": "redeem", "name": "hydrate" },
        "action": { "ChatMsg": "drink water!" },
        "params": { "anything": [1, 2, 3] }
    });

    let action: Action = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(action.kind(), Some(ActionKind::ChatMsg));
    assert_eq!(serde_json::to_value(&action).unwrap(), raw);
}
