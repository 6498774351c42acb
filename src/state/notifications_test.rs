use super::*;

// =============================================================
// NotificationState log semantics
// =============================================================

#[test]
fn notification_state_defaults_to_an_empty_log() {
    let state = NotificationState::default();
    assert!(state.entries.is_empty());
}

#[test]
fn push_preserves_receipt_order() {
    let mut state = NotificationState::default();
    state.push(Notification {
        message: "hi".to_owned(),
    });
    state.push(Notification {
        message: "there".to_owned(),
    });

    let texts: Vec<_> = state.entries.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(texts, ["hi", "there"]);
}

#[test]
fn push_keeps_duplicate_messages() {
    let mut state = NotificationState::default();
    state.push(Notification {
        message: "ping".to_owned(),
    });
    state.push(Notification {
        message: "ping".to_owned(),
    });

    assert_eq!(state.entries.len(), 2);
}
