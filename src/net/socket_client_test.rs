use super::*;

// =============================================================
// Endpoint derivation
// =============================================================

#[test]
fn socket_url_uses_the_fixed_scheme_and_path() {
    assert_eq!(socket_url("localhost:3000"), "ws://localhost:3000/websocket-server");
}

#[test]
fn socket_url_keeps_a_non_default_port() {
    assert_eq!(socket_url("example.com:8443"), "ws://example.com:8443/websocket-server");
}

#[test]
fn socket_url_works_without_a_port() {
    assert_eq!(socket_url("example.com"), "ws://example.com/websocket-server");
}

// =============================================================
// Inbound frame handling
// =============================================================

#[test]
fn apply_notification_text_appends_in_receipt_order() {
    let mut log = NotificationState::default();

    assert!(apply_notification_text(r#"{"message":"hi"}"#, &mut log));
    assert!(apply_notification_text(r#"{"message":"there"}"#, &mut log));

    let texts: Vec<_> = log.entries.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(texts, ["hi", "there"]);
}

#[test]
fn apply_notification_text_drops_a_malformed_payload() {
    let mut log = NotificationState::default();

    assert!(!apply_notification_text("not json", &mut log));

    assert!(log.entries.is_empty());
}

#[test]
fn a_malformed_payload_does_not_block_later_notifications() {
    let mut log = NotificationState::default();

    assert!(apply_notification_text(r#"{"message":"hi"}"#, &mut log));
    assert!(!apply_notification_text(r#"{"broken":"#, &mut log));
    assert!(apply_notification_text(r#"{"message":"there"}"#, &mut log));

    let texts: Vec<_> = log.entries.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(texts, ["hi", "there"]);
}
