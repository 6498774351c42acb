use super::*;

// =============================================================
// GreetingSender handle lifecycle
// =============================================================

#[test]
fn send_without_connection_is_a_silent_noop() {
    let sender = GreetingSender::default();
    assert!(!sender.send(&Greeting::hello()));
}

#[test]
fn send_transmits_exactly_the_fixed_greeting_payload() {
    let (tx, mut rx) = futures::channel::mpsc::unbounded::<String>();
    let sender = GreetingSender::connected(tx);

    assert!(sender.send(&Greeting::hello()));

    let frame = rx.try_next().expect("channel open").expect("one frame");
    assert_eq!(frame, r#"{"message":"The message"}"#);

    // Exactly one frame per send action.
    assert!(rx.try_next().is_err());
}

#[test]
fn cleared_handle_stops_transmitting() {
    let (tx, mut rx) = futures::channel::mpsc::unbounded::<String>();
    let mut sender = GreetingSender::connected(tx);

    assert!(sender.send(&Greeting::hello()));
    sender.clear();
    assert!(!sender.send(&Greeting::hello()));

    // Only the pre-clear frame was transmitted; dropping the handle closed
    // the channel.
    assert!(rx.try_next().expect("buffered frame").is_some());
    assert!(rx.try_next().expect("channel closed").is_none());
}

#[test]
fn send_reports_failure_when_transport_side_is_gone() {
    let (tx, rx) = futures::channel::mpsc::unbounded::<String>();
    drop(rx);
    let sender = GreetingSender::connected(tx);

    assert!(!sender.send(&Greeting::hello()));
}
