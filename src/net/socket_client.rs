//! WebSocket client for the greeting exchange.
//!
//! Manages a single connection lifecycle: open the transport, forward
//! outgoing greetings from the shared sender channel, append decoded
//! notifications to the log, and clear the handle when the transport
//! closes. There is no automatic reconnection; a new connect action starts
//! a fresh lifecycle and replaces the installed handle.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "hydrate")]` since
//! it requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! A missing WebSocket capability surfaces a blocking user notice and
//! aborts the connect action. Malformed inbound payloads are logged and
//! dropped; the connection stays open.

#[cfg(test)]
#[path = "socket_client_test.rs"]
mod socket_client_test;

#[cfg(feature = "hydrate")]
use crate::app::GreetingSender;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::decode_notification;
#[cfg(feature = "hydrate")]
use crate::state::connection::{ConnectionState, ConnectionStatus};
#[cfg(any(test, feature = "hydrate"))]
use crate::state::notifications::NotificationState;
#[cfg(feature = "hydrate")]
use leptos::prelude::Update;

/// Fixed path of the websocket endpoint on the hosting server.
pub const SOCKET_PATH: &str = "/websocket-server";

/// Build the websocket URL for the given hosting-page host.
///
/// The scheme is fixed to `ws` and the host is used verbatim, including
/// any non-default port.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn socket_url(host: &str) -> String {
    format!("ws://{host}{SOCKET_PATH}")
}

/// Whether the runtime environment exposes a WebSocket implementation.
#[cfg(feature = "hydrate")]
fn websocket_supported() -> bool {
    web_sys::window().is_some_and(|window| {
        js_sys::Reflect::has(&window, &wasm_bindgen::JsValue::from_str("WebSocket"))
            .unwrap_or(false)
    })
}

/// Decode one inbound text frame and append it to the notification log.
///
/// Returns `false` when the payload is malformed; the frame is dropped and
/// the log is left untouched.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn apply_notification_text(raw: &str, notifications: &mut NotificationState) -> bool {
    match decode_notification(raw) {
        Ok(notification) => {
            notifications.push(notification);
            true
        }
        Err(e) => {
            leptos::logging::warn!("malformed notification payload: {e}");
            false
        }
    }
}

/// Open a websocket connection to the hosting server.
///
/// If the environment lacks WebSocket support, shows a blocking notice and
/// performs no connection attempt. Otherwise spawns the connection
/// lifecycle as a local task. Connecting while a handle is already
/// installed replaces it; the previous transport is left to wind down on
/// its own.
#[cfg(feature = "hydrate")]
pub fn connect(
    connection: leptos::prelude::RwSignal<ConnectionState>,
    notifications: leptos::prelude::RwSignal<NotificationState>,
    sender: leptos::prelude::RwSignal<GreetingSender>,
) {
    if !websocket_supported() {
        leptos::logging::warn!("WebSocket is not supported by this environment");
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message("WebSocket NOT supported by your Browser!");
        }
        return;
    }

    leptos::task::spawn_local(run_connection(connection, notifications, sender));
}

/// One full connection lifecycle: connect, pump frames, tear down.
#[cfg(feature = "hydrate")]
async fn run_connection(
    connection: leptos::prelude::RwSignal<ConnectionState>,
    notifications: leptos::prelude::RwSignal<NotificationState>,
    sender: leptos::prelude::RwSignal<GreetingSender>,
) {
    connection.update(|c| c.status = ConnectionStatus::Connecting);

    let host = web_sys::window()
        .and_then(|w| w.location().host().ok())
        .unwrap_or_else(|| "localhost:3000".to_owned());
    let url = socket_url(&host);
    leptos::logging::log!("connecting to {url}");

    match connect_and_run(&url, connection, notifications, sender).await {
        Ok(()) => {
            leptos::logging::log!("websocket connection closed");
        }
        Err(e) => {
            leptos::logging::warn!("websocket error: {e}");
        }
    }

    sender.update(|s| s.clear());
    connection.update(|c| c.status = ConnectionStatus::Disconnected);
}

/// Connect to the websocket and process frames until disconnect.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    connection: leptos::prelude::RwSignal<ConnectionState>,
    notifications: leptos::prelude::RwSignal<NotificationState>,
    sender: leptos::prelude::RwSignal<GreetingSender>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    leptos::logging::log!("websocket connected");
    connection.update(|c| c.status = ConnectionStatus::Connected);

    let (tx, mut rx) = futures::channel::mpsc::unbounded::<String>();
    sender.update(|s| *s = GreetingSender::connected(tx));

    // Forward outgoing greetings from the shared channel to the transport.
    let send_task = async {
        use futures::SinkExt;
        while let Some(msg) = rx.next().await {
            if ws_write.send(Message::Text(msg)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: decode notifications and append them to the log.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    leptos::logging::log!("message received: {text}");
                    notifications.update(|log| {
                        apply_notification_text(&text, log);
                    });
                }
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("websocket recv error: {e}");
                    break;
                }
            }
        }
    };

    // Run send/recv loops; when either finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}
