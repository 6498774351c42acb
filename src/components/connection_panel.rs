//! Connection panel with the connect and send actions.

use leptos::prelude::*;

use crate::app::GreetingSender;
use crate::net::types::Greeting;
use crate::state::connection::ConnectionState;
use crate::state::notifications::NotificationState;

/// Panel exposing the two user actions: connect to the server and send the
/// fixed greeting.
///
/// Connect is permissive: clicking while already connected starts a fresh
/// connection and replaces the installed handle. Send is a silent no-op
/// while no connection is active.
#[component]
pub fn ConnectionPanel() -> impl IntoView {
    let connection = expect_context::<RwSignal<ConnectionState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let sender = expect_context::<RwSignal<GreetingSender>>();

    let on_connect = move |_| {
        #[cfg(feature = "hydrate")]
        {
            crate::net::socket_client::connect(connection, notifications, sender);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (connection, notifications);
        }
    };

    let on_send = move |_| {
        if sender.get().send(&Greeting::hello()) {
            leptos::logging::log!("greeting sent");
        }
    };

    view! {
        <div class="connection-panel">
            <button class="btn btn--primary connection-panel__connect" on:click=on_connect>
                "Connect"
            </button>
            <button class="btn connection-panel__send" on:click=on_send>
                "Send"
            </button>
        </div>
    }
}
