//! Bottom status bar showing connection status and message count.

use leptos::prelude::*;

use crate::state::connection::{ConnectionState, ConnectionStatus};
use crate::state::notifications::NotificationState;

/// Status bar at the bottom of the page.
#[component]
pub fn StatusBar() -> impl IntoView {
    let connection = expect_context::<RwSignal<ConnectionState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();

    let status_class = move || {
        let status = connection.get().status;
        match status {
            ConnectionStatus::Connected => "status-bar__dot status-bar__dot--connected",
            ConnectionStatus::Connecting => "status-bar__dot status-bar__dot--connecting",
            ConnectionStatus::Disconnected => "status-bar__dot status-bar__dot--disconnected",
        }
    };

    let status_label = move || {
        let status = connection.get().status;
        match status {
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Connecting => "Connecting...",
            ConnectionStatus::Disconnected => "Disconnected",
        }
    };

    let message_count = move || notifications.get().entries.len();

    view! {
        <div class="status-bar">
            <span class="status-bar__connection">
                <span class=status_class></span>
                {status_label}
            </span>
            <span class="status-bar__spacer"></span>
            <span class="status-bar__count">{move || format!("{} messages", message_count())}</span>
        </div>
    }
}
