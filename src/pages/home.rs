//! Home page with the greeting panel layout.

use leptos::prelude::*;

use crate::components::connection_panel::ConnectionPanel;
use crate::components::notification_log::NotificationLog;
use crate::components::status_bar::StatusBar;

/// Single page composing the connection panel, the notification log, and
/// the status bar.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1 class="home-page__title">"websocket-app"</h1>
            <div class="home-page__panel">
                <ConnectionPanel/>
            </div>
            <div class="home-page__log">
                <NotificationLog/>
            </div>
            <div class="home-page__status-bar">
                <StatusBar/>
            </div>
        </div>
    }
}
