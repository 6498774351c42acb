//! Root application component with routing, context providers, and the
//! shared connection handle.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::types::Greeting;
use crate::pages::home::HomePage;
use crate::state::connection::ConnectionState;
use crate::state::notifications::NotificationState;

/// Shared handle to the outbound websocket channel.
///
/// The inner sender exists only while a connection is active; it is
/// installed when the transport opens and cleared when the transport
/// reports closure. At most one handle is installed at a time.
#[derive(Clone, Debug, Default)]
pub struct GreetingSender {
    #[cfg(any(test, feature = "hydrate"))]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl GreetingSender {
    /// Wrap a live channel sender once the transport is open.
    #[cfg(any(test, feature = "hydrate"))]
    pub fn connected(tx: futures::channel::mpsc::UnboundedSender<String>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Serialize a greeting and hand it to the transport channel once,
    /// fire-and-forget.
    ///
    /// Returns `false` when no connection is active or the channel has
    /// closed; nothing is transmitted in that case.
    pub fn send(&self, greeting: &Greeting) -> bool {
        #[cfg(any(test, feature = "hydrate"))]
        {
            let Some(tx) = self.tx.as_ref() else {
                return false;
            };
            if let Ok(json) = serde_json::to_string(greeting) {
                tx.unbounded_send(json).is_ok()
            } else {
                false
            }
        }
        #[cfg(not(any(test, feature = "hydrate")))]
        {
            let _ = greeting;
            false
        }
    }

    /// Drop the handle after the transport reports closure.
    pub fn clear(&mut self) {
        #[cfg(any(test, feature = "hydrate"))]
        {
            self.tx = None;
        }
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let connection = RwSignal::new(ConnectionState::default());
    let notifications = RwSignal::new(NotificationState::default());
    let sender = RwSignal::new(GreetingSender::default());

    provide_context(connection);
    provide_context(notifications);
    provide_context(sender);

    view! {
        <Stylesheet id="leptos" href="/pkg/websocket-app.css"/>
        <Title text="websocket-app"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
