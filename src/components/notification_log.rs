//! Read-only list of notifications received from the server.

use leptos::prelude::*;

use crate::state::notifications::NotificationState;

/// Growing log of received messages, oldest first.
#[component]
pub fn NotificationLog() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let entries_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the latest notification in view as the log grows.
    Effect::new(move || {
        let _ = notifications.get().entries.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = entries_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="notification-log" node_ref=entries_ref>
            {move || {
                let entries = notifications.get().entries;
                if entries.is_empty() {
                    return view! {
                        <div class="notification-log__empty">"No messages yet"</div>
                    }
                        .into_any();
                }

                entries
                    .iter()
                    .map(|n| {
                        let message = n.message.clone();
                        view! {
                            <div class="notification-log__entry">{message}</div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}
