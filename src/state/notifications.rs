#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::net::types::Notification;

/// State for the received-notification log.
///
/// Entries are append-only and insertion-ordered; nothing is deduplicated
/// or evicted for the lifetime of the page session.
#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    pub entries: Vec<Notification>,
}

impl NotificationState {
    /// Append one decoded notification in receipt order.
    pub fn push(&mut self, notification: Notification) {
        self.entries.push(notification);
    }
}
