//! notification channel
//!
//! the swap confirmation talks to the user only through [`Notifier`]:
//! `notify` shows something and hands back an id, `dismiss` removes it.
//! how it renders (toast, log line, nothing) is the implementor's business.
//!
//! implementations:
//! - [`TracingNotifier`]: writes notifications to the tracing log
//! - [`RecordingNotifier`]: keeps every event in memory for inspection

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use tracing::{debug, info, warn};

/// severity of a notification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Pending,
    Success,
    Error,
}

/// handle for dismissing a notification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

/// notification sink
pub trait Notifier: Send + Sync {
    /// show a notification and return its handle
    fn notify(&self, kind: NotificationKind, title: &str, description: &str) -> NotificationId;

    /// remove a previously shown notification
    fn dismiss(&self, id: NotificationId);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, kind: NotificationKind, title: &str, description: &str) -> NotificationId {
        (**self).notify(kind, title, description)
    }

    fn dismiss(&self, id: NotificationId) {
        (**self).dismiss(id)
    }
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn notify(&self, kind: NotificationKind, title: &str, description: &str) -> NotificationId {
        (**self).notify(kind, title, description)
    }

    fn dismiss(&self, id: NotificationId) {
        (**self).dismiss(id)
    }
}

/// pending notification that is dismissed when dropped
///
/// dropping covers every exit: success, failure, and the future being
/// cancelled mid-await.
pub struct PendingNotification<'a, N: Notifier + ?Sized> {
    notifier: &'a N,
    id: NotificationId,
}

impl<'a, N: Notifier + ?Sized> PendingNotification<'a, N> {
    pub fn show(notifier: &'a N, title: &str, description: &str) -> Self {
        let id = notifier.notify(NotificationKind::Pending, title, description);
        Self { notifier, id }
    }

    pub fn id(&self) -> NotificationId {
        self.id
    }
}

impl<N: Notifier + ?Sized> Drop for PendingNotification<'_, N> {
    fn drop(&mut self) {
        self.notifier.dismiss(self.id);
    }
}

/// logs notifications through tracing
#[derive(Debug, Default)]
pub struct TracingNotifier {
    next_id: AtomicU64,
}

impl TracingNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NotificationKind, title: &str, description: &str) -> NotificationId {
        let id = NotificationId(self.next_id.fetch_add(1, Ordering::Relaxed));
        match kind {
            NotificationKind::Pending | NotificationKind::Success => {
                info!(id = id.0, "{}: {}", title, description)
            }
            NotificationKind::Error => warn!(id = id.0, "{}: {}", title, description),
        }
        id
    }

    fn dismiss(&self, id: NotificationId) {
        debug!(id = id.0, "dismissed");
    }
}

/// one shown notification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

/// what happened on a [`RecordingNotifier`], in order
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotifierEvent {
    Shown(Notification),
    Dismissed(NotificationId),
}

/// in-memory notifier
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    next_id: AtomicU64,
    events: Mutex<Vec<NotifierEvent>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// every event so far
    pub fn events(&self) -> Vec<NotifierEvent> {
        self.lock().clone()
    }

    /// shown notifications, in order
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                NotifierEvent::Shown(notification) => Some(notification.clone()),
                NotifierEvent::Dismissed(_) => None,
            })
            .collect()
    }

    /// how many times `id` was dismissed
    pub fn dismiss_count(&self, id: NotificationId) -> usize {
        self.lock()
            .iter()
            .filter(|event| matches!(event, NotifierEvent::Dismissed(d) if *d == id))
            .count()
    }

    /// shown and not yet dismissed
    pub fn active(&self) -> Vec<Notification> {
        let events = self.lock();
        events
            .iter()
            .filter_map(|event| match event {
                NotifierEvent::Shown(n) => Some(n),
                NotifierEvent::Dismissed(_) => None,
            })
            .filter(|n| {
                !events
                    .iter()
                    .any(|e| matches!(e, NotifierEvent::Dismissed(d) if *d == n.id))
            })
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<NotifierEvent>> {
        // a panic while holding the lock leaves the log intact
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NotificationKind, title: &str, description: &str) -> NotificationId {
        let id = NotificationId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock().push(NotifierEvent::Shown(Notification {
            id,
            kind,
            title: title.to_string(),
            description: description.to_string(),
        }));
        id
    }

    fn dismiss(&self, id: NotificationId) {
        self.lock().push(NotifierEvent::Dismissed(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_dismissed_on_drop() {
        let notifier = RecordingNotifier::new();
        let id = {
            let pending = PendingNotification::show(&notifier, "working", "...");
            assert_eq!(notifier.active().len(), 1);
            pending.id()
        };
        assert_eq!(notifier.dismiss_count(id), 1);
        assert!(notifier.active().is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let notifier = RecordingNotifier::new();
        let a = notifier.notify(NotificationKind::Success, "a", "");
        let b = notifier.notify(NotificationKind::Error, "b", "");
        assert_ne!(a, b);
        assert_eq!(notifier.notifications().len(), 2);
    }

    #[test]
    fn test_tracing_notifier_hands_out_ids() {
        let notifier = TracingNotifier::new();
        let a = notifier.notify(NotificationKind::Pending, "a", "");
        let b = notifier.notify(NotificationKind::Pending, "b", "");
        notifier.dismiss(a);
        assert_ne!(a, b);
    }
}
