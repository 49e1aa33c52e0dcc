//! The delivery port and an in-memory implementation for tests/local wiring.

use std::sync::{Arc, Mutex};

use crate::notification::Notification;

/// Port to the external messaging/notification subsystem.
///
/// Call sites hand a fully built descriptor over after a successful mutation;
/// delivery (websocket push, digest email, persistence of the inbox) is the
/// implementor's concern. Implementations must not feed failures back into
/// the domain operation that triggered them.
pub trait NotificationTrigger: Send + Sync {
    fn trigger(&self, notification: Notification);
}

/// Collecting trigger backed by a shared `Vec`.
///
/// Cheap to clone; every clone observes the same underlying collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTrigger {
    inner: Arc<Mutex<Vec<Notification>>>,
}

impl InMemoryTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything triggered so far.
    pub fn all(&self) -> Vec<Notification> {
        self.inner.lock().expect("trigger mutex poisoned").clone()
    }

    /// Take and clear the collected notifications.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.inner.lock().expect("trigger mutex poisoned"))
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().expect("trigger mutex poisoned").is_empty()
    }
}

impl NotificationTrigger for InMemoryTrigger {
    fn trigger(&self, notification: Notification) {
        self.inner
            .lock()
            .expect("trigger mutex poisoned")
            .push(notification);
    }
}

impl<T> NotificationTrigger for Arc<T>
where
    T: NotificationTrigger + ?Sized,
{
    fn trigger(&self, notification: Notification) {
        (**self).trigger(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use taskboard_auth::{Role, User};
    use taskboard_core::UserId;
    use taskboard_tasks::{NewTask, Task};

    fn sample_notification() -> Notification {
        let admin = User::new(UserId::new(), "Alice", Role::Admin);
        let mut task = Task::create(
            NewTask {
                title: "Fix bug".to_string(),
                description: "details".to_string(),
                creator_id: admin.user_id(),
                deadline: None,
            },
            Utc::now(),
        )
        .unwrap();
        task.assign(UserId::new(), &admin.as_actor(), Utc::now())
            .unwrap();
        Notification::task_assigned(&task, &admin, Utc::now()).unwrap()
    }

    #[test]
    fn clones_share_the_collection() {
        let trigger = InMemoryTrigger::new();
        let clone = trigger.clone();

        clone.trigger(sample_notification());
        assert_eq!(trigger.all().len(), 1);

        let drained = trigger.drain();
        assert_eq!(drained.len(), 1);
        assert!(clone.is_empty());
    }
}
