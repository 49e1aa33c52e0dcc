use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use taskboard_auth::User;
use taskboard_core::{NotificationId, ScrumNoteId, TaskId, UserId};
use taskboard_scrum::ScrumNote;
use taskboard_tasks::{StatusChange, Task, TaskStatus};

/// What happened.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    TaskAssigned,
    TaskStatusUpdated,
    ScrumNoteCreated,
}

/// Structured context carried alongside the human-readable message, so the
/// delivery subsystem can deep-link without re-parsing text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<TaskId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_id: Option<ScrumNoteId>,
    pub actor_id: UserId,
    pub actor_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_status: Option<TaskStatus>,
}

/// A notification descriptor produced after a successful mutation.
///
/// Read/delivered by the external notification subsystem; never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    id: NotificationId,
    kind: NotificationKind,
    recipient_id: UserId,
    message: String,
    metadata: NotificationMetadata,
    created_at: DateTime<Utc>,
}

impl Notification {
    /// A task was assigned; notify the new assignee.
    pub fn task_assigned(task: &Task, actor: &User, now: DateTime<Utc>) -> Option<Self> {
        let recipient_id = task.assignee_id()?;
        Some(Self {
            id: NotificationId::new(),
            kind: NotificationKind::TaskAssigned,
            recipient_id,
            message: format!(
                "{} assigned you the task \"{}\"",
                actor.display_name(),
                task.title()
            ),
            metadata: NotificationMetadata {
                task_id: Some(task.task_id()),
                note_id: None,
                actor_id: actor.user_id(),
                actor_name: actor.display_name().to_string(),
                old_status: None,
                new_status: None,
            },
            created_at: now,
        })
    }

    /// A task's status changed; notify the task's creator.
    pub fn task_status_updated(
        task: &Task,
        change: StatusChange,
        actor: &User,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            kind: NotificationKind::TaskStatusUpdated,
            recipient_id: task.creator_id(),
            message: format!(
                "{} moved \"{}\" from {} to {}",
                actor.display_name(),
                task.title(),
                change.from,
                change.to
            ),
            metadata: NotificationMetadata {
                task_id: Some(task.task_id()),
                note_id: None,
                actor_id: actor.user_id(),
                actor_name: actor.display_name().to_string(),
                old_status: Some(change.from),
                new_status: Some(change.to),
            },
            created_at: now,
        }
    }

    /// A scrum note was recorded; notify one recipient (callers fan out).
    pub fn scrum_note_created(
        note: &ScrumNote,
        author: &User,
        recipient_id: UserId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            kind: NotificationKind::ScrumNoteCreated,
            recipient_id,
            message: format!(
                "{} posted their scrum note for {}",
                author.display_name(),
                note.date().format("%Y-%m-%d")
            ),
            metadata: NotificationMetadata {
                task_id: None,
                note_id: Some(note.note_id()),
                actor_id: author.user_id(),
                actor_name: author.display_name().to_string(),
                old_status: None,
                new_status: None,
            },
            created_at: now,
        }
    }

    pub fn notification_id(&self) -> NotificationId {
        self.id
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn recipient_id(&self) -> UserId {
        self.recipient_id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn metadata(&self) -> &NotificationMetadata {
        &self.metadata
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
