//! Task use-cases: mutate the aggregate, then notify.

use chrono::{DateTime, Utc};

use taskboard_auth::User;
use taskboard_core::UserId;
use taskboard_notifications::{Notification, NotificationTrigger};
use taskboard_tasks::{NewTask, StatusChange, Task, TaskChanges, TaskError, TaskStatus};

/// Create a task. No notification is produced for creation.
pub fn create_task(input: NewTask, now: DateTime<Utc>) -> Result<Task, TaskError> {
    let task = Task::create(input, now)?;
    tracing::info!(task_id = %task.task_id(), title = task.title(), "task created");
    Ok(task)
}

/// Assign `task` to `target`; on success the new assignee is notified.
pub fn assign_task(
    task: &mut Task,
    target: UserId,
    actor: &User,
    trigger: &dyn NotificationTrigger,
    now: DateTime<Utc>,
) -> Result<(), TaskError> {
    task.assign(target, &actor.as_actor(), now)?;
    tracing::info!(task_id = %task.task_id(), assignee = %target, "task assigned");

    if let Some(notification) = Notification::task_assigned(task, actor, now) {
        trigger.trigger(notification);
    }
    Ok(())
}

/// Move `task` to `to`.
///
/// When the actor is not an admin, the task's creator is notified of the
/// change; admins moving tasks around generate no notification.
pub fn change_task_status(
    task: &mut Task,
    to: TaskStatus,
    actor: &User,
    trigger: &dyn NotificationTrigger,
    now: DateTime<Utc>,
) -> Result<StatusChange, TaskError> {
    let change = task.update_status(to, &actor.as_actor(), now)?;
    tracing::info!(
        task_id = %task.task_id(),
        from = %change.from,
        to = %change.to,
        "task status changed"
    );

    if !actor.role().is_admin() {
        trigger.trigger(Notification::task_status_updated(task, change, actor, now));
    }
    Ok(change)
}

/// Edit task fields. Admin only; no notification is produced.
pub fn edit_task(
    task: &mut Task,
    changes: TaskChanges,
    actor: &User,
    now: DateTime<Utc>,
) -> Result<(), TaskError> {
    task.update(changes, &actor.as_actor(), now)?;
    tracing::debug!(task_id = %task.task_id(), "task fields updated");
    Ok(())
}

/// Gate for deletion. `Ok(())` means the caller may remove the task from
/// storage; the removal itself happens there.
pub fn delete_task(task: &Task, actor: &User) -> Result<(), TaskError> {
    if !task.can_be_deleted(&actor.as_actor()) {
        return Err(TaskError::not_assignable(
            task.task_id(),
            "only admins may delete tasks",
        ));
    }
    tracing::info!(task_id = %task.task_id(), "task deletion authorized");
    Ok(())
}
