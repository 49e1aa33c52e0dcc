use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use taskboard_auth::Actor;
use taskboard_core::{Entity, TaskId, UserId, ValueObject};

use crate::error::TaskError;

/// Maximum title length after trimming.
pub const TITLE_MAX_LEN: usize = 255;

/// Task status lifecycle; governs the Kanban column a task appears in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// The status state machine: `TODO ⇄ IN_PROGRESS ⇄ DONE`, forward or
    /// backward, self-transitions included. The single forbidden edge is
    /// DONE -> TODO (a finished task must pass back through IN_PROGRESS).
    pub fn can_transition_to(self, to: TaskStatus) -> bool {
        !matches!((self, to), (TaskStatus::Done, TaskStatus::Todo))
    }
}

impl core::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TaskStatus::Todo => f.write_str("TODO"),
            TaskStatus::InProgress => f.write_str("IN_PROGRESS"),
            TaskStatus::Done => f.write_str("DONE"),
        }
    }
}

impl ValueObject for TaskStatus {}

/// Input for [`Task::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub creator_id: UserId,
    pub deadline: Option<DateTime<Utc>>,
}

/// Partial edit applied through [`Task::update`]. `None` leaves a field as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
}

/// Result of a successful status mutation, handed to notification call sites.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub from: TaskStatus,
    pub to: TaskStatus,
}

impl ValueObject for StatusChange {}

/// Aggregate root: Task.
///
/// All fields are private; the operations below are the only mutators, and
/// each one enforces the full invariant set before touching state. Every
/// successful mutation bumps `updated_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: TaskStatus,
    creator_id: UserId,
    assignee_id: Option<UserId>,
    deadline: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a task.
    ///
    /// Trims title/description and validates: non-empty title of at most
    /// [`TITLE_MAX_LEN`] chars, non-empty description, deadline not in the
    /// past. Initial status is TODO with no assignee.
    ///
    /// `now` is passed explicitly so deadline checks stay deterministic under
    /// test; production callers pass `Utc::now()`.
    pub fn create(input: NewTask, now: DateTime<Utc>) -> Result<Self, TaskError> {
        let title = validated_title(&input.title)?;
        let description = validated_description(&input.description)?;
        validate_deadline(input.deadline, now)?;

        Ok(Self {
            id: TaskId::new(),
            title,
            description,
            status: TaskStatus::Todo,
            creator_id: input.creator_id,
            assignee_id: None,
            deadline: input.deadline,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild a task from stored state without re-validating.
    ///
    /// For the persistence caller only: the stored state already passed
    /// validation when it was first written.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: TaskId,
        title: String,
        description: String,
        status: TaskStatus,
        creator_id: UserId,
        assignee_id: Option<UserId>,
        deadline: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            status,
            creator_id,
            assignee_id,
            deadline,
            created_at,
            updated_at,
        }
    }

    pub fn task_id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn creator_id(&self) -> UserId {
        self.creator_id
    }

    pub fn assignee_id(&self) -> Option<UserId> {
        self.assignee_id
    }

    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Assign the task to a user. Admin only; a completed task cannot be
    /// (re)assigned.
    pub fn assign(
        &mut self,
        target: UserId,
        actor: &Actor,
        now: DateTime<Utc>,
    ) -> Result<(), TaskError> {
        if !actor.is_admin() {
            return Err(TaskError::not_assignable(
                self.id,
                "only admins may assign tasks",
            ));
        }
        if self.status == TaskStatus::Done {
            return Err(TaskError::not_assignable(
                self.id,
                "a completed task cannot be reassigned",
            ));
        }

        self.assignee_id = Some(target);
        self.updated_at = now;
        Ok(())
    }

    /// Move the task to `to`.
    ///
    /// Two independent gates, both of which must hold:
    /// - the state machine (see [`TaskStatus::can_transition_to`]); the
    ///   forbidden-edge check runs first so the error carries both statuses,
    /// - authorization: admins may move any task, interns only a task
    ///   assigned to them.
    ///
    /// A self-transition is a legal move and still bumps `updated_at`.
    pub fn update_status(
        &mut self,
        to: TaskStatus,
        actor: &Actor,
        now: DateTime<Utc>,
    ) -> Result<StatusChange, TaskError> {
        let from = self.status;
        if !from.can_transition_to(to) {
            return Err(TaskError::InvalidTransition { from, to });
        }
        if !actor.is_admin() && self.assignee_id != Some(actor.user_id()) {
            return Err(TaskError::not_assignable(
                self.id,
                "only the assignee or an admin may change task status",
            ));
        }

        self.status = to;
        self.updated_at = now;
        Ok(StatusChange { from, to })
    }

    /// Edit title/description/deadline. Admin only; same field validation as
    /// [`Task::create`].
    ///
    /// `updated_at` is bumped even when the submitted values equal the current
    /// ones, so the timestamp stays monotonic per call.
    pub fn update(
        &mut self,
        changes: TaskChanges,
        actor: &Actor,
        now: DateTime<Utc>,
    ) -> Result<(), TaskError> {
        if !actor.is_admin() {
            return Err(TaskError::not_assignable(
                self.id,
                "only admins may edit tasks",
            ));
        }

        // Validate everything before applying anything.
        let title = changes.title.as_deref().map(validated_title).transpose()?;
        let description = changes
            .description
            .as_deref()
            .map(validated_description)
            .transpose()?;
        validate_deadline(changes.deadline, now)?;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(deadline) = changes.deadline {
            self.deadline = Some(deadline);
        }
        self.updated_at = now;
        Ok(())
    }

    /// Whether `actor` may delete this task. Deletion itself is a storage
    /// concern; the rule is admin-only.
    pub fn can_be_deleted(&self, actor: &Actor) -> bool {
        actor.is_admin()
    }

    /// A task is overdue when its deadline has passed and it is not done.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        match self.deadline {
            Some(deadline) => deadline < now && self.status != TaskStatus::Done,
            None => false,
        }
    }
}

impl Entity for Task {
    type Id = TaskId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn validated_title(raw: &str) -> Result<String, TaskError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(TaskError::invalid_input("title must not be empty"));
    }
    if title.chars().count() > TITLE_MAX_LEN {
        return Err(TaskError::invalid_input(format!(
            "title must be at most {TITLE_MAX_LEN} characters"
        )));
    }
    Ok(title.to_string())
}

fn validated_description(raw: &str) -> Result<String, TaskError> {
    let description = raw.trim();
    if description.is_empty() {
        return Err(TaskError::invalid_input("description must not be empty"));
    }
    Ok(description.to_string())
}

fn validate_deadline(
    deadline: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Result<(), TaskError> {
    match deadline {
        Some(deadline) if deadline < now => {
            Err(TaskError::invalid_input("deadline must not be in the past"))
        }
        _ => Ok(()),
    }
}
