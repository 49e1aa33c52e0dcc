//! Task mutation error taxonomy.

use thiserror::Error;

use taskboard_core::TaskId;

use crate::task::TaskStatus;

/// Failure of a task operation.
///
/// Every variant is a deterministic business-rule rejection, surfaced
/// synchronously to the caller. Nothing here is logged, retried, or swallowed
/// by the domain layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Malformed or out-of-range field value. Recoverable by correcting input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The requested status change crosses the forbidden DONE -> TODO edge.
    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition { from: TaskStatus, to: TaskStatus },

    /// Authorization failure: wrong role, an intern acting on a task not
    /// assigned to them,acting on a completed task.
    #[error("task {task_id} not assignable: {reason}")]
    NotAssignable { task_id: TaskId, reason: String },
}

impl TaskError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn not_assignable(task_id: TaskId, reason: impl Into<String>) -> Self {
        Self::NotAssignable {
            task_id,
            reason: reason.into(),
        }
    }

    /// Whether this failure is the state machine's forbidden-edge rejection.
    ///
    /// The board coordinator uses this split to decide between the
    /// "transition not allowed" dialog and the generic error toast.
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }
}
