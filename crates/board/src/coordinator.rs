use std::collections::HashMap;
use std::future::Future;

use thiserror::Error;

use taskboard_core::TaskId;
use taskboard_tasks::{TaskError, TaskStatus};

/// Backend verdict on a status mutation, as seen from the client.
///
/// The coordinator only distinguishes the state machine's rejection from
/// everything else; invalid-input and authorization failures do not flow
/// through the optimistic path and all land in `Rejected`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition { from: TaskStatus, to: TaskStatus },

    #[error("{0}")]
    Rejected(String),
}

impl From<TaskError> for MoveError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::InvalidTransition { from, to } => Self::InvalidTransition { from, to },
            other => Self::Rejected(other.to_string()),
        }
    }
}

/// Why a rollback happened, for the caller's toast/dialog choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollbackReason {
    /// The state machine rejected the move. Carries the pair captured at
    /// gesture start so the dialog can name both columns.
    InvalidTransition { from: TaskStatus, to: TaskStatus },
    /// Anything else (network failure, authorization, unknown task).
    Other(String),
}

/// Terminal state of one drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The optimistic state is now the committed state.
    Committed,
    /// The displayed status was restored to its pre-gesture value.
    RolledBack {
        previous: TaskStatus,
        requested: TaskStatus,
        reason: RollbackReason,
    },
    /// A newer gesture on the same card replaced this one before it resolved;
    /// its verdict no longer drives the display.
    Superseded,
}

/// A drag gesture that cannot start.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("task {0} is not on the board")]
    UnknownTask(TaskId),

    /// Dropping a card back on its own column is not a mutation.
    #[error("task is already displayed as {0}")]
    SameColumn(TaskStatus),
}

/// One in-flight optimistic mutation, keyed by task id in the coordinator.
///
/// `previous_status` is the last *authoritative* status: when a second
/// gesture lands while one is pending, the new record keeps the original
/// rollback target so a rollback never restores an optimistic value.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingMove {
    seq: u64,
    previous_status: TaskStatus,
    requested_status: TaskStatus,
}

/// Handle identifying one specific gesture, returned by
/// [`BoardCoordinator::begin_move`] and consumed by
/// [`BoardCoordinator::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTicket {
    task_id: TaskId,
    seq: u64,
    from: TaskStatus,
    to: TaskStatus,
}

impl MoveTicket {
    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub fn from(&self) -> TaskStatus {
        self.from
    }

    pub fn to(&self) -> TaskStatus {
        self.to
    }
}

/// Client-side optimistic-update coordinator.
///
/// Holds the displayed status per card plus at most one pending move per
/// task. Single-threaded by design (UI event loop); nothing here blocks.
#[derive(Debug, Default)]
pub struct BoardCoordinator {
    displayed: HashMap<TaskId, TaskStatus>,
    pending: HashMap<TaskId, PendingMove>,
    next_seq: u64,
}

impl BoardCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place (or re-place) a card on the board with its authoritative status.
    pub fn load_card(&mut self, task_id: TaskId, status: TaskStatus) {
        self.displayed.insert(task_id, status);
        self.pending.remove(&task_id);
    }

    /// Remove a card (task deleted elsewhere).
    pub fn remove_card(&mut self, task_id: TaskId) {
        self.displayed.remove(&task_id);
        self.pending.remove(&task_id);
    }

    /// Status currently shown for a card, optimistic or committed.
    pub fn displayed_status(&self, task_id: TaskId) -> Option<TaskStatus> {
        self.displayed.get(&task_id).copied()
    }

    /// Whether a move on this card is still awaiting its verdict.
    pub fn has_pending_move(&self, task_id: TaskId) -> bool {
        self.pending.contains_key(&task_id)
    }

    /// Phase 1: apply the drop optimistically.
    ///
    /// Rewrites the displayed status to `to` immediately and records the
    /// pending move. A second gesture on a card with an unresolved move is
    /// last-gesture-wins: the fresh ticket supersedes the old one, and the
    /// rollback target stays pinned to the last authoritative status.
    pub fn begin_move(&mut self, task_id: TaskId, to: TaskStatus) -> Result<MoveTicket, BoardError> {
        let shown = self
            .displayed_status(task_id)
            .ok_or(BoardError::UnknownTask(task_id))?;
        if shown == to {
            return Err(BoardError::SameColumn(to));
        }

        self.next_seq += 1;
        let seq = self.next_seq;
        let previous_status = match self.pending.get(&task_id) {
            Some(superseded) => superseded.previous_status,
            None => shown,
        };

        self.pending.insert(
            task_id,
            PendingMove {
                seq,
                previous_status,
                requested_status: to,
            },
        );
        self.displayed.insert(task_id, to);
        tracing::debug!(task = %task_id, from = %shown, to = %to, "optimistic move applied");

        Ok(MoveTicket {
            task_id,
            seq,
            from: previous_status,
            to,
        })
    }

    /// Phase 3: reconcile with the backend's verdict.
    ///
    /// A success commits the optimistic state; a failure restores the
    /// displayed status to the value captured when *this* gesture began and
    /// classifies the reason. A ticket that was superseded by a later gesture
    /// no longer owns the display and resolves to [`MoveOutcome::Superseded`].
    pub fn resolve(&mut self, ticket: &MoveTicket, verdict: Result<(), MoveError>) -> MoveOutcome {
        let Some(pending) = self.pending.remove(&ticket.task_id) else {
            return MoveOutcome::Superseded;
        };
        if pending.seq != ticket.seq {
            // A later gesture owns the display; put its record back untouched.
            self.pending.insert(ticket.task_id, pending);
            return MoveOutcome::Superseded;
        }

        match verdict {
            Ok(()) => {
                tracing::debug!(task = %ticket.task_id, to = %pending.requested_status, "move committed");
                MoveOutcome::Committed
            }
            Err(err) => {
                self.displayed
                    .insert(ticket.task_id, pending.previous_status);
                let reason = match err {
                    MoveError::InvalidTransition { .. } => RollbackReason::InvalidTransition {
                        from: pending.previous_status,
                        to: pending.requested_status,
                    },
                    MoveError::Rejected(message) => RollbackReason::Other(message),
                };
                tracing::debug!(
                    task = %ticket.task_id,
                    restored = %pending.previous_status,
                    "move rolled back"
                );
                MoveOutcome::RolledBack {
                    previous: pending.previous_status,
                    requested: pending.requested_status,
                    reason,
                }
            }
        }
    }

    /// Full protocol for one drop event: apply optimistically, await the
    /// caller's send future (the only suspension point), reconcile.
    ///
    /// No retry: one gesture, one attempt.
    pub async fn drive_move<F, Fut>(
        &mut self,
        task_id: TaskId,
        to: TaskStatus,
        send: F,
    ) -> Result<MoveOutcome, BoardError>
    where
        F: FnOnce(TaskId, TaskStatus) -> Fut,
        Fut: Future<Output = Result<(), MoveError>>,
    {
        let ticket = self.begin_move(task_id, to)?;
        let verdict = send(task_id, to).await;
        Ok(self.resolve(&ticket, verdict))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(task_id: TaskId, status: TaskStatus) -> BoardCoordinator {
        let mut board = BoardCoordinator::new();
        board.load_card(task_id, status);
        board
    }

    #[test]
    fn begin_move_updates_display_immediately() {
        let task_id = TaskId::new();
        let mut board = board_with(task_id, TaskStatus::InProgress);

        let ticket = board.begin_move(task_id, TaskStatus::Done).unwrap();
        assert_eq!(board.displayed_status(task_id), Some(TaskStatus::Done));
        assert!(board.has_pending_move(task_id));
        assert_eq!(ticket.from(), TaskStatus::InProgress);
        assert_eq!(ticket.to(), TaskStatus::Done);
    }

    #[test]
    fn success_commits_the_optimistic_state() {
        let task_id = TaskId::new();
        let mut board = board_with(task_id, TaskStatus::InProgress);
        let ticket = board.begin_move(task_id, TaskStatus::Done).unwrap();

        let outcome = board.resolve(&ticket, Ok(()));
        assert_eq!(outcome, MoveOutcome::Committed);
        assert_eq!(board.displayed_status(task_id), Some(TaskStatus::Done));
        assert!(!board.has_pending_move(task_id));
    }

    #[test]
    fn invalid_transition_rolls_back_and_names_both_statuses() {
        // Scenario C, rejection half: a DONE card dragged to TODO shows TODO
        // immediately, then snaps back when the backend refuses the edge.
        let task_id = TaskId::new();
        let mut board = board_with(task_id, TaskStatus::Done);
        let ticket = board.begin_move(task_id, TaskStatus::Todo).unwrap();
        assert_eq!(board.displayed_status(task_id), Some(TaskStatus::Todo));

        let outcome = board.resolve(
            &ticket,
            Err(MoveError::InvalidTransition {
                from: TaskStatus::Done,
                to: TaskStatus::Todo,
            }),
        );

        assert_eq!(board.displayed_status(task_id), Some(TaskStatus::Done));
        assert_eq!(
            outcome,
            MoveOutcome::RolledBack {
                previous: TaskStatus::Done,
                requested: TaskStatus::Todo,
                reason: RollbackReason::InvalidTransition {
                    from: TaskStatus::Done,
                    to: TaskStatus::Todo,
                },
            }
        );
    }

    #[test]
    fn other_failures_roll_back_with_a_generic_reason() {
        let task_id = TaskId::new();
        let mut board = board_with(task_id, TaskStatus::Todo);
        let ticket = board.begin_move(task_id, TaskStatus::InProgress).unwrap();

        let outcome = board.resolve(
            &ticket,
            Err(MoveError::Rejected("network unreachable".to_string())),
        );

        assert_eq!(board.displayed_status(task_id), Some(TaskStatus::Todo));
        match outcome {
            MoveOutcome::RolledBack {
                reason: RollbackReason::Other(message),
                ..
            } => assert_eq!(message, "network unreachable"),
            other => panic!("expected generic rollback, got {other:?}"),
        }
    }

    #[test]
    fn task_error_classification_feeds_the_reason_split() {
        let invalid: MoveError = TaskError::InvalidTransition {
            from: TaskStatus::Done,
            to: TaskStatus::Todo,
        }
        .into();
        assert!(matches!(invalid, MoveError::InvalidTransition { .. }));

        let not_assignable: MoveError = TaskError::not_assignable(
            TaskId::new(),
            "only the assignee or an admin may change task status",
        )
        .into();
        assert!(matches!(not_assignable, MoveError::Rejected(_)));
    }

    #[test]
    fn moves_on_different_tasks_do_not_cross_contaminate_rollbacks() {
        let a = TaskId::new();
        let b = TaskId::new();
        let mut board = BoardCoordinator::new();
        board.load_card(a, TaskStatus::Todo);
        board.load_card(b, TaskStatus::Done);

        let ticket_a = board.begin_move(a, TaskStatus::InProgress).unwrap();
        let ticket_b = board.begin_move(b, TaskStatus::InProgress).unwrap();

        // b fails, a succeeds; each reconciles against its own record.
        let outcome_b = board.resolve(
            &ticket_b,
            Err(MoveError::Rejected("boom".to_string())),
        );
        assert!(matches!(outcome_b, MoveOutcome::RolledBack { previous: TaskStatus::Done, .. }));
        assert_eq!(board.displayed_status(b), Some(TaskStatus::Done));

        assert_eq!(board.resolve(&ticket_a, Ok(())), MoveOutcome::Committed);
        assert_eq!(board.displayed_status(a), Some(TaskStatus::InProgress));
    }

    #[test]
    fn second_gesture_supersedes_the_first_and_keeps_the_rollback_target() {
        let task_id = TaskId::new();
        let mut board = board_with(task_id, TaskStatus::Todo);

        let first = board.begin_move(task_id, TaskStatus::InProgress).unwrap();
        let second = board.begin_move(task_id, TaskStatus::Done).unwrap();
        assert_eq!(board.displayed_status(task_id), Some(TaskStatus::Done));
        // The second gesture's rollback target is still the authoritative
        // TODO, not the optimistic IN_PROGRESS.
        assert_eq!(second.from(), TaskStatus::Todo);

        // The first gesture's verdict no longer owns the display.
        assert_eq!(board.resolve(&first, Ok(())), MoveOutcome::Superseded);
        assert_eq!(board.displayed_status(task_id), Some(TaskStatus::Done));

        let outcome = board.resolve(
            &second,
            Err(MoveError::Rejected("rejected".to_string())),
        );
        assert!(matches!(outcome, MoveOutcome::RolledBack { previous: TaskStatus::Todo, .. }));
        assert_eq!(board.displayed_status(task_id), Some(TaskStatus::Todo));
    }

    #[test]
    fn unknown_task_and_same_column_cannot_start_a_move() {
        let task_id = TaskId::new();
        let mut board = board_with(task_id, TaskStatus::Todo);

        let stranger = TaskId::new();
        assert_eq!(
            board.begin_move(stranger, TaskStatus::Done).unwrap_err(),
            BoardError::UnknownTask(stranger),
        );
        assert_eq!(
            board.begin_move(task_id, TaskStatus::Todo).unwrap_err(),
            BoardError::SameColumn(TaskStatus::Todo),
        );
    }

    #[tokio::test]
    async fn drive_move_commits_a_legal_drag() {
        // Scenario C, commit half: IN_PROGRESS -> DONE is legal and commits.
        let task_id = TaskId::new();
        let mut board = board_with(task_id, TaskStatus::InProgress);

        let outcome = board
            .drive_move(task_id, TaskStatus::Done, |_, _| async { Ok(()) })
            .await
            .unwrap();

        assert_eq!(outcome, MoveOutcome::Committed);
        assert_eq!(board.displayed_status(task_id), Some(TaskStatus::Done));
    }

    #[tokio::test]
    async fn drive_move_rolls_back_a_refused_drag() {
        let task_id = TaskId::new();
        let mut board = board_with(task_id, TaskStatus::Done);

        let outcome = board
            .drive_move(task_id, TaskStatus::Todo, |_, to| async move {
                Err(TaskError::InvalidTransition {
                    from: TaskStatus::Done,
                    to,
                }
                .into())
            })
            .await
            .unwrap();

        assert_eq!(board.displayed_status(task_id), Some(TaskStatus::Done));
        assert!(matches!(
            outcome,
            MoveOutcome::RolledBack {
                reason: RollbackReason::InvalidTransition {
                    from: TaskStatus::Done,
                    to: TaskStatus::Todo,
                },
                ..
            }
        ));
    }
}
