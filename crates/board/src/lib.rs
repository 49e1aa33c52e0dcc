//! `taskboard-board` — client-side reconciliation for the Kanban board.
//!
//! Drag-and-drop status changes are applied to the displayed board before the
//! backend confirms them, then committed or rolled back on its verdict. The
//! coordinator is written sans-IO so the protocol is testable without a UI
//! harness: `begin_move` and `resolve` bracket the network call, and
//! [`BoardCoordinator::drive_move`] is the async wrapper whose only suspension
//! point is the caller's send future.

pub mod coordinator;

pub use coordinator::{
    BoardCoordinator, BoardError, MoveError, MoveOutcome, MoveTicket, RollbackReason,
};
