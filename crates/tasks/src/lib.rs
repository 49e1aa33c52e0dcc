//! `taskboard-tasks` — the task lifecycle aggregate.
//!
//! Pure domain logic: the status state machine, field validation, and the
//! role-based rules gating every mutation. No transport, no storage; callers
//! load a [`Task`], invoke its operations, and persist the result.

pub mod error;
pub mod policy;
pub mod task;

pub use error::TaskError;
pub use policy::{AuthorizationPolicy, TaskAction};
pub use task::{NewTask, StatusChange, Task, TaskChanges, TaskStatus};
