//! Role-based authorization rules for task operations.
//!
//! The rule table, in full:
//!
//! | action        | ADMIN | INTERN                        |
//! |---------------|-------|-------------------------------|
//! | assign        | yes   | no                            |
//! | update status | yes   | only if assignee is the actor |
//! | edit fields   | yes   | no                            |
//! | delete        | yes   | no                            |
//!
//! The aggregate re-checks these rules inside each mutation; this standalone
//! policy exists so the table is testable on its own and reusable for future
//! actions without duplicating conditionals at call sites.

use serde::{Deserialize, Serialize};

use taskboard_auth::{Actor, Role};

use crate::task::Task;

/// A task mutation subject to authorization.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskAction {
    Assign,
    UpdateStatus,
    Edit,
    Delete,
}

/// Stateless policy value.
///
/// Constructed explicitly by the caller and passed in - no process-wide
/// singleton, no hidden configuration.
///
/// - No IO
/// - No panics
/// - No business logic beyond the pure rule check
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct AuthorizationPolicy;

impl AuthorizationPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Whether `actor` may perform `action` on `task`.
    pub fn can_perform(&self, actor: &Actor, task: &Task, action: TaskAction) -> bool {
        match actor.role() {
            Role::Admin => true,
            Role::Intern => {
                action == TaskAction::UpdateStatus
                    && task.assignee_id() == Some(actor.user_id())
            }
        }
    }
}
