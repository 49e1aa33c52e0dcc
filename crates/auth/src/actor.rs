use serde::{Deserialize, Serialize};

use taskboard_core::{UserId, ValueObject};

use crate::Role;

/// A resolved actor for authorization decisions.
///
/// Construction is intentionally decoupled from storage and transport: callers
/// derive an `Actor` from verified claims (or from a loaded [`crate::User`])
/// and pass it explicitly into domain operations. No process-wide current-user
/// singleton exists.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    user_id: UserId,
    role: Role,
}

impl Actor {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn admin(user_id: UserId) -> Self {
        Self::new(user_id, Role::Admin)
    }

    pub fn intern(user_id: UserId) -> Self {
        Self::new(user_id, Role::Intern)
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl ValueObject for Actor {}
