use serde::{Deserialize, Serialize};

use taskboard_core::{Entity, UserId};

use crate::{Actor, Role};

/// Read-only user view.
///
/// Users are owned by the identity subsystem; this core only ever reads them.
/// The role is the sole authorization input and is never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    display_name: String,
    role: Role,
}

impl User {
    pub fn new(id: UserId, display_name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            role,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// The authorization-relevant slice of this user.
    pub fn as_actor(&self) -> Actor {
        Actor::new(self.id, self.role)
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
