use serde::{Deserialize, Serialize};

/// Role used for task authorization.
///
/// The rule table is total over exactly these two roles, so this is a closed
/// enum rather than an opaque string: every policy match is exhaustive and a
/// role that grants nothing cannot exist by construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Intern,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Role::Admin => f.write_str("ADMIN"),
            Role::Intern => f.write_str("INTERN"),
        }
    }
}
