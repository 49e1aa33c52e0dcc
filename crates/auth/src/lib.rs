//! `taskboard-auth` — pure identity/authorization values.
//!
//! This crate is intentionally decoupled from HTTP and storage: token
//! verification happens upstream (identity provider integration); by the time
//! this layer is involved, the caller holds a resolved role and user id.

pub mod actor;
pub mod roles;
pub mod user;

pub use actor::Actor;
pub use roles::Role;
pub use user::User;
