//! `taskboard-notifications` — notification descriptors and the trigger port.
//!
//! This crate only *describes* notifications; formatting the message and
//! choosing the recipient happen here, delivery belongs to the external
//! messaging subsystem behind [`NotificationTrigger`].

pub mod notification;
pub mod trigger;

pub use notification::{Notification, NotificationKind, NotificationMetadata};
pub use trigger::{InMemoryTrigger, NotificationTrigger};
