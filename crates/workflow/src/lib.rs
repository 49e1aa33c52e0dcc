//! `taskboard-workflow` — the use-case layer.
//!
//! Each function runs one aggregate operation and, on success, builds the
//! notification descriptor the mutation calls for and hands it to the
//! [`taskboard_notifications::NotificationTrigger`] port. Domain errors pass
//! through untouched; this layer never logs-and-swallows.
//!
//! Loading the aggregate beforehand and saving it afterwards is the caller's
//! (controller + storage) responsibility.

pub mod scrum;
pub mod tasks;

pub use scrum::record_scrum_note;
pub use tasks::{assign_task, change_task_status, create_task, delete_task, edit_task};
