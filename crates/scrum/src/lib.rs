//! `taskboard-scrum` — daily scrum note aggregate.
//!
//! One note per user per day is enforced by the owning storage collaborator,
//! not here; this crate owns field validation and date normalization.

pub mod note;

pub use note::{NewScrumNote, ScrumNote, ScrumNoteChanges};
