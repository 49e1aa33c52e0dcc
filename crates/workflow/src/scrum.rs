//! Scrum note use-cases.

use chrono::{DateTime, Utc};

use taskboard_auth::User;
use taskboard_core::{DomainError, UserId};
use taskboard_notifications::{Notification, NotificationTrigger};
use taskboard_scrum::{NewScrumNote, ScrumNote};

/// Record a daily scrum note and notify the admins.
///
/// The recipient list is supplied by the caller - this core has no user store
/// to query. The one-note-per-user-per-day rule is enforced by storage.
pub fn record_scrum_note(
    input: NewScrumNote,
    author: &User,
    admin_ids: &[UserId],
    trigger: &dyn NotificationTrigger,
    now: DateTime<Utc>,
) -> Result<ScrumNote, DomainError> {
    let note = ScrumNote::create(input, now)?;
    tracing::info!(note_id = %note.note_id(), author = %author.user_id(), "scrum note recorded");

    for &recipient_id in admin_ids {
        trigger.trigger(Notification::scrum_note_created(
            &note,
            author,
            recipient_id,
            now,
        ));
    }
    Ok(note)
}
