use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use taskboard_core::{DomainError, Entity, ScrumNoteId, UserId};

/// Input for [`ScrumNote::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScrumNote {
    pub date: DateTime<Utc>,
    pub what_i_did: String,
    /// Optional; an absent value becomes the empty string.
    pub blockers: Option<String>,
    pub next_steps: String,
    pub user_id: UserId,
}

/// Partial edit applied through [`ScrumNote::update`]. `None` leaves a field
/// as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrumNoteChanges {
    pub what_i_did: Option<String>,
    pub blockers: Option<String>,
    pub next_steps: Option<String>,
}

/// A user's daily stand-up note.
///
/// The date is normalized to midnight UTC on creation so the
/// one-note-per-user-per-day rule upstream can compare dates directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrumNote {
    id: ScrumNoteId,
    date: DateTime<Utc>,
    what_i_did: String,
    blockers: String,
    next_steps: String,
    user_id: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ScrumNote {
    pub fn create(input: NewScrumNote, now: DateTime<Utc>) -> Result<Self, DomainError> {
        let what_i_did = validated_field("whatIDid", &input.what_i_did)?;
        let next_steps = validated_field("nextSteps", &input.next_steps)?;
        let blockers = input.blockers.map(|b| b.trim().to_string()).unwrap_or_default();

        Ok(Self {
            id: ScrumNoteId::new(),
            date: normalize_to_midnight(input.date),
            what_i_did,
            blockers,
            next_steps,
            user_id: input.user_id,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn note_id(&self) -> ScrumNoteId {
        self.id
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn what_i_did(&self) -> &str {
        &self.what_i_did
    }

    pub fn blockers(&self) -> &str {
        &self.blockers
    }

    pub fn next_steps(&self) -> &str {
        &self.next_steps
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Edit the note body. Validates changed fields, bumps `updated_at`.
    pub fn update(
        &mut self,
        changes: ScrumNoteChanges,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let what_i_did = changes
            .what_i_did
            .as_deref()
            .map(|v| validated_field("whatIDid", v))
            .transpose()?;
        let next_steps = changes
            .next_steps
            .as_deref()
            .map(|v| validated_field("nextSteps", v))
            .transpose()?;

        if let Some(what_i_did) = what_i_did {
            self.what_i_did = what_i_did;
        }
        if let Some(blockers) = changes.blockers {
            // Blockers may legitimately be cleared.
            self.blockers = blockers.trim().to_string();
        }
        if let Some(next_steps) = next_steps {
            self.next_steps = next_steps;
        }
        self.updated_at = now;
        Ok(())
    }
}

impl Entity for ScrumNote {
    type Id = ScrumNoteId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn validated_field(name: &str, raw: &str) -> Result<String, DomainError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(DomainError::validation(format!("{name} must not be empty")));
    }
    Ok(value.to_string())
}

fn normalize_to_midnight(date: DateTime<Utc>) -> DateTime<Utc> {
    date.date_naive().and_time(NaiveTime::MIN).and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Timelike};

    fn valid_input() -> NewScrumNote {
        NewScrumNote {
            date: Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap(),
            what_i_did: "Reviewed the auth flow".to_string(),
            blockers: None,
            next_steps: "Start on the board view".to_string(),
            user_id: UserId::new(),
        }
    }

    #[test]
    fn create_normalizes_date_to_midnight() {
        let note = ScrumNote::create(valid_input(), Utc::now()).unwrap();
        assert_eq!(note.date(), Utc.with_ymd_and_hms(2026, 3, 14, 0, 0, 0).unwrap());
        assert_eq!(note.date().hour(), 0);
    }

    #[test]
    fn create_defaults_blockers_to_empty_string() {
        let note = ScrumNote::create(valid_input(), Utc::now()).unwrap();
        assert_eq!(note.blockers(), "");
    }

    #[test]
    fn create_rejects_blank_what_i_did() {
        let err = ScrumNote::create(
            NewScrumNote {
                what_i_did: "  ".to_string(),
                ..valid_input()
            },
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn create_rejects_blank_next_steps() {
        let err = ScrumNote::create(
            NewScrumNote {
                next_steps: "".to_string(),
                ..valid_input()
            },
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn update_bumps_updated_at_and_may_clear_blockers() {
        let created = Utc::now();
        let mut note = ScrumNote::create(
            NewScrumNote {
                blockers: Some("waiting on review".to_string()),
                ..valid_input()
            },
            created,
        )
        .unwrap();
        assert_eq!(note.blockers(), "waiting on review");

        let later = created + Duration::minutes(5);
        note.update(
            ScrumNoteChanges {
                blockers: Some("".to_string()),
                ..ScrumNoteChanges::default()
            },
            later,
        )
        .unwrap();

        assert_eq!(note.blockers(), "");
        assert_eq!(note.updated_at(), later);
        assert_eq!(note.created_at(), created);
    }

    #[test]
    fn update_rejects_blanking_required_fields() {
        let mut note = ScrumNote::create(valid_input(), Utc::now()).unwrap();
        let err = note
            .update(
                ScrumNoteChanges {
                    what_i_did: Some("   ".to_string()),
                    ..ScrumNoteChanges::default()
                },
                Utc::now(),
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(note.what_i_did(), "Reviewed the auth flow");
    }
}
