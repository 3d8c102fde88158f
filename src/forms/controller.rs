//! Validates a submitted form, writes the row and confirms by voice.
//!
//! # Submit flow
//!
//! ```text
//! FormDraft ──trim──▶ required blank? ──yes──▶ FormError::Missing   (no write)
//!                          │no
//!                          ▼
//!              build Record (timestamp from `now`)
//!                          ▼
//!              RecordStore::append ──err──▶ FormError::Save        (no announcement)
//!                          │ok
//!                          ▼
//!              announce "Entry saved" ──▶ Ok(Record)
//! ```

use std::sync::Arc;

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::records::{
    Category, Contact, JournalEntry, Note, Record, RecordError, RecordStore, Reminder, Row,
    DEFAULT_TAIL,
};
use crate::speech::Announcer;

use super::draft::{missing_message, FormDraft};

/// Spoken after a successful save.
pub const SAVED_ANNOUNCEMENT: &str = "Entry saved";

/// Date format of the reminder `date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp format of the note and journal `timestamp` columns.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Why a submit did not produce a saved entry.
#[derive(Debug, Error)]
pub enum FormError {
    /// A required field was blank.  Nothing was written.
    #[error("{0}")]
    Missing(&'static str),

    /// The row could not be written.
    #[error("Could not save entry: {0}")]
    Save(#[from] RecordError),
}

/// Turns form submissions into record-store rows.
pub struct EntryFormController {
    store: RecordStore,
    announcer: Arc<dyn Announcer>,
}

impl EntryFormController {
    pub fn new(store: RecordStore, announcer: Arc<dyn Announcer>) -> Self {
        Self { store, announcer }
    }

    /// The backing store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Validate and save `draft`, stamping it with `now`.
    ///
    /// On success the saved record is returned and "Entry saved" is announced
    /// when `voice` is on.
    pub fn submit(
        &self,
        draft: &FormDraft,
        now: NaiveDateTime,
        voice: bool,
    ) -> Result<Record, FormError> {
        let category = draft.category();
        if !draft.is_complete() {
            log::debug!("{category} form incomplete");
            return Err(FormError::Missing(missing_message(category)));
        }

        let record = build_record(draft, now);
        self.store.append(record.category(), &record.clone().into_row())?;
        log::info!("Saved {category} entry");

        self.announcer.announce(SAVED_ANNOUNCEMENT, voice);
        Ok(record)
    }

    /// The most recent rows of `category` ("View Recent").
    pub fn recent(&self, category: Category) -> Result<Vec<Row>, RecordError> {
        self.store.tail(category, DEFAULT_TAIL)
    }

    /// Rows of `category` containing `term`, ignoring case.
    pub fn search(&self, category: Category, term: &str) -> Result<Vec<Row>, RecordError> {
        self.store.search(category, term)
    }
}

/// Map a complete draft onto its category's record.
fn build_record(draft: &FormDraft, now: NaiveDateTime) -> Record {
    let [first, second] = draft.trimmed().map(str::to_owned);
    match draft.category() {
        Category::Reminders => Record::Reminder(Reminder {
            date: now.format(DATE_FORMAT).to_string(),
            time: second,
            title: first,
        }),
        Category::Notes => Record::Note(Note {
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
            title: first,
            content: second,
        }),
        Category::Contacts => Record::Contact(Contact {
            name: first,
            phone: second,
        }),
        Category::Journal => Record::Journal(JournalEntry {
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
            mood: first,
            notes: second,
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::RecordingAnnouncer;
    use chrono::NaiveDate;
    use tempfile::{tempdir, TempDir};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .expect("valid timestamp")
    }

    fn controller() -> (TempDir, Arc<RecordingAnnouncer>, EntryFormController) {
        let dir = tempdir().expect("temp dir");
        let announcer = Arc::new(RecordingAnnouncer::default());
        let forms = EntryFormController::new(RecordStore::new(dir.path()), announcer.clone());
        (dir, announcer, forms)
    }

    #[test]
    fn reminder_without_title_writes_nothing() {
        let (_dir, announcer, forms) = controller();
        let draft = FormDraft::with_values(Category::Reminders, "   ", "08:00");

        let err = forms.submit(&draft, now(), true).unwrap_err();
        assert!(matches!(err, FormError::Missing(_)));
        assert_eq!(err.to_string(), "Please enter title and time");

        assert!(!forms.store().path_for(Category::Reminders).exists());
        assert!(announcer.calls().is_empty());
    }

    #[test]
    fn complete_reminder_writes_once_and_announces_once() {
        let (_dir, announcer, forms) = controller();
        let draft = FormDraft::with_values(Category::Reminders, " Dentist ", "08:00 ");

        forms.submit(&draft, now(), true).expect("saved");

        let rows = forms.store().tail(Category::Reminders, 10).expect("tail");
        assert_eq!(rows, vec![vec!["2024-05-01", "08:00", "Dentist"]]);
        assert_eq!(announcer.spoken(), [SAVED_ANNOUNCEMENT]);
    }

    #[test]
    fn note_keeps_multiline_content_and_timestamp() {
        let (_dir, _announcer, forms) = controller();
        let draft = FormDraft::with_values(Category::Notes, "Ideas", "one, two\nthree\n");

        let record = forms.submit(&draft, now(), true).expect("saved");
        assert_eq!(
            record,
            Record::Note(Note {
                timestamp: "2024-05-01 09:30".into(),
                title: "Ideas".into(),
                content: "one, two\nthree".into(),
            })
        );
        assert_eq!(
            forms.recent(Category::Notes).expect("recent"),
            vec![vec!["2024-05-01 09:30", "Ideas", "one, two\nthree"]]
        );
    }

    #[test]
    fn journal_accepts_empty_notes() {
        let (_dir, _announcer, forms) = controller();
        let draft = FormDraft::with_values(Category::Journal, "calm", "");

        forms.submit(&draft, now(), true).expect("saved");
        assert_eq!(
            forms.recent(Category::Journal).expect("recent"),
            vec![vec!["2024-05-01 09:30", "calm", ""]]
        );
    }

    #[test]
    fn journal_requires_mood() {
        let (_dir, _announcer, forms) = controller();
        let draft = FormDraft::with_values(Category::Journal, "", "long day");

        let err = forms.submit(&draft, now(), true).unwrap_err();
        assert_eq!(err.to_string(), "Please enter your mood");
    }

    #[test]
    fn contact_search_through_controller() {
        let (_dir, _announcer, forms) = controller();
        for (name, phone) in [("Alice", "111"), ("Bob", "222"), ("Carol", "333")] {
            let draft = FormDraft::with_values(Category::Contacts, name, phone);
            forms.submit(&draft, now(), false).expect("saved");
        }

        assert_eq!(
            forms.search(Category::Contacts, "CAR").expect("search"),
            vec![vec!["Carol", "333"]]
        );
    }

    #[test]
    fn voice_off_passes_flag_through() {
        let (_dir, announcer, forms) = controller();
        let draft = FormDraft::with_values(Category::Contacts, "Alice", "111");

        forms.submit(&draft, now(), false).expect("saved");
        assert_eq!(announcer.calls(), [(SAVED_ANNOUNCEMENT.to_string(), false)]);
        assert!(announcer.spoken().is_empty());
    }

    #[test]
    fn write_failure_reports_and_stays_silent() {
        let dir = tempdir().expect("temp dir");
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").expect("write");
        let announcer = Arc::new(RecordingAnnouncer::default());
        let store = RecordStore::new(blocker.join("data"));
        let forms = EntryFormController::new(store, announcer.clone());

        let draft = FormDraft::with_values(Category::Contacts, "Alice", "111");
        let err = forms.submit(&draft, now(), true).unwrap_err();

        assert!(matches!(err, FormError::Save(_)));
        assert!(err.to_string().starts_with("Could not save entry: "));
        assert!(announcer.calls().is_empty());
    }
}
