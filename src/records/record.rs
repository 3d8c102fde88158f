//! Typed views of a category row.
//!
//! The store itself deals in plain `Vec<String>` rows; these types pin down
//! the field order for each category.  The form controller builds them before
//! writing and the result dialogs rebuild them to format each line.

use super::{Category, Row};

/// A reminder: creation date, free-text time (`HH:MM`) and title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub date: String,
    pub time: String,
    pub title: String,
}

/// A note; `content` may span several lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub timestamp: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

/// A journal entry; `notes` may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub timestamp: String,
    pub mood: String,
    pub notes: String,
}

/// Any record, tagged by category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Reminder(Reminder),
    Note(Note),
    Contact(Contact),
    Journal(JournalEntry),
}

impl Record {
    /// Category whose file this record belongs to.
    pub fn category(&self) -> Category {
        match self {
            Record::Reminder(_) => Category::Reminders,
            Record::Note(_) => Category::Notes,
            Record::Contact(_) => Category::Contacts,
            Record::Journal(_) => Category::Journal,
        }
    }

    /// Fields in the category's column order.
    pub fn into_row(self) -> Row {
        match self {
            Record::Reminder(r) => vec![r.date, r.time, r.title],
            Record::Note(n) => vec![n.timestamp, n.title, n.content],
            Record::Contact(c) => vec![c.name, c.phone],
            Record::Journal(j) => vec![j.timestamp, j.mood, j.notes],
        }
    }

    /// One-line summary for the result dialogs.
    pub fn summary(&self) -> String {
        match self {
            Record::Reminder(r) => format!("{} {} | {}", r.date, r.time, r.title),
            Record::Note(n) => format!("{} | {} | {}", n.timestamp, n.title, n.content),
            Record::Contact(c) => format!("{} | {}", c.name, c.phone),
            Record::Journal(j) => format!("{} | {} | {}", j.timestamp, j.mood, j.notes),
        }
    }

    /// Rebuild a record from a stored row.
    ///
    /// Returns `None` when the row does not have exactly the category's
    /// column count (for example a hand-edited file).
    pub fn from_row(category: Category, row: &[String]) -> Option<Self> {
        if row.len() != category.columns().len() {
            return None;
        }
        let field = |i: usize| row[i].clone();
        Some(match category {
            Category::Reminders => Record::Reminder(Reminder {
                date: field(0),
                time: field(1),
                title: field(2),
            }),
            Category::Notes => Record::Note(Note {
                timestamp: field(0),
                title: field(1),
                content: field(2),
            }),
            Category::Contacts => Record::Contact(Contact {
                name: field(0),
                phone: field(1),
            }),
            Category::Journal => Record::Journal(JournalEntry {
                timestamp: field(0),
                mood: field(1),
                notes: field(2),
            }),
        })
    }
}

/// One-line summary of a row: fields joined with `" | "`.
pub fn summarize(row: &[String]) -> String {
    row.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_order_matches_columns() {
        let record = Record::Reminder(Reminder {
            date: "2024-05-01".into(),
            time: "09:30".into(),
            title: "Dentist".into(),
        });
        assert_eq!(record.category(), Category::Reminders);
        assert_eq!(record.into_row(), vec!["2024-05-01", "09:30", "Dentist"]);
    }

    #[test]
    fn from_row_rejects_wrong_width() {
        let row = vec!["Alice".to_string()];
        assert_eq!(Record::from_row(Category::Contacts, &row), None);
    }

    #[test]
    fn from_row_rebuilds_journal() {
        let row: Row = vec!["2024-05-01 21:00".into(), "calm".into(), String::new()];
        let record = Record::from_row(Category::Journal, &row).expect("journal row");
        assert_eq!(
            record,
            Record::Journal(JournalEntry {
                timestamp: "2024-05-01 21:00".into(),
                mood: "calm".into(),
                notes: String::new(),
            })
        );
    }

    #[test]
    fn summary_puts_reminder_date_and_time_together() {
        let row: Row = vec!["2024-05-01".into(), "08:00".into(), "Dentist".into()];
        let record = Record::from_row(Category::Reminders, &row).expect("reminder row");
        assert_eq!(record.summary(), "2024-05-01 08:00 | Dentist");
    }

    #[test]
    fn summarize_joins_with_bars() {
        let row: Row = vec!["Bob".into(), "222".into()];
        assert_eq!(summarize(&row), "Bob | 222");
    }
}
