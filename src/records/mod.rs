//! Record persistence for the four memory categories.
//!
//! * [`Category`] — the categories and their column layouts.
//! * [`RecordStore`] — append / tail / search over one CSV file per category.
//! * [`Record`] and friends — typed rows with a fixed field order.
//! * [`RecordError`] — failures reading or writing a category file.

pub mod category;
pub mod record;
pub mod store;

pub use category::Category;
pub use record::{summarize, Contact, JournalEntry, Note, Record, Reminder};
pub use store::{RecordStore, DEFAULT_TAIL};

use thiserror::Error;

/// One stored row: the category's fields in column order.
pub type Row = Vec<String>;

/// Errors raised by [`RecordStore`].
#[derive(Debug, Error)]
pub enum RecordError {
    /// The data directory or file could not be opened or written.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The CSV layer failed while encoding or decoding a row.
    #[error("{0}")]
    Csv(#[from] csv::Error),
}
