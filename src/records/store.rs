//! Append-only CSV persistence, one file per [`Category`].
//!
//! Rows are written with the `csv` crate so embedded commas, quotes and
//! newlines are quoted and survive a read back unchanged.  Files carry no
//! header row.  Nothing here ever rewrites or truncates an existing file.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use super::{Category, RecordError, Row};

/// Number of rows shown by "View Recent".
pub const DEFAULT_TAIL: usize = 5;

/// Flat-file record store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    /// Store whose category files live in `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the category files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the file backing `category`.
    pub fn path_for(&self, category: Category) -> PathBuf {
        self.dir.join(category.file_name())
    }

    /// Append one row to the category's file, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] when the directory or file cannot be opened or
    /// written.
    pub fn append<S: AsRef<str>>(
        &self,
        category: Category,
        fields: &[S],
    ) -> Result<(), RecordError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(category);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(file);
        writer.write_record(fields.iter().map(AsRef::<str>::as_ref))?;
        writer.flush()?;

        log::info!("Appended {} field(s) to {}", fields.len(), path.display());
        Ok(())
    }

    /// The last `n` rows of the category, oldest first.
    ///
    /// A missing file is an empty category, not an error.
    pub fn tail(&self, category: Category, n: usize) -> Result<Vec<Row>, RecordError> {
        let rows = self.read_all(category)?;
        let skip = rows.len().saturating_sub(n);
        Ok(rows.into_iter().skip(skip).collect())
    }

    /// Every row where `term` occurs, case-insensitively, in any field.
    ///
    /// The term is matched as given, surrounding whitespace included.  An
    /// empty term matches nothing.
    pub fn search(&self, category: Category, term: &str) -> Result<Vec<Row>, RecordError> {
        let needle = term.to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        let rows = self.read_all(category)?;
        Ok(rows
            .into_iter()
            .filter(|row| row.iter().any(|field| field.to_lowercase().contains(&needle)))
            .collect())
    }

    /// Read every row of the category's file.
    fn read_all(&self, category: Category) -> Result<Vec<Row>, RecordError> {
        let path = self.path_for(category);
        if !path.exists() {
            log::debug!("{} does not exist yet", path.display());
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&path)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_owned).collect());
        }
        Ok(rows)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
