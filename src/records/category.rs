//! The four record categories and their fixed column layouts.

/// One of the memory categories offered on the menu page.
///
/// Each category owns exactly one CSV file, named after its lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Reminders,
    Notes,
    Contacts,
    Journal,
}

impl Category {
    /// All categories in menu order.
    pub const ALL: [Category; 4] = [
        Category::Reminders,
        Category::Notes,
        Category::Contacts,
        Category::Journal,
    ];

    /// Display name, also the base of the file name.
    pub fn name(self) -> &'static str {
        match self {
            Category::Reminders => "Reminders",
            Category::Notes => "Notes",
            Category::Contacts => "Contacts",
            Category::Journal => "Journal",
        }
    }

    /// Name of the category's CSV file.
    ///
    /// ```
    /// use memora::records::Category;
    ///
    /// assert_eq!(Category::Contacts.file_name(), "contacts.csv");
    /// ```
    pub fn file_name(self) -> String {
        format!("{}.csv", self.name().to_lowercase())
    }

    /// Column names in on-disk order.  Reads and writes both rely on it.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Category::Reminders => &["date", "time", "title"],
            Category::Notes => &["timestamp", "title", "content"],
            Category::Contacts => &["name", "phone"],
            Category::Journal => &["timestamp", "mood", "notes"],
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_are_lowercase() {
        let names: Vec<String> = Category::ALL.iter().map(|c| c.file_name()).collect();
        assert_eq!(
            names,
            ["reminders.csv", "notes.csv", "contacts.csv", "journal.csv"]
        );
    }

    #[test]
    fn column_counts() {
        assert_eq!(Category::Reminders.columns().len(), 3);
        assert_eq!(Category::Notes.columns().len(), 3);
        assert_eq!(Category::Contacts.columns().len(), 2);
        assert_eq!(Category::Journal.columns().len(), 3);
    }
}
