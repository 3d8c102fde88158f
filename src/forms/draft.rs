//! Per-category form layouts and the editable draft behind them.

use crate::records::Category;

/// One input on a category form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Label shown above the input.
    pub label: &'static str,
    /// Whether submit is refused while the field is blank.
    pub required: bool,
    /// Multi-line text area instead of a single-line entry.
    pub multiline: bool,
}

const fn line(label: &'static str) -> FieldSpec {
    FieldSpec {
        label,
        required: true,
        multiline: false,
    }
}

/// Inputs shown for `category`, in on-screen order.
///
/// | Category  | First           | Second                 |
/// |-----------|-----------------|------------------------|
/// | Reminders | Title           | Time (HH:MM)           |
/// | Notes     | Title           | Content (multi-line)   |
/// | Contacts  | Name            | Phone                  |
/// | Journal   | Mood (one word) | Notes (multi-line, optional) |
pub fn fields(category: Category) -> [FieldSpec; 2] {
    match category {
        Category::Reminders => [line("Title"), line("Time (HH:MM)")],
        Category::Notes => [
            line("Title"),
            FieldSpec {
                label: "Content",
                required: true,
                multiline: true,
            },
        ],
        Category::Contacts => [line("Name"), line("Phone")],
        Category::Journal => [
            line("Mood (one word)"),
            FieldSpec {
                label: "Notes",
                required: false,
                multiline: true,
            },
        ],
    }
}

/// Warning shown when a required field of `category` is blank.
pub fn missing_message(category: Category) -> &'static str {
    match category {
        Category::Reminders => "Please enter title and time",
        Category::Notes => "Please enter title and content",
        Category::Contacts => "Please enter name and phone",
        Category::Journal => "Please enter your mood",
    }
}

/// Text typed into a category form, one value per [`fields`] entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDraft {
    category: Category,
    /// Raw input values, untrimmed.
    pub values: [String; 2],
}

impl FormDraft {
    /// Empty draft for `category`.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            values: Default::default(),
        }
    }

    /// Draft pre-filled with `first` and `second`.
    pub fn with_values(category: Category, first: &str, second: &str) -> Self {
        Self {
            category,
            values: [first.to_owned(), second.to_owned()],
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Values with surrounding whitespace removed.
    pub fn trimmed(&self) -> [&str; 2] {
        [self.values[0].trim(), self.values[1].trim()]
    }

    /// `true` when every required field has non-blank content.
    pub fn is_complete(&self) -> bool {
        fields(self.category)
            .iter()
            .zip(self.trimmed())
            .all(|(spec, value)| !spec.required || !value.is_empty())
    }

    /// Clear all inputs.
    pub fn clear(&mut self) {
        self.values = Default::default();
    }
}
