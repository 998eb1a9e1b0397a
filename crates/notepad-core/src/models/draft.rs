//! Editor form contents before they become a stored note

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::note::{Note, NoteId, DEFAULT_FOLDER, DEFAULT_TITLE};
use crate::util::normalize_text_option;

/// Raw editor fields as the user typed them.
///
/// `tags` holds the comma-separated input, not the parsed list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub body: String,
    pub tags: String,
    pub folder: String,
}

impl NoteDraft {
    /// Pre-fill the editor from an existing note
    #[must_use]
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            body: note.body.clone(),
            tags: note.tags.join(", "),
            folder: note.folder.clone(),
        }
    }

    /// Build the note stored on save.
    ///
    /// Empty title and folder fall back to [`DEFAULT_TITLE`] and
    /// [`DEFAULT_FOLDER`].
    #[must_use]
    pub fn into_note(self, id: NoteId, updated_at: NaiveDate) -> Note {
        Note {
            id,
            title: normalize_text_option(Some(self.title))
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            body: self.body.trim().to_string(),
            tags: parse_tags(&self.tags),
            folder: normalize_text_option(Some(self.folder))
                .unwrap_or_else(|| DEFAULT_FOLDER.to_string()),
            updated_at,
        }
    }
}

/// Split comma-separated tag input, trimming entries and dropping empties.
///
/// Order is preserved and duplicates are kept as entered.
///
/// # Examples
///
/// ```
/// use notepad_core::models::parse_tags;
///
/// assert_eq!(parse_tags(" research, ,weekly "), vec!["research", "weekly"]);
/// ```
#[must_use]
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}
