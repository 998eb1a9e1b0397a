//! Note model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Title stored when a note is saved without one
pub const DEFAULT_TITLE: &str = "Untitled";

/// Folder stored when a note is saved without one
pub const DEFAULT_FOLDER: &str = "Inbox";

/// A unique identifier for a note, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Create a new unique note ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }

    /// Shortened form used in list output.
    ///
    /// Takes the random tail of the id: the leading characters of a v7 id are
    /// a timestamp and repeat across notes created close together.
    #[must_use]
    pub fn short(&self) -> String {
        let id = self.as_str();
        id[id.len() - 12..].to_string()
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A note in the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier, never changes after creation
    pub id: NoteId,
    /// Title, never empty once saved
    pub title: String,
    /// Plain text body
    pub body: String,
    /// Tags in entry order
    pub tags: Vec<String>,
    /// Folder name, never empty once saved
    pub folder: String,
    /// Calendar date of the last save
    pub updated_at: NaiveDate,
}

impl Note {
    /// Create a note with a fresh id.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        tags: Vec<String>,
        folder: impl Into<String>,
        updated_at: NaiveDate,
    ) -> Self {
        Self {
            id: NoteId::new(),
            title: title.into(),
            body: body.into(),
            tags,
            folder: folder.into(),
            updated_at,
        }
    }

    /// Lowercased text matched by free-text search: title, body, tags and date.
    #[must_use]
    pub fn search_haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.body,
            self.tags.join(" "),
            self.updated_at
        )
        .to_lowercase()
    }

    /// Check whether the note carries exactly this tag
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }

    /// First `max_chars` characters of the body
    #[must_use]
    pub fn body_preview(&self, max_chars: usize) -> String {
        self.body.chars().take(max_chars).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_note_id_unique() {
        let id1 = NoteId::new();
        let id2 = NoteId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_note_id_parse() {
        let id = NoteId::new();
        let parsed: NoteId = id.as_str().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_note_id_short() {
        let id: NoteId = "01890a5d-ac96-774b-bcce-b302099a8057".parse().unwrap();
        assert_eq!(id.short(), "b302099a8057");
    }

    #[test]
    fn test_search_haystack_includes_all_fields() {
        let note = Note::new(
            "Weekly Plan",
            "Review PRs",
            vec!["Work".to_string(), "urgent".to_string()],
            "Projects",
            date(2024, 3, 9),
        );
        assert_eq!(
            note.search_haystack(),
            "weekly plan review prs work urgent 2024-03-09"
        );
    }

    #[test]
    fn test_search_haystack_excludes_folder() {
        let note = Note::new("a", "b", Vec::new(), "Engineering", date(2024, 1, 1));
        assert!(!note.search_haystack().contains("engineering"));
    }

    #[test]
    fn test_has_tag_is_exact() {
        let note = Note::new(
            "a",
            "b",
            vec!["research".to_string()],
            "Inbox",
            date(2024, 1, 1),
        );
        assert!(note.has_tag("research"));
        assert!(!note.has_tag("Research"));
        assert!(!note.has_tag("search"));
    }

    #[test]
    fn test_body_preview_counts_characters() {
        let note = Note::new("a", "héllo wörld", Vec::new(), "Inbox", date(2024, 1, 1));
        assert_eq!(note.body_preview(5), "héllo");
        assert_eq!(note.body_preview(100), "héllo wörld");
    }
}
