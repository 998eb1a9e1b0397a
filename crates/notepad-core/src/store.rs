//! In-memory ordered note collection.
//!
//! Newest inserts sit at the front. Updates keep a note where it already is,
//! so list order is "most recently created first", not "most recently edited".

use crate::error::{Error, Result};
use crate::models::{Note, NoteId};

/// Ordered collection of notes, unique by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    #[must_use]
    pub const fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Build a store from notes already in display order.
    ///
    /// Later duplicates of an id replace the earlier entry in place.
    #[must_use]
    pub fn from_notes(notes: impl IntoIterator<Item = Note>) -> Self {
        let mut store = Self::new();
        for note in notes {
            if let Some(index) = store.position(&note.id) {
                store.notes[index] = note;
            } else {
                store.notes.push(note);
            }
        }
        store
    }

    /// Replace the note with the same id in place, or insert at the front.
    pub fn upsert(&mut self, note: Note) {
        if let Some(index) = self.position(&note.id) {
            self.notes[index] = note;
        } else {
            self.notes.insert(0, note);
        }
    }

    /// Notes matching `predicate`, in store order.
    ///
    /// Each call scans the collection again, so the result can be rebuilt
    /// freely on every render.
    pub fn filter<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a Note> + 'a
    where
        P: Fn(&Note) -> bool + 'a,
    {
        self.notes.iter().filter(move |note| predicate(note))
    }

    /// Every tag across all notes, deduplicated, in order of first appearance.
    #[must_use]
    pub fn distinct_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for tag in self.notes.iter().flat_map(|note| note.tags.iter()) {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
        tags
    }

    #[must_use]
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == *id)
    }

    /// Resolve a full id, a unique id prefix, or a unique short id to a note.
    pub fn resolve(&self, query: &str) -> Result<&Note> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::NoteNotFound(String::new()));
        }

        if let Ok(id) = query.parse::<NoteId>() {
            if let Some(note) = self.get(&id) {
                return Ok(note);
            }
        }

        let needle = query.to_lowercase();
        let matches = self
            .notes
            .iter()
            .filter(|note| {
                let id = note.id.as_str();
                id.starts_with(&needle) || id.ends_with(&needle)
            })
            .take(3)
            .collect::<Vec<_>>();

        match matches.as_slice() {
            [] => Err(Error::NoteNotFound(query.to_string())),
            [note] => Ok(note),
            _ => {
                let options = matches
                    .iter()
                    .map(|note| note.id.short())
                    .collect::<Vec<_>>()
                    .join(", ");
                Err(Error::AmbiguousNoteId(format!(
                    "ID prefix '{query}' is ambiguous; matches: {options}"
                )))
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn position(&self, id: &NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == *id)
    }
}
