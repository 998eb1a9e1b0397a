//! Data models for Notepad

mod draft;
mod note;

pub use draft::{parse_tags, NoteDraft};
pub use note::{Note, NoteId, DEFAULT_FOLDER, DEFAULT_TITLE};
