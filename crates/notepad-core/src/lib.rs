//! notepad-core - Core library for Notepad
//!
//! This crate contains the note store, the key gate, the view projection and
//! the command dispatcher used by every Notepad front end.

pub mod app;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod gate;
pub mod models;
pub mod render;
pub mod state;
pub mod store;
pub mod util;
pub mod view;

pub use app::{App, TagFilter};
pub use dispatch::{Command, Notification, NotificationLevel, Outcome};
pub use error::{Error, Result};
pub use models::{Note, NoteDraft, NoteId};
pub use store::NoteStore;
