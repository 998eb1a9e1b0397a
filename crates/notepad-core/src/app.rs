//! Application state passed to the dispatcher and the view projection.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};

use crate::config::AppConfig;
use crate::gate::VisibilityGate;
use crate::models::{Note, NoteDraft, NoteId};
use crate::state::{InteractionState, Screen, Theme};
use crate::store::NoteStore;

/// Chip value that clears the tag filter
pub const ALL_TAGS: &str = "all";

/// Active tag scope on the search screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    #[must_use]
    pub fn matches(&self, note: &Note) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => note.has_tag(tag),
        }
    }

    /// Chip label for this filter
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_TAGS,
            Self::Tag(tag) => tag,
        }
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TagFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.is_empty() || tag == ALL_TAGS {
            Ok(Self::All)
        } else {
            Ok(Self::Tag(tag.to_string()))
        }
    }
}

/// Everything the interface shows, owned in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub(crate) store: NoteStore,
    pub(crate) gate: VisibilityGate,
    pub(crate) interaction: InteractionState,
    pub(crate) screen: Screen,
    pub(crate) theme: Theme,
    /// Note the editor writes back to; `None` saves a new note
    pub(crate) editing: Option<NoteId>,
    pub(crate) draft: NoteDraft,
    pub(crate) home_query: String,
    pub(crate) search_query: String,
    pub(crate) active_tag: TagFilter,
    pub(crate) preview_chars: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::with_store(NoteStore::new(), &AppConfig::default())
    }
}

impl App {
    /// Build the startup state, seeding sample notes when configured.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let store = if config.seed_demo_notes {
            NoteStore::from_notes(demo_notes(today()))
        } else {
            NoteStore::new()
        };
        Self::with_store(store, config)
    }

    #[must_use]
    pub fn with_store(store: NoteStore, config: &AppConfig) -> Self {
        Self {
            store,
            gate: VisibilityGate::new(),
            interaction: InteractionState::default(),
            screen: config.start_screen,
            theme: config.theme,
            editing: None,
            draft: NoteDraft::default(),
            home_query: String::new(),
            search_query: String::new(),
            active_tag: TagFilter::All,
            preview_chars: config.preview_chars,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &NoteStore {
        &self.store
    }

    #[must_use]
    pub const fn gate(&self) -> &VisibilityGate {
        &self.gate
    }

    #[must_use]
    pub const fn interaction(&self) -> InteractionState {
        self.interaction
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub const fn editing(&self) -> Option<NoteId> {
        self.editing
    }

    #[must_use]
    pub const fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    #[must_use]
    pub fn home_query(&self) -> &str {
        &self.home_query
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    #[must_use]
    pub const fn active_tag(&self) -> &TagFilter {
        &self.active_tag
    }

    #[must_use]
    pub const fn preview_chars(&self) -> usize {
        self.preview_chars
    }
}

/// UTC calendar date used for `updated_at`
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Sample notes shown on first launch, newest first.
#[must_use]
pub fn demo_notes(today: NaiveDate) -> Vec<Note> {
    let yesterday = today.checked_sub_days(Days::new(1)).unwrap_or(today);
    vec![
        Note::new(
            "Research Sprint Plan",
            "Define weekly milestones for AI paper review and extract key findings.",
            vec!["research".to_string(), "weekly".to_string()],
            "Projects",
            today,
        ),
        Note::new(
            "API Security Checklist",
            "Rotate keys monthly, enforce 2FA fallback, and validate encrypted sync payloads.",
            vec!["security".to_string(), "dev".to_string()],
            "Engineering",
            yesterday,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_is_the_utc_date() {
        let before = chrono::Utc::now().date_naive();
        let stamped = today();
        let after = chrono::Utc::now().date_naive();
        assert!(stamped == before || stamped == after);
    }

    #[test]
    fn tag_filter_parses_all_sentinel() {
        assert_eq!("all".parse::<TagFilter>().unwrap(), TagFilter::All);
        assert_eq!("".parse::<TagFilter>().unwrap(), TagFilter::All);
        assert_eq!(
            " research ".parse::<TagFilter>().unwrap(),
            TagFilter::Tag("research".to_string())
        );
    }

    #[test]
    fn demo_notes_are_dated_today_and_yesterday() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let notes = demo_notes(today);
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].title, "Research Sprint Plan");
        assert_eq!(notes[0].updated_at, today);
        assert_eq!(
            notes[1].updated_at,
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn new_app_respects_config() {
        let seeded = App::new(&AppConfig::default());
        assert_eq!(seeded.store().len(), 2);
        assert!(!seeded.gate().is_unlocked());

        let config = AppConfig {
            seed_demo_notes: false,
            theme: Theme::Dark,
            start_screen: Screen::Settings,
            ..AppConfig::default()
        };
        let empty = App::new(&config);
        assert!(empty.store().is_empty());
        assert_eq!(empty.theme(), Theme::Dark);
        assert_eq!(empty.screen(), Screen::Settings);
    }
}
