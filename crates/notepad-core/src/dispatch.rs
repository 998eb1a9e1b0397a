//! User actions and the state transitions they trigger.
//!
//! Every command runs to completion against `&mut App`. Failures never
//! escape `dispatch`: they come back as error notifications in the
//! [`Outcome`].

use serde::Serialize;

use crate::app::{today, App, TagFilter};
use crate::error::{Error, Result};
use crate::models::{NoteDraft, NoteId};
use crate::state::{InteractionState, Screen, Theme};

/// A discrete user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Navigate(Screen),
    CreateNote,
    /// Open by full id, id prefix, or short id
    OpenNote(String),
    /// Replace the editor form without saving
    EditDraft(NoteDraft),
    SaveNote(NoteDraft),
    SearchHome(String),
    SearchGlobal(String),
    SelectTag(TagFilter),
    SetInteractionState(InteractionState),
    ConfigureKey,
    RequestUnlock,
    Unlock(String),
    Lock,
    ToggleTheme,
    SetTheme(Theme),
    CreateNotebook,
    ManualSync,
    RegenerateKey,
    BackupKey,
    OpenFilters,
    ResolveConflicts,
}

impl Command {
    /// Stable name used in logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Navigate(_) => "navigate",
            Self::CreateNote => "create_note",
            Self::OpenNote(_) => "open_note",
            Self::EditDraft(_) => "edit_draft",
            Self::SaveNote(_) => "save_note",
            Self::SearchHome(_) => "search_home",
            Self::SearchGlobal(_) => "search_global",
            Self::SelectTag(_) => "select_tag",
            Self::SetInteractionState(_) => "set_interaction_state",
            Self::ConfigureKey => "configure_key",
            Self::RequestUnlock => "request_unlock",
            Self::Unlock(_) => "unlock",
            Self::Lock => "lock",
            Self::ToggleTheme => "toggle_theme",
            Self::SetTheme(_) => "set_theme",
            Self::CreateNotebook => "create_notebook",
            Self::ManualSync => "manual_sync",
            Self::RegenerateKey => "regenerate_key",
            Self::BackupKey => "backup_key",
            Self::OpenFilters => "open_filters",
            Self::ResolveConflicts => "resolve_conflicts",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Error,
}

/// Transient, dismissible message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// What the interface should surface after a command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub notifications: Vec<Notification>,
    /// Show the unlock dialog
    pub auth_prompt: bool,
}

impl Outcome {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::none().with(NotificationLevel::Info, message)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::none().with(NotificationLevel::Error, message)
    }

    #[must_use]
    pub fn auth_prompt() -> Self {
        Self {
            auth_prompt: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_error(error: &Error) -> Self {
        Self {
            auth_prompt: error.prompts_unlock(),
            ..Self::error(error.to_string())
        }
    }

    #[must_use]
    pub fn with(mut self, level: NotificationLevel, message: impl Into<String>) -> Self {
        self.notifications.push(Notification {
            level,
            message: message.into(),
        });
        self
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.notifications
            .iter()
            .any(|notification| notification.level == NotificationLevel::Error)
    }
}

impl App {
    /// Apply one command.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        tracing::debug!(command = command.name(), "Dispatching command");
        self.apply(command)
            .unwrap_or_else(|error| Outcome::from_error(&error))
    }

    fn apply(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Navigate(screen) => {
                self.screen = screen;
                Ok(Outcome::none())
            }
            Command::CreateNote => {
                self.editing = None;
                self.draft = NoteDraft::default();
                self.screen = Screen::Editor;
                Ok(Outcome::none())
            }
            Command::OpenNote(reference) => self.open_note(&reference),
            Command::EditDraft(draft) => {
                self.draft = draft;
                Ok(Outcome::none())
            }
            Command::SaveNote(draft) => self.save_note(draft),
            Command::SearchHome(query) => {
                self.home_query = query;
                Ok(Outcome::none())
            }
            Command::SearchGlobal(query) => {
                self.search_query = query;
                Ok(Outcome::none())
            }
            Command::SelectTag(tag) => {
                self.active_tag = tag;
                Ok(Outcome::none())
            }
            Command::SetInteractionState(state) => Ok(self.set_interaction_state(state)),
            Command::ConfigureKey => {
                self.gate.configure();
                Ok(Outcome::info("Key generated and backed up."))
            }
            Command::RequestUnlock => Ok(Outcome::auth_prompt()),
            Command::Unlock(secret) => {
                self.gate.unlock_with_secret(&secret)?;
                self.interaction = InteractionState::Success;
                Ok(Outcome::info("Authentication successful."))
            }
            Command::Lock => {
                self.gate.lock();
                Ok(Outcome::info("Key locked."))
            }
            Command::ToggleTheme => {
                self.theme = self.theme.toggled();
                Ok(Outcome::none())
            }
            Command::SetTheme(theme) => {
                self.theme = theme;
                Ok(Outcome::none())
            }
            Command::CreateNotebook => Ok(Outcome::info("Notebook template ready.")),
            Command::ManualSync => Ok(Outcome::info("Manual sync complete.")),
            Command::RegenerateKey => Ok(Outcome::info("Key regeneration requires confirmation.")),
            Command::BackupKey => Ok(Outcome::info("Recovery phrase copied.")),
            Command::OpenFilters => Ok(Outcome::info("Advanced filters are not available yet.")),
            Command::ResolveConflicts => Ok(Outcome::info("Conflict resolver opened.")),
        }
    }

    fn open_note(&mut self, reference: &str) -> Result<Outcome> {
        self.gate.ensure_unlocked()?;
        let note = self.store.resolve(reference)?;
        self.editing = Some(note.id);
        self.draft = NoteDraft::from_note(note);
        self.screen = Screen::Editor;
        Ok(Outcome::none())
    }

    fn save_note(&mut self, draft: NoteDraft) -> Result<Outcome> {
        // Keep the typed form even when the save is refused.
        self.draft = draft.clone();
        self.gate.ensure_unlocked()?;

        let id = self.editing.unwrap_or_else(NoteId::new);
        let note = draft.into_note(id, today());
        self.draft = NoteDraft::from_note(&note);
        self.editing = Some(id);
        self.store.upsert(note);
        tracing::info!(note_id = %id, "Saved note");
        Ok(Outcome::info("Note saved."))
    }

    fn set_interaction_state(&mut self, state: InteractionState) -> Outcome {
        self.interaction = state;
        match state {
            InteractionState::Success | InteractionState::Empty => Outcome::none(),
            InteractionState::Loading => Outcome::info("Loading notes…"),
            InteractionState::Error => Outcome::error("Failed to load notes. Retry."),
            InteractionState::Disabled => {
                self.gate.lock();
                Outcome::error("Key timeout. Unlock required.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::models::Note;
    use crate::store::NoteStore;
    use crate::view::{project, HOME_REDACTED_PREVIEW};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn empty_app() -> App {
        App::with_store(NoteStore::new(), &AppConfig::default())
    }

    fn unlocked_app() -> App {
        let mut app = App::new(&AppConfig::default());
        app.dispatch(Command::ConfigureKey);
        app
    }

    fn draft(title: &str) -> NoteDraft {
        NoteDraft {
            title: title.to_string(),
            ..NoteDraft::default()
        }
    }

    #[test]
    fn save_while_locked_leaves_store_untouched() {
        let mut app = App::new(&AppConfig::default());
        let before = app.store().clone();

        let outcome = app.dispatch(Command::SaveNote(draft("B")));

        assert_eq!(app.store(), &before);
        assert!(outcome.auth_prompt);
        assert!(outcome.has_errors());
        assert_eq!(
            outcome.notifications[0].message,
            "Re-authenticate to continue."
        );
        assert_eq!(app.draft().title, "B");
    }

    #[test]
    fn open_while_locked_prompts_instead_of_opening() {
        let mut app = App::new(&AppConfig::default());
        let id = app.store().iter().next().unwrap().id.to_string();
        let before = app.store().clone();

        let outcome = app.dispatch(Command::OpenNote(id));

        assert!(outcome.auth_prompt);
        assert_eq!(app.screen(), Screen::Home);
        assert_eq!(app.editing(), None);
        assert_eq!(app.store(), &before);
    }

    #[test]
    fn unlock_with_empty_secret_keeps_gate() {
        let mut app = empty_app();
        let outcome = app.dispatch(Command::Unlock("   ".to_string()));
        assert!(!app.gate().is_unlocked());
        assert!(!app.gate().is_key_configured());
        assert_eq!(outcome, Outcome::error("Key is required."));
    }

    #[test]
    fn unlock_resets_interaction_state() {
        let mut app = empty_app();
        app.dispatch(Command::SetInteractionState(InteractionState::Disabled));
        let outcome = app.dispatch(Command::Unlock("secret".to_string()));
        assert!(app.gate().is_unlocked());
        assert_eq!(app.interaction(), InteractionState::Success);
        assert_eq!(outcome, Outcome::info("Authentication successful."));
    }

    #[test]
    fn create_then_save_inserts_at_front_and_keeps_editing() {
        let mut app = unlocked_app();
        app.dispatch(Command::CreateNote);
        assert_eq!(app.screen(), Screen::Editor);
        assert_eq!(app.editing(), None);

        let outcome = app.dispatch(Command::SaveNote(NoteDraft {
            title: String::new(),
            body: " hello ".to_string(),
            tags: "a, ,b".to_string(),
            folder: " ".to_string(),
        }));
        assert_eq!(outcome, Outcome::info("Note saved."));

        let first = app.store().iter().next().unwrap();
        assert_eq!(first.title, "Untitled");
        assert_eq!(first.folder, "Inbox");
        assert_eq!(first.body, "hello");
        assert_eq!(first.tags, vec!["a", "b"]);
        assert_eq!(app.editing(), Some(first.id));
        assert_eq!(app.store().len(), 3);
    }

    #[test]
    fn saving_twice_updates_in_place() {
        let mut app = unlocked_app();
        app.dispatch(Command::CreateNote);
        app.dispatch(Command::SaveNote(draft("first")));
        let len = app.store().len();
        let id = app.editing().unwrap();

        app.dispatch(Command::SaveNote(draft("second")));

        assert_eq!(app.store().len(), len);
        let front = app.store().iter().next().unwrap();
        assert_eq!(front.id, id);
        assert_eq!(front.title, "second");
    }

    #[test]
    fn open_existing_note_fills_editor_and_save_keeps_position() {
        let mut app = unlocked_app();
        let second = app.store().iter().nth(1).unwrap().clone();

        app.dispatch(Command::OpenNote(second.id.short()));
        assert_eq!(app.screen(), Screen::Editor);
        assert_eq!(app.editing(), Some(second.id));
        assert_eq!(app.draft().tags, "security, dev");

        let mut edited = app.draft().clone();
        edited.title = "Renamed".to_string();
        app.dispatch(Command::SaveNote(edited));

        let stored = app.store().iter().nth(1).unwrap();
        assert_eq!(stored.id, second.id);
        assert_eq!(stored.title, "Renamed");
        assert_eq!(app.store().len(), 2);
    }

    #[test]
    fn open_unknown_note_reports_error() {
        let mut app = unlocked_app();
        let outcome = app.dispatch(Command::OpenNote("does-not-exist".to_string()));
        assert!(outcome.has_errors());
        assert!(!outcome.auth_prompt);
        assert_eq!(app.screen(), Screen::Home);
    }

    #[test]
    fn disabled_state_locks_gate_and_redacts() {
        let mut app = unlocked_app();
        let outcome = app.dispatch(Command::SetInteractionState(InteractionState::Disabled));
        assert!(!app.gate().is_unlocked());
        assert!(app.gate().is_key_configured());
        assert_eq!(outcome, Outcome::error("Key timeout. Unlock required."));

        let view = project(&app);
        assert!(view.shell_disabled);
        assert!(view
            .home
            .cards
            .iter()
            .all(|card| card.preview == HOME_REDACTED_PREVIEW));
    }

    #[test]
    fn other_states_leave_gate_alone() {
        let mut app = unlocked_app();
        for state in [
            InteractionState::Success,
            InteractionState::Loading,
            InteractionState::Error,
            InteractionState::Empty,
        ] {
            app.dispatch(Command::SetInteractionState(state));
            assert!(app.gate().is_unlocked());
            assert_eq!(app.interaction(), state);
        }
        assert_eq!(app.store().len(), 2);
    }

    #[test]
    fn select_tag_scopes_search_results() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let store = NoteStore::from_notes(vec![
            Note::new(
                "Tagged",
                "",
                vec!["research".to_string(), "weekly".to_string()],
                "Inbox",
                today,
            ),
            Note::new("Plain", "", Vec::new(), "Inbox", today),
        ]);
        let mut app = App::with_store(store, &AppConfig::default());

        app.dispatch(Command::SelectTag("research".parse().unwrap()));
        let view = project(&app);

        let titles = view
            .search
            .cards
            .iter()
            .map(|card| card.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["Tagged"]);
        assert_eq!(view.home.cards.len(), 2);

        app.dispatch(Command::SelectTag(TagFilter::All));
        assert_eq!(project(&app).search.cards.len(), 2);
    }

    #[test]
    fn search_commands_update_queries() {
        let mut app = unlocked_app();
        app.dispatch(Command::SearchHome("checklist".to_string()));
        app.dispatch(Command::SearchGlobal("nothing matches".to_string()));
        let view = project(&app);
        assert_eq!(view.home.cards.len(), 1);
        assert_eq!(view.home.cards[0].title, "API Security Checklist");
        assert!(view.search.show_placeholder);
    }

    #[test]
    fn placeholder_actions_only_notify() {
        let mut app = unlocked_app();
        let before = app.clone();
        for command in [
            Command::CreateNotebook,
            Command::ManualSync,
            Command::RegenerateKey,
            Command::BackupKey,
            Command::OpenFilters,
            Command::ResolveConflicts,
        ] {
            let outcome = app.dispatch(command);
            assert_eq!(outcome.notifications.len(), 1);
            assert!(!outcome.has_errors());
        }
        assert_eq!(app, before);
    }

    #[test]
    fn theme_and_navigation() {
        let mut app = empty_app();
        app.dispatch(Command::ToggleTheme);
        assert_eq!(app.theme(), Theme::Dark);
        app.dispatch(Command::SetTheme(Theme::Light));
        assert_eq!(app.theme(), Theme::Light);
        app.dispatch(Command::Navigate(Screen::Settings));
        assert_eq!(app.screen(), Screen::Settings);
        assert_eq!(app.dispatch(Command::RequestUnlock), Outcome::auth_prompt());
    }
}
