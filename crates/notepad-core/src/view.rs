//! Pure projection from application state to a view model.
//!
//! Nothing here mutates state or produces text markup; see `render` for that.

use serde::Serialize;

use crate::app::{App, TagFilter, ALL_TAGS};
use crate::gate::VisibilityGate;
use crate::models::{Note, NoteDraft, NoteId};
use crate::state::{InteractionState, Screen, Theme};
use crate::store::NoteStore;
use crate::util::normalize_query;

/// Locked preview on the home list
pub const HOME_REDACTED_PREVIEW: &str = "Encrypted snippet • unlock key";

/// Locked preview on the search list
pub const SEARCH_REDACTED_PREVIEW: &str = "Encrypted preview";

/// Shown in an empty editor body
pub const EDITOR_BODY_PLACEHOLDER: &str = "Start typing…";

/// Which list a card belongs to. Controls the placeholder and the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    /// Footer lists tags and date
    Home,
    /// Footer lists folder and date
    Search,
}

impl CardStyle {
    #[must_use]
    pub const fn redacted_preview(self) -> &'static str {
        match self {
            Self::Home => HOME_REDACTED_PREVIEW,
            Self::Search => SEARCH_REDACTED_PREVIEW,
        }
    }

    fn footer(self, note: &Note) -> String {
        match self {
            Self::Home if note.tags.is_empty() => note.updated_at.to_string(),
            Self::Home => format!("#{} · {}", note.tags.join(" #"), note.updated_at),
            Self::Search => format!("{} · {}", note.folder, note.updated_at),
        }
    }
}

/// One rendered note summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteCard {
    pub id: NoteId,
    pub title: String,
    pub preview: String,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteListView {
    pub query: String,
    pub cards: Vec<NoteCard>,
    pub show_placeholder: bool,
}

impl NoteListView {
    fn new(query: &str, cards: Vec<NoteCard>) -> Self {
        Self {
            query: query.to_string(),
            show_placeholder: cards.is_empty(),
            cards,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagChip {
    pub tag: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorView {
    pub editing: Option<NoteId>,
    pub draft: NoteDraft,
    pub body_placeholder: Option<&'static str>,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub screen: Screen,
    pub title: &'static str,
    pub theme: Theme,
    pub key_status: &'static str,
    pub security_banner: bool,
    pub interaction: InteractionState,
    pub shell_disabled: bool,
    pub home: NoteListView,
    pub search: NoteListView,
    pub chips: Vec<TagChip>,
    pub editor: EditorView,
}

/// Case-insensitive substring match over title, body, tags and date.
///
/// An empty query matches every note.
#[must_use]
pub fn matches_query(note: &Note, query: &str) -> bool {
    let query = normalize_query(query);
    query.is_empty() || note.search_haystack().contains(&query)
}

/// Project notes into cards for one list.
///
/// Locked gates replace every preview with the style's redaction text.
#[must_use]
pub fn summarize(
    store: &NoteStore,
    gate: &VisibilityGate,
    query: &str,
    tag: &TagFilter,
    style: CardStyle,
    preview_chars: usize,
) -> Vec<NoteCard> {
    let query = normalize_query(query);
    store
        .filter(|note| tag.matches(note) && matches_query(note, &query))
        .map(|note| NoteCard {
            id: note.id,
            title: note.title.clone(),
            preview: if gate.is_unlocked() {
                note.body_preview(preview_chars)
            } else {
                style.redacted_preview().to_string()
            },
            footer: style.footer(note),
        })
        .collect()
}

/// Tag chips with the "all" sentinel first.
#[must_use]
pub fn tag_chips(store: &NoteStore, active: &TagFilter) -> Vec<TagChip> {
    std::iter::once(ALL_TAGS.to_string())
        .chain(store.distinct_tags())
        .map(|tag| TagChip {
            active: tag == active.label(),
            tag,
        })
        .collect()
}

/// Build the complete view model for the current state.
#[must_use]
pub fn project(app: &App) -> ViewModel {
    let hide_notes = app.interaction == InteractionState::Empty;
    let list = |query: &str, tag: &TagFilter, style: CardStyle| {
        let cards = if hide_notes {
            Vec::new()
        } else {
            summarize(
                &app.store,
                &app.gate,
                query,
                tag,
                style,
                app.preview_chars,
            )
        };
        NoteListView::new(query, cards)
    };

    ViewModel {
        screen: app.screen,
        title: app.screen.title(),
        theme: app.theme,
        key_status: app.gate.key_status(),
        security_banner: !app.gate.is_unlocked(),
        interaction: app.interaction,
        shell_disabled: app.interaction == InteractionState::Disabled,
        home: list(app.home_query.as_str(), &TagFilter::All, CardStyle::Home),
        search: list(app.search_query.as_str(), &app.active_tag, CardStyle::Search),
        chips: tag_chips(&app.store, &app.active_tag),
        editor: EditorView {
            editing: app.editing,
            draft: app.draft.clone(),
            body_placeholder: app
                .draft
                .body
                .trim()
                .is_empty()
                .then_some(EDITOR_BODY_PLACEHOLDER),
        },
    }
}
