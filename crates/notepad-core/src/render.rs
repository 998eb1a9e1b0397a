//! Text and JSON renderers for [`ViewModel`] frames.

use std::fmt::Write as _;

use crate::dispatch::{NotificationLevel, Outcome};
use crate::state::{InteractionState, Screen};
use crate::view::{NoteListView, ViewModel};

const HOME_EMPTY_PLACEHOLDER: &str = "No notes yet. Create one to get started.";
const SEARCH_EMPTY_PLACEHOLDER: &str = "No notes match this search.";
const SECURITY_BANNER: &str = "Notes are locked. Unlock your key to view and edit.";

/// Output format shared by all front ends.
///
/// `Json` writes one compact object per line, so frames and outcomes can be
/// read back as a JSON Lines stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderFormat {
    #[default]
    Text,
    Json,
}

/// Render a frame in the selected format.
pub fn render_view(view: &ViewModel, format: RenderFormat) -> serde_json::Result<String> {
    match format {
        RenderFormat::Text => Ok(render_text(view)),
        RenderFormat::Json => serde_json::to_string(view),
    }
}

/// Render a command outcome. Outcomes with nothing to show produce no lines.
pub fn render_outcome(
    outcome: &Outcome,
    format: RenderFormat,
) -> serde_json::Result<Vec<String>> {
    match format {
        RenderFormat::Text => Ok(render_outcome_lines(outcome)),
        RenderFormat::Json if outcome.notifications.is_empty() && !outcome.auth_prompt => {
            Ok(Vec::new())
        }
        RenderFormat::Json => Ok(vec![serde_json::to_string(outcome)?]),
    }
}

/// Terminal layout: header, banner, then the active screen only.
#[must_use]
pub fn render_text(view: &ViewModel) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "== {} ==", view.title);
    if view.security_banner {
        let _ = writeln!(output, "! {SECURITY_BANNER}");
    }
    if view.shell_disabled {
        let _ = writeln!(output, "! Interface disabled until the key is unlocked.");
    }
    if view.interaction == InteractionState::Loading {
        let _ = writeln!(output, "… loading");
    }

    match view.screen {
        Screen::Home => {
            let _ = writeln!(output, "search: {}", view.home.query);
            write_cards(&mut output, &view.home, HOME_EMPTY_PLACEHOLDER);
        }
        Screen::Search => {
            let _ = writeln!(output, "search: {}", view.search.query);
            let chips = view
                .chips
                .iter()
                .map(|chip| {
                    if chip.active {
                        format!("[{}]", chip.tag)
                    } else {
                        chip.tag.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            let _ = writeln!(output, "tags: {chips}");
            write_cards(&mut output, &view.search, SEARCH_EMPTY_PLACEHOLDER);
        }
        Screen::Editor => {
            let editor = &view.editor;
            let mode = editor
                .editing
                .map_or_else(|| "new note".to_string(), |id| format!("editing {}", id.short()));
            let _ = writeln!(output, "({mode})");
            let _ = writeln!(output, "title:  {}", editor.draft.title);
            let _ = writeln!(output, "folder: {}", editor.draft.folder);
            let _ = writeln!(output, "tags:   {}", editor.draft.tags);
            let _ = writeln!(output, "body:");
            let body = editor.body_placeholder.unwrap_or(editor.draft.body.as_str());
            for line in body.lines() {
                let _ = writeln!(output, "  {line}");
            }
        }
        Screen::Settings => {
            let _ = writeln!(output, "key:   {}", view.key_status);
            let _ = writeln!(output, "theme: {}", view.theme.as_str());
            let _ = writeln!(output, "state: {}", view.interaction);
        }
    }

    output
}

/// One line per notification, errors marked.
#[must_use]
pub fn render_outcome_lines(outcome: &Outcome) -> Vec<String> {
    let mut lines = outcome
        .notifications
        .iter()
        .map(|notification| match notification.level {
            NotificationLevel::Info => format!("* {}", notification.message),
            NotificationLevel::Error => format!("x {}", notification.message),
        })
        .collect::<Vec<_>>();
    if outcome.auth_prompt {
        lines.push("> Enter your key with `unlock <key>`.".to_string());
    }
    lines
}

fn write_cards(output: &mut String, list: &NoteListView, placeholder: &str) {
    if list.show_placeholder {
        let _ = writeln!(output, "  {placeholder}");
        return;
    }
    for card in &list.cards {
        let _ = writeln!(output, "  {}  {}", card.id.short(), card.title);
        let _ = writeln!(output, "      {}", card.preview);
        let _ = writeln!(output, "      {}", card.footer);
    }
}
