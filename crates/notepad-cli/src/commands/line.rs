//! Session line grammar: one shell-quoted command per line.

use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};
use notepad_core::state::{InteractionState, Screen, Theme};
use notepad_core::{Command, NoteDraft, TagFilter};

use crate::error::CliError;

/// What a parsed line asks the session to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction {
    Dispatch(Command),
    Show,
    Help(String),
    Quit,
}

#[derive(Parser, Debug)]
#[command(name = "notepad", no_binary_name = true)]
struct SessionLine {
    #[command(subcommand)]
    command: LineCommand,
}

#[derive(Subcommand, Debug)]
enum LineCommand {
    /// Switch screen (home, editor, search, settings)
    Nav { screen: Screen },
    /// Open a blank editor
    #[command(alias = "create")]
    New,
    /// Open a note by id, id prefix or short id
    Open { id: String },
    /// Change editor fields without saving
    Edit {
        #[command(flatten)]
        fields: DraftFields,
    },
    /// Save the editor, overriding any given fields
    Save {
        #[command(flatten)]
        fields: DraftFields,
    },
    /// Scope search results to a tag ("all" clears)
    Tag { tag: TagFilter },
    /// Filter the home list
    Search {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },
    /// Filter the search screen
    Find {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },
    /// Simulate a loading state (success, loading, error, empty, disabled)
    State { state: InteractionState },
    /// Generate and back up a key
    SetupKey,
    /// Unlock with a key; without one, shows the unlock prompt
    Unlock { secret: Option<String> },
    /// Lock the key gate
    Lock,
    /// Set the theme, or toggle it when omitted
    Theme { theme: Option<Theme> },
    /// Create a notebook from a template
    Notebook,
    /// Run a manual sync
    Sync,
    /// Regenerate the key
    RegenKey,
    /// Copy the recovery phrase
    BackupKey,
    /// Open advanced filters
    Filters,
    /// Open the conflict resolver
    Conflicts,
    /// Print the current screen
    Show,
    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

/// Editor field overrides; unset fields keep the current form value.
#[derive(Args, Debug, Default)]
struct DraftFields {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    body: Option<String>,
    /// Comma-separated tags
    #[arg(long)]
    tags: Option<String>,
    #[arg(long)]
    folder: Option<String>,
}

impl DraftFields {
    fn merge_into(self, base: &NoteDraft) -> NoteDraft {
        NoteDraft {
            title: self.title.unwrap_or_else(|| base.title.clone()),
            body: self.body.unwrap_or_else(|| base.body.clone()),
            tags: self.tags.unwrap_or_else(|| base.tags.clone()),
            folder: self.folder.unwrap_or_else(|| base.folder.clone()),
        }
    }
}

/// Parse one input line against the current editor form.
///
/// Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str, draft: &NoteDraft) -> Result<Option<LineAction>, CliError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let tokens = shell_words::split(trimmed)?;
    let parsed = match SessionLine::try_parse_from(tokens) {
        Ok(parsed) => parsed,
        Err(error)
            if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
        {
            return Ok(Some(LineAction::Help(error.render().to_string())));
        }
        Err(error) => return Err(CliError::UnknownCommand(error.render().to_string())),
    };

    let command = match parsed.command {
        LineCommand::Nav { screen } => Command::Navigate(screen),
        LineCommand::New => Command::CreateNote,
        LineCommand::Open { id } => Command::OpenNote(id),
        LineCommand::Edit { fields } => Command::EditDraft(fields.merge_into(draft)),
        LineCommand::Save { fields } => Command::SaveNote(fields.merge_into(draft)),
        LineCommand::Tag { tag } => Command::SelectTag(tag),
        LineCommand::Search { query } => Command::SearchHome(query.join(" ")),
        LineCommand::Find { query } => Command::SearchGlobal(query.join(" ")),
        LineCommand::State { state } => Command::SetInteractionState(state),
        LineCommand::SetupKey => Command::ConfigureKey,
        LineCommand::Unlock { secret: None } => Command::RequestUnlock,
        LineCommand::Unlock {
            secret: Some(secret),
        } => Command::Unlock(secret),
        LineCommand::Lock => Command::Lock,
        LineCommand::Theme { theme: None } => Command::ToggleTheme,
        LineCommand::Theme { theme: Some(theme) } => Command::SetTheme(theme),
        LineCommand::Notebook => Command::CreateNotebook,
        LineCommand::Sync => Command::ManualSync,
        LineCommand::RegenKey => Command::RegenerateKey,
        LineCommand::BackupKey => Command::BackupKey,
        LineCommand::Filters => Command::OpenFilters,
        LineCommand::Conflicts => Command::ResolveConflicts,
        LineCommand::Show => return Ok(Some(LineAction::Show)),
        LineCommand::Quit => return Ok(Some(LineAction::Quit)),
    };

    Ok(Some(LineAction::Dispatch(command)))
}
