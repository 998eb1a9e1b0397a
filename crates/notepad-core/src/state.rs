//! UI state enums shared by the dispatcher, projection and CLI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Simulated data-loading state, picked by the operator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionState {
    #[default]
    Success,
    Loading,
    Error,
    /// Lists render empty; the store keeps its notes.
    Empty,
    /// Key timeout. Entering this state locks the gate.
    Disabled,
}

impl InteractionState {
    pub const ALL: [Self; 5] = [
        Self::Success,
        Self::Loading,
        Self::Error,
        Self::Empty,
        Self::Disabled,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Loading => "loading",
            Self::Error => "error",
            Self::Empty => "empty",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == normalized)
            .ok_or_else(|| Error::InvalidInput(format!("unknown interaction state '{s}'")))
    }
}

/// Top-level screens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Home,
    Editor,
    Search,
    Settings,
}

impl Screen {
    pub const ALL: [Self; 4] = [Self::Home, Self::Editor, Self::Search, Self::Settings];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Editor => "editor",
            Self::Search => "search",
            Self::Settings => "settings",
        }
    }

    /// Header title for the screen
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Landing / Dashboard",
            Self::Editor => "Note Editor",
            Self::Search => "Search / Organization",
            Self::Settings => "Settings / Profile",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Screen {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|screen| screen.as_str() == normalized)
            .ok_or_else(|| Error::InvalidInput(format!("unknown screen '{s}'")))
    }
}

/// Color theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(Error::InvalidInput(format!("unknown theme '{s}'"))),
        }
    }
}
