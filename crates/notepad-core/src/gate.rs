//! Key gate controlling note previews and editing.
//!
//! The gate is a display flag only. No key material exists and nothing is
//! encrypted; a locked gate redacts rendered previews and refuses edits.

use crate::error::{Error, Result};

/// Current key state. Starts unconfigured and locked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityGate {
    key_configured: bool,
    unlocked: bool,
}

impl VisibilityGate {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            key_configured: false,
            unlocked: false,
        }
    }

    /// First-time key setup. Leaves the gate configured and unlocked.
    pub fn configure(&mut self) {
        self.key_configured = true;
        self.unlocked = true;
        tracing::info!("Key configured and unlocked");
    }

    /// Unlock with a user-entered secret.
    ///
    /// Any non-blank secret is accepted. A blank one leaves the state as is.
    pub fn unlock_with_secret(&mut self, secret: &str) -> Result<()> {
        if secret.trim().is_empty() {
            return Err(Error::EmptySecret);
        }
        self.key_configured = true;
        self.unlocked = true;
        tracing::info!("Key gate unlocked");
        Ok(())
    }

    /// Session timeout. `key_configured` is kept.
    pub fn lock(&mut self) {
        self.unlocked = false;
        tracing::info!("Key gate locked");
    }

    #[must_use]
    pub const fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    #[must_use]
    pub const fn is_key_configured(&self) -> bool {
        self.key_configured
    }

    /// Status line shown on the settings screen.
    #[must_use]
    pub const fn key_status(&self) -> &'static str {
        match (self.key_configured, self.unlocked) {
            (false, _) => "No key configured.",
            (true, true) => "Key active and unlocked.",
            (true, false) => "Key configured, locked.",
        }
    }

    pub(crate) fn ensure_unlocked(&self) -> Result<()> {
        if self.unlocked {
            Ok(())
        } else {
            Err(Error::Locked)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unconfigured_and_locked() {
        let gate = VisibilityGate::new();
        assert!(!gate.is_key_configured());
        assert!(!gate.is_unlocked());
        assert_eq!(gate, VisibilityGate::default());
        assert_eq!(gate.key_status(), "No key configured.");
    }

    #[test]
    fn configure_unlocks() {
        let mut gate = VisibilityGate::new();
        gate.configure();
        assert!(gate.is_key_configured());
        assert!(gate.is_unlocked());
        assert_eq!(gate.key_status(), "Key active and unlocked.");
    }

    #[test]
    fn empty_secret_is_rejected_without_state_change() {
        let mut gate = VisibilityGate::new();
        assert!(matches!(gate.unlock_with_secret(""), Err(Error::EmptySecret)));
        assert!(matches!(
            gate.unlock_with_secret(" \t\n"),
            Err(Error::EmptySecret)
        ));
        assert_eq!(gate, VisibilityGate::new());

        gate.configure();
        gate.lock();
        let before = gate;
        assert!(gate.unlock_with_secret("").is_err());
        assert_eq!(gate, before);
    }

    #[test]
    fn any_non_blank_secret_unlocks() {
        let mut gate = VisibilityGate::new();
        gate.unlock_with_secret("hunter2").unwrap();
        assert!(gate.is_key_configured());
        assert!(gate.is_unlocked());
    }

    #[test]
    fn lock_keeps_configuration() {
        let mut gate = VisibilityGate::new();
        gate.configure();
        gate.lock();
        assert!(gate.is_key_configured());
        assert!(!gate.is_unlocked());
        assert_eq!(gate.key_status(), "Key configured, locked.");
    }

    #[test]
    fn lock_on_unconfigured_gate_stays_unconfigured() {
        let mut gate = VisibilityGate::new();
        gate.lock();
        assert_eq!(gate, VisibilityGate::new());
    }

    #[test]
    fn ensure_unlocked_reports_locked() {
        let mut gate = VisibilityGate::new();
        assert!(matches!(gate.ensure_unlocked(), Err(Error::Locked)));
        gate.configure();
        assert!(gate.ensure_unlocked().is_ok());
    }
}
