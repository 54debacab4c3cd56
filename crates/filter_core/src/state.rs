/// Preference key gating whether filtering is active.
pub const ENABLED_KEY: &str = "enabled";

/// Mirror of the externally stored enabled flag.
///
/// Only an explicitly stored `false` disables filtering; a missing value
/// means the user never touched the toggle and filtering stays on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineState {
    enabled: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl EngineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_stored(stored: Option<bool>) -> Self {
        Self {
            enabled: stored != Some(false),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn set_from_stored(&mut self, stored: Option<bool>) {
        self.enabled = stored != Some(false);
    }
}
