use serde::{Deserialize, Serialize};
use tileslide_core::Difficulty;

// Missing fields fall back to defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub(crate) difficulty: Difficulty,
    pub(crate) assist: AssistSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AssistSettings {
    pub(crate) highlight_movable: bool,
    pub(crate) hints_enabled: bool,
}

impl Default for AssistSettings {
    fn default() -> Self {
        Self {
            highlight_movable: true,
            hints_enabled: true,
        }
    }
}
