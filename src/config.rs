//! Configuration
//!
//! Layered configuration: built-in defaults, then the global file
//! (`$XDG_CONFIG_HOME/hopdir/config.toml`), then `HOPDIR__*` environment
//! variables.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Top-level hopdir configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HopdirConfig {
    /// When to ring the bell for actions that had no effect
    #[serde(default)]
    pub notify: NotifyMode,

    #[serde(default)]
    pub keys: KeyBindings,

    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Bell policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyMode {
    /// Follow the shell's own `beep` option.
    #[default]
    Shell,
    Always,
    Never,
}

impl NotifyMode {
    pub fn resolve(self, shell_beep: bool) -> bool {
        match self {
            NotifyMode::Shell => shell_beep,
            NotifyMode::Always => true,
            NotifyMode::Never => false,
        }
    }
}

/// Key sequences bound by `hopdir init`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Whether `init` emits `bindkey` lines at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Sequence for the parent step (default: Alt-Up)
    #[serde(default = "default_parent_key")]
    pub parent: String,

    /// Sequence for the child step (default: Alt-Down)
    #[serde(default = "default_child_key")]
    pub child: String,
}

fn default_true() -> bool {
    true
}

fn default_parent_key() -> String {
    "^[[1;3A".to_string()
}

fn default_child_key() -> String {
    "^[[1;3B".to_string()
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            parent: default_parent_key(),
            child: default_child_key(),
        }
    }
}

/// Directory history recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Replay the net displacement onto the directory stack when the shell
    /// records history on its own (`auto_pushd`)
    #[serde(default = "default_true")]
    pub record: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            record: default_true(),
        }
    }
}

impl HistoryConfig {
    pub fn auto_history(self, shell_auto_pushd: bool) -> bool {
        self.record && shell_auto_pushd
    }
}
