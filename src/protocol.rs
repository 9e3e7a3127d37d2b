// Message types exchanged between the app orchestrator and the TUI.

use serde::{Deserialize, Serialize};

/// Commands sent from the TUI to the app orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Replace the raw name-list text (sent on every edit in insert mode).
    SetInput(String),
    /// Flip the allow-repeat draw mode.
    ToggleRepeat,
    /// Draw this many winners from the current pool.
    Draw { count: usize },
    /// Partition the list into groups of this size.
    Group { size: usize },
    /// Deduplicate the name list in place.
    RemoveDuplicates,
    /// Replace the input with the built-in sample roster.
    LoadSample,
    /// Empty the accumulated draw results.
    ResetDrawResults,
    /// Empty the current groups.
    ResetGroups,
    /// Clear input, names, draw results, and groups together.
    ClearAll,
    /// Write the groups CSV export file.
    Export,
    /// Shut down.
    Quit,
}

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warn,
}

/// A transient status message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn warn(text: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Warn,
            text: text.into(),
        }
    }
}

/// Full model snapshot pushed to the TUI after every mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSnapshot {
    /// Raw input text, mirrored so the TUI can seed its editor.
    pub input_text: String,
    /// Parsed name list.
    pub names: Vec<String>,
    /// Names occurring more than once (first-occurrence order).
    pub duplicate_names: Vec<String>,
    /// All winners drawn so far.
    pub draw_results: Vec<String>,
    /// Current group assignment.
    pub groups: Vec<Vec<String>>,
    /// Names still eligible for the next draw under the current mode.
    pub pool_remaining: usize,
    /// Current state of the allow-repeat toggle.
    pub allow_repeat: bool,
    /// Whether a draw roll is in flight.
    pub is_rolling: bool,
}

/// Updates pushed from the app orchestrator to the TUI.
#[derive(Debug, Clone, PartialEq)]
pub enum UiUpdate {
    /// Replace the TUI's mirror of the model state.
    StateSnapshot(Box<AppSnapshot>),
    /// One animation frame: a candidate name to flash in the slot banner.
    RollFrame(String),
    /// The roll finished; reveal these winners.
    RollFinished(Vec<String>),
    /// Show a status notice.
    Notice(Notice),
}
