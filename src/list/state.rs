// List state: the parsed name list, accumulated draw results, and groups.

use serde::{Deserialize, Serialize};

use super::parse;

/// The complete model state for one session.
///
/// `names` is always derived from `raw_text` via `parse_list`; edits replace
/// it wholesale. `draw_results` accumulates across draws and is cleared only
/// by an explicit reset. `groups` is replaced wholesale by each grouping
/// operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    /// Raw multi-line input text as the user typed it.
    pub raw_text: String,
    /// Parsed name list (trimmed, empty lines dropped).
    pub names: Vec<String>,
    /// All winners drawn so far, in draw order.
    pub draw_results: Vec<String>,
    /// Current group assignment, one inner vec per group.
    pub groups: Vec<Vec<String>>,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the raw input text and re-derive the name list.
    pub fn set_input(&mut self, text: &str) {
        self.raw_text = text.to_string();
        self.names = parse::parse_list(&self.raw_text);
    }

    /// Compute the current draw pool.
    ///
    /// With repeats allowed the pool is the full name list, duplicates
    /// included. Without repeats, any name whose value appears in
    /// `draw_results` is excluded entirely -- both copies of a duplicated
    /// name drop out after one of them is drawn (value-based exclusion,
    /// matching the original behavior).
    pub fn draw_pool(&self, allow_repeat: bool) -> Vec<String> {
        if allow_repeat {
            return self.names.clone();
        }
        self.names
            .iter()
            .filter(|name| !self.draw_results.contains(name))
            .cloned()
            .collect()
    }

    /// Size of the current draw pool without materializing it.
    pub fn pool_size(&self, allow_repeat: bool) -> usize {
        if allow_repeat {
            return self.names.len();
        }
        self.names
            .iter()
            .filter(|name| !self.draw_results.contains(name))
            .count()
    }

    /// Append drawn winners to the accumulated results.
    pub fn record_winners(&mut self, winners: Vec<String>) {
        self.draw_results.extend(winners);
    }

    /// Replace the current grouping wholesale.
    pub fn set_groups(&mut self, groups: Vec<Vec<String>>) {
        self.groups = groups;
    }

    /// Rewrite the input as the deduplicated list and reparse it.
    ///
    /// Round-trips through `set_input` so the persisted raw text matches
    /// what the user now sees.
    pub fn remove_duplicates(&mut self) {
        let unique = parse::remove_duplicates(&self.names);
        self.set_input(&unique.join("\n"));
    }

    /// Names occurring more than once, in first-occurrence order.
    pub fn duplicate_names(&self) -> Vec<String> {
        let counts = parse::duplicate_counts(&self.names);
        let mut flagged = Vec::new();
        for name in &self.names {
            if counts.get(name).copied().unwrap_or(0) > 1 && !flagged.contains(name) {
                flagged.push(name.clone());
            }
        }
        flagged
    }

    /// Empty the draw results. A no-op when already empty.
    pub fn reset_draw_results(&mut self) {
        self.draw_results.clear();
    }

    /// Empty the groups. A no-op when already empty.
    pub fn reset_groups(&mut self) {
        self.groups.clear();
    }

    /// Clear everything: input, names, draw results, and groups.
    pub fn clear_all(&mut self) {
        self.raw_text.clear();
        self.names.clear();
        self.draw_results.clear();
        self.groups.clear();
    }

    /// Snapshot the persistable parts of the state.
    pub fn snapshot(&self) -> PersistedState {
        PersistedState {
            input_text: self.raw_text.clone(),
            draw_results: self.draw_results.clone(),
            groups: self.groups.clone(),
        }
    }

    /// Rehydrate from a persisted snapshot, re-deriving the name list from
    /// the saved input text.
    pub fn restore(&mut self, snapshot: PersistedState) {
        self.set_input(&snapshot.input_text);
        self.draw_results = snapshot.draw_results;
        self.groups = snapshot.groups;
    }
}

/// On-disk snapshot of the model state.
///
/// Every field defaults so snapshots written by older versions (or an empty
/// `{}` value) deserialize to an empty state instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub input_text: String,
    #[serde(default)]
    pub draw_results: Vec<String>,
    #[serde(default)]
    pub groups: Vec<Vec<String>>,
}
