// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` that mirrors the model state. The app
// orchestrator pushes `UiUpdate` messages over an mpsc channel; the TUI
// applies them to `ViewState` and re-renders at ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

use std::collections::HashMap;
use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::protocol::{AppSnapshot, Notice, UiUpdate, UserCommand};

use layout::build_layout;

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// Which scrollable panel currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    Names,
    Results,
    Groups,
}

impl PanelFocus {
    /// Cycle to the next panel (Tab order).
    pub fn next(self) -> Self {
        match self {
            PanelFocus::Names => PanelFocus::Results,
            PanelFocus::Results => PanelFocus::Groups,
            PanelFocus::Groups => PanelFocus::Names,
        }
    }

    /// Scroll-offset key for this panel.
    pub fn scroll_key(self) -> &'static str {
        match self {
            PanelFocus::Names => "names",
            PanelFocus::Results => "results",
            PanelFocus::Groups => "groups",
        }
    }
}

/// Pending confirmation before a destructive transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    ClearAll,
    ResetDrawResults,
    ResetGroups,
}

impl ConfirmAction {
    /// Question shown in the confirmation dialog.
    pub fn prompt(self) -> &'static str {
        match self {
            ConfirmAction::ClearAll => "Clear the list and all results?",
            ConfirmAction::ResetDrawResults => "Clear the draw results?",
            ConfirmAction::ResetGroups => "Clear the groups?",
        }
    }

    /// Command sent when the user confirms.
    pub fn command(self) -> UserCommand {
        match self {
            ConfirmAction::ClearAll => UserCommand::ClearAll,
            ConfirmAction::ResetDrawResults => UserCommand::ResetDrawResults,
            ConfirmAction::ResetGroups => UserCommand::ResetGroups,
        }
    }
}

/// Idle text shown in the slot banner before any draw.
pub const SLOT_IDLE_TEXT: &str = "Press d to draw";

/// TUI-local state that mirrors the model state for rendering.
///
/// Updated incrementally via `UiUpdate` messages from the app orchestrator.
/// The numeric fields (`draw_count`, `group_size`) and edit/confirm modes
/// live here only; they are sent to the orchestrator inside commands.
pub struct ViewState {
    /// Raw input text, editable in insert mode.
    pub input_text: String,
    /// Parsed name list.
    pub names: Vec<String>,
    /// Names occurring more than once.
    pub duplicate_names: Vec<String>,
    /// All winners drawn so far.
    pub draw_results: Vec<String>,
    /// Current group assignment.
    pub groups: Vec<Vec<String>>,
    /// Pool size under the current mode.
    pub pool_remaining: usize,
    /// Allow-repeat toggle state.
    pub allow_repeat: bool,
    /// Whether a roll is in flight.
    pub is_rolling: bool,
    /// Current slot banner content.
    pub slot_text: String,
    /// Latest status notice, if any.
    pub notice: Option<Notice>,
    /// Winner count for the next draw.
    pub draw_count: usize,
    /// Member count for the next grouping.
    pub group_size: usize,
    /// True while the name list is being edited.
    pub insert_mode: bool,
    /// Pending destructive action awaiting y/n.
    pub confirm: Option<ConfirmAction>,
    /// Which panel Up/Down scrolls.
    pub focus: PanelFocus,
    /// Per-panel scroll offsets (keyed by panel name).
    pub scroll_offset: HashMap<String, usize>,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            input_text: String::new(),
            names: Vec::new(),
            duplicate_names: Vec::new(),
            draw_results: Vec::new(),
            groups: Vec::new(),
            pool_remaining: 0,
            allow_repeat: false,
            is_rolling: false,
            slot_text: SLOT_IDLE_TEXT.to_string(),
            notice: None,
            draw_count: 1,
            group_size: 2,
            insert_mode: false,
            confirm: None,
            focus: PanelFocus::Names,
            scroll_offset: HashMap::new(),
        }
    }
}

impl ViewState {
    /// Build a ViewState with the configured numeric field defaults.
    pub fn with_defaults(draw_count: usize, group_size: usize) -> Self {
        ViewState {
            draw_count: draw_count.max(1),
            group_size: group_size.max(1),
            ..ViewState::default()
        }
    }

    /// Apply a full model snapshot from the app orchestrator.
    ///
    /// Fields the snapshot does not cover (numeric fields, modes, slot
    /// text, scroll offsets) are left unchanged.
    pub fn apply_snapshot(&mut self, snapshot: AppSnapshot) {
        // Don't clobber the editor buffer mid-edit; the snapshot echoes
        // back the text this TUI just sent.
        if !self.insert_mode {
            self.input_text = snapshot.input_text;
        }
        self.names = snapshot.names;
        self.duplicate_names = snapshot.duplicate_names;
        self.draw_results = snapshot.draw_results;
        self.groups = snapshot.groups;
        self.pool_remaining = snapshot.pool_remaining;
        self.allow_repeat = snapshot.allow_repeat;
        self.is_rolling = snapshot.is_rolling;
    }

    /// Current scroll offset for a panel.
    pub fn scroll(&self, key: &str) -> usize {
        self.scroll_offset.get(key).copied().unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::StateSnapshot(snapshot) => {
            state.apply_snapshot(*snapshot);
        }
        UiUpdate::RollFrame(name) => {
            state.slot_text = name;
        }
        UiUpdate::RollFinished(winners) => {
            state.slot_text = match winners.as_slice() {
                [] => SLOT_IDLE_TEXT.to_string(),
                [single] => format!("\u{1F389} {single}"),
                many => format!("\u{1F389} drew {} names", many.len()),
            };
        }
        UiUpdate::Notice(notice) => {
            state.notice = Some(notice);
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::slot_banner::render(frame, layout.slot_banner, state);
    widgets::list_preview::render(
        frame,
        layout.list_panel,
        state,
        state.focus == PanelFocus::Names,
    );
    widgets::draw_results::render(
        frame,
        layout.results_panel,
        state,
        state.focus == PanelFocus::Results,
    );
    widgets::groups::render(
        frame,
        layout.groups_panel,
        state,
        state.focus == PanelFocus::Groups,
    );
    widgets::help_bar::render(frame, layout.help_bar, state);

    if let Some(action) = state.confirm {
        widgets::confirm::render(frame, frame.area(), action);
    }
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop: UI updates, keyboard input, render ticks.
/// 4. Restores the terminal on clean exit.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
    mut view_state: ViewState,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Restore the terminal even if rendering panics; chain the original
    // hook so the panic message still prints.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => {
                        apply_ui_update(&mut view_state, ui_update);
                    }
                    None => {
                        // Channel closed: app is shutting down
                        break;
                    }
                }
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let quit = cmd == UserCommand::Quit;
                            let _ = cmd_tx.send(cmd).await;
                            if quit {
                                break;
                            }
                        }
                    }
                    Some(Ok(_)) => {
                        // Mouse events, resize events, etc. -- ignore
                    }
                    Some(Err(_)) | None => {
                        break;
                    }
                }
            }

            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    ratatui::restore();

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
