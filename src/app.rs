// Application state and orchestration logic.
//
// The central event loop that applies user commands from the TUI to the
// list model, runs the slot-machine roll task, persists a snapshot after
// every mutation, and pushes UI updates to the TUI render loop.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::db::{Database, SNAPSHOT_KEY};
use crate::export::{self, ExportError};
use crate::list::draw::{draw_winners, DrawError};
use crate::list::group::{group_names, GroupError};
use crate::list::state::{ListState, PersistedState};
use crate::protocol::{AppSnapshot, Notice, UiUpdate, UserCommand};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Built-in sample roster for demoing without typing a list.
pub const SAMPLE_NAMES: &[&str] = &[
    "Ada Lovelace",
    "Grace Hopper",
    "Alan Turing",
    "Katherine Johnson",
    "Edsger Dijkstra",
    "Barbara Liskov",
    "Donald Knuth",
    "Margaret Hamilton",
    "John von Neumann",
    "Frances Allen",
    "Claude Shannon",
    "Radia Perlman",
    "Dennis Ritchie",
    "Anita Borg",
    "Ken Thompson",
];

/// Interval between animation frames during a roll.
const ROLL_FRAME_INTERVAL: Duration = Duration::from_millis(60);

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The complete application state.
pub struct AppState {
    pub config: Config,
    pub list: ListState,
    pub db: Database,
    /// Current state of the allow-repeat toggle.
    pub allow_repeat: bool,
    /// True while a roll animation is in flight; further draw commands are
    /// rejected until the pending winners are revealed.
    pub is_rolling: bool,
}

impl AppState {
    pub fn new(config: Config, list: ListState, db: Database) -> Self {
        let allow_repeat = config.draw.allow_repeat;
        AppState {
            config,
            list,
            db,
            allow_repeat,
            is_rolling: false,
        }
    }

    /// Build the full snapshot the TUI renders from.
    pub fn build_snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            input_text: self.list.raw_text.clone(),
            names: self.list.names.clone(),
            duplicate_names: self.list.duplicate_names(),
            draw_results: self.list.draw_results.clone(),
            groups: self.list.groups.clone(),
            pool_remaining: self.list.pool_size(self.allow_repeat),
            allow_repeat: self.allow_repeat,
            is_rolling: self.is_rolling,
        }
    }

    /// Write the current snapshot to the persistence slot.
    ///
    /// Persistence is fire-and-forget: a failure is logged and surfaced as
    /// a notice elsewhere, but never aborts the session -- the in-memory
    /// state stays authoritative.
    pub fn persist(&self) {
        let snapshot = self.list.snapshot();
        match serde_json::to_value(&snapshot) {
            Ok(value) => {
                if let Err(e) = self.db.save_state(SNAPSHOT_KEY, &value) {
                    warn!("failed to persist state snapshot: {e:#}");
                }
            }
            Err(e) => warn!("failed to serialize state snapshot: {e}"),
        }
    }

    /// Replace the raw input text.
    pub fn set_input(&mut self, text: &str) {
        self.list.set_input(text);
        self.persist();
    }

    /// Draw winners from the current pool and mark the roll as in flight.
    ///
    /// The winners are fixed here, before any animation runs; the roll is
    /// purely cosmetic. On error nothing changes.
    pub fn start_draw(
        &mut self,
        count: usize,
        rng: &mut impl rand::Rng,
    ) -> Result<Vec<String>, DrawError> {
        let pool = self.list.draw_pool(self.allow_repeat);
        let winners = draw_winners(&pool, count, rng)?;
        self.is_rolling = true;
        Ok(winners)
    }

    /// Record the winners of a finished roll and clear the in-flight flag.
    pub fn finish_draw(&mut self, winners: Vec<String>) {
        self.list.record_winners(winners);
        self.is_rolling = false;
        self.persist();
    }

    /// Replace the current grouping with a fresh random partition.
    pub fn regroup(
        &mut self,
        size: usize,
        rng: &mut impl rand::Rng,
    ) -> Result<(), GroupError> {
        let groups = group_names(&self.list.names, size, rng)?;
        self.list.set_groups(groups);
        self.persist();
        Ok(())
    }

    pub fn remove_duplicates(&mut self) {
        self.list.remove_duplicates();
        self.persist();
    }

    pub fn load_sample(&mut self) {
        self.list.set_input(&SAMPLE_NAMES.join("\n"));
        self.persist();
    }

    pub fn reset_draw_results(&mut self) {
        self.list.reset_draw_results();
        self.persist();
    }

    pub fn reset_groups(&mut self) {
        self.list.reset_groups();
        self.persist();
    }

    pub fn clear_all(&mut self) {
        self.list.clear_all();
        self.persist();
    }

    /// Write the groups CSV export and return the path of the file.
    pub fn export_groups(&self) -> Result<PathBuf, ExportError> {
        export::write_groups_csv(
            &self.list.groups,
            Path::new(&self.config.export.directory),
            &self.config.export.filename_prefix,
        )
    }
}

/// Rehydrate the list model from the persistence slot.
///
/// Returns `Ok(true)` when a non-empty snapshot was restored, `Ok(false)`
/// when there was nothing (or only an empty snapshot) to restore.
pub fn recover_from_db(state: &mut AppState) -> anyhow::Result<bool> {
    use anyhow::Context;

    let Some(value) = state.db.load_state(SNAPSHOT_KEY)? else {
        return Ok(false);
    };
    let snapshot: PersistedState =
        serde_json::from_value(value).context("failed to decode persisted snapshot")?;
    let restored = snapshot != PersistedState::default();
    state.list.restore(snapshot);
    Ok(restored)
}

// ---------------------------------------------------------------------------
// Event loop
// ---------------------------------------------------------------------------

/// Run the application loop until the TUI quits or its channel closes.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    // Completed rolls report their winners back through this channel.
    let (roll_tx, mut roll_rx) = mpsc::channel::<Vec<String>>(4);

    // Seed the TUI with the (possibly rehydrated) state.
    push_snapshot(&state, &ui_tx).await;

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => {
                match cmd {
                    None | Some(UserCommand::Quit) => {
                        info!("command channel closed, shutting down app loop");
                        break;
                    }
                    Some(cmd) => handle_command(&mut state, cmd, &ui_tx, &roll_tx).await,
                }
            }

            winners = roll_rx.recv() => {
                if let Some(winners) = winners {
                    debug!("roll finished with {} winner(s)", winners.len());
                    state.finish_draw(winners.clone());
                    let _ = ui_tx.send(UiUpdate::RollFinished(winners)).await;
                    push_snapshot(&state, &ui_tx).await;
                }
            }
        }
    }

    Ok(())
}

async fn push_snapshot(state: &AppState, ui_tx: &mpsc::Sender<UiUpdate>) {
    let snapshot = state.build_snapshot();
    let _ = ui_tx
        .send(UiUpdate::StateSnapshot(Box::new(snapshot)))
        .await;
}

async fn notify(ui_tx: &mpsc::Sender<UiUpdate>, notice: Notice) {
    let _ = ui_tx.send(UiUpdate::Notice(notice)).await;
}

/// Apply a single user command to the state.
async fn handle_command(
    state: &mut AppState,
    cmd: UserCommand,
    ui_tx: &mpsc::Sender<UiUpdate>,
    roll_tx: &mpsc::Sender<Vec<String>>,
) {
    match cmd {
        UserCommand::SetInput(text) => {
            state.set_input(&text);
            push_snapshot(state, ui_tx).await;
        }

        UserCommand::ToggleRepeat => {
            state.allow_repeat = !state.allow_repeat;
            push_snapshot(state, ui_tx).await;
        }

        UserCommand::Draw { count } => {
            if state.is_rolling {
                notify(ui_tx, Notice::warn("a draw is already in progress")).await;
                return;
            }

            let pool = state.list.draw_pool(state.allow_repeat);
            let drawn = {
                let mut rng = StdRng::from_os_rng();
                state.start_draw(count, &mut rng)
            };

            match drawn {
                Err(DrawError::EmptyPool) => {
                    notify(
                        ui_tx,
                        Notice::warn("draw pool is empty -- add names or reset the draw results"),
                    )
                    .await;
                }
                Err(err @ DrawError::NotEnough { .. }) => {
                    notify(ui_tx, Notice::warn(err.to_string())).await;
                }
                Ok(winners) => {
                    info!("drew {} winner(s)", winners.len());
                    let duration = Duration::from_millis(state.config.draw.roll_duration_ms);
                    if duration.is_zero() {
                        state.finish_draw(winners.clone());
                        let _ = ui_tx.send(UiUpdate::RollFinished(winners)).await;
                    } else {
                        spawn_roll(pool, winners, duration, ui_tx.clone(), roll_tx.clone());
                    }
                    push_snapshot(state, ui_tx).await;
                }
            }
        }

        UserCommand::Group { size } => {
            let result = {
                let mut rng = StdRng::from_os_rng();
                state.regroup(size, &mut rng)
            };
            match result {
                Err(GroupError::EmptyList) => {
                    notify(ui_tx, Notice::warn("enter a name list first")).await;
                }
                Ok(()) => {
                    info!("grouped {} names into {} group(s)", state.list.names.len(), state.list.groups.len());
                    push_snapshot(state, ui_tx).await;
                }
            }
        }

        UserCommand::RemoveDuplicates => {
            state.remove_duplicates();
            push_snapshot(state, ui_tx).await;
        }

        UserCommand::LoadSample => {
            state.load_sample();
            push_snapshot(state, ui_tx).await;
        }

        UserCommand::ResetDrawResults => {
            state.reset_draw_results();
            push_snapshot(state, ui_tx).await;
            notify(ui_tx, Notice::info("draw results cleared")).await;
        }

        UserCommand::ResetGroups => {
            state.reset_groups();
            push_snapshot(state, ui_tx).await;
            notify(ui_tx, Notice::info("groups cleared")).await;
        }

        UserCommand::ClearAll => {
            state.clear_all();
            push_snapshot(state, ui_tx).await;
            notify(ui_tx, Notice::info("list, draw results, and groups cleared")).await;
        }

        UserCommand::Export => match state.export_groups() {
            Err(ExportError::NoGroups) => {
                notify(ui_tx, Notice::warn("create groups first")).await;
            }
            Err(e) => {
                warn!("export failed: {e}");
                notify(ui_tx, Notice::warn(format!("export failed: {e}"))).await;
            }
            Ok(path) => {
                notify(ui_tx, Notice::info(format!("exported {}", path.display()))).await;
            }
        },

        UserCommand::Quit => {
            // Handled by the caller; nothing to do here.
        }
    }
}

/// Spawn the cosmetic roll task.
///
/// Flashes random pool names at the TUI until the deadline, then reports
/// the precomputed winners back for recording and reveal.
fn spawn_roll(
    pool: Vec<String>,
    winners: Vec<String>,
    duration: Duration,
    ui_tx: mpsc::Sender<UiUpdate>,
    roll_tx: mpsc::Sender<Vec<String>>,
) {
    tokio::spawn(async move {
        let deadline = Instant::now() + duration;
        let mut frames = tokio::time::interval(ROLL_FRAME_INTERVAL);
        frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let mut rng = StdRng::from_os_rng();

        loop {
            frames.tick().await;
            if Instant::now() >= deadline {
                break;
            }
            if let Some(name) = pool.choose(&mut rng) {
                let _ = ui_tx.send(UiUpdate::RollFrame(name.clone())).await;
            }
        }

        let _ = roll_tx.send(winners).await;
    });
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
