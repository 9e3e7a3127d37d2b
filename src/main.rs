// Name-draw assistant entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Open database
// 4. Initialize ListState and AppState
// 5. Rehydrate from the previous session
// 6. Create mpsc channels
// 7. Spawn app logic task
// 8. Run the TUI event loop (blocking until quit)
// 9. Cleanup on exit

use draw_assistant::app;
use draw_assistant::config;
use draw_assistant::db;
use draw_assistant::list;
use draw_assistant::tui;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing (log to file, not terminal)
    init_tracing()?;
    info!("Name-draw assistant starting up");

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;

    // 3. Open database
    let db_path = config.resolve_db_path();
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create data directory {}", parent.display()))?;
        }
    }
    let db_path_str = db_path.to_string_lossy().into_owned();
    let db = db::Database::open(&db_path_str).context("failed to open database")?;
    info!("Database opened at {}", db_path_str);

    // 4. Initialize the application state
    let view_state = tui::ViewState::with_defaults(
        config.draw.default_count,
        config.grouping.default_size,
    );
    let mut app_state = app::AppState::new(config, list::state::ListState::new(), db);

    // 5. Rehydrate from the previous session
    match app::recover_from_db(&mut app_state) {
        Ok(true) => info!("Session state restored from previous run"),
        Ok(false) => info!("Starting a fresh session"),
        Err(e) => {
            error!("Session recovery failed: {}", e);
            return Err(e.context("session recovery failed"));
        }
    }

    // 6. Create mpsc channels
    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, ui_rx) = mpsc::channel(256);

    // 7. Spawn app logic task
    let app_handle = tokio::spawn(async move {
        if let Err(e) = app::run(cmd_rx, ui_tx, app_state).await {
            error!("Application loop error: {}", e);
        }
    });

    // 8. Run the TUI event loop (blocking until the user quits)
    if let Err(e) = tui::run(ui_rx, cmd_tx, view_state).await {
        error!("TUI error: {}", e);
    }

    // 9. Cleanup: wait for the app task to finish (with timeout)
    let _ = tokio::time::timeout(std::time::Duration::from_secs(5), async {
        let _ = app_handle.await;
    })
    .await;

    info!("Name-draw assistant shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("namedraw.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("draw_assistant=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
