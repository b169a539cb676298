//! Booking - scroll-picker demo
//!
//! Pick a date, a time slot and a tournament format, then confirm.
//!
//! Every action a picker returns is dispatched before the next event is
//! read, so the next render already carries the committed value.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p booking-demo
//! cargo run -p booking-demo -- --config booking.json --legacy-centering
//! RUST_LOG=scroll_picker=trace cargo run -p booking-demo -- --log-file trace.log
//! ```

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use booking_demo::action::BookingAction;
use booking_demo::config::BookingConfig;
use booking_demo::reducer::reducer;
use booking_demo::state::BookingState;
use booking_demo::ui::BookingUi;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use scroll_picker::Centering;
use scroll_picker_core::{
    process_raw_event, spawn_event_poller, spawn_ticker, EventKind, LoggingMiddleware, RawEvent,
    StoreWithMiddleware,
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Court booking screen built from scroll pickers
#[derive(Parser, Debug)]
#[command(name = "booking")]
#[command(about = "A court booking TUI demonstrating scroll-picker components")]
struct Args {
    /// JSON config with picker layouts and keymap
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Log file (the terminal itself is taken by the UI)
    #[arg(long, default_value = "booking.log")]
    log_file: PathBuf,

    /// Pad the tournament selector with the 2.5 spacer divisor
    #[arg(long)]
    legacy_centering: bool,

    /// Animation frame interval in milliseconds
    #[arg(long, default_value = "16")]
    frame_ms: u64,
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    // Config errors are reported before entering TUI mode
    let mut config = match &args.config {
        Some(path) => match BookingConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => BookingConfig::default(),
    };
    if args.legacy_centering {
        config.centering = Centering::Legacy;
    }

    init_logging(&args.log_file)?;
    info!(?config, "booking demo starting");

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, config, Duration::from_millis(args.frame_ms.max(1))).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: BookingConfig,
    frame: Duration,
) -> io::Result<()> {
    let mut store = StoreWithMiddleware::new(
        BookingState::default(),
        reducer,
        LoggingMiddleware::new(),
    );
    let mut ui = BookingUi::new();

    // Input poller and frame ticker share one channel
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
    let cancel_token = CancellationToken::new();
    // The blocking reader must stop before the runtime can shut down.
    let _stop_tasks = cancel_token.clone().drop_guard();
    let _poller = spawn_event_poller(event_tx.clone(), Duration::from_millis(16), cancel_token.clone());
    let _ticker = spawn_ticker(event_tx, frame, cancel_token.clone());

    let mut should_render = true;

    'main: loop {
        if should_render {
            terminal.draw(|f| {
                let area = f.area();
                ui.render(f, area, store.state(), &config);
            })?;
            should_render = false;
        }

        let Some(raw_event) = event_rx.recv().await else {
            break;
        };
        let event = process_raw_event(raw_event);

        // Ticks only matter while a picker is still moving.
        should_render = match event {
            EventKind::Tick => !ui.is_at_rest(),
            _ => true,
        };

        for action in ui.handle_event(&event, store.state(), &config) {
            if matches!(action, BookingAction::Quit) {
                break 'main;
            }
            should_render |= store.dispatch(action);
        }
    }

    info!(
        booking = %store.state().summary(),
        applied = store.middleware().applied(),
        unchanged = store.middleware().unchanged(),
        "booking demo finished"
    );
    Ok(())
}
