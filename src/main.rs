use std::io;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use walletui::app::App;
use walletui::core::event::InputEvent;
use walletui::kernel::services::adapters::{ensure_settings_file, load_settings_from};
use walletui::kernel::services::ports::Settings;
use walletui::tui::terminal_guard::{ExitSignal, TerminalGuard};
use walletui::tui::view::{EventResult, View};

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> io::Result<()> {
    let logging = logging::init();

    let settings_path = match ensure_settings_file() {
        Ok(path) => Some(path),
        Err(error) => {
            tracing::warn!(error = %error, "settings file unavailable, using defaults");
            None
        }
    };
    let settings = settings_path
        .as_deref()
        .and_then(load_settings_from)
        .unwrap_or_else(Settings::default);

    let mut app = App::new(&settings, settings_path);

    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    #[cfg(unix)]
    {
        let restorer = guard.restorer();
        if let Err(error) = walletui::tui::terminal_guard::install_exit_signals(restorer, signal_tx)
        {
            tracing::warn!(error = %error, "signal handler not installed");
        }
    }
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let outcome = run(&mut terminal, &mut app, &signal_rx);

    drop(terminal);
    drop(guard);

    tracing::info!(
        balance = %walletui::kernel::format_amount(app.store().state().balance()),
        "wallet closed"
    );
    if let Some(guard) = &logging {
        eprintln!("logs: {}", guard.log_dir().display());
    }

    match outcome? {
        Some(signal) => {
            drop(logging);
            std::process::exit(signal.exit_code())
        }
        None => Ok(()),
    }
}

/// Event loop: one input event is handled to completion before the next is read.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    signal_rx: &Receiver<ExitSignal>,
) -> io::Result<Option<ExitSignal>> {
    let mut dirty = true;
    loop {
        if let Ok(signal) = signal_rx.try_recv() {
            return Ok(Some(signal));
        }

        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                app.render(frame, area);
            })?;
            dirty = false;
        }

        if !crossterm::event::poll(POLL_INTERVAL)? {
            continue;
        }

        let event = InputEvent::from(crossterm::event::read()?);
        match app.handle_input(&event) {
            EventResult::Quit => return Ok(None),
            EventResult::Consumed => dirty = true,
            EventResult::Ignored => {}
        }
    }
}
