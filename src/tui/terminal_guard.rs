use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Raw mode + alternate screen switching, behind a trait so tests can count calls.
pub trait TerminalOps: Send + Sync + 'static {
    fn setup(&self) -> io::Result<()>;
    fn restore(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermTerminalOps;

impl TerminalOps for CrosstermTerminalOps {
    fn setup(&self) -> io::Result<()> {
        use crossterm::event::EnableBracketedPaste;
        use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};
        use crossterm::{cursor, execute};

        enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableBracketedPaste,
            cursor::SetCursorStyle::SteadyBar
        )
    }

    fn restore(&self) -> io::Result<()> {
        use crossterm::event::DisableBracketedPaste;
        use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};
        use crossterm::{cursor, execute};

        // Run every step; report the first failure.
        let raw = disable_raw_mode();
        let screen = execute!(
            io::stdout(),
            DisableBracketedPaste,
            LeaveAlternateScreen,
            cursor::SetCursorStyle::DefaultUserShape,
            cursor::Show
        );
        raw.and(screen)
    }
}

/// Cloneable handle that restores the terminal at most once.
#[derive(Clone)]
pub struct TerminalRestorer {
    done: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.done.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.restore()
    }

    pub fn is_restored(&self) -> bool {
        self.done.load(Ordering::SeqCst)
    }
}

/// Puts the terminal into TUI mode for its lifetime.
pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminalOps))
    }

    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        ops.setup()?;
        let restorer = TerminalRestorer {
            done: Arc::new(AtomicBool::new(false)),
            ops,
        };
        Ok(Self { restorer })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(error) = self.restorer.restore() {
            tracing::warn!(error = %error, "terminal restore failed");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitSignal {
    Interrupt,
    Terminate,
}

impl ExitSignal {
    /// Shell convention: 128 + signal number.
    pub fn exit_code(self) -> i32 {
        match self {
            ExitSignal::Interrupt => 130,
            ExitSignal::Terminate => 143,
        }
    }
}

/// Forwards SIGINT/SIGTERM to `tx`. If the main loop has not exited two seconds
/// later, the terminal is restored and the process exits.
#[cfg(unix)]
pub fn install_exit_signals(
    restorer: TerminalRestorer,
    tx: std::sync::mpsc::Sender<ExitSignal>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use std::time::Duration;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    Ok(std::thread::spawn(move || {
        let Some(raw) = signals.forever().next() else {
            return;
        };
        let signal = if raw == SIGTERM {
            ExitSignal::Terminate
        } else {
            ExitSignal::Interrupt
        };
        tracing::info!(?signal, "exit signal received");
        let _ = tx.send(signal);

        std::thread::sleep(Duration::from_secs(2));
        let _ = restorer.restore();
        std::process::exit(signal.exit_code());
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
