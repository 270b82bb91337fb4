use super::*;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MockOps {
    calls: Mutex<Vec<&'static str>>,
}

impl TerminalOps for MockOps {
    fn setup(&self) -> std::io::Result<()> {
        self.calls.lock().unwrap().push("setup");
        Ok(())
    }

    fn restore(&self) -> std::io::Result<()> {
        self.calls.lock().unwrap().push("restore");
        Ok(())
    }
}

struct FailingSetup;

impl TerminalOps for FailingSetup {
    fn setup(&self) -> std::io::Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "no tty"))
    }

    fn restore(&self) -> std::io::Result<()> {
        panic!("restore must not run when setup failed");
    }
}

#[test]
fn guard_restores_on_drop() {
    let ops = Arc::new(MockOps::default());
    {
        let _guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    }

    assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
}

#[test]
fn restorer_runs_once_across_clones() {
    let ops = Arc::new(MockOps::default());
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    let restorer = guard.restorer();
    assert!(!restorer.is_restored());

    restorer.restore().unwrap();
    restorer.clone().restore().unwrap();
    assert!(restorer.is_restored());
    drop(guard);

    assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
}

#[test]
fn setup_failure_returns_error() {
    assert!(TerminalGuard::with_ops(Arc::new(FailingSetup)).is_err());
}

#[test]
fn exit_codes_follow_shell_convention() {
    assert_eq!(ExitSignal::Interrupt.exit_code(), 130);
    assert_eq!(ExitSignal::Terminate.exit_code(), 143);
}
