//! Shutdown notification shared by the signal handler, input capture and
//! the dispatcher.
//!
//! The dispatcher waits on [`Shutdown::receiver`] alongside the input
//! channel, so an interrupt is observed without polling.

use crossbeam_channel::{bounded, Receiver, Sender};
use tracing::{debug, warn};

/// Owning side of the shutdown notification
pub struct Shutdown {
    handle: ShutdownHandle,
    rx: Receiver<()>,
}

/// Cloneable trigger for [`Shutdown`]
#[derive(Clone)]
pub struct ShutdownHandle {
    tx: Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        // One pending notification is enough; later triggers are no-ops
        let (tx, rx) = bounded(1);
        Self {
            handle: ShutdownHandle { tx },
            rx,
        }
    }

    pub fn handle(&self) -> ShutdownHandle {
        self.handle.clone()
    }

    pub fn receiver(&self) -> &Receiver<()> {
        &self.rx
    }

    /// Route SIGINT/SIGTERM (and SIGHUP) into this notification instead of
    /// killing the process, so the terminal can be restored before exit.
    pub fn install_signal_handler(&self) {
        let handle = self.handle();
        if let Err(e) = ctrlc::set_handler(move || handle.trigger()) {
            warn!("Failed to set Ctrl+C handler: {}", e);
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownHandle {
    /// Request shutdown. Never blocks; repeated calls are harmless.
    pub fn trigger(&self) {
        if self.tx.try_send(()).is_ok() {
            debug!("Shutdown triggered");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_trigger_is_observed() {
        let shutdown = Shutdown::new();
        assert!(shutdown.receiver().try_recv().is_err());

        shutdown.handle().trigger();
        assert!(shutdown.receiver().recv_timeout(Duration::from_secs(1)).is_ok());
    }

    #[test]
    fn test_repeated_trigger_does_not_block() {
        let shutdown = Shutdown::new();
        let handle = shutdown.handle();

        handle.trigger();
        handle.trigger();
        handle.trigger();

        assert!(shutdown.receiver().try_recv().is_ok());
        assert!(shutdown.receiver().try_recv().is_err());
    }

    #[test]
    fn test_trigger_from_another_thread() {
        let shutdown = Shutdown::new();
        let handle = shutdown.handle();

        std::thread::spawn(move || handle.trigger()).join().unwrap();
        assert!(shutdown.receiver().recv_timeout(Duration::from_secs(1)).is_ok());
    }

    /// Set in the child process spawned by `test_sigterm_is_observed`
    #[cfg(unix)]
    const SIGTERM_CHILD_ENV: &str = "PREFIND_SIGTERM_CHILD";

    #[cfg(unix)]
    #[test]
    fn test_sigterm_is_observed() {
        use std::process::Command;

        if std::env::var_os(SIGTERM_CHILD_ENV).is_some() {
            // Child: a signal handler can only be installed once per process
            let shutdown = Shutdown::new();
            shutdown.install_signal_handler();

            let status = Command::new("kill")
                .args(["-TERM", &std::process::id().to_string()])
                .status()
                .expect("Failed to run kill");
            assert!(status.success());

            // Without the handler the default action kills us before this
            assert!(shutdown.receiver().recv_timeout(Duration::from_secs(2)).is_ok());
            return;
        }

        let output = Command::new(std::env::current_exe().unwrap())
            .args(["tui::shutdown::tests::test_sigterm_is_observed", "--exact"])
            .env(SIGTERM_CHILD_ENV, "1")
            .output()
            .expect("Failed to spawn test child");

        assert!(
            output.status.success(),
            "child died: {:?}\n{}",
            output.status,
            String::from_utf8_lossy(&output.stdout)
        );
    }
}
