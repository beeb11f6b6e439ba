//! Interactive session.
//!
//! ```text
//! keys ──▶ input capture ──channel──▶ dispatcher ──▶ query ──▶ renderer
//!                                        ▲
//!                     Ctrl+C / SIGINT ───┘
//! ```

pub mod app;
pub mod dispatch;
pub mod input;
pub mod shutdown;
pub mod ui;

use crate::index::Trie;
use anyhow::{Context, Result};
use app::App;
use crossbeam_channel::bounded;
use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use input::TerminalKeys;
use shutdown::Shutdown;
use std::io;
use tracing::{error, info};
use ui::{Renderer, TerminalSurface};

/// Longest query the buffer accepts
pub const DEFAULT_MAX_QUERY_LEN: usize = 1024;

/// Pending edits the capture thread may queue before it blocks
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Interactive session settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub max_query_len: usize,
    pub channel_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_query_len: DEFAULT_MAX_QUERY_LEN,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

/// Run the interactive search until the user interrupts it
pub fn run(trie: Trie, config: SessionConfig) -> Result<()> {
    let shutdown = Shutdown::new();
    shutdown.install_signal_handler();

    let result = TerminalGuard::enter().and_then(|_guard| run_session(trie, config, &shutdown));

    info!("Session ended");
    result
}

fn run_session(trie: Trie, config: SessionConfig, shutdown: &Shutdown) -> Result<()> {
    let (tx, rx) = bounded(config.channel_capacity);
    // A pending resize already forces a full redraw; one slot is enough
    let (resized_tx, resized_rx) = bounded(1);

    // Never joined: the thread blocks in a terminal read and ends with the process
    input::spawn_capture(TerminalKeys, tx, resized_tx, shutdown.handle())
        .context("Failed to start input capture")?;

    let mut app = App::new(trie, config.max_query_len);
    let mut renderer = Renderer::new(TerminalSurface::new(io::stdout()));

    dispatch::run_dispatcher(
        &mut app,
        &mut renderer,
        &rx,
        &resized_rx,
        shutdown.receiver(),
    )
}

/// Raw mode plus alternate screen for as long as the guard lives.
///
/// Dropping it restores the terminal whatever happened in between, including
/// a failure halfway through setup.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        // From here on Drop undoes whatever part of setup succeeded
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen, Clear(ClearType::All))
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let steps: [&mut dyn FnMut() -> io::Result<()>; 2] = [
            &mut || disable_raw_mode(),
            &mut || execute!(io::stdout(), LeaveAlternateScreen),
        ];
        if let Err(e) = restore_all(steps) {
            error!("Failed to restore terminal: {}", e);
        }
    }
}

/// Run every restore step even when an earlier one fails; report the first error
fn restore_all<'a>(
    steps: impl IntoIterator<Item = &'a mut dyn FnMut() -> io::Result<()>>,
) -> io::Result<()> {
    let mut first_err = None;
    for step in steps {
        if let Err(e) = step() {
            first_err.get_or_insert(e);
        }
    }
    first_err.map_or(Ok(()), Err)
}
