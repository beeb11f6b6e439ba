//! The single-threaded event loop.
//!
//! Waits on the input channel, resize notifications and the shutdown
//! notification in one select, applies edits to the session and redraws. Everything it touches (index,
//! query buffer, surface) is owned by this loop alone.

use crate::tui::app::App;
use crate::tui::input::EditEvent;
use crate::tui::ui::{Renderer, Surface};
use anyhow::{anyhow, Context, Result};
use crossbeam_channel::{select, Receiver};
use tracing::{debug, info};

/// Run until shutdown is requested.
///
/// Edits are applied strictly in arrival order. Losing the input channel is
/// fatal: it means the capture thread died.
pub fn run_dispatcher<S: Surface>(
    app: &mut App,
    renderer: &mut Renderer<S>,
    input: &Receiver<EditEvent>,
    resized: &Receiver<()>,
    shutdown: &Receiver<()>,
) -> Result<()> {
    renderer.draw(app).context("Failed to draw screen")?;

    loop {
        select! {
            recv(input) -> event => {
                let event = event.map_err(|_| anyhow!("Input capture stopped unexpectedly"))?;
                debug!(?event, "Edit");
                if app.apply(event) {
                    renderer.draw(app).context("Failed to draw screen")?;
                }
            }
            recv(resized) -> signal => {
                // Capture gone is reported through the input channel
                if signal.is_ok() {
                    debug!("Resize");
                    renderer.invalidate();
                    renderer.draw(app).context("Failed to draw screen")?;
                }
            }
            recv(shutdown) -> _ => {
                app.stop();
                info!(query = app.query(), "Shutdown requested");
                return Ok(());
            }
        }
    }
}
