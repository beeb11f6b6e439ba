//! Input capture: blocking key reads normalized into [`EditEvent`]s.
//!
//! The capture thread never touches the index or the screen. It only turns
//! raw terminal events into edit events and pushes them, in order, into a
//! bounded channel. A full channel blocks the sender, so keystrokes are never
//! dropped once recognized.

use crate::tui::shutdown::ShutdownHandle;
use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::thread::{self, JoinHandle};
use tracing::{debug, error};

/// A normalized edit to the query buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditEvent {
    /// ASCII letter, case preserved
    Insert(char),
    Backspace,
}

/// What a raw terminal event means to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Captured {
    Edit(EditEvent),
    /// Ctrl+C while the terminal is in raw mode
    Interrupt,
    /// Terminal size changed; the screen must be redrawn
    Resize,
    Ignored,
}

/// Blocking source of raw terminal events
pub trait KeySource: Send + 'static {
    fn read_event(&mut self) -> io::Result<Event>;
}

/// Reads from the process terminal
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn read_event(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Map a raw terminal event to its session meaning
pub fn normalize(event: &Event) -> Captured {
    let key = match event {
        Event::Key(key) => key,
        Event::Resize(..) => return Captured::Resize,
        _ => return Captured::Ignored,
    };
    // Only presses; Windows also reports releases
    if key.kind != KeyEventKind::Press {
        return Captured::Ignored;
    }
    normalize_key(key)
}

fn normalize_key(key: &KeyEvent) -> Captured {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Captured::Interrupt,
        // ASCII BS as sent by many terminals
        (KeyModifiers::CONTROL, KeyCode::Char('h')) => Captured::Edit(EditEvent::Backspace),
        (_, KeyCode::Backspace | KeyCode::Delete) => Captured::Edit(EditEvent::Backspace),
        (_, KeyCode::Char('\u{7f}' | '\u{8}')) => Captured::Edit(EditEvent::Backspace),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c))
            if c.is_ascii_alphabetic() =>
        {
            Captured::Edit(EditEvent::Insert(c))
        }
        _ => Captured::Ignored,
    }
}

/// Start the capture thread.
///
/// The thread runs until the source fails or the receiving side goes away.
/// Callers are not expected to join it. Resizes are signalled on `resized`
/// without blocking; a notification already pending covers later ones.
pub fn spawn_capture<S: KeySource>(
    source: S,
    events: Sender<EditEvent>,
    resized: Sender<()>,
    shutdown: ShutdownHandle,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("input-capture".to_string())
        .spawn(move || capture_loop(source, events, resized, shutdown))
}

fn capture_loop<S: KeySource>(
    mut source: S,
    events: Sender<EditEvent>,
    resized: Sender<()>,
    shutdown: ShutdownHandle,
) {
    loop {
        let raw = match source.read_event() {
            Ok(raw) => raw,
            Err(e) => {
                error!("Terminal read failed: {}", e);
                return;
            }
        };

        match normalize(&raw) {
            Captured::Edit(edit) => {
                if events.send(edit).is_err() {
                    debug!("Dispatcher gone, input capture exiting");
                    return;
                }
            }
            Captured::Interrupt => shutdown.trigger(),
            Captured::Resize => {
                let _ = resized.try_send(());
            }
            Captured::Ignored => {}
        }
    }
}
