use crate::index::{Trie, WordList};
use crate::query::{match_count, query};
use crate::tui::input::EditEvent;
use tracing::debug;

/// Session state of the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Buffer empty, no results shown
    Idle,
    /// Buffer non-empty, latest results shown
    Active,
    /// Shutdown observed; no more events are processed
    Stopped,
}

/// Result of applying one edit to the query buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Changed,
    /// Buffer at capacity; the character was refused
    Rejected,
    /// Nothing to do (backspace on an empty buffer)
    Unchanged,
}

/// The live, user-edited prefix.
///
/// Letters are case-folded as they are inserted. The buffer refuses
/// insertions beyond its capacity rather than growing.
#[derive(Debug, Clone)]
pub struct QueryBuffer {
    text: String,
    capacity: usize,
}

impl QueryBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, c: char) -> EditOutcome {
        if !c.is_ascii_alphabetic() {
            return EditOutcome::Unchanged;
        }
        if self.text.len() >= self.capacity {
            return EditOutcome::Rejected;
        }
        self.text.push(c.to_ascii_lowercase());
        EditOutcome::Changed
    }

    pub fn pop(&mut self) -> EditOutcome {
        match self.text.pop() {
            Some(_) => EditOutcome::Changed,
            None => EditOutcome::Unchanged,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Dispatcher-owned session: the index, the query buffer and the results
/// currently on screen.
pub struct App {
    trie: Trie,
    buffer: QueryBuffer,
    results: Option<WordList>,
    state: SessionState,
}

impl App {
    pub fn new(trie: Trie, max_query_len: usize) -> Self {
        Self {
            trie,
            buffer: QueryBuffer::new(max_query_len),
            results: None,
            state: SessionState::Idle,
        }
    }

    /// Apply one edit. Returns true when the screen needs redrawing.
    pub fn apply(&mut self, event: EditEvent) -> bool {
        if self.state == SessionState::Stopped {
            return false;
        }

        let outcome = match event {
            EditEvent::Insert(c) => self.buffer.push(c),
            EditEvent::Backspace => self.buffer.pop(),
        };

        match outcome {
            EditOutcome::Changed => {
                self.refresh_results();
                true
            }
            EditOutcome::Rejected => {
                debug!(capacity = self.buffer.capacity(), "Query buffer full");
                false
            }
            EditOutcome::Unchanged => false,
        }
    }

    pub fn stop(&mut self) {
        self.state = SessionState::Stopped;
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn query(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn results(&self) -> Option<&WordList> {
        self.results.as_ref()
    }

    pub fn match_count(&self) -> usize {
        match_count(self.results.as_ref())
    }

    fn refresh_results(&mut self) {
        // Previous results are discarded before the new query runs
        self.results = None;

        if self.buffer.is_empty() {
            self.state = SessionState::Idle;
        } else {
            self.results = query(&self.trie, self.buffer.as_str());
            self.state = SessionState::Active;
        }
    }
}
