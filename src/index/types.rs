use serde::{Deserialize, Serialize};

/// Index of a node inside the trie arena
pub type NodeId = usize;

/// Longest token the index accepts (matches the classic 32-byte word buffer)
pub const DEFAULT_MAX_WORD_LEN: usize = 32;

/// A ranked search result.
///
/// Produced only by the ranking engine; never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Full matched word, ASCII lowercase
    pub text: String,
    /// Number of times the word was seen in the corpus
    pub frequency: u64,
}

impl Word {
    pub fn new(text: impl Into<String>, frequency: u64) -> Self {
        Self {
            text: text.into(),
            frequency,
        }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Words sorted by descending frequency, ties in traversal order
pub type WordList = Vec<Word>;

/// Index build configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexConfig {
    /// Tokens longer than this are rejected whole instead of being truncated
    pub max_word_len: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_word_len: DEFAULT_MAX_WORD_LEN,
        }
    }
}

/// Counters gathered while building the index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Trie nodes including the root
    pub nodes: usize,
    /// Distinct words stored
    pub distinct_words: usize,
    /// Tokens inserted (with repeats)
    pub total_tokens: u64,
    /// Tokens dropped for exceeding `max_word_len`
    pub skipped_tokens: u64,
    /// Corpus bytes consumed
    pub bytes_read: u64,
}
