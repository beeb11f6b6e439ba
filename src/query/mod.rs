//! Query service: prefix string in, ranked word list out.
//!
//! Every call is an independent computation over the index; nothing is
//! cached between calls and each returned list is owned by the caller.

use crate::index::rank;
use crate::index::{Trie, WordList};
use tracing::trace;

/// Rank every indexed word starting with `prefix`.
///
/// Returns `None` for an empty prefix (no lookup is performed) and for a
/// prefix absent from the index. `prefix` is case-folded before lookup.
pub fn query(trie: &Trie, prefix: &str) -> Option<WordList> {
    if prefix.is_empty() {
        return None;
    }

    let folded = prefix.to_ascii_lowercase();
    let node = trie.find_prefix(folded.as_bytes())?;
    let words = rank::enumerate(trie, node, folded.as_bytes());

    trace!(prefix = %folded, matches = words.len(), "Prefix query");
    Some(words)
}

/// Number of matches for `prefix`, 0 when the query is empty
pub fn match_count(result: Option<&WordList>) -> usize {
    result.map(Vec::len).unwrap_or(0)
}
