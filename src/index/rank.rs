//! Frequency-ranked enumeration of trie subtrees.

use crate::index::trie::Trie;
use crate::index::types::{NodeId, Word, WordList};

/// Collect every word below `node` and rank it by descending frequency.
///
/// `prefix` is the string spelled by the path from the root to `node`; it
/// seeds the path accumulator so emitted words are complete. Equal
/// frequencies keep their traversal order.
pub fn enumerate(trie: &Trie, node: NodeId, prefix: &[u8]) -> WordList {
    let mut path = prefix.to_vec();
    let mut words = Vec::new();

    collect(trie, node, &mut path, &mut words);
    sort_by_frequency(&mut words);

    words
}

/// Ranked list of every word in the index
pub fn vocabulary(trie: &Trie) -> WordList {
    enumerate(trie, Trie::ROOT, b"")
}

/// Depth-first walk; `path` grows on descent and shrinks on return
fn collect(trie: &Trie, node: NodeId, path: &mut Vec<u8>, words: &mut WordList) {
    let current = trie.node(node);

    if current.frequency > 0 && !path.is_empty() {
        // Only ASCII letters ever enter the trie
        let text = String::from_utf8_lossy(path).into_owned();
        words.push(Word::new(text, current.frequency));
    }

    for &child in &current.children {
        path.push(trie.node(child).ch);
        collect(trie, child, path, words);
        path.pop();
    }
}

fn sort_by_frequency(words: &mut WordList) {
    // sort_by is stable, which keeps ties deterministic
    words.sort_by(|a, b| b.frequency.cmp(&a.frequency));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie_of(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word.as_bytes());
        }
        trie
    }

    fn texts(words: &WordList) -> Vec<&str> {
        words.iter().map(|w| w.text.as_str()).collect()
    }

    #[test]
    fn test_enumerate_subtree() {
        let trie = trie_of(&["cat", "car", "car", "dog"]);
        let node = trie.find_prefix(b"ca").unwrap();

        let words = enumerate(&trie, node, b"ca");
        assert_eq!(words, vec![Word::new("car", 2), Word::new("cat", 1)]);
    }

    #[test]
    fn test_prefix_itself_is_emitted() {
        let trie = trie_of(&["the", "then", "the"]);
        let node = trie.find_prefix(b"the").unwrap();

        let words = enumerate(&trie, node, b"the");
        assert_eq!(texts(&words), vec!["the", "then"]);
        assert_eq!(words[0].frequency, 2);
    }

    #[test]
    fn test_ties_keep_traversal_order() {
        let trie = trie_of(&["bb", "ba", "bc", "bz", "bz"]);
        let node = trie.find_prefix(b"b").unwrap();

        let words = enumerate(&trie, node, b"b");
        assert_eq!(texts(&words), vec!["bz", "bb", "ba", "bc"]);
    }

    #[test]
    fn test_sorted_descending() {
        let trie = trie_of(&["a", "ab", "ab", "abc", "abc", "abc", "abd"]);
        let words = vocabulary(&trie);

        assert!(words.windows(2).all(|w| w[0].frequency >= w[1].frequency));
        assert_eq!(words[0], Word::new("abc", 3));
    }

    #[test]
    fn test_vocabulary_of_empty_trie() {
        let trie = Trie::new();
        assert!(vocabulary(&trie).is_empty());
    }

    #[test]
    fn test_word_lengths() {
        let trie = trie_of(&["abc"]);
        let words = vocabulary(&trie);
        assert_eq!(words[0].len(), 3);
    }
}
