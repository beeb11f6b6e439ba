//! Character-level prefix tree annotated with word frequencies.
//!
//! Nodes live in a single arena and refer to their children by [`NodeId`].
//! Every node other than the root has exactly one parent, so the arena is a
//! strict tree. Nodes are only ever appended; the whole tree is dropped as a
//! unit.

use crate::index::types::{NodeId, Word};

/// Sentinel character stored on the root node
const ROOT_CHAR: u8 = 0;

#[derive(Debug, Clone)]
pub(crate) struct Node {
    /// Character on the edge leading into this node
    pub(crate) ch: u8,
    /// Times a word ending here was inserted; 0 means "not a word boundary"
    pub(crate) frequency: u64,
    /// Children in insertion order
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    fn new(ch: u8) -> Self {
        Self {
            ch,
            frequency: 0,
            children: Vec::new(),
        }
    }
}

/// Frequency-annotated prefix index
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    distinct_words: usize,
    total_tokens: u64,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub const ROOT: NodeId = 0;

    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(ROOT_CHAR)],
            distinct_words: 0,
            total_tokens: 0,
        }
    }

    /// Insert one occurrence of `word`.
    ///
    /// Repeated insertion accumulates the frequency. Empty words are ignored.
    pub fn insert(&mut self, word: &[u8]) {
        if word.is_empty() {
            return;
        }

        let mut node = Self::ROOT;
        for &ch in word {
            node = match self.child(node, ch) {
                Some(child) => child,
                None => self.add_child(node, ch),
            };
        }

        let terminal = &mut self.nodes[node];
        if terminal.frequency == 0 {
            self.distinct_words += 1;
        }
        terminal.frequency += 1;
        self.total_tokens += 1;
    }

    /// Walk `prefix` from the root. The empty prefix yields the root itself.
    pub fn find_prefix(&self, prefix: &[u8]) -> Option<NodeId> {
        prefix
            .iter()
            .try_fold(Self::ROOT, |node, &ch| self.child(node, ch))
    }

    /// Exact lookup of a stored word
    pub fn lookup(&self, word: &str) -> Option<Word> {
        if word.is_empty() {
            return None;
        }
        let node = self.find_prefix(word.as_bytes())?;
        match self.nodes[node].frequency {
            0 => None,
            frequency => Some(Word::new(word, frequency)),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn distinct_words(&self) -> usize {
        self.distinct_words
    }

    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    pub fn is_empty(&self) -> bool {
        self.distinct_words == 0
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    fn child(&self, node: NodeId, ch: u8) -> Option<NodeId> {
        self.nodes[node]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child].ch == ch)
    }

    fn add_child(&mut self, parent: NodeId, ch: u8) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::new(ch));
        self.nodes[parent].children.push(id);
        id
    }
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

    #[test]
    fn test_insert_accumulates_frequency() {
        let trie = trie_of(&["the", "the", "the", "then"]);

        assert_eq!(trie.lookup("the"), Some(Word::new("the", 3)));
        assert_eq!(trie.lookup("then"), Some(Word::new("then", 1)));
        assert_eq!(trie.distinct_words(), 2);
        assert_eq!(trie.total_tokens(), 4);
    }

    #[test]
    fn test_shared_prefix_reuses_nodes() {
        let trie = trie_of(&["car", "cat", "cab"]);
        // root + c + a + r/t/b
        assert_eq!(trie.node_count(), 6);
    }

    #[test]
    fn test_interior_node_is_not_a_word() {
        let trie = trie_of(&["cat"]);

        assert!(trie.find_prefix(b"ca").is_some());
        assert_eq!(trie.lookup("ca"), None);
        assert_eq!(trie.lookup("cats"), None);
    }

    #[test]
    fn test_empty_prefix_is_root() {
        let trie = trie_of(&["a"]);
        assert_eq!(trie.find_prefix(b""), Some(Trie::ROOT));
    }

    #[test]
    fn test_missing_prefix() {
        let trie = trie_of(&["cat"]);
        assert_eq!(trie.find_prefix(b"cx"), None);
        assert_eq!(trie.find_prefix(b"dog"), None);
    }

    #[test]
    fn test_empty_word_ignored() {
        let mut trie = Trie::new();
        trie.insert(b"");

        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.node(Trie::ROOT).frequency, 0);
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let trie = trie_of(&["b", "a", "c"]);
        let order: Vec<u8> = trie
            .node(Trie::ROOT)
            .children
            .iter()
            .map(|&c| trie.node(c).ch)
            .collect();
        assert_eq!(order, b"bac");
    }
}
