#![no_main]

use libfuzzer_sys::fuzz_target;
use prefind::index::{build_index, IndexConfig};
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must index without panicking, and every stored word
    // must be pure lowercase ASCII within the length cap
    let config = IndexConfig { max_word_len: 8 };
    let (trie, stats) = build_index(Cursor::new(data), &config).unwrap();

    for word in prefind::index::rank::vocabulary(&trie) {
        assert!(word.len() <= 8);
        assert!(word.text.bytes().all(|b| b.is_ascii_lowercase()));
    }
    assert_eq!(stats.distinct_words, trie.distinct_words());
});
