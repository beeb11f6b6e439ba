#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use prefind::index::{build_index, IndexConfig};
use prefind::query::query;
use std::io::Cursor;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    corpus: &'a [u8],
    prefix: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    let (trie, _) = build_index(Cursor::new(input.corpus), &IndexConfig::default()).unwrap();

    if let Some(words) = query(&trie, input.prefix) {
        let folded = input.prefix.to_ascii_lowercase();
        assert!(words.iter().all(|w| w.text.starts_with(&folded)));
        assert!(words.windows(2).all(|w| w[0].frequency >= w[1].frequency));
    }
});
