pub mod build;
pub mod rank;
pub mod trie;
pub mod types;

pub use build::{build_index, load_corpus};
pub use trie::Trie;
pub use types::*;
