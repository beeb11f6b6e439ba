//! Utility functions shared by the index and the binary.
//!
//! - [`tokenizer`] - ASCII-letter tokenization of corpus bytes
//! - [`progress`] - Progress bar, no-op without the `progress` feature
//!
//! ```
//! use prefind::utils::extract_words;
//!
//! let words = extract_words(b"The cat, the hat.", 32);
//! assert_eq!(words, ["the", "cat", "the", "hat"]);
//! ```

pub mod progress;
pub mod tokenizer;

pub use progress::*;
pub use tokenizer::*;
