//! # prefind - incremental word search
//!
//! prefind loads a text corpus into a character-level prefix tree annotated
//! with word frequencies, then lets the user type a prefix while the screen
//! live-updates with matching words ranked by frequency.
//!
//! ## Architecture
//!
//! - [`index`] - Trie construction, prefix lookup and ranked enumeration
//! - [`query`] - Prefix string to ranked word list
//! - [`tui`] - Input capture, event dispatch and rendering
//! - [`output`] - One-shot result formatting
//! - [`utils`] - Tokenizer and progress reporting
//!
//! ## Quick Start
//!
//! ```
//! use prefind::index::{build_index, IndexConfig};
//! use prefind::query::query;
//! use std::io::Cursor;
//!
//! let corpus = "the cat sat on the mat. The cat ran.";
//! let (trie, _stats) = build_index(Cursor::new(corpus), &IndexConfig::default()).unwrap();
//!
//! let words = query(&trie, "th").unwrap();
//! assert_eq!(words[0].text, "the");
//! assert_eq!(words[0].frequency, 3);
//!
//! assert!(query(&trie, "").is_none());
//! ```

pub mod index;
pub mod output;
pub mod query;
pub mod tui;
pub mod utils;
