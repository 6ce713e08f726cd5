//! # Char Trie
//!
//! A character-keyed prefix tree, plus two small helpers built next to it:
//! counting stored words by suffix and finding the longest prefix shared by a
//! list of strings.
//!
//! ## Features
//!
//! - **One edge per character**: keys are walked `char` by `char`, so
//!   multi-byte text behaves like any other text
//! - **Explicit presence**: a key is stored when its node holds `Some(value)`;
//!   falsy values such as `0` or `false` still count as present
//! - **Iterative traversal**: enumeration, cloning, formatting and dropping use
//!   explicit work lists and never recurse, however deep the trie
//! - **Ordered keys**: keys come out in lexicographic order
//! - **Validated input**: keys, prefixes and patterns can be text, chars or
//!   bytes; anything that is not a valid character sequence is rejected
//!
//! ## Example
//!
//! ```rust
//! use char_trie::{count_words_with_suffix, has_prefix, Trie};
//!
//! let mut trie = Trie::new();
//! for (i, word) in ["apple", "application", "banana", "cat"].iter().enumerate() {
//!     trie.put(*word, i).unwrap();
//! }
//!
//! assert_eq!(count_words_with_suffix(&trie, "at").unwrap(), 1);
//! assert!(has_prefix(&trie, "app").unwrap());
//! assert!(!has_prefix(&trie, "bat").unwrap());
//! ```

mod common_prefix;
mod error;
mod iter;
mod key_converter;
mod node;
mod suffix;
mod trie;

// Re-export public types
pub use crate::common_prefix::find_longest_common_word;
pub use crate::error::{Result, TrieError};
pub use crate::iter::{Iter, Keys};
pub use crate::key_converter::CharKey;
pub use crate::suffix::{count_words_with_suffix, has_prefix};
pub use crate::trie::Trie;
