//! A prefix tree (trie) dictionary of words.
//!
//! This crate provides a `Trie`, which stores a vocabulary of words over a
//! 256-symbol alphabet and associates each word with a payload. It is built
//! for typed-input matching: as characters arrive, prefix queries tell
//! whether the text typed so far can still become a stored word.
//!
//! # Features
//!
//! - Exact and prefix matching in O(k) where k is the word length
//! - Validated insertion and removal with pruning of dangling nodes
//! - Ascending and descending snapshots of the stored words
//! - A `TypingSession` driving keystroke-by-keystroke matching

mod config;
mod dictionary;
mod error;
mod iter;
mod node;
mod node_pool;
mod slot_array;
mod trie;
mod typing;
mod word;

pub use config::TrieConfig;
pub use dictionary::load_words;
pub use error::TrieError;
pub use iter::Words;
pub use node::{Children, NodeRef};
pub use slot_array::{DEFAULT_SLOT_CAPACITY, Slots, SparseSlotArray};
pub use trie::Trie;
pub use typing::{Keystroke, TypingSession};
pub use word::Word;

pub type Result<T> = std::result::Result<T, TrieError>;

#[cfg(test)]
mod proptest_trie;
