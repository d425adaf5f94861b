//! A Scrabble dictionary backed by a prefix tree.
//!
//! Besides word and prefix membership, the trie answers the two hook queries a
//! move generator needs: which single letters can be put in front of a string
//! ([`Trie::valid_first_letters`]) and which can be put after it
//! ([`Trie::valid_last_letters`]) to make a word.
//!
//! ```
//! use scrabble_dictionary::Trie;
//!
//! let trie = Trie::new(vec!["at", "cat", "cats", "car", "hat"])?;
//! assert!(trie.contains_word("cat"));
//! assert_eq!(trie.valid_first_letters("at").to_string(), "ch");
//! assert_eq!(trie.valid_last_letters("ca").to_string(), "rt");
//! # Ok::<(), scrabble_dictionary::DictionaryError>(())
//! ```
pub mod alphabet;
pub mod error;
pub mod letterset;
pub mod wordlist;

pub use error::{DictionaryError, Result};
pub use letterset::LetterSet;
pub use wordlist::trie::{NodeRef, Trie, TrieBuilder};
pub use wordlist::wordlist::{FileFormat, Wordlist};
