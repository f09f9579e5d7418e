//! Multi-word anagram search.
//!
//! Candidate words are filtered from a [`Dictionary`] by letter content, then
//! either walked through a [`MatchTree`] ([`Strategy::TrieWalk`]) or combined
//! directly ([`Strategy::Combination`]). Either way, [`find_anagrams`] yields
//! each distinct set of words once.

pub mod anagrams;
pub mod combination;
pub mod dictionary;
pub mod error;
pub mod letters;
pub mod match_tree;
pub mod trie_walk;

pub use crate::anagrams::{find_anagrams, Anagrams, SearchOptions, Strategy};
pub use crate::dictionary::Dictionary;
pub use crate::error::{AnagramError, Result};
pub use crate::letters::LetterMultiset;
pub use crate::match_tree::MatchTree;
