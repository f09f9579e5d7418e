use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use log::debug;

use crate::combination::CombinationSearch;
use crate::dictionary::Dictionary;
use crate::error::{AnagramError, Result};
use crate::letters::LetterMultiset;
use crate::match_tree::MatchTree;
use crate::trie_walk::TrieWalk;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Walk a prefix tree of the candidate words letter by letter.
    #[default]
    TrieWalk,
    /// Decide word by word over the candidate list, without a tree.
    Combination,
}

impl FromStr for Strategy {
    type Err = AnagramError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "trie" | "trie-walk" | "trie_walk" => Ok(Strategy::TrieWalk),
            "combination" | "combo" => Ok(Strategy::Combination),
            _ => Err(AnagramError::UnknownStrategy(s.to_owned())),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::TrieWalk => write!(f, "trie"),
            Strategy::Combination => write!(f, "combination"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    pub strategy: Strategy,
    pub min_words: usize,
    pub max_words: usize,
    /// Only dictionary words with at least this many letters are used.
    pub min_letters: usize,
    /// Only dictionary words with at most this many letters are used.
    pub max_letters: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            strategy: Strategy::default(),
            min_words: 0,
            max_words: usize::MAX,
            min_letters: 0,
            max_letters: usize::MAX,
        }
    }
}

impl SearchOptions {
    pub fn with_strategy(strategy: Strategy) -> Self {
        SearchOptions {
            strategy,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_words > self.max_words {
            return Err(AnagramError::InvalidBounds {
                what: "word count",
                min: self.min_words,
                max: self.max_words,
            });
        }
        if self.min_letters > self.max_letters {
            return Err(AnagramError::InvalidBounds {
                what: "letter count",
                min: self.min_letters,
                max: self.max_letters,
            });
        }
        Ok(())
    }

    fn allows_word(&self, word: &str) -> bool {
        let letters = word.chars().count();
        letters >= self.min_letters && letters <= self.max_letters
    }
}

/// Lowercases `phrase` and strips all whitespace from it.
pub fn normalize_phrase(phrase: &str) -> String {
    phrase
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Joins the words of a combination in sorted order, so that every
/// permutation of the same words gives the same string.
pub fn canonicalize(words: &[&str]) -> String {
    let mut words = words.to_vec();
    words.sort_unstable();
    words.join(" ")
}

/// The distinct anagrams of a phrase, produced lazily.
///
/// Each item is a space-separated, sorted list of dictionary words. Dropping
/// the iterator abandons the rest of the search.
pub struct Anagrams<'d> {
    combinations: Box<dyn Iterator<Item = Vec<&'d str>> + 'd>,
    seen: HashSet<String>,
    min_words: usize,
}

impl<'d> Iterator for Anagrams<'d> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        for words in self.combinations.by_ref() {
            if words.len() < self.min_words {
                continue;
            }
            let anagram = canonicalize(&words);
            if self.seen.insert(anagram.clone()) {
                return Some(anagram);
            }
        }
        None
    }
}

/// Finds every set of dictionary words whose letters together rearrange to
/// exactly the letters of `phrase`. Whitespace in `phrase` is ignored.
///
/// An empty phrase has exactly one anagram, the empty string.
pub fn find_anagrams<'d>(
    phrase: &str,
    dictionary: &'d Dictionary,
    options: &SearchOptions,
) -> Result<Anagrams<'d>> {
    options.validate()?;

    let letters = LetterMultiset::of(&normalize_phrase(phrase));
    let candidates: Vec<&'d str> = dictionary
        .match_words_for(letters.clone())
        .filter(|word| options.allows_word(word))
        .collect();
    debug!(
        "{} of {} dictionary words fit in {} letters",
        candidates.len(),
        dictionary.len(),
        letters.len()
    );

    let combinations: Box<dyn Iterator<Item = Vec<&'d str>> + 'd> = match options.strategy {
        Strategy::TrieWalk => {
            let tree = MatchTree::build(candidates);
            debug!("match tree has {} nodes", tree.node_count());
            Box::new(TrieWalk::new(tree, letters, options.max_words))
        }
        Strategy::Combination => Box::new(CombinationSearch::new(
            candidates,
            letters,
            options.max_words,
        )),
    };

    Ok(Anagrams {
        combinations,
        seen: HashSet::new(),
        min_words: options.min_words,
    })
}
