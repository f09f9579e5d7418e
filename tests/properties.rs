//! Property-based tests for the anagram searches using proptest.

use std::collections::BTreeSet;

use phrase_anagrams::{find_anagrams, Dictionary, LetterMultiset, SearchOptions};
use proptest::prelude::*;

// Few distinct letters so that random phrases actually have anagrams.
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-d]{1,3}"
}

fn small_dict_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 1..=8)
}

fn phrase_strategy() -> impl Strategy<Value = String> {
    "[a-d]{0,7}"
}

fn search(phrase: &str, words: &[String], strategy: phrase_anagrams::Strategy) -> Vec<String> {
    let dictionary = Dictionary::from_words(words);
    find_anagrams(phrase, &dictionary, &SearchOptions::with_strategy(strategy))
        .unwrap()
        .collect()
}

fn split_words(anagram: &str) -> Vec<&str> {
    anagram.split(' ').filter(|word| !word.is_empty()).collect()
}

// Every multiset of dictionary words that spells exactly `letters`.
fn brute_force(letters: &LetterMultiset, words: &[String]) -> BTreeSet<String> {
    fn recurse(
        start: usize,
        remaining: &LetterMultiset,
        words: &[&str],
        chosen: &mut Vec<String>,
        out: &mut BTreeSet<String>,
    ) {
        if remaining.is_empty() {
            out.insert(chosen.join(" "));
            return;
        }
        for (i, word) in words.iter().enumerate().skip(start) {
            if let Ok(rest) = remaining.subtract(&LetterMultiset::of(word)) {
                chosen.push(word.to_string());
                recurse(i, &rest, words, chosen, out);
                chosen.pop();
            }
        }
    }

    let distinct: BTreeSet<&str> = words.iter().map(String::as_str).collect();
    let distinct: Vec<&str> = distinct.into_iter().collect();
    let mut out = BTreeSet::new();
    recurse(0, letters, &distinct, &mut vec![], &mut out);
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: every anagram uses exactly the phrase's letters, and only
    /// dictionary words.
    #[test]
    fn prop_anagrams_are_exact_and_sound(words in small_dict_strategy(), phrase in phrase_strategy()) {
        for strategy in [phrase_anagrams::Strategy::TrieWalk, phrase_anagrams::Strategy::Combination] {
            for anagram in search(&phrase, &words, strategy) {
                let letters: String = split_words(&anagram).concat();
                prop_assert_eq!(LetterMultiset::of(&letters), LetterMultiset::of(&phrase));
                for word in split_words(&anagram) {
                    prop_assert!(words.iter().any(|w| w == word), "{} not in {:?}", word, words);
                }
            }
        }
    }

    /// Property: no two anagrams are the same words in a different order.
    #[test]
    fn prop_no_duplicates(words in small_dict_strategy(), phrase in phrase_strategy()) {
        for strategy in [phrase_anagrams::Strategy::TrieWalk, phrase_anagrams::Strategy::Combination] {
            let found = search(&phrase, &words, strategy);
            let canonical: BTreeSet<Vec<&str>> = found
                .iter()
                .map(|anagram| {
                    let mut words = split_words(anagram);
                    words.sort_unstable();
                    words
                })
                .collect();
            prop_assert_eq!(canonical.len(), found.len());
        }
    }

    /// Property: both strategies find the same anagrams, and those are all
    /// the anagrams there are.
    #[test]
    fn prop_strategies_agree_with_brute_force(words in small_dict_strategy(), phrase in phrase_strategy()) {
        let expected = brute_force(&LetterMultiset::of(&phrase), &words);
        let trie: BTreeSet<String> =
            search(&phrase, &words, phrase_anagrams::Strategy::TrieWalk).into_iter().collect();
        let combination: BTreeSet<String> =
            search(&phrase, &words, phrase_anagrams::Strategy::Combination).into_iter().collect();
        prop_assert_eq!(&trie, &expected);
        prop_assert_eq!(&combination, &expected);
    }

    /// Property: spaces in the phrase make no difference.
    #[test]
    fn prop_whitespace_is_ignored(
        words in small_dict_strategy(),
        phrase in phrase_strategy(),
        cut in 0usize..8,
    ) {
        let cut = cut.min(phrase.len());
        let spaced = format!(" {} {} ", &phrase[..cut], &phrase[cut..]);
        for strategy in [phrase_anagrams::Strategy::TrieWalk, phrase_anagrams::Strategy::Combination] {
            let plain: BTreeSet<String> = search(&phrase, &words, strategy).into_iter().collect();
            let with_spaces: BTreeSet<String> = search(&spaced, &words, strategy).into_iter().collect();
            prop_assert_eq!(plain, with_spaces);
        }
    }
}
