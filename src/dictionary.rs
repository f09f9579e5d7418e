use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::letters::LetterMultiset;

/// An ordered list of lowercased words.
///
/// Order and repeated entries are preserved exactly as given; only blank
/// entries are dropped.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    words: Vec<String>,
}

fn normalize_word(word: &str) -> Option<String> {
    let word = word.trim();
    if word.is_empty() {
        return None;
    }
    Some(word.to_lowercase())
}

impl Dictionary {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path.as_ref())?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let dictionary = Self::from_words(contents.lines());
        debug!(
            "loaded {} words from {}",
            dictionary.len(),
            path.as_ref().display()
        );
        Ok(dictionary)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Dictionary {
            words: words
                .into_iter()
                .filter_map(|word| normalize_word(word.as_ref()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Lazily yields, in dictionary order, every word whose letters can all
    /// be drawn from `phrase`.
    pub fn match_words_for(&self, phrase: LetterMultiset) -> impl Iterator<Item = &str> + '_ {
        self.iter()
            .filter(move |word| LetterMultiset::of(word).is_subset_of(&phrase))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_and_skips_blank_lines() {
        let dictionary = Dictionary::from_words(vec!["  Hat", "", "   ", "TEA\r", "hat"]);
        assert_eq!(dictionary.iter().collect::<Vec<_>>(), vec!["hat", "tea", "hat"]);
        assert_eq!(dictionary.len(), 3);
    }

    #[test]
    fn match_words_keep_dictionary_order() {
        let dictionary =
            Dictionary::from_words(vec!["romp", "zebra", "cut", "computer", "cutter", "cut"]);
        let phrase = LetterMultiset::of("computer");
        let matches: Vec<_> = dictionary.match_words_for(phrase).collect();
        assert_eq!(matches, vec!["romp", "cut", "computer", "cut"]);
    }

    #[test]
    fn no_matches_for_foreign_letters() {
        let dictionary = Dictionary::from_words(vec!["abc", "def"]);
        let phrase = LetterMultiset::of("xyz");
        assert_eq!(dictionary.match_words_for(phrase).count(), 0);
    }

    #[test]
    fn reads_word_list_from_file() {
        let path = std::env::temp_dir().join(format!(
            "phrase_anagrams_dictionary_{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "eat\nTea\n\nate\n").unwrap();
        let dictionary = Dictionary::from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(dictionary.iter().collect::<Vec<_>>(), vec!["eat", "tea", "ate"]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = Dictionary::from_path("/nonexistent/phrase_anagrams/words");
        assert!(matches!(result, Err(crate::AnagramError::Io(_))));
    }
}
