use std::rc::Rc;

use log::trace;

use crate::letters::LetterMultiset;

struct Frame<'w> {
    remaining: LetterMultiset,
    candidates: Rc<Vec<usize>>,
    position: usize,
    chosen: Vec<&'w str>,
}

/// Finds word combinations by deciding, candidate by candidate, whether a
/// word takes part in the result.
///
/// For the first undecided candidate the search first explores never using
/// it again, then using it once more. After a word is used, only candidates
/// that still fit in the smaller pool stay available, the used word itself
/// included so that it can repeat. Candidates before the current one are
/// never reconsidered, which keeps each set of words from being found in
/// more than one order.
pub struct CombinationSearch<'w> {
    pairs: Vec<(&'w str, LetterMultiset)>,
    stack: Vec<Frame<'w>>,
    max_words: usize,
}

impl<'w> CombinationSearch<'w> {
    pub fn new<I>(words: I, letters: LetterMultiset, max_words: usize) -> Self
    where
        I: IntoIterator<Item = &'w str>,
    {
        // An empty word fits everywhere without using anything up.
        let pairs: Vec<_> = words
            .into_iter()
            .filter(|word| !word.is_empty())
            .map(|word| (word, LetterMultiset::of(word)))
            .collect();

        CombinationSearch {
            stack: vec![Frame {
                remaining: letters,
                candidates: Rc::new((0..pairs.len()).collect()),
                position: 0,
                chosen: vec![],
            }],
            pairs,
            max_words,
        }
    }
}

impl<'w> Iterator for CombinationSearch<'w> {
    type Item = Vec<&'w str>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            if frame.remaining.is_empty() {
                return Some(frame.chosen);
            }

            let index = match frame.candidates.get(frame.position) {
                Some(&index) => index,
                None => continue,
            };
            if frame.chosen.len() >= self.max_words {
                continue;
            }

            let (word, counts) = &self.pairs[index];

            // Inclusion goes on the stack first so exclusion is explored first.
            if let Ok(smaller) = frame.remaining.subtract(counts) {
                let still_fitting: Vec<usize> = frame.candidates[frame.position..]
                    .iter()
                    .copied()
                    .filter(|&i| self.pairs[i].1.is_subset_of(&smaller))
                    .collect();
                trace!(
                    "using {:?}, {} candidates still fit",
                    word,
                    still_fitting.len()
                );

                let mut chosen = frame.chosen.clone();
                chosen.push(*word);
                self.stack.push(Frame {
                    remaining: smaller,
                    candidates: Rc::new(still_fitting),
                    position: 0,
                    chosen,
                });
            }

            self.stack.push(Frame {
                position: frame.position + 1,
                ..frame
            });
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(words: &[&'static str], phrase: &str, max_words: usize) -> Vec<Vec<&'static str>> {
        CombinationSearch::new(words.iter().copied(), LetterMultiset::of(phrase), max_words)
            .collect()
    }

    #[test]
    fn each_word_set_found_once() {
        let found = search(&["a", "an", "the", "them", "n"], "anthem", usize::MAX);
        assert_eq!(found, vec![vec!["an", "them"], vec!["a", "them", "n"]]);
    }

    #[test]
    fn exclusion_before_inclusion() {
        let found = search(&["ab", "a", "b"], "ab", usize::MAX);
        assert_eq!(found, vec![vec!["a", "b"], vec!["ab"]]);
    }

    #[test]
    fn reuses_words() {
        assert_eq!(search(&["a"], "aa", usize::MAX), vec![vec!["a", "a"]]);
    }

    #[test]
    fn leftover_letters_yield_nothing() {
        assert!(search(&["ab"], "abc", usize::MAX).is_empty());
        assert!(search(&[], "a", usize::MAX).is_empty());
    }

    #[test]
    fn empty_phrase_yields_empty_combination() {
        assert_eq!(search(&["a"], "", usize::MAX), vec![Vec::<&str>::new()]);
    }

    #[test]
    fn empty_words_are_ignored() {
        assert_eq!(search(&["", "a"], "a", usize::MAX), vec![vec!["a"]]);
    }

    #[test]
    fn word_budget_prunes_long_combinations() {
        assert!(search(&["a"], "aaa", 2).is_empty());
        assert_eq!(search(&["a", "aa"], "aaa", 2), vec![vec!["a", "aa"]]);
    }
}
