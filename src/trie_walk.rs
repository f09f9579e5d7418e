use log::trace;

use crate::letters::LetterMultiset;
use crate::match_tree::{MatchTree, NodeId};

struct WalkState<'w> {
    node: NodeId,
    remaining: LetterMultiset,
    words: Vec<&'w str>,
}

/// Finds word combinations by walking the match tree one letter at a time.
///
/// Each step consumes one remaining letter. When the letters spell a
/// complete word, the walk splits: one branch records the word and starts
/// over at the root, the other keeps extending the prefix in case it leads to
/// a longer word. Only one branch is tried per distinct remaining letter,
/// since repeated letters lead to identical sub-searches.
///
/// Yields the words of each combination in the order they were completed.
/// Permutations of the same combination may be yielded more than once.
pub struct TrieWalk<'w> {
    tree: MatchTree<'w>,
    stack: Vec<WalkState<'w>>,
    max_words: usize,
}

impl<'w> TrieWalk<'w> {
    pub fn new(tree: MatchTree<'w>, letters: LetterMultiset, max_words: usize) -> Self {
        TrieWalk {
            tree,
            stack: vec![WalkState {
                node: MatchTree::ROOT,
                remaining: letters,
                words: vec![],
            }],
            max_words,
        }
    }
}

impl<'w> Iterator for TrieWalk<'w> {
    type Item = Vec<&'w str>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(state) = self.stack.pop() {
            if state.remaining.is_empty() {
                // A dangling prefix at the end is a dead end.
                if state.node == MatchTree::ROOT {
                    return Some(state.words);
                }
                continue;
            }

            if state.node == MatchTree::ROOT && state.words.len() >= self.max_words {
                continue;
            }

            let branches: Vec<(char, NodeId)> = state
                .remaining
                .symbols()
                .filter_map(|letter| Some((letter, self.tree.child(state.node, letter)?)))
                .collect();

            // Pushed in reverse so the smallest letter is explored first, and
            // within a letter the completed word before the longer prefix.
            for (letter, next_node) in branches.into_iter().rev() {
                let next_remaining = match state.remaining.without_one(letter) {
                    Some(rest) => rest,
                    None => continue,
                };

                let completed = self
                    .tree
                    .terminal(next_node)
                    .filter(|_| state.words.len() < self.max_words);

                if let Some(word) = completed {
                    self.stack.push(WalkState {
                        node: next_node,
                        remaining: next_remaining.clone(),
                        words: state.words.clone(),
                    });

                    trace!("completed {:?} after {:?}", word, state.words);
                    let mut words = state.words.clone();
                    words.push(word);
                    self.stack.push(WalkState {
                        node: MatchTree::ROOT,
                        remaining: next_remaining,
                        words,
                    });
                } else {
                    self.stack.push(WalkState {
                        node: next_node,
                        remaining: next_remaining,
                        words: state.words.clone(),
                    });
                }
            }
        }

        None
    }
}
