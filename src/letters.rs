use std::collections::BTreeMap;

use crate::error::{AnagramError, Result};

/// A bag of letters: each symbol mapped to how many times it occurs.
///
/// Symbols with a count of zero are never stored, so two multisets holding
/// the same letters always compare equal. Values are immutable; every
/// operation that takes letters away returns a new multiset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LetterMultiset {
    counts: BTreeMap<char, usize>,
    total: usize,
}

impl LetterMultiset {
    pub fn of(text: &str) -> Self {
        let mut counts = BTreeMap::new();
        let mut total = 0;
        for c in text.chars() {
            *counts.entry(c).or_insert(0) += 1;
            total += 1;
        }
        LetterMultiset { counts, total }
    }

    pub fn count(&self, symbol: char) -> usize {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Total number of letters, duplicates included.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// The distinct symbols present, in ascending order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.counts.keys().copied()
    }

    pub fn is_subset_of(&self, other: &LetterMultiset) -> bool {
        self.total <= other.total
            && self
                .counts
                .iter()
                .all(|(&symbol, &count)| count <= other.count(symbol))
    }

    /// Returns `self` with every letter of `other` taken away.
    ///
    /// Fails with [`AnagramError::NotSubset`] unless `other` is a subset of
    /// `self`; counts are never clamped at zero.
    pub fn subtract(&self, other: &LetterMultiset) -> Result<LetterMultiset> {
        if !other.is_subset_of(self) {
            return Err(AnagramError::NotSubset);
        }

        let mut counts = self.counts.clone();
        for (symbol, &count) in &other.counts {
            if let Some(left) = counts.get_mut(symbol) {
                *left -= count;
                if *left == 0 {
                    counts.remove(symbol);
                }
            }
        }

        Ok(LetterMultiset {
            counts,
            total: self.total - other.total,
        })
    }

    /// Returns a copy with one occurrence of `symbol` removed, or `None` if
    /// `symbol` is absent.
    pub fn without_one(&self, symbol: char) -> Option<LetterMultiset> {
        let mut counts = self.counts.clone();
        match counts.get_mut(&symbol) {
            Some(n) if *n > 1 => *n -= 1,
            Some(_) => {
                counts.remove(&symbol);
            }
            None => return None,
        }
        Some(LetterMultiset {
            counts,
            total: self.total - 1,
        })
    }
}
