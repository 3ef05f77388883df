use std::collections::HashMap;

use maplit::hashmap;

/// Character multiset with signed counts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterCounts {
    counts: HashMap<char, isize>,
}

impl LetterCounts {
    pub fn of(word: &str) -> LetterCounts {
        let mut counts = hashmap! {};

        word.chars().for_each(|c| {
            *counts.entry(c).or_insert(0) += 1;
        });
        LetterCounts { counts }
    }

    pub fn get(&self, c: char) -> isize {
        *self.counts.get(&c).unwrap_or(&0)
    }

    /// Remove every count in `other` from this multiset. Counts may go negative.
    pub fn subtract(&mut self, other: &LetterCounts) {
        other.counts.iter().for_each(|(c, n)| {
            *self.counts.entry(*c).or_insert(0) -= n;
        });
    }

    /// True if no character is left with a strictly positive count.
    pub fn is_exhausted(&self) -> bool {
        self.counts.values().all(|n| *n <= 0)
    }

    /// True if every character of `self` occurs at most as often in `base`.
    pub fn fits_within(&self, base: &LetterCounts) -> bool {
        self.counts.iter().all(|(c, n)| *n <= base.get(*c))
    }
}

/// True if `search` can be spelled with the letters of `base`, each used at
/// most as many times as it appears there.
pub fn is_subset(search: &str, base: &str) -> bool {
    let mut remaining = LetterCounts::of(search);
    remaining.subtract(&LetterCounts::of(base));
    remaining.is_exhausted()
}
