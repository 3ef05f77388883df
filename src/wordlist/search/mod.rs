pub mod searchconfig;
pub mod strategy;
pub mod letter_counts;
pub mod permutation;
pub mod multiset_scan;

mod arrangements;

use std::collections::HashSet;

pub use arrangements::Arrangements;
pub use letter_counts::{is_subset, LetterCounts};
pub use multiset_scan::MultisetScan;
pub use permutation::PermutationSearch;
pub use searchconfig::SearchConfig;
pub use strategy::{search, SearchOutcome, Strategy, SubsetSearch, WordSearch};

/// Drop repeated words, keeping the first occurrence of each in place.
pub fn dedup(words: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    words.into_iter()
        .filter(|w| seen.insert(w.clone()))
        .collect()
}
