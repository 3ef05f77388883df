use derive_new::new;
use metrics::counter;

use crate::wordlist::index::Index;
use crate::wordlist::search::arrangements::Arrangements;
use crate::wordlist::search::dedup;
use crate::wordlist::search::strategy::{Strategy, SubsetSearch};

/// Tries every arrangement of every length of the input's letters against
/// an index. Only practical for short inputs.
#[derive(new)]
pub struct PermutationSearch<'a, I: Index + ?Sized> {
    index: &'a I,
}

impl<'a, I: Index + ?Sized> SubsetSearch for PermutationSearch<'a, I> {
    fn strategy(&self) -> Strategy {
        Strategy::Permutation
    }

    fn search(&self, word: &str) -> Vec<String> {
        let letters: Vec<char> = word.chars().collect();
        let mut results = vec![];
        let mut probed: u64 = 0;

        for k in 1..=letters.len() {
            for candidate in Arrangements::new(&letters, k) {
                let candidate: String = candidate.into_iter().collect();
                probed += 1;
                if self.index.contains(&candidate) {
                    results.push(candidate);
                }
            }
        }
        counter!("subset_search.candidates_probed", probed);

        dedup(results)
    }
}
