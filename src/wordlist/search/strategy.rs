use std::fmt::{Display, Formatter};

use derive_new::new;
use log::debug;
use metrics::increment_counter;
use serde::Serialize;

use crate::wordlist::index::Index;
use crate::wordlist::search::multiset_scan::MultisetScan;
use crate::wordlist::search::permutation::PermutationSearch;
use crate::wordlist::search::searchconfig::SearchConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Permutation,
    MultisetScan,
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Permutation => write!(f, "permutation"),
            Strategy::MultisetScan => write!(f, "multiset scan"),
        }
    }
}

/// Finds the dictionary words that can be spelled from a subset of a
/// word's letters.
pub trait SubsetSearch {
    fn strategy(&self) -> Strategy;
    fn search(&self, word: &str) -> Vec<String>;
}

#[derive(new, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub word: String,
    pub strategy: Strategy,
    pub matches: Vec<String>,
}

/// Routes each input word to one of the two strategies by its length.
///
/// `index` and `words` should describe the same dictionary: the permutation
/// strategy only sees `index`, the scan only sees `words`.
pub struct WordSearch<'a, I: Index + ?Sized> {
    permutation: PermutationSearch<'a, I>,
    scan: MultisetScan<'a>,
    config: SearchConfig,
}

impl<'a, I: Index + ?Sized> WordSearch<'a, I> {
    pub fn new(index: &'a I, words: &'a [String]) -> Self {
        Self::with_config(index, words, SearchConfig::new())
    }

    pub fn with_config(index: &'a I, words: &'a [String], config: SearchConfig) -> Self {
        WordSearch {
            permutation: PermutationSearch::new(index),
            scan: MultisetScan::new(words),
            config,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn select(&self, word: &str) -> &dyn SubsetSearch {
        match self.config.strategy_for(word) {
            Strategy::Permutation => &self.permutation,
            Strategy::MultisetScan => &self.scan,
        }
    }

    pub fn run(&self, word: &str) -> SearchOutcome {
        let strategy = self.select(word);
        debug!("Searching {:?} with {} strategy", word, strategy.strategy());
        match strategy.strategy() {
            Strategy::Permutation => increment_counter!("subset_search.permutation"),
            Strategy::MultisetScan => increment_counter!("subset_search.multiset_scan"),
        }
        SearchOutcome::new(word.to_string(), strategy.strategy(), strategy.search(word))
    }

    pub fn search(&self, word: &str) -> Vec<String> {
        self.run(word).matches
    }
}

/// Words from the dictionary that can be spelled with `input`'s letters,
/// using the default threshold between the two strategies.
pub fn search<I: Index + ?Sized>(input: &str, index: &I, raw_words: &[String]) -> Vec<String> {
    WordSearch::new(index, raw_words).search(input)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use maplit::hashset;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::wordlist::search::multiset_scan::MultisetScan;
    use crate::wordlist::search::permutation::PermutationSearch;
    use crate::wordlist::search::searchconfig::SearchConfig;
    use crate::wordlist::search::strategy::{search, Strategy, SubsetSearch, WordSearch};
    use crate::wordlist::trie::Trie;

    fn dictionary(words: &[&str]) -> (Trie, Vec<String>) {
        let mut trie = Trie::new();
        trie.add_all(words.iter().copied());
        (trie, words.iter().map(|x| x.to_string()).collect())
    }

    fn as_set(words: &[String]) -> HashSet<String> {
        words.iter().cloned().collect()
    }

    #[test]
    fn end_to_end_cat() {
        let (trie, words) = dictionary(&["cat", "at", "a", "act", "ac"]);
        let results = search("cat", &trie, &words);

        assert_eq!(as_set(&results), hashset! {
            "a".to_string(), "at".to_string(), "act".to_string(), "cat".to_string(), "ac".to_string()
        });
        assert_eq!(results.len(), 5);
        assert_eq!(results[0], "a");
    }

    #[test]
    fn empty_input_is_empty_result() {
        let (trie, words) = dictionary(&["", "a", "cat"]);
        let outcome = WordSearch::new(&trie, &words).run("");

        assert_eq!(outcome.strategy, Strategy::Permutation);
        assert!(outcome.matches.is_empty());
    }

    #[test]
    fn nine_letters_permute_ten_letters_scan() {
        // The index and the raw list disagree, so the result shows which one was consulted.
        let mut trie = Trie::new();
        trie.add("a");
        let words = vec!["b".to_string()];
        let search = WordSearch::new(&trie, &words);

        let nine = search.run("abcdefghi");
        assert_eq!(nine.strategy, Strategy::Permutation);
        assert_eq!(nine.matches, vec!["a"]);

        let ten = search.run("abcdefghij");
        assert_eq!(ten.strategy, Strategy::MultisetScan);
        assert_eq!(ten.matches, vec!["b"]);
    }

    #[test]
    fn configured_threshold_moves_the_boundary() {
        let mut trie = Trie::new();
        trie.add("a");
        let words = vec!["b".to_string()];
        let config = SearchConfig::builder().permutation_limit(1).build();
        let search = WordSearch::with_config(&trie, &words, config);

        assert_eq!(search.search("ab"), vec!["b"]);
        assert_eq!(search.search("a"), vec!["a"]);
        assert_eq!(search.config().permutation_limit, 1);
    }

    #[test]
    fn strategies_agree_on_fixed_words() {
        let (trie, words) = dictionary(&[
            "cat", "dog", "god", "do", "go", "museum", "sum", "use", "muse", "mum", "me",
            "tree", "tee", "retreat", "eat", "tea", "ate", "a", "mouse", "seem",
        ]);
        for input in ["cat", "dog", "museum", "tree", "teeter", "aemstu", ""] {
            let permuted = PermutationSearch::new(&trie).search(input);
            let scanned = MultisetScan::new(&words).search(input);
            assert_eq!(as_set(&permuted), as_set(&scanned), "{}", input);
        }
    }

    #[test]
    fn strategies_agree_on_random_dictionaries() {
        let mut rng = StdRng::seed_from_u64(2019);
        let alphabet: Vec<char> = "abcde".chars().collect();
        let random_word = |rng: &mut StdRng, max: usize| -> String {
            let len = rng.gen_range(1..=max);
            (0..len).map(|_| alphabet[rng.gen_range(0..alphabet.len())]).collect()
        };

        for _ in 0..20 {
            let mut trie = Trie::new();
            let mut words: Vec<String> = vec![];
            for _ in 0..200 {
                let word = random_word(&mut rng, 6);
                if !trie.contains(&word) {
                    trie.add(&word);
                    words.push(word);
                }
            }
            for _ in 0..5 {
                let input = random_word(&mut rng, 6);
                let permuted = PermutationSearch::new(&trie).search(&input);
                let scanned = MultisetScan::new(&words).search(&input);
                assert_eq!(as_set(&permuted), as_set(&scanned), "{}", input);
                assert_eq!(as_set(&permuted).len(), permuted.len());
            }
        }
    }

    #[test]
    fn long_input_scans_dictionary() {
        let (trie, words) = dictionary(&["photo", "synthesis", "zoo", "hiss", "photosynthesis", "tophats"]);
        let outcome = WordSearch::new(&trie, &words).run("photosynthesis");

        assert_eq!(outcome.strategy, Strategy::MultisetScan);
        assert_eq!(outcome.matches, vec!["photo", "synthesis", "hiss", "photosynthesis"]);
    }

    #[test]
    fn outcome_serializes_as_json() {
        let (trie, words) = dictionary(&["at"]);
        let outcome = WordSearch::new(&trie, &words).run("cat");
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"word":"cat","strategy":"permutation","matches":["at"]}"#);
    }
}
