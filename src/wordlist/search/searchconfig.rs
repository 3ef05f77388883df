use typed_builder::TypedBuilder;

use crate::alphabet::char_len;
use crate::wordlist::search::strategy::Strategy;

/// Longest input, in characters, that is still searched by permutation.
/// The number of arrangements grows factorially past this point.
pub const PERMUTATION_LIMIT: usize = 9;

#[derive(TypedBuilder, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    #[builder(default = PERMUTATION_LIMIT)]
    pub permutation_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig::builder().build()
    }
}

impl SearchConfig {
    pub fn new() -> SearchConfig {
        Default::default()
    }

    pub fn strategy_for(&self, word: &str) -> Strategy {
        if char_len(word) <= self.permutation_limit {
            Strategy::Permutation
        } else {
            Strategy::MultisetScan
        }
    }
}
