use derive_new::new;

use crate::alphabet::char_len;
use crate::wordlist::search::letter_counts::LetterCounts;
use crate::wordlist::search::strategy::{Strategy, SubsetSearch};

/// One pass over the raw dictionary, keeping each word whose letters fit
/// inside the input's letters. Cost is independent of the input's length.
#[derive(new)]
pub struct MultisetScan<'a> {
    words: &'a [String],
}

impl<'a> SubsetSearch for MultisetScan<'a> {
    fn strategy(&self) -> Strategy {
        Strategy::MultisetScan
    }

    fn search(&self, word: &str) -> Vec<String> {
        let n = char_len(word);
        let base = LetterCounts::of(word);

        self.words.iter()
            .filter(|w| char_len(w) <= n)
            .filter(|w| LetterCounts::of(w).fits_within(&base))
            .cloned()
            .collect()
    }
}
