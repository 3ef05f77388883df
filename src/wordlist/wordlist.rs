use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use log::{debug, info};
use typed_builder::TypedBuilder;

use crate::alphabet::normalize;
use crate::errors::LoadError;
use crate::wordlist::search::{SearchConfig, SearchOutcome, WordSearch};
use crate::wordlist::trie::Trie;

/// A loaded dictionary: the trie the permutation search probes and the raw,
/// duplicate-free word list the scan walks, in file order.
#[derive(Default)]
pub struct Wordlist {
    trie: Trie,
    words: Vec<String>,
}

#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
    #[builder(default)]
    lowercase: bool,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str, line_no: usize) -> Result<&'a str, LoadError> {
        match self.delimiter {
            None => Ok(line),
            Some(delimiter) => {
                let column = self.word_column.unwrap_or(0);
                line.split(delimiter)
                    .nth(column)
                    .ok_or(LoadError::MissingColumn { line: line_no, column })
            }
        }
    }
}

impl Wordlist {
    pub fn new() -> Wordlist {
        Default::default()
    }

    pub fn from_file<P: AsRef<Path>>(path: P, format: FileFormat) -> Result<Wordlist, LoadError> {
        let path = path.as_ref();
        info!("Reading words from {:?}", path);

        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), format)
    }

    pub fn from_reader<R: BufRead>(reader: R, format: FileFormat) -> Result<Wordlist, LoadError> {
        let start = Instant::now();
        let mut wordlist = Wordlist::new();
        let mut duplicates: usize = 0;

        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| LoadError::Read { line: i + 1, source })?;
            if line.trim().is_empty() {
                continue;
            }
            let word = normalize(format.parse_line(&line, i + 1)?, format.lowercase);
            if word.is_empty() {
                continue;
            }
            if !wordlist.add(&word) {
                duplicates += 1;
            }
        }

        info!("Read {} words in {:.3}s ({} duplicates skipped, {} trie nodes)",
              wordlist.len(), start.elapsed().as_secs_f64(), duplicates, wordlist.node_count());
        Ok(wordlist)
    }

    pub fn from_words<I, S>(words: I) -> Wordlist
        where I: IntoIterator<Item=S>, S: AsRef<str> {
        let mut wordlist = Wordlist::new();
        words.into_iter().for_each(|w| { wordlist.add(w.as_ref()); });
        wordlist
    }

    /// Add a word unless it is already present. Returns whether it was new.
    pub fn add(&mut self, word: &str) -> bool {
        if self.trie.contains(word) {
            return false;
        }
        self.trie.add(word);
        self.words.push(word.to_string());
        true
    }

    delegate! {
        to self.trie {
            pub fn contains(&self, word: &str) -> bool;
            pub fn has_prefix(&self, prefix: &str) -> bool;
            pub fn node_count(&self) -> usize;
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn searcher(&self, config: SearchConfig) -> WordSearch<'_, Trie> {
        WordSearch::with_config(&self.trie, &self.words, config)
    }

    pub fn search(&self, word: &str) -> Vec<String> {
        self.searcher(SearchConfig::new()).search(word)
    }

    pub fn search_all<'w, I>(&self, words: I, config: SearchConfig) -> Vec<SearchOutcome>
        where I: IntoIterator<Item=&'w str> {
        let searcher = self.searcher(config);
        words.into_iter()
            .map(|w| {
                let start = Instant::now();
                let outcome = searcher.run(w);
                debug!("{:?}: {} matches in {:.3}s", w, outcome.matches.len(), start.elapsed().as_secs_f64());
                outcome
            })
            .collect()
    }

    /// Distinct words, for checking that the raw list has no repeats.
    pub fn distinct(&self) -> HashSet<&str> {
        self.words.iter().map(|x| x.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::errors::LoadError;
    use crate::wordlist::search::{SearchConfig, Strategy};
    use crate::wordlist::wordlist::{FileFormat, Wordlist};

    #[test]
    fn loads_one_word_per_line() {
        let data = "cat\r\nat\n\na\nact\r\nac\n";
        let wl = Wordlist::from_reader(Cursor::new(data), FileFormat::builder().build()).unwrap();

        assert_eq!(wl.words(), &["cat", "at", "a", "act", "ac"]);
        assert!(wl.contains("act"));
        assert!(!wl.contains("ca"));
        assert!(wl.has_prefix("ca"));
    }

    #[test]
    fn skips_duplicate_lines() {
        let data = "tree\ntree\nTree\n";
        let wl = Wordlist::from_reader(Cursor::new(data), FileFormat::builder().lowercase(true).build()).unwrap();

        assert_eq!(wl.words(), &["tree"]);
        assert_eq!(wl.distinct().len(), wl.len());
        assert_eq!(wl.trie().len(), 1);
    }

    #[test]
    fn picks_configured_column() {
        let data = "1\tcat\n2\tdog\n";
        let format = FileFormat::builder().delimiter('\t').word_column(1).build();
        let wl = Wordlist::from_reader(Cursor::new(data), format).unwrap();

        assert_eq!(wl.words(), &["cat", "dog"]);
    }

    #[test]
    fn missing_column_is_an_error() {
        let data = "cat,1\ndog\n";
        let format = FileFormat::builder().delimiter(',').word_column(1).build();
        let err = Wordlist::from_reader(Cursor::new(data), format).err().unwrap();

        assert!(matches!(err, LoadError::MissingColumn { line: 2, column: 1 }));
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let data: &[u8] = b"cat\n\xff\xfe\n";
        let err = Wordlist::from_reader(Cursor::new(data), FileFormat::builder().build()).err().unwrap();

        assert!(matches!(err, LoadError::Read { line: 2, .. }));
    }

    #[test]
    fn missing_file_fails_fast() {
        let err = Wordlist::from_file("/definitely/not/a/dictionary.txt", FileFormat::builder().build())
            .err().unwrap();

        assert!(matches!(err, LoadError::Open { .. }));
        assert!(err.to_string().contains("dictionary.txt"));
    }

    #[test]
    fn searches_each_input_word() {
        let wl = Wordlist::from_words(vec!["cat", "at", "a", "act", "ac", "dog", "god", "go", "writer", "type"]);
        let outcomes = wl.search_all(vec!["cat", "dog", "typewriter"], SearchConfig::new());

        assert_eq!(outcomes[0].matches, vec!["a", "ac", "at", "cat", "act"]);
        assert_eq!(outcomes[1].matches, vec!["go", "dog", "god"]);
        assert_eq!(outcomes[2].strategy, Strategy::MultisetScan);
        assert_eq!(outcomes[2].matches, vec!["writer", "type"]);
        assert_eq!(wl.search("cat"), outcomes[0].matches);
    }
}
