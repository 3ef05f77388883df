pub mod alphabet;
pub mod errors;
pub mod logging;
pub mod wordlist;

pub use errors::LoadError;
pub use wordlist::index::Index;
pub use wordlist::search::{search, SearchConfig, SearchOutcome, Strategy, SubsetSearch, WordSearch};
pub use wordlist::trie::Trie;
pub use wordlist::wordlist::{FileFormat, Wordlist};
