pub mod trie;
pub mod index;
pub mod search;
pub mod wordlist;
