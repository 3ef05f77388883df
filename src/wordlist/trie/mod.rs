pub mod trie;

mod node;

pub use trie::Trie;
