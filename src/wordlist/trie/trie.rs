use std::fmt::{Debug, Formatter};

use crate::wordlist::index::Index;
use crate::wordlist::trie::node::{NodeId, TrieNode};

const ROOT: NodeId = 0;

/// Prefix tree over characters. Nodes live in one arena and refer to their
/// children by position; the root (the empty prefix) is always slot 0.
/// Insert-only, so no node is ever removed from the arena.
pub struct Trie {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            nodes: vec![TrieNode::default()],
            words: 0,
        }
    }

    pub fn add(&mut self, word: &str) {
        let mut current = ROOT;
        for c in word.chars() {
            current = self.get_or_create_child(current, c);
        }

        let end = &mut self.nodes[current];
        if !end.is_terminal {
            end.is_terminal = true;
            self.words += 1;
        }
    }

    pub fn add_all<'f, I>(&mut self, items: I)
        where I: IntoIterator<Item=&'f str> {
        items.into_iter().for_each(|x| self.add(x));
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get_node(word)
            .map(|x| x.is_terminal)
            .unwrap_or(false)
    }

    /// True if some inserted word starts with `prefix` (including the word itself).
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.get_node(prefix).is_some()
    }

    /// Number of distinct words inserted.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn get_or_create_child(&mut self, parent: NodeId, c: char) -> NodeId {
        if let Some(child) = self.nodes[parent].get_child(c) {
            return child;
        }
        let child = self.nodes.len();
        self.nodes.push(TrieNode::default());
        self.nodes[parent].children.insert(c, child);
        child
    }

    fn get_node(&self, word: &str) -> Option<&TrieNode> {
        let mut current = ROOT;
        for c in word.chars() {
            current = self.nodes[current].get_child(c)?;
        }
        Some(&self.nodes[current])
    }
}

impl Index for Trie {
    fn add(&mut self, word: &str) {
        Trie::add(self, word)
    }

    fn contains(&self, word: &str) -> bool {
        Trie::contains(self, word)
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        let mut stack = vec![(String::new(), ROOT)];
        while let Some((path, id)) = stack.pop() {
            let node = &self.nodes[id];
            if node.is_terminal {
                l.entry(&path);
            }
            if node.has_children() {
                node.children.iter().rev().for_each(|(c, child)| {
                    let mut next = path.clone();
                    next.push(*c);
                    stack.push((next, *child));
                });
            }
        }
        l.finish()
    }
}
