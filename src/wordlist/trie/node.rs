use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

pub(crate) type NodeId = usize;

#[derive(Default, Clone, PartialEq, Eq)]
pub(crate) struct TrieNode {
    pub(crate) children: BTreeMap<char, NodeId>,
    pub(crate) is_terminal: bool,
}

impl TrieNode {
    pub(crate) fn get_child(&self, c: char) -> Option<NodeId> {
        self.children.get(&c).copied()
    }

    pub(crate) fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}
