use std::fmt::{Debug, Formatter};

use crate::alphabet::{get_idx, letter, ALPHABET};

/// Index of a node in the trie's node table.
pub type NodeIdx = usize;

pub(crate) const ROOT: NodeIdx = 0;

#[derive(Clone, Default, PartialEq, Eq)]
pub(crate) struct TrieNode {
    pub(crate) children: [Option<NodeIdx>; ALPHABET.len()],
    pub(crate) letter: Option<char>,
    pub(crate) is_terminal: bool,
    pub(crate) depth: usize,
}

impl TrieNode {
    pub(crate) fn new(letter: char, depth: usize) -> TrieNode {
        TrieNode {
            children: Default::default(),
            letter: Some(letter),
            is_terminal: false,
            depth,
        }
    }

    pub(crate) fn get_child(&self, c: char) -> Option<NodeIdx> {
        get_idx(c).and_then(|idx| self.children[idx])
    }

    /// Children in alphabet order.
    pub(crate) fn children(&self) -> impl Iterator<Item=(char, NodeIdx)> + '_ {
        self.children.iter()
            .enumerate()
            .filter_map(|(idx, child)| child.map(|node| (letter(idx), node)))
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("letter", &self.letter)
            .field("depth", &self.depth)
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.children().map(|(c, _)| c).collect::<Vec<_>>())
            .finish()
    }
}
