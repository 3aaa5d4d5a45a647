use std::fmt::{Debug, Formatter};

use crate::alphabet::{get_idx, normalize_word};
use crate::wordlist::trie::node::{NodeIdx, TrieNode, ROOT};

/// Prefix dictionary over the A-Z alphabet.
///
/// Nodes live in a single table and refer to their children by index, so the
/// whole structure has one owner and no interior mutability. Words are only
/// ever added; there is no removal.
#[derive(Clone, PartialEq, Eq)]
pub struct Trie {
    pub(crate) nodes: Vec<TrieNode>,
    len: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            nodes: vec![TrieNode::default()],
            len: 0,
        }
    }

    /// Builds a trie from raw entries. Entries are trimmed and uppercased;
    /// anything that is empty or not purely A-Z afterwards is skipped.
    pub fn build<I, S>(words: I) -> Trie
        where I: IntoIterator<Item=S>, S: AsRef<str> {
        let mut trie = Trie::new();
        words.into_iter()
            .filter_map(|w| normalize_word(w.as_ref()))
            .for_each(|w| { trie.insert(&w); });
        trie
    }

    /// Inserts an already normalized word. Returns true if the word was not
    /// present before; inserting a word twice changes nothing.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() || !word.chars().all(|c| get_idx(c).is_some()) {
            return false;
        }
        let mut current = ROOT;
        for c in word.chars() {
            current = self.get_or_create_child(current, c);
        }

        let end = &mut self.nodes[current];
        if end.is_terminal {
            return false;
        }
        end.is_terminal = true;
        self.len += 1;
        true
    }

    fn get_or_create_child(&mut self, parent: NodeIdx, c: char) -> NodeIdx {
        if let Some(child) = self.nodes[parent].get_child(c) {
            return child;
        }
        let idx = self.nodes.len();
        let depth = self.nodes[parent].depth + 1;
        self.nodes.push(TrieNode::new(c, depth));
        if let Some(slot) = get_idx(c) {
            self.nodes[parent].children[slot] = Some(idx);
        }
        idx
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        let mut stack = vec![ROOT];
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx];
            l.entry(node);
            let mut children: Vec<NodeIdx> = node.children().map(|(_, child)| child).collect();
            children.reverse();
            stack.extend(children);
        }
        l.finish()
    }
}
