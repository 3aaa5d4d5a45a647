use std::collections::HashMap;

use maplit::hashmap;

use crate::wordlist::trie::node::{NodeIdx, ROOT};
use crate::wordlist::trie::trie::Trie;

impl Trie {
    pub fn contains(&self, word: &str) -> bool {
        self.get_node(word)
            .map(|idx| self.nodes[idx].is_terminal)
            .unwrap_or(false)
    }

    /// True if some stored word starts with `prefix`, the word itself included.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        // every node below the root ends at least one word, since nothing is removed
        self.get_node(prefix).is_some() && !self.is_empty()
    }

    /// All stored words starting with `prefix`, depth first in alphabet order.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut words = vec![];
        if let Some(node) = self.get_node(prefix) {
            let mut path = prefix.to_string();
            self.collect_words(node, &mut path, &mut words);
        }
        words
    }

    /// All stored words that can be spelled with the given letters, each letter
    /// used at most as often as it appears.
    pub fn words_formed_from_letters(&self, letters: &str) -> Vec<String> {
        let mut words = vec![];
        let mut counts = Self::get_counts(letters);
        self.find_words(ROOT, &mut counts, &mut String::new(), &mut words, false);
        words
    }

    /// Stored words that use every one of the given letters exactly once.
    pub fn anagrams(&self, letters: &str) -> Vec<String> {
        let mut words = vec![];
        let mut counts = Self::get_counts(letters);
        self.find_words(ROOT, &mut counts, &mut String::new(), &mut words, true);
        words
    }

    fn collect_words(&self, node: NodeIdx, path: &mut String, words: &mut Vec<String>) {
        let node = &self.nodes[node];
        if node.is_terminal {
            words.push(path.clone());
        }
        for (c, child) in node.children() {
            path.push(c);
            self.collect_words(child, path, words);
            path.pop();
        }
    }

    fn get_counts(letters: &str) -> HashMap<char, usize> {
        let mut counts = hashmap! {};

        letters.chars()
            .map(|c| c.to_ascii_uppercase())
            .filter(|c| c.is_ascii_uppercase())
            .for_each(|c| {
                *counts.entry(c).or_insert(0) += 1;
            });
        counts
    }

    fn find_words(&self,
                  node: NodeIdx,
                  counts: &mut HashMap<char, usize>,
                  path: &mut String,
                  words: &mut Vec<String>,
                  exact: bool) {
        let current = &self.nodes[node];
        if current.is_terminal && !path.is_empty()
            && (!exact || counts.values().all(|x| *x == 0)) {
            words.push(path.clone());
        }

        for (c, child) in current.children() {
            match counts.get_mut(&c) {
                Some(n) if *n > 0 => *n -= 1,
                _ => continue,
            }
            path.push(c);
            self.find_words(child, counts, path, words, exact);
            path.pop();
            *counts.entry(c).or_insert(0) += 1;
        }
    }

    fn get_node(&self, word: &str) -> Option<NodeIdx> {
        let mut current = ROOT;
        for c in word.chars() {
            current = self.nodes[current].get_child(c)?;
        }
        Some(current)
    }
}
