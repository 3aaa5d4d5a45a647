use derive_new::new;

use crate::alphabet::reverse;
use crate::palindrome::completion::is_complete;
use crate::palindrome::result::PalindromeResult;
use crate::wordlist::wordlist::{DictionaryStats, Wordlist};

/// How many dictionary words `initial_pairs` looks at by default.
pub const DEFAULT_PAIR_LIMIT: usize = 100;

/// A candidate state one word further out than its parent.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Extension {
    pub left: String,
    pub right: String,
}

/// Appends `word` to the left half and its reversal to the front of the right
/// half, separating words with single spaces.
pub fn extend(left: &str, right: &str, word: &str) -> Extension {
    let mut new_left = String::with_capacity(left.len() + word.len() + 1);
    new_left.push_str(left);
    if !left.is_empty() {
        new_left.push(' ');
    }
    new_left.push_str(word);

    let mut new_right = reverse(word);
    if !right.is_empty() {
        new_right.push(' ');
    }
    new_right.push_str(right);

    Extension::new(new_left, new_right)
}

/// Search engine over a fixed dictionary. The word list is never modified once
/// the engine owns it, so one engine can serve any number of searches.
#[derive(Debug, Clone)]
pub struct Palindromer {
    wordlist: Wordlist,
}

impl Palindromer {
    pub fn new(wordlist: Wordlist) -> Palindromer {
        Palindromer { wordlist }
    }

    pub fn from_words<I, S>(words: I) -> Palindromer
        where I: IntoIterator<Item=S>, S: AsRef<str> {
        Palindromer::new(Wordlist::from_words(words))
    }

    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    pub fn stats(&self) -> DictionaryStats {
        self.wordlist.stats()
    }

    /// One extension per dictionary word, in dictionary order.
    pub fn extensions<'a>(&'a self, left: &'a str, right: &'a str)
                          -> impl Iterator<Item=Extension> + 'a {
        self.wordlist.words().iter().map(move |word| extend(left, right, word))
    }

    /// `WORD|DROW` for each of the first `limit` words whose reversal is also a word.
    pub fn initial_pairs(&self, limit: usize) -> Vec<String> {
        self.wordlist.words().iter()
            .take(limit)
            .filter_map(|word| {
                let reversed = reverse(word);
                if self.wordlist.contains(&reversed) {
                    Some(format!("{}|{}", word, reversed))
                } else {
                    None
                }
            })
            .collect()
    }

    /// The same pairs as `initial_pairs`, each scored as a depth 0 state.
    pub fn initial_pair_results(&self, limit: usize) -> Vec<PalindromeResult> {
        self.initial_pairs(limit).iter()
            .filter_map(|pair| pair.split_once('|'))
            .map(|(left, right)| PalindromeResult::new(left, right, is_complete(left, right), 0))
            .collect()
    }
}
