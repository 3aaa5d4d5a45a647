//! Grows palindromic phrases outward from a `LEFT|RIGHT` seed, one dictionary
//! word per step, using either an exhaustive or a sampled depth-first search.
//!
//! - [`wordlist`] holds the normalized dictionary and its prefix trie.
//! - [`palindrome`] holds the search engine and its options.

pub mod alphabet;
pub mod error;
pub mod palindrome;
pub mod wordlist;

pub use error::{LoadError, PalindromeError};
pub use palindrome::cancel::CancelToken;
pub use palindrome::palindromer::Palindromer;
pub use palindrome::result::PalindromeResult;
pub use palindrome::searchconfig::{Algorithm, SearchOptions};
pub use palindrome::seed::Seed;
pub use wordlist::trie::Trie;
pub use wordlist::wordlist::{FileFormat, Wordlist};
