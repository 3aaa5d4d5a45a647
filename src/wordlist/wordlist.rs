use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use serde::Serialize;
use tracing::{debug, info};
use typed_builder::TypedBuilder;

use crate::alphabet::normalize_word;
use crate::error::LoadError;
use crate::wordlist::trie::Trie;

/// Words used when no dictionary file is available.
const FALLBACK_WORDS: &[&str] = &[
    "A", "I", "AM", "AN", "AS", "AT", "BE", "BY", "DO", "GO", "HE", "IF", "IN", "IS", "IT", "ME",
    "MY", "NO", "OF", "ON", "OR", "SO", "TO", "UP", "US", "WE", "ALL", "AND", "ANY", "ARE", "BUT",
    "CAN", "FOR", "GET", "HAD", "HAS", "HER", "HIM", "HIS", "HOW", "ITS", "MAY", "NEW", "NOT",
    "NOW", "OLD", "ONE", "OUR", "OUT", "SAW", "SAY", "SHE", "THE", "TWO", "WAY", "WHO", "WAS",
    "YOU",
];

/// The normalized dictionary: the trie for lookups plus the words in the order
/// they were first seen, which is the order extensions are tried in.
#[derive(Debug, Clone, Default)]
pub struct Wordlist {
    words: Vec<String>,
    trie: Trie,
}

#[derive(TypedBuilder)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.delimiter {
            None => Some(line),
            Some(delimiter) => line.split(delimiter).nth(self.word_column.unwrap_or(0)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryStats {
    pub word_count: usize,
    pub avg_length: f64,
    pub max_length: usize,
}

impl Wordlist {
    pub fn new() -> Wordlist {
        Default::default()
    }

    pub fn from_words<I, S>(items: I) -> Wordlist
        where I: IntoIterator<Item=S>, S: AsRef<str> {
        let mut wl = Wordlist::new();
        wl.add_all(items);
        wl
    }

    pub fn fallback() -> Wordlist {
        Wordlist::from_words(FALLBACK_WORDS)
    }

    pub fn from_file(filename: &Path, format: &FileFormat) -> Result<Wordlist, LoadError> {
        info!(file = ?filename, "reading words");

        let file = File::open(filename).map_err(|source| LoadError::Io {
            path: filename.to_path_buf(),
            source,
        })?;
        let buf_reader = BufReader::new(file);

        let start = Instant::now();
        let mut wl = Wordlist::new();
        let mut skipped: usize = 0;

        for (line_no, line) in buf_reader.lines().enumerate() {
            let line = line.map_err(|source| LoadError::Io {
                path: filename.to_path_buf(),
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let word = format.parse_line(&line).ok_or_else(|| LoadError::Format {
                line: line_no + 1,
                message: format!("no column {}", format.word_column.unwrap_or(0)),
            })?;
            if !wl.add(word) {
                skipped += 1;
            }
        }

        info!(words = wl.len(), skipped, elapsed_ms = start.elapsed().as_millis() as u64,
              "loaded dictionary");
        Ok(wl)
    }

    /// Normalizes and adds one entry. Returns false if the entry was rejected or
    /// already present.
    pub fn add(&mut self, raw: &str) -> bool {
        match normalize_word(raw) {
            Some(word) if self.trie.insert(&word) => {
                self.words.push(word);
                true
            }
            Some(word) => {
                debug!(%word, "duplicate word");
                false
            }
            None => false,
        }
    }

    pub fn add_all<I, S>(&mut self, items: I)
        where I: IntoIterator<Item=S>, S: AsRef<str> {
        items.into_iter().for_each(|x| { self.add(x.as_ref()); });
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    delegate! {
        to self.trie {
            pub fn contains(&self, word: &str) -> bool;
            pub fn has_prefix(&self, prefix: &str) -> bool;
            pub fn words_with_prefix(&self, prefix: &str) -> Vec<String>;
            pub fn words_formed_from_letters(&self, letters: &str) -> Vec<String>;
            pub fn anagrams(&self, letters: &str) -> Vec<String>;
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
        }
    }

    pub fn stats(&self) -> DictionaryStats {
        if self.words.is_empty() {
            return DictionaryStats { word_count: 0, avg_length: 0.0, max_length: 0 };
        }
        let total: usize = self.words.iter().map(|w| w.len()).sum();
        let avg = total as f64 / self.words.len() as f64;
        DictionaryStats {
            word_count: self.words.len(),
            avg_length: (avg * 100.0).round() / 100.0,
            max_length: self.words.iter().map(|w| w.len()).max().unwrap_or(0),
        }
    }
}
