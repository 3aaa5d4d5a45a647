use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::PalindromeError;

pub const SEPARATOR: char = '|';

/// The starting `(left, right)` fragments of a search. Both halves are trimmed
/// and uppercased, and at least one of them holds text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    left: String,
    right: String,
}

impl Seed {
    pub fn new(left: &str, right: &str) -> Result<Seed, PalindromeError> {
        let left = left.trim().to_uppercase();
        let right = right.trim().to_uppercase();
        if left.is_empty() && right.is_empty() {
            return Err(PalindromeError::InvalidInput(
                "at least one side must contain text".to_string()));
        }
        Ok(Seed { left, right })
    }

    /// Splits `LEFT|RIGHT` on its single separator.
    pub fn parse(input: &str) -> Result<Seed, PalindromeError> {
        let parts: Vec<&str> = input.split(SEPARATOR).collect();
        match parts.as_slice() {
            [_] => Err(PalindromeError::InvalidInput(
                format!("input must contain a {} separator", SEPARATOR))),
            [left, right] => Seed::new(left, right),
            _ => Err(PalindromeError::InvalidInput(
                format!("input must contain exactly one {} separator", SEPARATOR))),
        }
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn right(&self) -> &str {
        &self.right
    }
}

impl FromStr for Seed {
    type Err = PalindromeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Seed::parse(s)
    }
}

impl Display for Seed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.left, SEPARATOR, self.right)
    }
}

/// Uppercases raw user text and drops everything but letters and the separator.
pub fn clean_input(input: &str) -> String {
    input.trim()
        .to_ascii_uppercase()
        .chars()
        .filter(|&c| c.is_ascii_uppercase() || c == SEPARATOR)
        .collect()
}
