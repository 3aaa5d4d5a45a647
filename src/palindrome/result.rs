use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::palindrome::completion::completion_percentage;

/// One visited search state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PalindromeResult {
    pub palindrome: String,
    pub left_part: String,
    pub right_part: String,
    pub is_complete: bool,
    pub depth: usize,
}

impl PalindromeResult {
    pub fn new(left: &str, right: &str, is_complete: bool, depth: usize) -> PalindromeResult {
        PalindromeResult {
            palindrome: format!("{} | {}", left, right),
            left_part: left.to_string(),
            right_part: right.to_string(),
            is_complete,
            depth,
        }
    }

    pub fn completion_percentage(&self) -> u8 {
        completion_percentage(&self.left_part, &self.right_part)
    }
}

impl Display for PalindromeResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}  [{}] depth {} ({}%)",
               self.palindrome,
               if self.is_complete { "complete" } else { "partial" },
               self.depth,
               self.completion_percentage())
    }
}

#[cfg(test)]
mod tests {
    use crate::palindrome::result::PalindromeResult;

    #[test]
    fn renders() {
        let result = PalindromeResult::new("TACO", "TAC", true, 1);
        assert_eq!(result.palindrome, "TACO | TAC");
        assert_eq!(result.to_string(), "TACO | TAC  [complete] depth 1 (0%)");
    }

    #[test]
    fn serializes_camel_case() {
        let result = PalindromeResult::new("AB", "", false, 0);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["leftPart"], "AB");
        assert_eq!(json["rightPart"], "");
        assert_eq!(json["isComplete"], false);
        assert_eq!(json["depth"], 0);
        assert_eq!(json["palindrome"], "AB | ");
    }
}
