use crate::alphabet::{reverse, strip_whitespace};

/// Whitespace is ignored.
pub fn is_palindrome(text: &str) -> bool {
    let cleaned: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

/// The halves read as a palindrome once the right half is reversed and
/// appended to the left one.
pub fn is_complete(left: &str, right: &str) -> bool {
    let mut joined = strip_whitespace(left);
    joined.push_str(&reverse(&strip_whitespace(right)));
    is_palindrome(&joined)
}

/// How far the end of the left half already mirrors the reversed right half,
/// as a rounded percentage of the longer of the two.
pub fn completion_percentage(left: &str, right: &str) -> u8 {
    let left: Vec<char> = strip_whitespace(left).chars().collect();
    let right_reversed: Vec<char> = strip_whitespace(right).chars().rev().collect();
    if left.is_empty() || right_reversed.is_empty() {
        return 0;
    }

    let matches = left.iter().rev()
        .zip(right_reversed.iter())
        .take_while(|(l, r)| l == r)
        .count();
    let longest = left.len().max(right_reversed.len());
    (matches as f64 / longest as f64 * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use crate::palindrome::completion::{completion_percentage, is_complete, is_palindrome};

    #[test]
    fn detects_palindromes() {
        assert!(is_palindrome("RACECAR"));
        assert!(is_palindrome("NO ON"));
        assert!(is_palindrome(""));
        assert!(is_palindrome("X"));
        assert!(!is_palindrome("WAS SAWX"));
    }

    #[test]
    fn complete_pairs() {
        // TACO + CAT
        assert!(is_complete("TACO", "TAC"));
        // AB + BA
        assert!(is_complete("AB", "AB"));
        // NEVERODD + OREVEN
        assert!(is_complete("NEVER ODD", "NEVER O"));
        assert!(is_complete("A", ""));
    }

    #[test]
    fn incomplete_pairs() {
        // WAS + WAS
        assert!(!is_complete("WAS", "SAW"));
        // AB + B
        assert!(!is_complete("AB", "B"));
        assert!(!is_complete("STEP ON", "NO PETS"));
    }

    #[test]
    fn percentage() {
        assert_eq!(completion_percentage("", "ABC"), 0);
        assert_eq!(completion_percentage("ABC", ""), 0);
        // C matches C, B matches B, A against X stops
        assert_eq!(completion_percentage("ABC", "XBC"), 67);
        assert_eq!(completion_percentage("AB", "AB"), 100);
        assert_eq!(completion_percentage("STEP ON", "ON"), 33);
        assert_eq!(completion_percentage("STEP ON", "NO"), 0);
    }
}
