
pub const ALPHABET : &[u8] = "ABCDEFGHIJKLMNOPQRSTUVWXYZ".as_bytes();

pub fn get_idx(a: char) -> Option<usize> {
    if a.is_ascii_uppercase() {
        Some((a as u8 - b'A') as usize)
    } else {
        None
    }
}

pub fn letter(idx: usize) -> char {
    ALPHABET[idx] as char
}

/// Trims and uppercases a raw dictionary entry. Entries that end up empty or
/// contain anything outside A-Z are rejected.
pub fn normalize_word(s: &str) -> Option<String> {
    let word = s.trim().to_ascii_uppercase();
    if word.is_empty() || !word.chars().all(|c| get_idx(c).is_some()) {
        return None;
    }
    Some(word)
}

pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}
