pub const ALPHABET: &[u8] = "abcdefghijklmnopqrstuvwxyz".as_bytes();

pub fn get_idx(a: char) -> Option<usize> {
    if a.is_ascii_lowercase() {
        Some((a as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Inverse of [`get_idx`]. `idx` must be below `ALPHABET.len()`.
pub fn letter(idx: usize) -> char {
    ALPHABET[idx] as char
}

pub fn is_valid_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| get_idx(c).is_some())
}

pub fn normalize(s: &str) -> String {
    s.trim().to_ascii_lowercase()
}
