use std::io::{self, BufRead};

use tracing::debug;

/// Reads a word list, one word per line.
///
/// Surrounding whitespace is trimmed and blank lines are skipped. Words are
/// returned as-is; whether each one fits the trie alphabet is checked when it
/// is added.
///
/// # Examples
///
/// ```
/// let words = wordtrie::load_words("apple\n\n  pear \n".as_bytes()).unwrap();
/// assert_eq!(words, vec!["apple", "pear"]);
/// ```
pub fn load_words<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_owned());
        }
    }
    debug!(count = words.len(), "loaded word list");
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Trie;

    #[test]
    fn test_crlf_and_blank_lines() {
        let words = load_words("road\r\ncar\r\n\r\n\tbuilding\n".as_bytes()).unwrap();
        assert_eq!(words, vec!["road", "car", "building"]);
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let bytes: &[u8] = b"ok\n\xff\xfe\n";
        let err = load_words(bytes).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_loaded_words_feed_a_trie() {
        let words = load_words("lamp\nlamps\n\u{263a}\nlemon\n".as_bytes()).unwrap();
        let trie: Trie<usize> = words
            .iter()
            .enumerate()
            .map(|(i, word)| (word.as_str(), i))
            .collect();
        assert_eq!(trie.size(), 3);
        assert!(trie.contains("lamps"));
        assert!(trie.contains("lemon"));
    }
}
