use thiserror::Error;

/// Errors returned by the fallible [`Trie`](crate::Trie) operations.
///
/// None of them leave the trie partially modified, so callers are free to
/// log and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrieError {
    /// The word is empty or contains a character outside `U+0000..=U+00FF`.
    #[error("`{0}` is an invalid string")]
    InvalidString(String),
    /// A path for the word already exists in the trie.
    #[error("`{0}` already exists")]
    StringExists(String),
    /// The word is not stored, or is not reachable by exact match.
    #[error("`{0}` was not found")]
    StringNotFound(String),
}

impl TrieError {
    /// The word the failed operation was called with.
    pub fn word(&self) -> &str {
        match self {
            TrieError::InvalidString(word)
            | TrieError::StringExists(word)
            | TrieError::StringNotFound(word) => word,
        }
    }

    pub fn is_invalid_string(&self) -> bool {
        matches!(self, TrieError::InvalidString(_))
    }

    pub fn is_string_exists(&self) -> bool {
        matches!(self, TrieError::StringExists(_))
    }

    pub fn is_string_not_found(&self) -> bool {
        matches!(self, TrieError::StringNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_word() {
        assert_eq!(
            TrieError::InvalidString("ab\u{263a}".into()).to_string(),
            "`ab\u{263a}` is an invalid string"
        );
        assert_eq!(
            TrieError::StringExists("cat".into()).to_string(),
            "`cat` already exists"
        );
        assert_eq!(
            TrieError::StringNotFound("dog".into()).to_string(),
            "`dog` was not found"
        );
    }

    #[test]
    fn test_word_and_predicates() {
        let err = TrieError::StringNotFound("dog".into());
        assert_eq!(err.word(), "dog");
        assert!(err.is_string_not_found());
        assert!(!err.is_string_exists());
        assert!(!err.is_invalid_string());
    }
}
