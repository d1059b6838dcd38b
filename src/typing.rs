use tracing::debug;

use crate::trie::Trie;

/// What a single keystroke did to a [`TypingSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keystroke<T> {
    /// The typed text is still a prefix of some stored word.
    Extended,
    /// No stored word starts with the typed text, so it was discarded.
    Reset,
    /// The typed text matched a word exactly. The word has been removed from
    /// the trie and its payload handed back.
    Completed { word: String, payload: T },
}

/// Narrows the words of a [`Trie`] down as the player types.
///
/// Every keystroke is appended to the text typed so far. Text that no
/// longer prefixes a stored word is thrown away, and text that exactly
/// matches one completes that word.
///
/// # Examples
///
/// ```
/// use wordtrie::{Keystroke, Trie, TypingSession};
///
/// let mut obstacles = Trie::new();
/// obstacles.add("car", 1).unwrap();
/// obstacles.add("cat", 2).unwrap();
///
/// let mut session = TypingSession::new();
/// assert_eq!(session.push(&mut obstacles, 'c'), Keystroke::Extended);
/// assert_eq!(session.push(&mut obstacles, 'a'), Keystroke::Extended);
/// assert_eq!(
///     session.push(&mut obstacles, 't'),
///     Keystroke::Completed { word: "cat".into(), payload: 2 }
/// );
/// assert_eq!(session.completed(), 1);
/// assert!(!obstacles.contains_prefix("cat"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypingSession {
    current: String,
    completed: usize,
}

impl TypingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text typed since the last reset or completion.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Number of words completed so far.
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Discards the text typed so far.
    pub fn reset(&mut self) {
        self.current.clear();
    }

    /// Feeds one typed character against `trie`.
    pub fn push<T>(&mut self, trie: &mut Trie<T>, c: char) -> Keystroke<T> {
        self.current.push(c);

        if !trie.contains_prefix(self.current.as_str()) {
            debug!(typed = %self.current, "no word starts with typed text");
            self.current.clear();
            return Keystroke::Reset;
        }

        if trie.contains(self.current.as_str()) {
            match trie.remove(self.current.as_str()) {
                Ok(payload) => {
                    let word = std::mem::take(&mut self.current);
                    self.completed += 1;
                    debug!(%word, completed = self.completed, "word completed");
                    return Keystroke::Completed { word, payload };
                }
                Err(err) => debug!(%err, "typed word could not be removed"),
            }
        }

        Keystroke::Extended
    }
}
