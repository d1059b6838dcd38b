use tracing::{debug, warn};

use crate::config::TrieConfig;
use crate::error::TrieError;
use crate::iter::{Order, Words};
use crate::node::{NodeRef, ROOT};
use crate::node_pool::NodePool;
use crate::word::Word;
use crate::Result;

/// A prefix tree holding a vocabulary of words, each with a payload.
///
/// Words are sequences of symbols from a 256-letter alphabet (see [`Word`]).
/// Every stored word owns the path from the root to its last symbol, and
/// words sharing a prefix share the nodes of that prefix.
///
/// Exact-match queries are structural: [`contains`](Trie::contains) reports
/// a word only while its last node has no children. Once a longer word is
/// added through it, the shorter one is still stored and still reachable
/// with [`find`](Trie::find), but no longer matches exactly.
///
/// # Examples
///
/// ```
/// use wordtrie::Trie;
///
/// let mut trie = Trie::new();
/// trie.add("cat", 1).unwrap();
/// trie.add("car", 2).unwrap();
///
/// assert!(trie.contains("cat"));
/// assert!(trie.contains_prefix("ca"));
/// assert!(!trie.contains("ca"));
/// assert_eq!(trie.find("car"), Ok(&2));
///
/// // "cats" extends "cat", so "cat" stops matching exactly
/// trie.add("cats", 3).unwrap();
/// assert!(!trie.contains("cat"));
/// assert_eq!(trie.find("cat"), Ok(&1));
///
/// assert_eq!(trie.remove("cats"), Ok(3));
/// assert!(trie.contains("cat"));
/// assert_eq!(trie.size(), 2);
///
/// let words: Vec<_> = trie.ascending_string_iter().collect();
/// assert_eq!(words, vec!["car", "cat"]);
/// ```
pub struct Trie<T> {
    pub(crate) pool: NodePool<T>,
    pub(crate) size: usize,
    config: TrieConfig,
}

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Trie<T> {
    fn clone(&self) -> Self {
        Trie {
            pool: self.pool.clone(),
            size: self.size,
            config: self.config,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Trie<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.collect_entries(Order::Ascending))
            .finish()
    }
}

impl<T, W: Word> Extend<(W, T)> for Trie<T> {
    /// Adds every word, skipping the ones [`add`](Trie::add) rejects.
    fn extend<I: IntoIterator<Item = (W, T)>>(&mut self, iter: I) {
        for (word, payload) in iter {
            if let Err(err) = self.add(word, payload) {
                warn!(%err, "skipping word");
            }
        }
    }
}

impl<T, W: Word> FromIterator<(W, T)> for Trie<T> {
    fn from_iter<I: IntoIterator<Item = (W, T)>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<T> Trie<T> {
    /// Creates an empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wordtrie::Trie;
    /// let trie: Trie<u32> = Trie::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates an empty trie using `config`.
    pub fn with_config(config: TrieConfig) -> Self {
        Trie {
            pool: NodePool::new(&config),
            size: 0,
            config,
        }
    }

    /// Returns the configuration the trie was created with.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Checks that `word` can be stored: it must be non-empty and every
    /// character must fit in one symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wordtrie::{Trie, TrieError};
    /// assert!(Trie::<()>::validate("naïve").is_ok());
    /// assert!(Trie::<()>::validate("").is_err());
    /// assert_eq!(
    ///     Trie::<()>::validate("日本"),
    ///     Err(TrieError::InvalidString("日本".into()))
    /// );
    /// ```
    pub fn validate<W: Word>(word: W) -> Result<()> {
        Self::symbols_of(&word).map(drop)
    }

    fn symbols_of<W: Word>(word: &W) -> Result<Vec<u8>> {
        match word.to_symbols() {
            Some(symbols) if !symbols.is_empty() => Ok(symbols),
            _ => Err(TrieError::InvalidString(word.to_text())),
        }
    }

    /// Stores `word` with `payload`.
    ///
    /// Fails with [`TrieError::StringExists`] if any path for `word` is
    /// already present, whether or not it ends a stored word. A word that is
    /// a prefix of a stored word can therefore not be added afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wordtrie::{Trie, TrieError};
    /// let mut trie = Trie::new();
    /// trie.add("cats", 1).unwrap();
    /// assert_eq!(trie.add("cat", 2), Err(TrieError::StringExists("cat".into())));
    /// assert_eq!(trie.add("catsup", 3), Ok(()));
    /// assert_eq!(trie.size(), 2);
    /// ```
    pub fn add<W: Word>(&mut self, word: W, payload: T) -> Result<()> {
        let symbols = Self::symbols_of(&word)?;
        if self.pool.find_end_node(ROOT, &symbols).is_some() {
            return Err(TrieError::StringExists(word.to_text()));
        }

        self.pool.add(ROOT, &symbols, payload);
        self.size += 1;
        debug!(word = %word.to_text(), size = self.size, "added word");
        Ok(())
    }

    /// Removes `word` and returns its payload.
    ///
    /// Only words that [`contains`](Trie::contains) reports can be removed.
    /// Ancestors left without children or payload are pruned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wordtrie::{Trie, TrieError};
    /// let mut trie = Trie::new();
    /// trie.add("dog", 'd').unwrap();
    /// assert_eq!(trie.remove("dog"), Ok('d'));
    /// assert!(!trie.contains_prefix("d"));
    /// assert_eq!(trie.remove("dog"), Err(TrieError::StringNotFound("dog".into())));
    /// ```
    pub fn remove<W: Word>(&mut self, word: W) -> Result<T> {
        let symbols = Self::symbols_of(&word)?;
        if !self.contains_symbols(&symbols) {
            return Err(TrieError::StringNotFound(word.to_text()));
        }

        let payload = self
            .pool
            .remove(&symbols)
            .ok_or_else(|| TrieError::StringNotFound(word.to_text()))?;
        self.size -= 1;
        debug!(word = %word.to_text(), size = self.size, "removed word");
        Ok(payload)
    }

    /// Returns `true` if the path for `word` exists and its last node has no
    /// children.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wordtrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.add("bat", ()).unwrap();
    /// assert!(trie.contains("bat"));
    /// assert!(!trie.contains("ba"));
    /// assert!(!trie.contains("bats"));
    /// ```
    pub fn contains<W: Word>(&self, word: W) -> bool {
        word.to_symbols()
            .is_some_and(|symbols| self.contains_symbols(&symbols))
    }

    fn contains_symbols(&self, symbols: &[u8]) -> bool {
        self.pool
            .find_end_node(ROOT, symbols)
            .is_some_and(|idx| self.pool.get_node(idx).is_leaf())
    }

    /// Returns `true` if `prefix` is a path in the trie, that is, if some
    /// stored word starts with it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wordtrie::Trie;
    /// let mut trie = Trie::new();
    /// trie.add("bat", ()).unwrap();
    /// assert!(trie.contains_prefix("b"));
    /// assert!(trie.contains_prefix("bat"));
    /// assert!(!trie.contains_prefix("bo"));
    /// ```
    pub fn contains_prefix<W: Word>(&self, prefix: W) -> bool {
        prefix
            .to_symbols()
            .is_some_and(|symbols| self.pool.find_end_node(ROOT, &symbols).is_some())
    }

    /// Returns the payload stored for `word`.
    ///
    /// Unlike [`contains`](Trie::contains) this succeeds for a word that a
    /// longer stored word passes through.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wordtrie::{Trie, TrieError};
    /// let mut trie = Trie::new();
    /// trie.add("sea", 1).unwrap();
    /// trie.add("seal", 2).unwrap();
    /// assert_eq!(trie.find("sea"), Ok(&1));
    /// assert_eq!(trie.find("se"), Err(TrieError::StringNotFound("se".into())));
    /// ```
    pub fn find<W: Word>(&self, word: W) -> Result<&T> {
        word.to_symbols()
            .and_then(|symbols| self.pool.find_end_node(ROOT, &symbols))
            .and_then(|idx| self.pool.get_node(idx).payload.as_ref())
            .ok_or_else(|| TrieError::StringNotFound(word.to_text()))
    }

    /// Removes every word, leaving a fresh root.
    pub fn clear(&mut self) {
        self.pool = NodePool::new(&self.config);
        self.size = 0;
        debug!("cleared trie");
    }

    /// Returns the number of stored words.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of stored words. Same as [`size`](Trie::size).
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if no word is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wordtrie::Trie;
    /// let mut trie = Trie::new();
    /// assert!(trie.is_empty());
    /// trie.add("owl", ()).unwrap();
    /// assert!(!trie.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns a read-only view of the root node.
    pub fn root(&self) -> NodeRef<'_, T> {
        NodeRef {
            pool: &self.pool,
            idx: ROOT,
        }
    }

    /// Returns the stored words in ascending symbol order.
    ///
    /// A word comes before the longer words it prefixes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wordtrie::Trie;
    /// let trie: Trie<()> = [("cat", ()), ("bat", ()), ("car", ())].into_iter().collect();
    /// let words: Vec<_> = trie.ascending_string_iter().collect();
    /// assert_eq!(words, vec!["bat", "car", "cat"]);
    /// ```
    pub fn ascending_string_iter(&self) -> Words {
        self.words(Order::Ascending)
    }

    /// Returns the stored words in descending symbol order.
    ///
    /// Siblings are visited from the highest symbol down, but a word still
    /// comes before the longer words it prefixes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wordtrie::Trie;
    /// let trie: Trie<()> = [("cat", ()), ("bat", ()), ("car", ())].into_iter().collect();
    /// let words: Vec<_> = trie.descending_string_iter().collect();
    /// assert_eq!(words, vec!["cat", "car", "bat"]);
    /// ```
    pub fn descending_string_iter(&self) -> Words {
        self.words(Order::Descending)
    }

    fn words(&self, order: Order) -> Words {
        Words::new(
            self.collect_entries(order)
                .into_iter()
                .map(|(word, _)| word)
                .collect(),
        )
    }

    fn collect_entries(&self, order: Order) -> Vec<(String, &T)> {
        let mut out = Vec::with_capacity(self.size);
        self.pool.collect_words(ROOT, order, &mut out);
        out
    }
}
