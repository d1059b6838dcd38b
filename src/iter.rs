use std::iter::FusedIterator;
use std::vec;

/// Sibling order for a depth-first walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Order {
    Ascending,
    Descending,
}

/// An iterator over the words stored in a [`Trie`](crate::Trie).
///
/// The words are copied out of the trie when the iterator is built, so the
/// trie may be modified while one of these is alive. Clone the iterator to
/// walk the same snapshot again.
///
/// This struct is created by the [`ascending_string_iter`] and
/// [`descending_string_iter`] methods on [`Trie`](crate::Trie).
///
/// [`ascending_string_iter`]: crate::Trie::ascending_string_iter
/// [`descending_string_iter`]: crate::Trie::descending_string_iter
#[derive(Clone, Debug)]
pub struct Words {
    pub(crate) inner: vec::IntoIter<String>,
}

impl Words {
    pub(crate) fn new(words: Vec<String>) -> Self {
        Words {
            inner: words.into_iter(),
        }
    }

    /// The words not yet yielded.
    pub fn as_slice(&self) -> &[String] {
        self.inner.as_slice()
    }
}

impl Iterator for Words {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Words {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Words {}

impl FusedIterator for Words {}
