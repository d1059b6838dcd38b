use crate::node_pool::NodePool;
use crate::slot_array::{Slots, SparseSlotArray};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct TrieNodeIdx(pub(crate) usize);

/// The root always lives in the first pool slot.
pub(crate) const ROOT: TrieNodeIdx = TrieNodeIdx(0);

#[derive(Clone)]
pub(crate) struct TrieNode<T> {
    /// `None` only for the root, which contributes nothing to a path.
    pub(crate) symbol: Option<u8>,
    pub(crate) payload: Option<T>,
    pub(crate) children: SparseSlotArray<TrieNodeIdx>,
    pub(crate) child_count: usize,
    /// Non-owning link used to splice the node out of its parent when pruned.
    pub(crate) parent: Option<TrieNodeIdx>,
}

impl<T> TrieNode<T> {
    pub(crate) fn root(slot_capacity: usize) -> Self {
        TrieNode {
            symbol: None,
            payload: None,
            children: SparseSlotArray::with_capacity(slot_capacity),
            child_count: 0,
            parent: None,
        }
    }

    pub(crate) fn child(symbol: u8, parent: TrieNodeIdx, slot_capacity: usize) -> Self {
        TrieNode {
            symbol: Some(symbol),
            payload: None,
            children: SparseSlotArray::with_capacity(slot_capacity),
            child_count: 0,
            parent: Some(parent),
        }
    }

    /// Placeholder left in a recycled pool slot.
    pub(crate) fn vacant() -> Self {
        Self::root(0)
    }

    /// A node is a leaf when it has no children, payload or not.
    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.child_count == 0
    }

    #[inline]
    pub(crate) fn child_idx(&self, symbol: u8) -> Option<TrieNodeIdx> {
        self.children.get(symbol as usize).copied()
    }
}

/// A read-only view of one node of a [`Trie`](crate::Trie).
///
/// Obtained from [`Trie::root`](crate::Trie::root) and then by walking
/// [`children`](NodeRef::children).
///
/// # Examples
///
/// ```
/// use wordtrie::Trie;
///
/// let mut trie = Trie::new();
/// trie.add("ox", 1).unwrap();
/// trie.add("on", 2).unwrap();
///
/// let root = trie.root();
/// assert_eq!(root.symbol(), None);
///
/// let o = root.child(b'o').unwrap();
/// assert_eq!(o.child_count(), 2);
/// let below_o: Vec<_> = o.children().map(|n| n.symbol()).collect();
/// assert_eq!(below_o, vec![Some(b'n'), Some(b'x')]);
/// assert_eq!(o.child(b'x').and_then(|n| n.payload()), Some(&1));
/// ```
pub struct NodeRef<'a, T> {
    pub(crate) pool: &'a NodePool<T>,
    pub(crate) idx: TrieNodeIdx,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("symbol", &self.symbol().map(char::from))
            .field("payload", &self.payload())
            .field("child_count", &self.child_count())
            .finish()
    }
}

impl<'a, T> NodeRef<'a, T> {
    fn node(&self) -> &'a TrieNode<T> {
        self.pool.get_node(self.idx)
    }

    /// The symbol on the edge leading here, `None` for the root.
    pub fn symbol(&self) -> Option<u8> {
        self.node().symbol
    }

    /// The payload, present when the path to this node was inserted as a word.
    pub fn payload(&self) -> Option<&'a T> {
        self.node().payload.as_ref()
    }

    /// Returns `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    /// Returns the number of occupied child slots.
    pub fn child_count(&self) -> usize {
        self.node().child_count
    }

    /// Returns the child reached through `symbol`, if any.
    pub fn child(&self, symbol: u8) -> Option<NodeRef<'a, T>> {
        self.node().child_idx(symbol).map(|idx| NodeRef {
            pool: self.pool,
            idx,
        })
    }

    /// Iterates over the children in ascending symbol order.
    pub fn children(&self) -> Children<'a, T> {
        Children {
            pool: self.pool,
            inner: self.node().children.iter(),
        }
    }
}

/// An iterator over the children of a node.
///
/// This struct is created by the [`children`] method on [`NodeRef`].
///
/// [`children`]: NodeRef::children
pub struct Children<'a, T> {
    pool: &'a NodePool<T>,
    inner: Slots<'a, TrieNodeIdx>,
}

impl<'a, T> Iterator for Children<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, &idx)| NodeRef {
            pool: self.pool,
            idx,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Children<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, &idx)| NodeRef {
            pool: self.pool,
            idx,
        })
    }
}
