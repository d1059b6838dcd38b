use tracing::trace;

use crate::config::TrieConfig;
use crate::iter::Order;
use crate::node::{ROOT, TrieNode, TrieNodeIdx};
use crate::word::decode;

/// Arena owning every node of a trie.
///
/// Children refer to each other by index, which keeps the parent link
/// non-owning. Released slots are reset to a blank node and recycled.
#[derive(Clone)]
pub(crate) struct NodePool<T> {
    pub(crate) nodes: Vec<TrieNode<T>>,
    pub(crate) free_indices: Vec<TrieNodeIdx>,
    node_slot_capacity: usize,
}

impl<T> NodePool<T> {
    /// Creates a pool holding only the root
    pub(crate) fn new(config: &TrieConfig) -> Self {
        NodePool {
            nodes: vec![TrieNode::root(config.root_slot_capacity)],
            free_indices: Vec::new(),
            node_slot_capacity: config.node_slot_capacity,
        }
    }

    #[inline(always)]
    pub(crate) fn get_node(&self, idx: TrieNodeIdx) -> &TrieNode<T> {
        &self.nodes[idx.0]
    }

    #[inline(always)]
    pub(crate) fn get_node_mut(&mut self, idx: TrieNodeIdx) -> &mut TrieNode<T> {
        &mut self.nodes[idx.0]
    }

    #[inline(always)]
    pub(crate) fn get_child_idx(&self, idx: TrieNodeIdx, symbol: u8) -> Option<TrieNodeIdx> {
        self.get_node(idx).child_idx(symbol)
    }

    /// Number of live nodes, root included
    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len() - self.free_indices.len()
    }

    /// Creates a child of `parent` for `symbol` and links it in
    fn add_child(&mut self, parent: TrieNodeIdx, symbol: u8) -> TrieNodeIdx {
        let node = TrieNode::child(symbol, parent, self.node_slot_capacity);
        let child = match self.free_indices.pop() {
            Some(idx) => {
                self.nodes[idx.0] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                TrieNodeIdx(self.nodes.len() - 1)
            }
        };

        let parent_node = self.get_node_mut(parent);
        parent_node.children.set(symbol as usize, child);
        parent_node.child_count += 1;

        trace!(node = child.0, parent = parent.0, symbol, "allocated trie node");
        child
    }

    /// Stores `payload` at the end of the path `suffix` below `idx`, creating
    /// whatever nodes are missing. An existing payload is overwritten.
    pub(crate) fn add(&mut self, idx: TrieNodeIdx, suffix: &[u8], payload: T) {
        let mut current = idx;
        for &symbol in suffix {
            current = match self.get_child_idx(current, symbol) {
                Some(child) => child,
                None => self.add_child(current, symbol),
            };
        }
        self.get_node_mut(current).payload = Some(payload);
    }

    /// Follows `suffix` down from `idx`. Only the path matters, payloads are
    /// not looked at.
    pub(crate) fn find_end_node(&self, idx: TrieNodeIdx, suffix: &[u8]) -> Option<TrieNodeIdx> {
        let mut current = idx;
        for &symbol in suffix {
            current = self.get_child_idx(current, symbol)?;
        }
        Some(current)
    }

    /// Removes the node at the end of `word` and prunes the ancestors it
    /// leaves dangling.
    ///
    /// Nothing happens unless the end node is a leaf. Pruning climbs toward
    /// the root and stops at the first ancestor that still has children or
    /// holds a payload of its own; the root is never detached. Returns the
    /// payload of the deepest node.
    pub(crate) fn remove(&mut self, word: &[u8]) -> Option<T> {
        let mut path = Vec::with_capacity(word.len() + 1);
        path.push(ROOT);
        let mut current = ROOT;
        for &symbol in word {
            current = self.get_child_idx(current, symbol)?;
            path.push(current);
        }

        if current == ROOT || !self.get_node(current).is_leaf() {
            return None;
        }
        let payload = self.detach(current);

        for &ancestor in path[1..path.len() - 1].iter().rev() {
            let node = self.get_node(ancestor);
            if !node.is_leaf() || node.payload.is_some() {
                break;
            }
            self.detach(ancestor);
            trace!(node = ancestor.0, "pruned dangling trie node");
        }

        payload
    }

    /// Unlinks a leaf from its parent and recycles its slot.
    fn detach(&mut self, idx: TrieNodeIdx) -> Option<T> {
        let node = self.get_node_mut(idx);
        let payload = node.payload.take();
        let parent = node.parent.take();
        let symbol = node.symbol;

        if let (Some(parent), Some(symbol)) = (parent, symbol) {
            let parent_node = self.get_node_mut(parent);
            if parent_node.children.take(symbol as usize).is_some() {
                parent_node.child_count -= 1;
            }
        }

        self.nodes[idx.0] = TrieNode::vacant();
        self.free_indices.push(idx);
        payload
    }

    /// Collects every stored word below `idx` together with its payload.
    ///
    /// Pre-order: a word is emitted before any longer word it prefixes, and
    /// siblings are visited in ascending or descending symbol order.
    pub(crate) fn collect_words<'a>(
        &'a self,
        idx: TrieNodeIdx,
        order: Order,
        out: &mut Vec<(String, &'a T)>,
    ) {
        let mut prefix = Vec::new();
        // each frame carries the prefix length above its node
        let mut stack = vec![(idx, 0)];

        while let Some((node_idx, depth)) = stack.pop() {
            let node = self.get_node(node_idx);
            prefix.truncate(depth);
            if let Some(symbol) = node.symbol {
                prefix.push(symbol);
            }

            if let Some(payload) = &node.payload {
                out.push((decode(&prefix), payload));
            }

            let depth = prefix.len();
            let children = node.children.iter().map(|(_, &child)| (child, depth));
            match order {
                Order::Ascending => stack.extend(children.rev()),
                Order::Descending => stack.extend(children),
            }
        }
    }
}
