use crate::slot_array::DEFAULT_SLOT_CAPACITY;

/// Tuning knobs for a [`Trie`](crate::Trie).
///
/// Both capacities only size the child arrays up front; arrays still grow on
/// demand, so any value (including zero) is valid.
///
/// # Examples
///
/// ```
/// use wordtrie::{Trie, TrieConfig};
///
/// // Lowercase ASCII words: every symbol fits below 128 at the root.
/// let config = TrieConfig::new().with_root_slot_capacity(128);
/// let mut trie = Trie::with_config(config);
/// trie.add("zebra", ()).unwrap();
/// assert_eq!(trie.config().root_slot_capacity, 128);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrieConfig {
    /// Initial child capacity of the root node.
    pub root_slot_capacity: usize,
    /// Initial child capacity of every other node.
    pub node_slot_capacity: usize,
}

impl Default for TrieConfig {
    fn default() -> Self {
        TrieConfig {
            root_slot_capacity: DEFAULT_SLOT_CAPACITY,
            node_slot_capacity: DEFAULT_SLOT_CAPACITY,
        }
    }
}

impl TrieConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root_slot_capacity(mut self, capacity: usize) -> Self {
        self.root_slot_capacity = capacity;
        self
    }

    pub fn with_node_slot_capacity(mut self, capacity: usize) -> Self {
        self.node_slot_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrieConfig::default();
        assert_eq!(config.root_slot_capacity, 10);
        assert_eq!(config.node_slot_capacity, 10);
        assert_eq!(config, TrieConfig::new());
    }

    #[test]
    fn test_builder() {
        let config = TrieConfig::new()
            .with_root_slot_capacity(256)
            .with_node_slot_capacity(0);
        assert_eq!(config.root_slot_capacity, 256);
        assert_eq!(config.node_slot_capacity, 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip_and_defaults() {
        let config = TrieConfig::new().with_root_slot_capacity(128);
        let json = serde_json::to_string(&config).unwrap();
        let back: TrieConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);

        let partial: TrieConfig = serde_json::from_str(r#"{"node_slot_capacity": 4}"#).unwrap();
        assert_eq!(partial.root_slot_capacity, 10);
        assert_eq!(partial.node_slot_capacity, 4);
    }
}
