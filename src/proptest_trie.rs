use super::*;
use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Reference behaviour: a stored word matches exactly only when no other
/// stored word extends it, and a path exists for any prefix of a stored word.
#[derive(Default)]
struct Model {
    words: BTreeMap<String, u32>,
}

impl Model {
    fn has_path(&self, word: &str) -> bool {
        self.words.keys().any(|w| w.starts_with(word))
    }

    fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
            && !self
                .words
                .keys()
                .any(|w| w.len() > word.len() && w.starts_with(word))
    }
}

/// Pre-order with siblings from the highest symbol down.
fn descending_cmp(a: &str, b: &str) -> Ordering {
    for (x, y) in a.bytes().zip(b.bytes()) {
        if x != y {
            return y.cmp(&x);
        }
    }
    a.len().cmp(&b.len())
}

#[derive(Debug, Clone)]
enum Operation {
    Add(String, u32),
    Remove(String),
}

fn operations() -> impl Strategy<Value = Vec<Operation>> {
    let word = "[abc]{1,4}";
    proptest::collection::vec(
        prop_oneof![
            3 => (word, any::<u32>()).prop_map(|(w, p)| Operation::Add(w, p)),
            2 => word.prop_map(Operation::Remove),
        ],
        1..80,
    )
}

fn check_against_model(trie: &Trie<u32>, model: &Model, queries: &[String]) {
    assert_eq!(trie.size(), model.words.len());
    assert_eq!(trie.is_empty(), model.words.is_empty());

    for query in queries {
        assert_eq!(trie.contains_prefix(query.as_str()), model.has_path(query));
        assert_eq!(trie.contains(query.as_str()), model.contains(query));
        assert_eq!(
            trie.find(query.as_str()).ok(),
            model.words.get(query.as_str())
        );
    }

    let ascending: Vec<String> = trie.ascending_string_iter().collect();
    let expected: Vec<String> = model.words.keys().cloned().collect();
    assert_eq!(ascending, expected);

    let mut expected_desc = expected;
    expected_desc.sort_by(|a, b| descending_cmp(a, b));
    assert_eq!(trie.descending_string_iter().collect::<Vec<_>>(), expected_desc);
}

proptest! {
    #[test]
    fn prop_operations_match_model(ops in operations()) {
        let mut trie = Trie::new();
        let mut model = Model::default();
        let mut queries: Vec<String> = Vec::new();

        for op in ops {
            match op {
                Operation::Add(word, payload) => {
                    let result = trie.add(word.as_str(), payload);
                    if model.has_path(&word) {
                        prop_assert_eq!(result, Err(TrieError::StringExists(word.clone())));
                    } else {
                        prop_assert_eq!(result, Ok(()));
                        model.words.insert(word.clone(), payload);
                    }
                    queries.push(word);
                }
                Operation::Remove(word) => {
                    let result = trie.remove(word.as_str());
                    if model.contains(&word) {
                        let expected = model.words.remove(&word);
                        prop_assert_eq!(result.ok(), expected);
                    } else {
                        prop_assert_eq!(result, Err(TrieError::StringNotFound(word.clone())));
                    }
                    queries.push(word);
                }
            }
            check_against_model(&trie, &model, &queries);
        }
    }

    #[test]
    fn prop_remove_everything_leaves_bare_root(words in proptest::collection::btree_set("[a-z]{1,6}", 1..40)) {
        let mut trie = Trie::new();
        for word in &words {
            let _ = trie.add(word.as_str(), ());
        }

        // longest first, so every word is a leaf when its turn comes
        let mut stored: Vec<String> = trie.ascending_string_iter().collect();
        stored.sort_by_key(|w| std::cmp::Reverse(w.len()));
        for word in &stored {
            prop_assert!(trie.remove(word.as_str()).is_ok());
        }

        prop_assert!(trie.is_empty());
        prop_assert_eq!(trie.pool.node_count(), 1);
        prop_assert!(trie.root().is_leaf());
    }

    #[test]
    fn prop_invalid_words_never_mutate(
        prefix in "[a-z]{0,4}",
        wide in "[\u{100}-\u{10ff}]",
        suffix in "[a-z]{0,4}",
    ) {
        let mut trie = Trie::new();
        trie.add("seed", 0u32).unwrap();
        let word = format!("{prefix}{wide}{suffix}");

        prop_assert!(trie.add(word.as_str(), 1).unwrap_err().is_invalid_string());
        prop_assert!(trie.remove(word.as_str()).unwrap_err().is_invalid_string());
        prop_assert_eq!(trie.size(), 1);
        prop_assert_eq!(trie.pool.node_count(), 5);
    }

    #[test]
    fn prop_add_then_remove_round_trips(word in "[\\x00-\\xff]{1,12}", payload in any::<i64>()) {
        let mut trie = Trie::new();
        prop_assert_eq!(trie.add(word.as_str(), payload), Ok(()));
        prop_assert!(trie.contains(word.as_str()));
        prop_assert_eq!(trie.ascending_string_iter().next(), Some(word.clone()));
        prop_assert_eq!(trie.remove(word.as_str()), Ok(payload));
        prop_assert!(!trie.contains_prefix(word.as_str()));
    }

    #[test]
    fn prop_descending_reverses_prefix_free_sets(words in proptest::collection::btree_set("[a-z]{3}", 1..30)) {
        // equal-length words never prefix one another
        let trie: Trie<()> = words.iter().map(|w| (w.as_str(), ())).collect();
        let ascending: Vec<String> = trie.ascending_string_iter().collect();
        let mut descending: Vec<String> = trie.descending_string_iter().collect();
        descending.reverse();
        prop_assert_eq!(ascending, descending);
    }
}
