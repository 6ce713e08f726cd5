//! Iterators over the keys stored in a trie.
//!
//! Traversal is depth-first and driven by an explicit stack, so deep tries
//! never grow the call stack. Children are visited in ascending `char`
//! order, which yields keys in lexicographic order.

use std::iter::FusedIterator;

use crate::node::TrieNode;

/// An iterator over the `(key, value)` pairs of a trie, in lexicographic
/// key order.
///
/// Created by [`Trie::iter`](crate::Trie::iter).
pub struct Iter<'a, V> {
    /// Nodes still to visit: the node, the edge leading into it, and the
    /// byte length of `path` at its parent
    stack: Vec<(&'a TrieNode<V>, Option<char>, usize)>,

    /// The key spelled out on the way to the node visited last
    path: String,
}

impl<'a, V> Iter<'a, V> {
    /// Starts a traversal at `start`, whose path from the root spells `prefix`.
    pub(crate) fn new(start: Option<&'a TrieNode<V>>, prefix: String) -> Self {
        let mut stack = Vec::new();
        if let Some(node) = start {
            stack.push((node, None, prefix.len()));
        }
        Iter {
            stack,
            path: prefix,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, edge, parent_len)) = self.stack.pop() {
            self.path.truncate(parent_len);
            if let Some(ch) = edge {
                self.path.push(ch);
            }

            // Pushed in reverse so the smallest child is popped first
            let len = self.path.len();
            for (ch, child) in node.children.iter().rev() {
                self.stack.push((child, Some(*ch), len));
            }

            if let Some(value) = node.value.as_ref() {
                return Some((self.path.clone(), value));
            }
        }
        None
    }
}

impl<V> FusedIterator for Iter<'_, V> {}

/// An iterator over the keys of a trie.
///
/// Created by [`Trie::keys`](crate::Trie::keys) and
/// [`Trie::keys_with_prefix`](crate::Trie::keys_with_prefix).
pub struct Keys<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Keys<'a, V> {
    pub(crate) fn new(inner: Iter<'a, V>) -> Self {
        Keys { inner }
    }
}

impl<V> Iterator for Keys<'_, V> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.inner.next().map(|(key, _)| key)
    }
}

impl<V> FusedIterator for Keys<'_, V> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TrieNode<u32> {
        let mut root = TrieNode::new();
        root.descend_or_create("to").value = Some(1);
        root.descend_or_create("tea").value = Some(2);
        root.descend_or_create("ten").value = Some(3);
        root.descend_or_create("i").value = Some(4);
        root.descend_or_create("inn").value = Some(5);
        root
    }

    #[test]
    fn test_iter_yields_every_terminal_node() {
        let root = sample();
        let pairs: Vec<(String, u32)> = Iter::new(Some(&root), String::new())
            .map(|(key, value)| (key, *value))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("i".to_string(), 4),
                ("inn".to_string(), 5),
                ("tea".to_string(), 2),
                ("ten".to_string(), 3),
                ("to".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_iter_from_inner_node_keeps_prefix() {
        let root = sample();
        let start = root.descend("te");
        let keys: Vec<String> = Keys::new(Iter::new(start, "te".to_string())).collect();

        assert_eq!(keys, vec!["tea".to_string(), "ten".to_string()]);
    }

    #[test]
    fn test_iter_without_start_is_empty() {
        let mut iter: Iter<'_, u32> = Iter::new(None, String::new());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_root_value_yields_empty_key() {
        let root = TrieNode::with_value(9u32);
        let pairs: Vec<(String, &u32)> = Iter::new(Some(&root), String::new()).collect();
        assert_eq!(pairs, vec![(String::new(), &9)]);
    }

    #[test]
    fn test_deep_chain_does_not_recurse() {
        let mut root: TrieNode<()> = TrieNode::new();
        let key = "x".repeat(200_000);
        root.descend_or_create(&key).value = Some(());
        root.descend_or_create(&key[..1_000]).value = Some(());

        let keys: Vec<String> = Keys::new(Iter::new(Some(&root), String::new())).collect();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].len(), 1_000);
        assert_eq!(keys[1], key);
    }

    #[test]
    fn test_keys_come_out_in_lexicographic_order() {
        let mut root: TrieNode<()> = TrieNode::new();
        for word in &["zebra", "apricot", "b", "apple", "banana", "ab", "a"] {
            root.descend_or_create(word).value = Some(());
        }

        let keys: Vec<String> = Keys::new(Iter::new(Some(&root), String::new())).collect();
        assert_eq!(
            keys,
            vec!["a", "ab", "apple", "apricot", "b", "banana", "zebra"]
        );
    }

    #[test]
    fn test_multibyte_path_is_rebuilt_per_branch() {
        let mut root: TrieNode<()> = TrieNode::new();
        for word in &["héllo", "hé", "hëy", "h"] {
            root.descend_or_create(word).value = Some(());
        }

        let keys: Vec<String> = Keys::new(Iter::new(Some(&root), String::new())).collect();
        assert_eq!(keys, vec!["h", "hé", "héllo", "hëy"]);
    }
}
