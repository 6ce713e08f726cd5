//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the primary API for
//! storing character keys and querying them by prefix.

use std::fmt;

use log::{debug, trace};

use crate::error::{Result, TrieError};
use crate::iter::{Iter, Keys};
use crate::key_converter::CharKey;
use crate::node::TrieNode;

/// A prefix tree keyed by characters.
///
/// Each edge is labelled by one `char`; a key is stored when the node at the
/// end of its path holds a value. Nodes are created on demand by
/// [`put`](Trie::put) and never removed, so the structure only grows.
///
/// The default value type `()` turns the trie into a plain word set, filled
/// with [`put_key`](Trie::put_key).
#[derive(Clone)]
pub struct Trie<V = ()> {
    /// The root node of the trie
    pub(crate) root: TrieNode<V>,

    /// The number of keys stored in the trie
    size: usize,
}

impl<V> Trie<V> {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let trie = Trie::<i32>::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
            size: 0,
        }
    }

    /// Returns the number of keys stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::<i32>::new();
    /// assert_eq!(trie.len(), 0);
    ///
    /// trie.put("hello", 42).unwrap();
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie contains no keys.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Stores `value` under `key`.
    ///
    /// Missing nodes along the path are created. Storing a key that is
    /// already present keeps [`len`](Trie::len) unchanged and overwrites the
    /// previous value.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidArgument`] if `key` is empty or is not a
    /// valid character sequence. The trie is left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.put("apple", 0).unwrap();
    /// trie.put("apple", 1).unwrap();
    ///
    /// assert_eq!(trie.len(), 1);
    /// assert_eq!(trie.get("apple"), Some(&1));
    /// assert!(trie.put("", 2).is_err());
    /// ```
    pub fn put<K>(&mut self, key: &K, value: V) -> Result<()>
    where
        K: CharKey + ?Sized,
    {
        let key = key.to_chars()?;
        if key.is_empty() {
            debug!("rejected put with an empty key");
            return Err(TrieError::invalid_argument(
                "Illegal argument for put: key must be a non-empty string",
            ));
        }

        let node = self.root.descend_or_create(&key);
        if node.value.is_none() {
            self.size += 1;
            trace!("stored new key {:?}, trie now holds {} keys", key, self.size);
        }
        node.value = Some(value);

        Ok(())
    }

    /// Stores `key` with the default value, marking it present.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut words: Trie = Trie::new();
    /// words.put_key("cat").unwrap();
    /// assert!(words.contains_key("cat"));
    /// ```
    pub fn put_key<K>(&mut self, key: &K) -> Result<()>
    where
        K: CharKey + ?Sized,
        V: Default,
    {
        self.put(key, V::default())
    }

    /// Retrieves a reference to the value stored for the given key, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.put("hello", 0).unwrap();
    ///
    /// assert_eq!(trie.get("hello"), Some(&0));
    /// assert_eq!(trie.get("hell"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&V> {
        self.root.descend(key)?.value.as_ref()
    }

    /// Returns `true` if `key` is stored as a complete key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns `true` if a path spelling `prefix` exists from the root.
    ///
    /// The node reached does not have to terminate a key, and the empty
    /// prefix always exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie: Trie = Trie::new();
    /// trie.put_key("banana").unwrap();
    ///
    /// assert!(trie.has_node("ban"));
    /// assert!(trie.has_node(""));
    /// assert!(!trie.has_node("bat"));
    /// ```
    pub fn has_node(&self, prefix: &str) -> bool {
        self.root.descend(prefix).is_some()
    }

    /// Returns an iterator over every stored key, in lexicographic order.
    ///
    /// Each call starts a fresh traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie: Trie = Trie::new();
    /// trie.put_key("to").unwrap();
    /// trie.put_key("tea").unwrap();
    ///
    /// let keys: Vec<String> = trie.keys().collect();
    /// assert_eq!(keys, vec!["tea", "to"]);
    /// ```
    pub fn keys(&self) -> Keys<'_, V> {
        Keys::new(self.iter())
    }

    /// Returns an iterator over the stored keys that start with `prefix`.
    ///
    /// Yields nothing if no path spells `prefix`.
    pub fn keys_with_prefix(&self, prefix: &str) -> Keys<'_, V> {
        Keys::new(Iter::new(self.root.descend(prefix), prefix.to_string()))
    }

    /// Returns the number of stored keys that start with `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie: Trie = Trie::new();
    /// for word in &["hello", "help", "world"] {
    ///     trie.put_key(*word).unwrap();
    /// }
    ///
    /// assert_eq!(trie.count_with_prefix("hel"), 2);
    /// assert_eq!(trie.count_with_prefix(""), 3);
    /// assert_eq!(trie.count_with_prefix("x"), 0);
    /// ```
    pub fn count_with_prefix(&self, prefix: &str) -> usize {
        self.root.descend(prefix).map_or(0, TrieNode::subtree_size)
    }

    /// Returns an iterator over every `(key, value)` pair, in lexicographic key order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(Some(&self.root), String::new())
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

// Prints the size and the stored entries; walks the tree through `iter`
// rather than recursing into the nodes.
impl<V: fmt::Debug> fmt::Debug for Trie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("size", &self.size)
            .field("entries", &Entries(self))
            .finish()
    }
}

struct Entries<'a, V>(&'a Trie<V>);

impl<V: fmt::Debug> fmt::Debug for Entries<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl<'a, V> IntoIterator for &'a Trie<V> {
    type Item = (String, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
