//! Internal node implementation for the trie.
//!
//! Each `TrieNode` is owned outright by its parent's child map, so the
//! tree is acyclic and has exactly one root. Cloning and dropping walk the
//! tree from explicit work lists, never one call per level.

use std::collections::BTreeMap;

/// One position in the key space.
///
/// A node may sit on the path to a longer key without terminating a key
/// itself; only nodes whose `value` is `Some` mark the end of a stored key.
pub(crate) struct TrieNode<V> {
    /// Child nodes indexed by the character on the connecting edge
    pub children: BTreeMap<char, TrieNode<V>>,

    /// The value stored at this node, if a key ends here
    pub value: Option<V>,
}

impl<V> TrieNode<V> {
    /// Creates a new node that terminates no key
    pub fn new() -> Self {
        TrieNode {
            children: BTreeMap::new(),
            value: None,
        }
    }

    /// Creates a new node that terminates a key with the given value
    #[cfg(test)]
    pub fn with_value(value: V) -> Self {
        TrieNode {
            children: BTreeMap::new(),
            value: Some(value),
        }
    }

    /// Returns whether a stored key ends at this node
    pub fn is_terminal(&self) -> bool {
        self.value.is_some()
    }

    /// Returns whether this node is a leaf node (has no children)
    #[cfg(test)]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Follows the edges labelled by `path`, returning the node reached.
    pub fn descend(&self, path: &str) -> Option<&TrieNode<V>> {
        let mut current = self;
        for ch in path.chars() {
            current = current.children.get(&ch)?;
        }
        Some(current)
    }

    /// Follows the edges labelled by `path`, creating missing nodes.
    pub fn descend_or_create(&mut self, path: &str) -> &mut TrieNode<V> {
        let mut current = self;
        for ch in path.chars() {
            current = current.children.entry(ch).or_insert_with(TrieNode::new);
        }
        current
    }

    /// Returns the number of values stored in this subtree
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            if node.is_terminal() {
                count += 1;
            }
            stack.extend(node.children.values());
        }

        count
    }
}

impl<V: Clone> Clone for TrieNode<V> {
    fn clone(&self) -> Self {
        // Breadth-first listing of (source, parent index, edge); parents
        // always precede their children.
        let mut order: Vec<(&TrieNode<V>, usize, char)> = vec![(self, 0, '\0')];
        let mut next = 0;
        while next < order.len() {
            let node = order[next].0;
            for (ch, child) in &node.children {
                order.push((child, next, *ch));
            }
            next += 1;
        }

        let mut built: Vec<TrieNode<V>> = order
            .iter()
            .map(|(node, _, _)| TrieNode {
                children: BTreeMap::new(),
                value: node.value.clone(),
            })
            .collect();

        // Attach from the back so every node is complete before it moves
        // into its parent.
        while built.len() > 1 {
            let index = built.len() - 1;
            let (_, parent, ch) = order[index];
            if let Some(node) = built.pop() {
                built[parent].children.insert(ch, node);
            }
        }

        built.pop().unwrap_or_default()
    }
}

impl<V> Drop for TrieNode<V> {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode<V>> = std::mem::take(&mut self.children)
            .into_iter()
            .map(|(_, child)| child)
            .collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(
                std::mem::take(&mut node.children)
                    .into_iter()
                    .map(|(_, child)| child),
            );
        }
    }
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}
