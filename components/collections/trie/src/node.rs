use std::collections::BTreeMap;

/// A single trie node. The node is terminal exactly when `value` is
/// `Some`; the key it terminates is spelled by the path from the root.
pub(crate) struct Node<V> {
    pub(crate) value: Option<V>,
    pub(crate) children: BTreeMap<u8, Node<V>>,
}

impl<V> Node<V> {
    pub(crate) fn new() -> Node<V> {
        Node {
            value: None,
            children: BTreeMap::new(),
        }
    }

    /// Follows `path` downward, returning the node it ends at.
    pub(crate) fn descend(&self, path: &[u8]) -> Option<&Node<V>> {
        let mut node = self;
        for b in path {
            node = node.children.get(b)?;
        }
        Some(node)
    }

    pub(crate) fn descend_mut(&mut self, path: &[u8]) -> Option<&mut Node<V>> {
        let mut node = self;
        for b in path {
            node = node.children.get_mut(b)?;
        }
        Some(node)
    }

    /// Removes the value stored under `path` below this node, pruning
    /// every node left non-terminal and childless on the way back up.
    /// Pruning stops at the first ancestor that is terminal or still
    /// has other children.
    pub(crate) fn remove(&mut self, path: &[u8]) -> Option<V> {
        match path.split_first() {
            None => self.value.take(),
            Some((b, rest)) => {
                let child = self.children.get_mut(b)?;
                let removed = child.remove(rest);
                if removed.is_some() && child.value.is_none() && child.children.is_empty() {
                    self.children.remove(b);
                }
                removed
            }
        }
    }
}

impl<V: Clone> Clone for Node<V> {
    fn clone(&self) -> Self {
        Node {
            value: self.value.clone(),
            children: self.children.clone(),
        }
    }
}
