use crate::item::Item;

use smallvec::SmallVec;
use std::borrow::Borrow;

/// Inline capacities match the default order, so trees built with it
/// never spill node storage to the heap.
pub(crate) type Items<K, V> = SmallVec<[Item<K, V>; 7]>;
pub(crate) type Children = SmallVec<[usize; 8]>;

/// A single tree node: a sorted run of items and, for internal nodes,
/// one more child than items. A leaf has no children at all.
pub(crate) struct Node<K, V> {
    pub(crate) items: Items<K, V>,
    pub(crate) children: Children,
}

impl<K, V> Node<K, V> {
    pub(crate) fn leaf() -> Node<K, V> {
        Node {
            items: SmallVec::new(),
            children: SmallVec::new(),
        }
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Position of `key` among the items: `Ok` when present, `Err`
    /// with the child index to descend into otherwise.
    #[inline]
    pub(crate) fn search<Q>(&self, key: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.items.binary_search_by(|item| item.key().borrow().cmp(key))
    }
}

impl<K: Clone, V: Clone> Clone for Node<K, V> {
    fn clone(&self) -> Self {
        Node {
            items: self.items.clone(),
            children: self.children.clone(),
        }
    }
}
