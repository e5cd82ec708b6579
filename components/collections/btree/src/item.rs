use std::mem;

/// A key/value cell of a node.
pub(crate) struct Item<K, V> {
    key: K,
    value: V,
}

impl<K, V> Item<K, V> {
    pub(crate) fn new(key: K, value: V) -> Item<K, V> {
        Item { key, value }
    }

    #[inline]
    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    #[inline]
    pub(crate) fn set_value(&mut self, value: V) -> V {
        mem::replace(&mut self.value, value)
    }

    #[inline]
    pub(crate) fn as_pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    #[inline]
    pub(crate) fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }

    #[inline]
    pub(crate) fn into_value(self) -> V {
        self.value
    }
}

impl<K: Clone, V: Clone> Clone for Item<K, V> {
    fn clone(&self) -> Self {
        Item::new(self.key.clone(), self.value.clone())
    }
}
