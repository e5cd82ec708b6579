use std::cmp::Ordering;

pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) priority: u32,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, value: V, priority: u32) -> Node<K, V> {
        Node {
            key,
            value,
            priority,
            left: None,
            right: None,
        }
    }
}

/// Partitions `link` into the subtree of keys strictly below `key` and
/// the subtree of keys at or above it.
pub(crate) fn split<K: Ord, V>(link: Link<K, V>, key: &K) -> (Link<K, V>, Link<K, V>) {
    match link {
        None => (None, None),
        Some(mut node) => {
            if node.key < *key {
                let (left, right) = split(node.right.take(), key);
                node.right = left;
                (Some(node), right)
            } else {
                let (left, right) = split(node.left.take(), key);
                node.left = right;
                (left, Some(node))
            }
        }
    }
}

/// Joins two trees. Every key in `left` must be strictly below every
/// key in `right`; the root with the higher priority wins at each step.
pub(crate) fn merge<K, V>(left: Link<K, V>, right: Link<K, V>) -> Link<K, V> {
    match (left, right) {
        (None, right) => right,
        (left, None) => left,
        (Some(mut l), Some(mut r)) => {
            if l.priority >= r.priority {
                l.right = merge(l.right.take(), Some(r));
                Some(l)
            } else {
                r.left = merge(Some(l), r.left.take());
                Some(r)
            }
        }
    }
}

/// Hangs `node` below `link`, descending by key until the new node's
/// priority dominates, then splitting the remaining subtree around it.
/// The key must not be present in the tree.
pub(crate) fn insert_at<K: Ord, V>(link: &mut Link<K, V>, mut node: Box<Node<K, V>>) {
    let dominates = match link.as_deref() {
        None => {
            *link = Some(node);
            return;
        }
        Some(cur) => node.priority > cur.priority,
    };
    if dominates {
        let (left, right) = split(link.take(), &node.key);
        node.left = left;
        node.right = right;
        *link = Some(node);
    } else if let Some(cur) = link.as_deref_mut() {
        if node.key < cur.key {
            insert_at(&mut cur.left, node);
        } else {
            insert_at(&mut cur.right, node);
        }
    }
}

/// Unlinks the node holding `key`, closing the gap with a merge of its
/// children.
pub(crate) fn remove_at<K: Ord, V>(link: &mut Link<K, V>, key: &K) -> Option<(K, V)> {
    let ordering = key.cmp(&link.as_deref()?.key);
    if ordering == Ordering::Equal {
        let mut node = link.take()?;
        *link = merge(node.left.take(), node.right.take());
        return Some((node.key, node.value));
    }
    let node = link.as_deref_mut()?;
    match ordering {
        Ordering::Less => remove_at(&mut node.left, key),
        _ => remove_at(&mut node.right, key),
    }
}

pub(crate) fn get_at<'a, K: Ord, V>(link: &'a Link<K, V>, key: &K) -> Option<&'a Node<K, V>> {
    let node = link.as_deref()?;
    match key.cmp(&node.key) {
        Ordering::Less => get_at(&node.left, key),
        Ordering::Greater => get_at(&node.right, key),
        Ordering::Equal => Some(node),
    }
}

pub(crate) fn get_mut_at<'a, K: Ord, V>(link: &'a mut Link<K, V>, key: &K) -> Option<&'a mut V> {
    let node = link.as_deref_mut()?;
    match key.cmp(&node.key) {
        Ordering::Less => get_mut_at(&mut node.left, key),
        Ordering::Greater => get_mut_at(&mut node.right, key),
        Ordering::Equal => Some(&mut node.value),
    }
}
