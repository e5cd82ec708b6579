//! A cartesian-tree (treap) map.
//!
//! [`Treap`] orders nodes as a binary search tree on keys and as a
//! max-heap on priorities. Priorities are 32-bit values drawn from a
//! container-local generator at insertion, so the tree's expected
//! height is `O(log n)` for any insertion order. All restructuring is
//! expressed through two primitives: `split`, which partitions a tree
//! around a key, and `merge`, which joins two trees whose key ranges
//! do not overlap.

mod node;
mod treap;

pub use crate::treap::{IntoIter, Iter, Keys, Treap, Values};
