//! A slab-backed B-tree map.
//!
//! [`BTreeMap`] offers an alternative over the standard implementation
//! of B-trees where nodes are allocated in a contiguous arena,
//! reducing the cost of tree node allocations. Child links are arena
//! indices rather than pointers.
//!
//! The branching factor (the maximum number of children per node) is
//! chosen at construction and defaults to [`DEFAULT_ORDER`]. Larger
//! orders give shallower trees and better locality; smaller orders
//! rebalance more often.

mod item;
mod map;
mod node;

pub use map::{IntoIter, Iter, Keys, Values, BTreeMap, DEFAULT_ORDER};
