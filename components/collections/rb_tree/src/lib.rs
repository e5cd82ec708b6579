//! Red-black tree sets.
//!
//! A red-black tree keeps itself balanced with one bit of colour per
//! node: the root is black, a red node never has a red child, and
//! every path from the root to a leaf crosses the same number of
//! black nodes. Together these bound the height to `O(log n)`.
//!
//! Two front ends share one balancing engine:
//! - [`RBTree`] orders elements by their [`Ord`] implementation
//!   (feature `set`, on by default);
//! - [`RBQueue`] orders elements by a caller-supplied comparison
//!   closure (feature `queue`, on by default).
//!
//! Nodes live in a slab arena and refer to parents and children by
//! index, which gives the delete fix-up its upward walk without
//! reference cycles.

mod node;
mod tree;

#[cfg(feature = "set")]
mod rbtree;
#[cfg(feature = "queue")]
mod rbqueue;

pub use tree::{Drain, IntoIter, Iter};

#[cfg(feature = "set")]
pub use rbtree::RBTree;

#[cfg(feature = "queue")]
pub use rbqueue::RBQueue;
