//! A family of ordered maps and sets.
//!
//! Every container in this workspace keeps its elements in key order and
//! supports logarithmic point queries and in-order traversal. Each engine
//! is a self-contained crate under `components/collections/`; this crate
//! re-exports them under one roof.
//!
//! | Container | Backing structure |
//! |---|---|
//! | [`BTreeMap`] | multi-way balanced tree, arena allocated |
//! | [`RBTree`] / [`RBQueue`] | red-black tree |
//! | [`Trie`] | byte-keyed prefix tree |
//! | [`SkipListMap`] | probabilistic multi-level list |
//! | [`Treap`] | randomized cartesian tree |
//! | [`SortedSet`] | dense sorted array |

pub use btree::BTreeMap;
pub use rb_tree::{RBQueue, RBTree};
pub use skip_list::SkipListMap;
pub use sorted_set::SortedSet;
pub use treap::Treap;
pub use trie::Trie;
