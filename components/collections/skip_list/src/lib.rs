//! A skip-list map.
//!
//! [`SkipListMap`] keeps its entries in a multi-level linked structure:
//! level 0 is a sorted list of every entry, and each level above it is
//! a random subsequence of the level below. A search enters at the
//! highest occupied level and drops a level each time it would
//! overshoot, giving expected `O(log n)` point operations without any
//! rebalancing.
//!
//! Node levels are drawn from a fair-coin cascade on a container-local
//! generator. The drawn levels shape the tower structure only; the
//! map's observable contents and order are the same for every seed.

mod map;

pub use map::{IntoIter, Iter, Keys, SkipListMap, Values, DEFAULT_MAX_LEVEL, MAX_LEVEL_LIMIT};
