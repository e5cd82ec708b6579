//! A set stored as a dense sorted array.
//!
//! [`SortedSet`] keeps its elements in one contiguous, strictly
//! increasing buffer. Membership tests and rank queries are binary
//! searches, indexed access is `O(1)`, and iteration is a plain slice
//! walk. Insertion and removal shift the tail and are `O(n)`.

mod set;

pub use set::{IntoIter, Iter, SortedSet};
