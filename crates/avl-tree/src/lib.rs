//! Self-balancing binary search tree (AVL discipline) of unique values.
//!
//! The tree keeps every node's balance factor (right-subtree height minus
//! left-subtree height) within `[-1, 1]`, so `contains`, [`insert`] and
//! [`remove`] are all logarithmic in the element count. Duplicate inserts
//! and removals of absent values are ordinary `false` returns, never panics.
//!
//! Instead of raw pointers, all node links are `u32` indices into a
//! tree-owned arena, and the parent link is an `Option<u32>`; the
//! bidirectional parent/child graph therefore has no ownership cycles, and
//! rotations are plain index rewiring. Missing children are represented by
//! empty sentinel nodes rather than by absence, which keeps the recursive
//! search and splice code free of special cases.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | `node` | Arena slots, sentinel state, link and height bookkeeping |
//! | [`tree`] | [`AvlTree`], [`NodeRef`], search/insert/remove/rotations |
//! | [`validate`] | From-scratch invariant checking, [`InvariantError`] |
//!
//! [`insert`]: AvlTree::insert
//! [`remove`]: AvlTree::remove

mod node;
pub mod tree;
pub mod validate;

pub use tree::{AvlTree, NodeRef};
pub use validate::InvariantError;
