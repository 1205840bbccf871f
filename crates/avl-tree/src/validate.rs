//! Full invariant check, recomputed from scratch.
//!
//! Used by the test suites after every mutation; embedders can reach it
//! through [`AvlTree::assert_valid`](crate::AvlTree::assert_valid). Nothing
//! here trusts the cached heights: every subtree is re-measured by
//! traversal, which is what lets the check catch stale caches.

use thiserror::Error;

use crate::node::{Node, Slot};
use crate::tree::AvlTree;

/// A violated tree invariant, with the offending arena index.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantError {
    #[error("node {index}: balance factor {found} outside [-1, 1]")]
    OutOfBalance { index: u32, found: i32 },
    #[error("node {index}: cached height {cached}, re-measured {measured}")]
    StaleHeight { index: u32, cached: i32, measured: i32 },
    #[error("node {index}: parent link does not point at its actual parent")]
    BrokenParentLink { index: u32 },
    #[error("root node {index} carries a parent link")]
    RootWithParent { index: u32 },
    #[error("sentinel node {index} has a nonzero height")]
    DirtySentinel { index: u32 },
    #[error("node {index}: value not strictly greater than its in-order predecessor")]
    OutOfOrder { index: u32 },
    #[error("recorded size {recorded}, but {reachable} values are reachable")]
    SizeMismatch { recorded: usize, reachable: usize },
}

pub(crate) fn check<T: Ord>(tree: &AvlTree<T>) -> Result<(), InvariantError> {
    if tree.arena[tree.root as usize].parent.is_some() {
        return Err(InvariantError::RootWithParent { index: tree.root });
    }

    check_structure(&tree.arena, tree.root)?;

    let mut prev: Option<&T> = None;
    let mut reachable = 0usize;
    check_order(&tree.arena, tree.root, &mut prev, &mut reachable)?;

    if reachable != tree.size {
        return Err(InvariantError::SizeMismatch {
            recorded: tree.size,
            reachable,
        });
    }
    Ok(())
}

/// Parent links, cached heights and balance factors, for every reachable
/// node. Returns the re-measured height of the subtree at `i`.
fn check_structure<T>(arena: &[Node<T>], i: u32) -> Result<i32, InvariantError> {
    let node = &arena[i as usize];
    let (left, right) = match &node.slot {
        Slot::Empty => {
            if node.height != 0 {
                return Err(InvariantError::DirtySentinel { index: i });
            }
            return Ok(0);
        }
        Slot::Filled { left, right, .. } => (*left, *right),
    };

    for c in [left, right] {
        if arena[c as usize].parent != Some(i) {
            return Err(InvariantError::BrokenParentLink { index: c });
        }
    }

    let lh = check_structure(arena, left)?;
    let rh = check_structure(arena, right)?;

    let measured = 1 + lh.max(rh);
    if node.height != measured {
        return Err(InvariantError::StaleHeight {
            index: i,
            cached: node.height,
            measured,
        });
    }

    let bf = rh - lh;
    if !(-1..=1).contains(&bf) {
        return Err(InvariantError::OutOfBalance { index: i, found: bf });
    }

    Ok(measured)
}

/// In-order traversal must yield strictly increasing values; strictness also
/// rules out duplicates.
fn check_order<'a, T: Ord>(
    arena: &'a [Node<T>],
    i: u32,
    prev: &mut Option<&'a T>,
    reachable: &mut usize,
) -> Result<(), InvariantError> {
    let Slot::Filled { value, left, right } = &arena[i as usize].slot else {
        return Ok(());
    };
    check_order(arena, *left, prev, reachable)?;
    if let Some(p) = *prev {
        if p >= value {
            return Err(InvariantError::OutOfOrder { index: i });
        }
    }
    *prev = Some(value);
    *reachable += 1;
    check_order(arena, *right, prev, reachable)
}
