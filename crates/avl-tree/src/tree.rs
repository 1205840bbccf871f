//! The AVL ordered set: search, insertion, deletion and the rebalancing
//! pass that keeps every balance factor within `[-1, 1]`.

use std::cmp::Ordering;

use crate::node::{self, Node, Slot};
use crate::validate::{self, InvariantError};

/// Self-balancing binary search tree of unique values.
///
/// All node links are indices into an arena owned by the tree, so the
/// bidirectional parent/child graph carries no ownership cycles; freed slots
/// are recycled through a free list. Mutation requires `&mut self`, which
/// gives the exclusive access the intermediate states (mid-rotation, half
/// rewired) rely on.
pub struct AvlTree<T> {
    pub(crate) arena: Vec<Node<T>>,
    pub(crate) free: Vec<u32>,
    pub(crate) root: u32,
    pub(crate) size: usize,
}

impl<T: Ord> AvlTree<T> {
    pub fn new() -> Self {
        AvlTree {
            arena: vec![Node::empty(None)],
            free: Vec::new(),
            root: 0,
            size: 0,
        }
    }

    /// Number of values currently held.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Read-only handle on the root, for external traversal. The root is a
    /// sentinel exactly when the tree holds no values.
    pub fn root(&self) -> NodeRef<'_, T> {
        NodeRef {
            tree: self,
            index: self.root,
        }
    }

    /// Descend with three-way comparison. Returns the index of the node
    /// holding `value`, or of the sentinel where it would be inserted.
    fn locate(&self, value: &T, i: u32) -> u32 {
        match &self.arena[i as usize].slot {
            Slot::Empty => i,
            Slot::Filled { value: held, left, right } => match value.cmp(held) {
                Ordering::Equal => i,
                Ordering::Less => self.locate(value, *left),
                Ordering::Greater => self.locate(value, *right),
            },
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        !self.arena[self.locate(value, self.root) as usize].is_empty()
    }

    /// Insert `value`. Returns `false` without touching the tree when the
    /// value is already present.
    pub fn insert(&mut self, value: T) -> bool {
        let i = self.locate(&value, self.root);
        if !self.arena[i as usize].is_empty() {
            return false;
        }
        node::set_value(&mut self.arena, &mut self.free, i, value);
        self.size += 1;
        // The fresh leaf is balanced by construction; its ancestors may not be.
        if let Some(p) = self.arena[i as usize].parent {
            self.rebalance(p);
        }
        true
    }

    /// Remove `value`. Returns `false` without touching the tree when the
    /// value is absent.
    pub fn remove(&mut self, value: &T) -> bool {
        let i = self.locate(value, self.root);
        if self.arena[i as usize].is_empty() {
            return false;
        }
        self.remove_at(i);
        // Exactly one node leaves the tree per call, no matter how deep the
        // predecessor recursion went.
        self.size -= 1;
        true
    }

    /// Check every invariant from scratch: BST order, uniqueness, balance
    /// factors, cached heights, parent links, sentinel shape and the size
    /// count.
    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        validate::check(self)
    }

    /// Structural removal of the filled node at `i`.
    fn remove_at(&mut self, i: u32) {
        let parent = self.arena[i as usize].parent;
        let left = self.arena[i as usize].left().expect("removal target is filled");
        let right = self.arena[i as usize].right().expect("removal target is filled");

        if self.arena[i as usize].height == 1 {
            // Height 1 is the same as both children empty: a leaf.
            node::clear(&mut self.arena, &mut self.free, i);
            if let Some(p) = parent {
                self.rebalance(p);
            }
        } else if self.arena[left as usize].is_empty() {
            // Only a right child: splice it into this position.
            node::release(&mut self.arena, &mut self.free, left);
            self.replace_node(i, right);
            node::release(&mut self.arena, &mut self.free, i);
            if let Some(p) = parent {
                self.rebalance(p);
            }
        } else if self.arena[right as usize].is_empty() {
            // Only a left child.
            node::release(&mut self.arena, &mut self.free, right);
            self.replace_node(i, left);
            node::release(&mut self.arena, &mut self.free, i);
            if let Some(p) = parent {
                self.rebalance(p);
            }
        } else {
            // Two children: the rightmost node of the left subtree is the
            // in-order predecessor.
            let mut pred = left;
            loop {
                let r = self.arena[pred as usize]
                    .right()
                    .expect("predecessor scan stays on filled nodes");
                if self.arena[r as usize].is_empty() {
                    break;
                }
                pred = r;
            }
            // The predecessor's value takes this node's place; the node
            // itself is never detached. Found by walking right only, the
            // predecessor has at most a left child, so the recursion lands
            // in one of the cases above. Its rebalance walks the whole path
            // to the root, so none is started from here.
            self.swap_values(i, pred);
            self.remove_at(pred);
        }
    }

    fn swap_values(&mut self, a: u32, b: u32) {
        debug_assert_ne!(a, b);
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.arena.split_at_mut(hi as usize);
        match (&mut head[lo as usize].slot, &mut tail[0].slot) {
            (
                Slot::Filled { value: va, .. },
                Slot::Filled { value: vb, .. },
            ) => std::mem::swap(va, vb),
            _ => unreachable!("value swap requires two filled nodes"),
        }
    }

    /// Re-run the balance check at `i` and every ancestor above it.
    fn rebalance(&mut self, i: u32) {
        node::update_height(&mut self.arena, i);
        let bf = node::balance_factor(&self.arena, i);
        if bf < -1 {
            self.rotate_right(i);
        } else if bf > 1 {
            self.rotate_left(i);
        }
        // After a rotation the parent is the node that moved above us.
        if let Some(p) = self.arena[i as usize].parent {
            self.rebalance(p);
        }
    }

    /// The right child becomes the new subtree root.
    ///
    /// ```text
    ///       a                 b
    ///   .       b    =>   a       c
    /// .   .   .   c
    /// ```
    fn rotate_left(&mut self, a: u32) {
        // Right-left shape: straighten it into right-right first.
        let r = self.arena[a as usize].right().expect("rotation pivot is filled");
        if node::balance_factor(&self.arena, r) < 0 {
            self.rotate_right(r);
        }

        // Re-read: the pre-rotation may have put a different node here.
        let b = self.arena[a as usize].right().expect("rotation pivot is filled");
        let b_left = self.arena[b as usize].left().expect("subtree root is filled");

        // b's left child, sentinel or not, becomes a's right child.
        node::set_right(&mut self.arena, a, b_left);
        // b takes a's place under a's former parent, or as tree root.
        self.replace_node(a, b);
        node::set_left(&mut self.arena, b, a);

        // Children before the new ancestor; nodes further up are refreshed
        // by the rebalance walk.
        node::update_height(&mut self.arena, a);
        node::update_height(&mut self.arena, b);
        let b_right = self.arena[b as usize].right().expect("subtree root is filled");
        node::update_height(&mut self.arena, b_right);
    }

    /// The left child becomes the new subtree root.
    ///
    /// ```text
    ///       c                 b
    ///   b       .    =>   a       c
    /// a   .   .   .
    /// ```
    fn rotate_right(&mut self, c: u32) {
        // Left-right shape: straighten it into left-left first.
        let l = self.arena[c as usize].left().expect("rotation pivot is filled");
        if node::balance_factor(&self.arena, l) > 0 {
            self.rotate_left(l);
        }

        let b = self.arena[c as usize].left().expect("rotation pivot is filled");
        let b_right = self.arena[b as usize].right().expect("subtree root is filled");

        node::set_left(&mut self.arena, c, b_right);
        self.replace_node(c, b);
        node::set_right(&mut self.arena, b, c);

        node::update_height(&mut self.arena, b);
        node::update_height(&mut self.arena, c);
        let b_left = self.arena[b as usize].left().expect("subtree root is filled");
        node::update_height(&mut self.arena, b_left);
    }

    /// Put `new` where `old` was: as tree root when `old` had no parent,
    /// otherwise in the matching child slot of `old`'s parent. The slot is
    /// picked by index identity, never by value comparison.
    fn replace_node(&mut self, old: u32, new: u32) {
        match self.arena[old as usize].parent {
            None => {
                self.root = new;
                self.arena[new as usize].parent = None;
            }
            Some(p) => {
                if self.arena[p as usize].left() == Some(old) {
                    node::set_left(&mut self.arena, p, new);
                } else {
                    node::set_right(&mut self.arena, p, new);
                }
            }
        }
    }
}

impl<T: Ord> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Copyable read-only handle on one node, valid while the tree is borrowed.
///
/// Sentinels are visible through the handle (`is_empty`), so traversal code
/// can treat every filled node as having exactly two children.
pub struct NodeRef<'a, T> {
    tree: &'a AvlTree<T>,
    index: u32,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<'a, T> NodeRef<'a, T> {
    pub fn is_empty(&self) -> bool {
        self.tree.arena[self.index as usize].is_empty()
    }

    /// `None` exactly when this is a sentinel.
    pub fn value(&self) -> Option<&'a T> {
        self.tree.arena[self.index as usize].value()
    }

    /// Cached subtree height: 0 for a sentinel, 1 for a leaf.
    pub fn height(&self) -> i32 {
        self.tree.arena[self.index as usize].height
    }

    /// Right-subtree height minus left-subtree height; 0 for a sentinel.
    pub fn balance_factor(&self) -> i32 {
        node::balance_factor(&self.tree.arena, self.index)
    }

    /// Left child handle; `None` only when this node is itself a sentinel.
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.tree.arena[self.index as usize].left().map(|index| NodeRef {
            tree: self.tree,
            index,
        })
    }

    /// Right child handle; `None` only when this node is itself a sentinel.
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.tree.arena[self.index as usize].right().map(|index| NodeRef {
            tree: self.tree,
            index,
        })
    }
}
