//! Node storage for the arena-backed tree.
//!
//! Links between nodes are `u32` indices into the tree's `Vec<Node<T>>`;
//! the parent link is `Option<u32>` so the root is simply the node without
//! one. A node is either an empty sentinel or filled with a value and two
//! child indices, so recursive code never meets a missing child: a filled
//! node's children always exist, possibly as sentinels.

/// Payload of a node: either the empty sentinel or a value with two children.
#[derive(Debug)]
pub(crate) enum Slot<T> {
    Empty,
    Filled { value: T, left: u32, right: u32 },
}

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) slot: Slot<T>,
    pub(crate) parent: Option<u32>,
    /// 0 for a sentinel, 1 for a leaf, else `1 + max(left, right)`.
    pub(crate) height: i32,
}

impl<T> Node<T> {
    pub(crate) fn empty(parent: Option<u32>) -> Self {
        Node {
            slot: Slot::Empty,
            parent,
            height: 0,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        matches!(self.slot, Slot::Empty)
    }

    pub(crate) fn value(&self) -> Option<&T> {
        match &self.slot {
            Slot::Empty => None,
            Slot::Filled { value, .. } => Some(value),
        }
    }

    pub(crate) fn left(&self) -> Option<u32> {
        match self.slot {
            Slot::Empty => None,
            Slot::Filled { left, .. } => Some(left),
        }
    }

    pub(crate) fn right(&self) -> Option<u32> {
        match self.slot {
            Slot::Empty => None,
            Slot::Filled { right, .. } => Some(right),
        }
    }
}

/// Take a slot off the free list, or grow the arena by one.
pub(crate) fn alloc<T>(arena: &mut Vec<Node<T>>, free: &mut Vec<u32>, parent: Option<u32>) -> u32 {
    match free.pop() {
        Some(i) => {
            arena[i as usize].parent = parent;
            i
        }
        None => {
            arena.push(Node::empty(parent));
            (arena.len() - 1) as u32
        }
    }
}

/// Reset a slot to the sentinel state and hand it back for reuse.
///
/// The caller is responsible for having unlinked `i` from the tree first.
pub(crate) fn release<T>(arena: &mut [Node<T>], free: &mut Vec<u32>, i: u32) {
    let node = &mut arena[i as usize];
    node.slot = Slot::Empty;
    node.parent = None;
    node.height = 0;
    free.push(i);
}

/// Materialize a value into an empty node, giving it two fresh sentinel
/// children. The target must currently be empty.
pub(crate) fn set_value<T>(arena: &mut Vec<Node<T>>, free: &mut Vec<u32>, i: u32, value: T) {
    debug_assert!(arena[i as usize].is_empty(), "set_value target must be empty");
    let left = alloc(arena, free, Some(i));
    let right = alloc(arena, free, Some(i));
    arena[i as usize].slot = Slot::Filled { value, left, right };
    update_height(arena, i);
}

/// Install `c` as the left child of `p` and point `c`'s parent link back.
pub(crate) fn set_left<T>(arena: &mut [Node<T>], p: u32, c: u32) {
    let Slot::Filled { left, .. } = &mut arena[p as usize].slot else {
        unreachable!("empty node cannot take a child");
    };
    *left = c;
    arena[c as usize].parent = Some(p);
}

/// Install `c` as the right child of `p` and point `c`'s parent link back.
pub(crate) fn set_right<T>(arena: &mut [Node<T>], p: u32, c: u32) {
    let Slot::Filled { right, .. } = &mut arena[p as usize].slot else {
        unreachable!("empty node cannot take a child");
    };
    *right = c;
    arena[c as usize].parent = Some(p);
}

/// Recompute the cached height from the children. No-op on a sentinel.
pub(crate) fn update_height<T>(arena: &mut [Node<T>], i: u32) {
    let (l, r) = match &arena[i as usize].slot {
        Slot::Empty => return,
        Slot::Filled { left, right, .. } => (*left, *right),
    };
    arena[i as usize].height = 1 + arena[l as usize].height.max(arena[r as usize].height);
}

/// Right-subtree height minus left-subtree height; 0 for a sentinel.
pub(crate) fn balance_factor<T>(arena: &[Node<T>], i: u32) -> i32 {
    match &arena[i as usize].slot {
        Slot::Empty => 0,
        Slot::Filled { left, right, .. } => {
            arena[*right as usize].height - arena[*left as usize].height
        }
    }
}

/// Revert a leaf to the sentinel state: drop the value, free both sentinel
/// children, reset the height. The tree checks the leaf precondition before
/// calling; clearing an inner node here would orphan its subtree.
pub(crate) fn clear<T>(arena: &mut [Node<T>], free: &mut Vec<u32>, i: u32) {
    let slot = std::mem::replace(&mut arena[i as usize].slot, Slot::Empty);
    let Slot::Filled { left, right, .. } = slot else {
        return;
    };
    debug_assert!(
        arena[left as usize].is_empty() && arena[right as usize].is_empty(),
        "clear target must be a leaf"
    );
    release(arena, free, left);
    release(arena, free, right);
    arena[i as usize].height = 0;
}
