//! Text layouts for a tree, built purely from read-only `root()` handles.

use std::fmt::{Display, Write as _};

use avl_tree::{AvlTree, NodeRef};

/// Level-by-level layout with sibling nodes side by side.
///
/// Every cell is padded to the widest value's width; a missing child is a
/// dash-filled cell that still reserves the space its subtree would take,
/// so parents sit centered above their children. Wide for tall trees, but
/// by far the more readable of the two layouts.
pub fn horizontal<T: Ord + Display>(tree: &AvlTree<T>) -> String {
    let root = tree.root();
    if root.is_empty() {
        return String::new();
    }

    // One row of handles per level; `None` marks a hole that still takes
    // up layout space below.
    let mut levels: Vec<Vec<Option<NodeRef<'_, T>>>> = Vec::new();
    let mut row = vec![Some(root)];
    let mut cell = 0usize;

    loop {
        let mut next = Vec::with_capacity(row.len() * 2);
        let mut deeper = false;
        for slot in &row {
            let Some(node) = slot else {
                next.push(None);
                next.push(None);
                continue;
            };
            let width = node
                .value()
                .expect("rendered rows hold filled nodes")
                .to_string()
                .len();
            cell = cell.max(width);
            for child in [node.left(), node.right()] {
                match child {
                    Some(c) if !c.is_empty() => {
                        next.push(Some(c));
                        deeper = true;
                    }
                    _ => next.push(None),
                }
            }
        }
        levels.push(row);
        if !deeper {
            break;
        }
        row = next;
    }

    let depth = levels.len();
    let leaf_cells = levels[depth - 1].len();
    // The bottom row leaves one empty cell between adjacent nodes.
    let tree_width = 2 * leaf_cells - 1;
    let blank = " ".repeat(cell);
    let dash = "-".repeat(cell);
    let mut out = String::new();

    for (i, line) in levels.iter().enumerate() {
        let spacing = (1usize << (depth - i)) - 1;
        let indent = (tree_width - line.len() - (line.len() - 1) * spacing) / 2;
        out.push_str(&blank.repeat(indent));
        for (j, slot) in line.iter().enumerate() {
            match slot {
                None => out.push_str(&dash),
                Some(node) => {
                    let value = node.value().expect("rendered rows hold filled nodes");
                    let _ = write!(out, "{value:>width$}", width = cell);
                }
            }
            if j + 1 != line.len() {
                out.push_str(&blank.repeat(spacing));
            }
        }
        out.push('\n');
    }
    out
}

/// One node per line, depth as indentation, preorder. `*` marks the root,
/// `L`/`R` which side of the parent a node hangs from. Much narrower than
/// [`horizontal`].
pub fn vertical<T: Ord + Display>(tree: &AvlTree<T>) -> String {
    let mut out = String::new();
    vertical_into(&mut out, 0, tree.root(), '*');
    out
}

fn vertical_into<T: Ord + Display>(
    out: &mut String,
    depth: usize,
    node: NodeRef<'_, T>,
    marker: char,
) {
    let Some(value) = node.value() else { return };
    let _ = writeln!(out, "{}{marker} {value}", " ".repeat(depth));
    let left = node.left().expect("filled node has a left child");
    let right = node.right().expect("filled node has a right child");
    vertical_into(out, depth + 1, left, 'L');
    vertical_into(out, depth + 1, right, 'R');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(values: &[u32]) -> AvlTree<u32> {
        let mut tree = AvlTree::new();
        for &v in values {
            tree.insert(v);
        }
        tree
    }

    #[test]
    fn empty_tree_renders_as_nothing() {
        let tree = AvlTree::<u32>::new();
        assert_eq!(horizontal(&tree), "");
        assert_eq!(vertical(&tree), "");
    }

    #[test]
    fn single_node_horizontal() {
        assert_eq!(horizontal(&tree_of(&[7])), "7\n");
    }

    #[test]
    fn full_two_levels_horizontal() {
        assert_eq!(horizontal(&tree_of(&[2, 1, 3])), " 2\n1 3\n");
    }

    #[test]
    fn holes_keep_their_layout_space() {
        // 4 hangs alone under 3; the bottom row pads the absent subtrees.
        assert_eq!(
            horizontal(&tree_of(&[2, 1, 3, 4])),
            "   2\n 1   3\n- - - 4\n"
        );
    }

    #[test]
    fn cells_pad_to_the_widest_value() {
        assert_eq!(horizontal(&tree_of(&[10, 7, 200])), "    10\n  7   200\n");
    }

    #[test]
    fn vertical_is_preorder_with_depth_indentation() {
        assert_eq!(vertical(&tree_of(&[2, 1, 3])), "* 2\n L 1\n R 3\n");
    }

    #[test]
    fn vertical_skips_sentinels() {
        assert_eq!(vertical(&tree_of(&[2, 3])), "* 2\n R 3\n");
    }
}
