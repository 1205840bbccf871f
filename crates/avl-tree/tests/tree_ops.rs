use avl_tree::{AvlTree, NodeRef};

fn in_order<T: Clone>(node: NodeRef<'_, T>, out: &mut Vec<T>) {
    if node.is_empty() {
        return;
    }
    in_order(node.left().expect("filled node has a left child"), out);
    out.push(node.value().expect("filled node has a value").clone());
    in_order(node.right().expect("filled node has a right child"), out);
}

fn contents<T: Ord + Clone>(tree: &AvlTree<T>) -> Vec<T> {
    let mut out = Vec::new();
    in_order(tree.root(), &mut out);
    out
}

#[test]
fn balanced_batch_then_two_leaf_removals() {
    let mut tree = AvlTree::new();
    for n in [50, 30, 70, 20, 40, 60, 80, 10] {
        assert!(tree.insert(n));
    }

    assert_eq!(tree.size(), 8);
    assert!(tree.root().height() <= 4);
    assert_eq!(tree.root().value(), Some(&50));
    tree.assert_valid().unwrap();

    assert!(tree.remove(&10));
    assert!(tree.remove(&20));

    assert_eq!(tree.size(), 6);
    assert!(!tree.contains(&10));
    assert!(!tree.contains(&20));
    tree.assert_valid().unwrap();
    assert_eq!(contents(&tree), vec![30, 40, 50, 60, 70, 80]);
}

#[test]
fn ascending_run_triggers_rotations() {
    let mut tree = AvlTree::new();
    for n in 1..=5 {
        assert!(tree.insert(n));
    }

    // An unbalanced BST would be a height-5 chain.
    assert_eq!(tree.root().height(), 3);
    tree.assert_valid().unwrap();
    assert_eq!(contents(&tree), vec![1, 2, 3, 4, 5]);
}

#[test]
fn descending_run_triggers_rotations() {
    let mut tree = AvlTree::new();
    for n in (1..=5).rev() {
        assert!(tree.insert(n));
    }

    assert_eq!(tree.root().height(), 3);
    tree.assert_valid().unwrap();
    assert_eq!(contents(&tree), vec![1, 2, 3, 4, 5]);
}

#[test]
fn remove_on_empty_tree_is_rejected() {
    let mut tree = AvlTree::new();
    assert!(!tree.remove(&7));
    assert_eq!(tree.size(), 0);
    assert!(tree.root().is_empty());
}

#[test]
fn duplicate_insert_is_rejected() {
    let mut tree = AvlTree::new();
    assert!(tree.insert(3));
    assert!(!tree.insert(3));
    assert_eq!(tree.size(), 1);
    assert!(tree.contains(&3));
}

#[test]
fn membership_after_partial_removal() {
    let inserted = [12, 4, 19, 1, 8, 15, 23, 6, 10, 21];
    let removed = [4, 15, 21, 6];

    let mut tree = AvlTree::new();
    for n in inserted {
        assert!(tree.insert(n));
    }
    for n in removed {
        assert!(tree.remove(&n));
    }

    for n in inserted {
        assert_eq!(tree.contains(&n), !removed.contains(&n));
    }
    assert!(!tree.contains(&999));
    assert_eq!(tree.size(), inserted.len() - removed.len());
    tree.assert_valid().unwrap();
}

#[test]
fn two_child_removal_takes_the_predecessor() {
    let mut tree = AvlTree::new();
    for n in [50, 30, 70, 20, 40, 60, 80] {
        tree.insert(n);
    }

    // 50 has two children; its in-order predecessor 40 must take its place.
    assert!(tree.remove(&50));
    assert_eq!(tree.root().value(), Some(&40));
    assert_eq!(tree.size(), 6);
    tree.assert_valid().unwrap();
    assert_eq!(contents(&tree), vec![20, 30, 40, 60, 70, 80]);
}

#[test]
fn two_child_removal_with_deep_predecessor() {
    let mut tree = AvlTree::new();
    for n in [50, 30, 70, 20, 40, 60, 80, 35, 45] {
        tree.insert(n);
    }

    // The predecessor of 50 is 45, two hops down the left subtree.
    assert!(tree.remove(&50));
    assert!(!tree.contains(&50));
    assert_eq!(tree.size(), 8);
    tree.assert_valid().unwrap();
    assert_eq!(contents(&tree), vec![20, 30, 35, 40, 45, 60, 70, 80]);
}

#[test]
fn works_with_non_copy_values() {
    let mut tree = AvlTree::new();
    for word in ["pear", "apple", "quince", "fig", "olive"] {
        assert!(tree.insert(word.to_string()));
    }
    assert!(tree.remove(&"pear".to_string()));
    tree.assert_valid().unwrap();
    assert_eq!(
        contents(&tree),
        vec!["apple", "fig", "olive", "quince"]
    );
}
