use ordered_tree::tree::Tree;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a hashset.
/// This way we can ensure that after a random smattering of adds
/// and removes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut HashSet<K>)
where
    K: std::hash::Hash + Eq + Clone + Ord,
{
    for op in ops {
        match op {
            Op::Add(k) => {
                bst.add(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                bst.remove(k);
                set.remove(k);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = HashSet::new();

    do_ops(&ops, &mut tree, &mut set);
    (i8::MIN..=i8::MAX).all(|key| tree.has(&key) == set.contains(&key))
        && tree.size() == set.len()
        && tree.is_empty() == set.is_empty()
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let keys = tree.in_order();

    keys.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn in_order_traversal_is_sorted_unique_input(xs: Vec<u8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();
    let rendered: String = expected.iter().map(|x| format!("{} ", x)).collect();

    tree.in_order_traversal() == rendered
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.has(x))
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for remove in &removes {
        tree.remove(remove);
    }

    let mut still_present = xs;
    for remove in &removes {
        // We may have added the same value multiple times - drop each one.
        while let Some(pos) = still_present.iter().position(|x| x == remove) {
            still_present.swap_remove(pos);
        }
    }

    removes.iter().all(|x| !tree.has(x)) && still_present.iter().all(|x| tree.has(x))
}

#[quickcheck]
fn copy_is_independent(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let original: Tree<_> = xs.into_iter().collect();
    let before = (
        original.size(),
        original.pre_order_traversal(),
        original.level_order_traversal(),
    );

    let mut copy = original.clone();
    do_ops(&ops, &mut copy, &mut HashSet::new());
    copy.clear();

    before
        == (
            original.size(),
            original.pre_order_traversal(),
            original.level_order_traversal(),
        )
}

#[quickcheck]
fn clone_from_matches_source(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let source: Tree<_> = xs.into_iter().collect();
    let mut target: Tree<_> = ys.into_iter().collect();

    target.clone_from(&source);

    target.pre_order_traversal() == source.pre_order_traversal()
}

#[quickcheck]
fn shape_queries_agree(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let widths: Vec<_> = (0..tree.height()).map(|l| tree.level_width(l)).collect();

    widths.iter().sum::<usize>() == tree.size()
        && widths.iter().copied().max().unwrap_or(0) == tree.width()
        && tree.leaf_count() <= tree.size()
        && (tree.size() == 0) == (tree.leaf_count() == 0)
}

#[quickcheck]
fn level_order_starts_at_root(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    tree.level_order().first() == tree.pre_order().first()
}
