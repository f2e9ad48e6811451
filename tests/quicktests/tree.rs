use int_bst::Tree;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a plain list of inserted values.
/// Lookups are only compared while the tree is unmirrored since a mirrored
/// tree no longer keeps its ordering.
fn do_ops(ops: &[Op], tree: &mut Tree, model: &mut Vec<i32>) -> bool {
    let mut mirrored = false;
    for op in ops {
        match *op {
            Op::Insert(x) => {
                if mirrored {
                    tree.mirror();
                    mirrored = false;
                }
                tree.insert(x);
                model.push(x);
            }
            Op::Lookup(x) => {
                if !mirrored && tree.lookup(x) != model.contains(&x) {
                    return false;
                }
            }
            Op::Mirror => {
                tree.mirror();
                mirrored = !mirrored;
            }
        }
    }

    if mirrored {
        tree.mirror();
    }
    true
}

fn sorted(mut xs: Vec<i32>) -> Vec<i32> {
    xs.sort_unstable();
    xs
}

#[quickcheck]
fn fuzz_multiple_operations(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model)
        && tree.size() == model.len()
        && model.iter().all(|x| tree.lookup(*x))
        && sorted(tree.postorder().collect()) == sorted(model)
}

#[quickcheck]
fn contains(xs: Vec<i32>) -> bool {
    let tree: Tree = xs.iter().copied().collect();

    xs.iter().all(|x| tree.lookup(*x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree = xs.iter().map(|&x| i32::from(x)).collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.lookup(i32::from(*x)))
}

#[quickcheck]
fn size_counts_duplicates(xs: Vec<i8>) -> bool {
    let tree: Tree = xs.iter().map(|&x| i32::from(x)).collect();

    tree.size() == xs.len() && tree.is_empty() == xs.is_empty()
}

#[quickcheck]
fn min_value_is_smallest_inserted(xs: Vec<i32>) -> bool {
    let tree = Tree::from_values(&xs);

    tree.min_value().ok() == xs.iter().min().copied()
}

#[quickcheck]
fn double_mirror_is_identity(xs: Vec<i32>) -> bool {
    let mut tree = Tree::from_values(&xs);
    let original = tree.clone();

    tree.mirror();
    tree.mirror();
    tree == original
}

#[quickcheck]
fn mirror_reverses_paths(xs: Vec<i32>) -> bool {
    let mut tree = Tree::from_values(&xs);
    let mut paths = tree.paths();
    paths.reverse();

    tree.mirror();
    tree.paths() == paths
}

#[quickcheck]
fn postorder_visits_root_last(xs: Vec<i32>) -> bool {
    let tree = Tree::from_values(&xs);
    let postorder: Vec<i32> = tree.postorder().collect();

    postorder.len() == xs.len() && postorder.last() == xs.first()
}

#[quickcheck]
fn paths_agree_with_depth_and_sums(xs: Vec<i16>) -> bool {
    let tree: Tree = xs.iter().map(|&x| i32::from(x)).collect();
    let paths = tree.paths();

    let longest = paths.iter().map(Vec::len).max().unwrap_or(0);
    longest == tree.max_depth()
        && paths.iter().all(|path| path.first() == xs.first().map(|&x| i32::from(x)).as_ref())
        && paths.iter().all(|path| {
            let sum: i64 = path.iter().map(|&x| i64::from(x)).sum();
            tree.has_path_sum(sum)
        })
}
