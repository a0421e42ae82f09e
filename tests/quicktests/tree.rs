use linked_bst::{Tree, TreeError};

use std::collections::HashSet;

use quickcheck::quickcheck;

fn build(xs: &[i8]) -> Tree<i8> {
    xs.iter().copied().collect()
}

quickcheck! {
    fn inorder_is_sorted(xs: Vec<i8>) -> bool {
        let tree = build(&xs);
        let mut sorted = xs;
        sorted.sort();

        tree.inorder().eq(sorted.iter()) && tree.len() == sorted.len()
    }
}

quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree = build(&xs);

        xs.iter().all(|x| tree.find(x) == Some(x) && tree.contains(x))
    }
}

quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = build(&xs);
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none())
    }
}

quickcheck! {
    fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
        let mut tree = build(&xs);
        let mut still_present = xs;

        for remove in &removes {
            let before = tree.len();
            match still_present.iter().position(|x| x == remove) {
                Some(pos) => {
                    still_present.swap_remove(pos);
                    if tree.remove(remove) != Ok(*remove) || tree.len() != before - 1 {
                        return false;
                    }
                }
                None => {
                    if tree.remove(remove) != Err(TreeError::NotFound) || tree.len() != before {
                        return false;
                    }
                }
            }
        }

        let mut expected = still_present.clone();
        expected.sort();
        tree.inorder().eq(expected.iter())
            && still_present.iter().all(|x| tree.contains(x))
            && removes
                .iter()
                .filter(|x| !still_present.contains(x))
                .all(|x| tree.find(x).is_none())
    }
}

quickcheck! {
    fn rebalance_keeps_items(xs: Vec<i8>) -> bool {
        let mut tree = build(&xs);
        let before: Vec<_> = tree.inorder().copied().collect();
        tree.rebalance();

        tree.inorder().copied().eq(before) && tree.len() == xs.len()
    }
}

quickcheck! {
    fn rebalanced_distinct_items_are_balanced(xs: Vec<i8>) -> bool {
        let distinct: HashSet<_> = xs.into_iter().collect();
        let mut tree: Tree<_> = distinct.iter().copied().collect();
        tree.rebalance();

        tree.is_balanced() == !distinct.is_empty()
    }
}

quickcheck! {
    fn range_find_matches_filter(xs: Vec<i8>, low: i8, high: i8) -> bool {
        let tree = build(&xs);
        let expected: Vec<_> = tree.inorder().filter(|&&x| low <= x && x <= high).collect();

        tree.range_find(&low, &high) == expected
    }
}

quickcheck! {
    fn successor_and_predecessor(xs: Vec<i8>, item: i8) -> bool {
        let tree = build(&xs);
        let successor = xs.iter().filter(|&&x| x > item).min();
        let predecessor = xs.iter().filter(|&&x| x < item).max();

        tree.successor(&item) == successor && tree.predecessor(&item) == predecessor
    }
}

quickcheck! {
    fn traversals_visit_everything(xs: Vec<i8>) -> bool {
        let tree = build(&xs);
        let mut expected = xs;
        expected.sort();

        [
            tree.preorder().copied().collect::<Vec<_>>(),
            tree.postorder().copied().collect(),
            tree.levelorder().copied().collect(),
            tree.iter().copied().collect(),
        ]
        .into_iter()
        .all(|mut items| {
            items.sort();
            items == expected
        })
    }
}

quickcheck! {
    fn clone_keeps_shape(xs: Vec<i8>) -> bool {
        let tree = build(&xs);
        let copy = tree.clone();

        copy == tree
            && copy.preorder().eq(tree.preorder())
            && copy.levelorder().eq(tree.levelorder())
            && copy.height() == tree.height()
    }
}
