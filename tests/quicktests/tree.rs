use ordered_bst::Tree;

use quickcheck_macros::quickcheck;

use std::collections::HashSet;

/// Builds a tree and a sorted `Vec` holding the same values.
fn tree_and_model(xs: &[i8]) -> (Tree<i8>, Vec<i8>) {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut model = xs.to_vec();
    model.sort();
    (tree, model)
}

#[quickcheck]
fn iterates_in_sorted_order(xs: Vec<i8>) -> bool {
    let (tree, model) = tree_and_model(&xs);

    tree.count() == model.len() && tree.iter().eq(model.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let (tree, _) = tree_and_model(&xs);

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let (tree, _) = tree_and_model(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let (mut tree, mut model) = tree_and_model(&xs);

    for remove in &removes {
        let before = tree.count();
        let expected = match model.binary_search(remove) {
            Ok(at) => {
                model.remove(at);
                true
            }
            Err(_) => false,
        };

        if tree.remove(remove) != expected {
            return false;
        }
        // Exactly one copy goes, however many there were.
        if tree.count() != before - expected as usize {
            return false;
        }
        if tree.contains(remove) != model.binary_search(remove).is_ok() {
            return false;
        }
    }

    tree.iter().eq(model.iter())
}

#[quickcheck]
fn remove_every_value(xs: Vec<i8>) -> bool {
    let (mut tree, _) = tree_and_model(&xs);

    xs.iter().all(|x| tree.remove(x)) && tree.is_empty() && tree.iter().next().is_none()
}

#[quickcheck]
fn copy_to_matches_iter(xs: Vec<i8>, start: u8) -> bool {
    let (tree, model) = tree_and_model(&xs);
    let start = start as usize;
    let mut buffer = vec![i8::MIN; start + tree.count()];

    tree.copy_to(&mut buffer, start).is_ok()
        && buffer[start..] == model[..]
        && buffer[..start].iter().all(|&x| x == i8::MIN)
}

#[quickcheck]
fn copy_to_short_buffer_is_untouched(xs: Vec<i8>) -> bool {
    if xs.is_empty() {
        return true;
    }
    let (tree, _) = tree_and_model(&xs);
    let mut buffer = vec![0; tree.count() - 1];

    tree.copy_to(&mut buffer, 0).is_err() && buffer.iter().all(|&x| x == 0)
}

#[quickcheck]
fn clear_resets(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let (mut tree, _) = tree_and_model(&xs);
    tree.clear();
    if tree.count() != 0 || tree.iter().next().is_some() {
        return false;
    }

    tree.extend(ys.iter().copied());
    let (fresh, _) = tree_and_model(&ys);
    tree == fresh
}

#[quickcheck]
fn owned_iter_matches_borrowed(xs: Vec<i8>) -> bool {
    let (tree, model) = tree_and_model(&xs);

    tree.into_iter().collect::<Vec<_>>() == model
}

#[quickcheck]
fn min_and_max(xs: Vec<i8>) -> bool {
    let (tree, model) = tree_and_model(&xs);

    tree.min() == model.first() && tree.max() == model.last()
}
