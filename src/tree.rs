//! A linked BST. Every item lives in its own heap allocated `Node` and each `Node` owns its two
//! children. The tree does not balance itself - a tree filled in sorted order is as tall as it
//! is long - but it can be rebuilt into a tree of minimum height on demand with
//! [`Tree::rebalance`].
//!
//! # Examples
//!
//! ```
//! use linked_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! for item in 1..=7 {
//!     tree.add(item);
//! }
//! assert_eq!(tree.find(&3), Some(&3));
//!
//! // Ascending inserts build a list.
//! assert_eq!(tree.height(), 6);
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert_eq!(tree.height(), 2);
//! assert!(tree.is_balanced());
//!
//! // Removing a node returns its item.
//! assert_eq!(tree.remove(&4), Ok(4));
//! assert!(tree.remove(&4).is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::collection::Collection;
use crate::error::TreeError;
use crate::node::{Link, Node};
use crate::traversal::{self, Items, Iter};

/// An unbalanced Binary Search Tree of items. This can be used for adding, finding, and removing
/// items as well as walking them in several orders.
///
/// Equal items are allowed. An item equal to one already stored is placed in the right subtree
/// of the first equal node it meets.
pub struct Tree<T> {
    root: Link<T>,
    size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// How many items are in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every item from the tree.
    pub fn clear(&mut self) {
        // Taking the children before each node drops keeps this from recursing through the whole
        // height of the tree.
        let mut stack: Vec<_> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.size = 0;
    }

    /// Inserts the given item into the tree. It always succeeds - an item equal to one already
    /// in the tree is stored again, to the right of it.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.add(2);
    /// tree.add(2);
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.find(&2), Some(&2));
    /// ```
    pub fn add(&mut self, item: T)
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if item < node.item {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Node::new_boxed(item));
        self.size += 1;

        trace!(size = self.size, "added item");
    }

    /// Removes the first node holding an item equal to `item` and returns that item.
    ///
    /// A node with two children is not unlinked. Instead it takes over the largest item in its
    /// left subtree and the node that held that item is unlinked in its place.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NotFound`] if no stored item is equal to `item`. The tree is left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{Tree, TreeError};
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5), Ok(5));
    /// assert_eq!(tree.remove(&5), Err(TreeError::NotFound));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<T, TreeError>
    where
        T: Ord,
    {
        let slot = self.slot_of(item);
        let Some(mut node) = slot.take() else {
            debug!(size = self.size, "item to remove not present in tree");
            return Err(TreeError::NotFound);
        };

        let removed = if node.left.is_some() && node.right.is_some() {
            let removed = node.lift_max_in_left_subtree();
            *slot = Some(node);
            removed
        } else {
            let Node {
                item: removed,
                left,
                right,
            } = *node;
            *slot = left.or(right);
            removed
        };
        self.size -= 1;

        trace!(size = self.size, "removed item");
        Ok(removed)
    }

    /// Overwrites the first stored item equal to `item` with `new_item` and returns the old item,
    /// or `None` if there is no such item.
    ///
    /// `new_item` is stored in the same place without checking it against the items around it.
    /// Keeping the tree ordered is up to the caller: `new_item` should sort the same way `item`
    /// does.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [(2, 'b'), (1, 'a')].into_iter().collect();
    ///
    /// assert_eq!(tree.replace(&(2, 'b'), (2, 'c')), Some((2, 'b')));
    /// assert_eq!(tree.find(&(2, 'c')), Some(&(2, 'c')));
    /// assert_eq!(tree.replace(&(3, 'c'), (3, 'd')), None);
    /// ```
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T>
    where
        T: Ord,
    {
        let mut probe = self.root.as_deref_mut();
        while let Some(node) = probe {
            probe = match node.item.cmp(item) {
                Ordering::Equal => return Some(std::mem::replace(&mut node.item, new_item)),
                Ordering::Greater => node.left.as_deref_mut(),
                Ordering::Less => node.right.as_deref_mut(),
            };
        }

        None
    }

    /// Rebuilds the tree so that it has the smallest possible height for its items (when they
    /// are distinct) and returns it.
    ///
    /// The items are taken out in sorted order and added back middle first: the middle item of
    /// the sorted run, then (recursively) the middle of everything before it and the middle of
    /// everything after it.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = (0..15).collect();
    /// assert_eq!(tree.height(), 14);
    ///
    /// assert_eq!(tree.rebalance().height(), 3);
    /// assert_eq!(tree.inorder().count(), 15);
    /// ```
    pub fn rebalance(&mut self) -> &mut Self
    where
        T: Ord,
    {
        let height_before = self.height();
        let mut sorted: Vec<_> = self.take_sorted().into_iter().map(Some).collect();
        add_middle_first(self, &mut sorted);

        debug!(
            size = self.size,
            height_before,
            height_after = self.height(),
            "rebalanced tree"
        );
        self
    }

    /// Potentially finds the stored item equal to `item`. If there is no such item, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add("b");
    ///
    /// assert_eq!(tree.find(&"b"), Some(&"b"));
    /// assert_eq!(tree.find(&"z"), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut probe = self.root();
        while let Some(node) = probe {
            probe = match node.item.cmp(item) {
                Ordering::Less => node.right(),
                Ordering::Greater => node.left(),
                Ordering::Equal => return Some(&node.item),
            };
        }

        None
    }

    /// Whether an item equal to `item` is stored.
    pub fn contains(&self, item: &T) -> bool
    where
        T: Ord,
    {
        self.find(item).is_some()
    }

    /// Number of edges on the longest path from the root down to a leaf. A single item has a
    /// height of `0` and the empty tree has a height of `-1`.
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut level: Vec<&Node<T>> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level.into_iter().flat_map(|node| node.children()).collect();
        }

        height
    }

    /// A rough balance check: the tree is balanced when `height < 2 * log2(len + 1) - 1`.
    ///
    /// This is looser than the AVL balance factor. A rebalanced tree always passes, while a tree
    /// filled in sorted order fails once it holds six or more items.
    pub fn is_balanced(&self) -> bool {
        (self.height() as f64) < 2.0 * ((self.size + 1) as f64).log2() - 1.0
    }

    /// All items `v` with `low <= v <= high`, in ascending order.
    ///
    /// This walks the whole tree regardless of how narrow the range is.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.range_find(&2, &5), [&3, &4, &5]);
    /// assert!(tree.range_find(&6, &7).is_empty());
    /// ```
    pub fn range_find(&self, low: &T, high: &T) -> Vec<&T>
    where
        T: Ord,
    {
        self.inorder()
            .filter(|&item| low <= item && item <= high)
            .collect()
    }

    /// The smallest stored item strictly greater than `item`, if any. `item` itself does not
    /// need to be stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [1, 3, 5, 7].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&5), Some(&7));
    /// assert_eq!(tree.successor(&4), Some(&5));
    /// assert_eq!(tree.successor(&7), None);
    /// ```
    pub fn successor(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.inorder().find(|&value| value > item)
    }

    /// The largest stored item strictly smaller than `item`, if any. `item` itself does not need
    /// to be stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [1, 3, 5, 7].into_iter().collect();
    ///
    /// assert_eq!(tree.predecessor(&5), Some(&3));
    /// assert_eq!(tree.predecessor(&1), None);
    /// ```
    pub fn predecessor(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.inorder().rev().find(|&value| value < item)
    }

    /// Lazily walks the items depth first, visiting a node before its left subtree and its left
    /// subtree before its right one.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root(), self.size)
    }

    /// Items with each node before its left subtree, followed by its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert!(tree.preorder().eq(&[5, 3, 1, 4, 8]));
    /// ```
    pub fn preorder(&self) -> Items<'_, T> {
        traversal::items(traversal::preorder(self.root()))
    }

    /// Items in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert!(tree.inorder().eq(&[1, 3, 4, 5, 8]));
    /// ```
    pub fn inorder(&self) -> Items<'_, T> {
        traversal::items(traversal::inorder(self.root()))
    }

    /// Items with each node after its left and then its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert!(tree.postorder().eq(&[1, 4, 3, 8, 5]));
    /// ```
    pub fn postorder(&self) -> Items<'_, T> {
        traversal::items(traversal::postorder(self.root()))
    }

    /// Items level by level from the root down, each level from left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert!(tree.levelorder().eq(&[5, 3, 8, 1, 4]));
    /// ```
    pub fn levelorder(&self) -> Items<'_, T> {
        traversal::items(traversal::levelorder(self.root()))
    }

    fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The link holding the first node equal to `item` found by descending from the root, or the
    /// empty link where such a node would be.
    fn slot_of(&mut self, item: &T) -> &mut Link<T>
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        while slot.as_ref().is_some_and(|node| node.item != *item) {
            let node = slot.as_mut().expect("Checked by the loop condition => node");
            slot = if node.item > *item {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        slot
    }

    /// Empties the tree, handing back its items in ascending order.
    fn take_sorted(&mut self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.size);
        let mut stack = Vec::new();
        let mut current = self.root.take();

        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                stack.push(node);
            }
            let Some(node) = stack.pop() else {
                break;
            };
            let Node { item, right, .. } = *node;
            items.push(item);
            current = right;
        }
        self.size = 0;

        items
    }
}

/// Adds the middle item of `sorted` to `tree` and then recurses into the items before and after
/// it. Each slot is taken exactly once.
fn add_middle_first<T>(tree: &mut Tree<T>, sorted: &mut [Option<T>])
where
    T: Ord,
{
    if sorted.is_empty() {
        return;
    }

    let middle = sorted.len() / 2;
    if let Some(item) = sorted[middle].take() {
        tree.add(item);
    }
    let (before, rest) = sorted.split_at_mut(middle);
    add_middle_first(tree, before);
    add_middle_first(tree, &mut rest[1..]);
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        // A postorder walk finishes both subtrees of a node before the node itself, so they are
        // the top of `built` when we get to it (right on top of left).
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        for node in traversal::postorder(self.root()) {
            let right = if node.right.is_some() { built.pop() } else { None };
            let left = if node.left.is_some() { built.pop() } else { None };
            built.push(Box::new(Node {
                item: node.item.clone(),
                left,
                right,
            }));
        }

        Self {
            root: built.pop(),
            size: self.size,
        }
    }
}

/// Two trees are equal when they hold equal items in the same default iteration order, which
/// for trees of distinct items means they also have the same shape.
impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("size", &self.size)
            .field("items", &self.inorder().collect::<Vec<_>>())
            .finish()
    }
}

/// Draws the tree rotated a quarter turn counter-clockwise: the right subtree is above its
/// parent, the left subtree below, and every item is indented by `"| "` once per level.
///
/// ```
/// use linked_bst::Tree;
///
/// let tree: Tree<_> = [5, 3, 8].into_iter().collect();
///
/// assert_eq!(tree.to_string(), "| 8\n5\n| 3\n");
/// ```
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Reverse inorder (right, node, left) while tracking the depth of each node.
        let mut stack = Vec::new();
        let mut current = self.root().map(|root| (root, 0));

        loop {
            while let Some((node, level)) = current {
                stack.push((node, level));
                current = node.right().map(|right| (right, level + 1));
            }
            let Some((node, level)) = stack.pop() else {
                break;
            };
            writeln!(f, "{}{}", "| ".repeat(level), node.item)?;
            current = node.left().map(|left| (left, level + 1));
        }

        Ok(())
    }
}

impl<T> Collection<T> for Tree<T>
where
    T: Ord,
{
    fn len(&self) -> usize {
        Tree::len(self)
    }

    fn add(&mut self, item: T) {
        Tree::add(self, item);
    }

    fn clear(&mut self) {
        Tree::clear(self);
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.add_all(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod quicktests {
    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and to a sorted `Vec` holding the same items. This
    /// way we can ensure that after a random smattering of adds, removes and replaces we have the same items
    /// in both.
    fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, model: &mut Vec<T>)
    where
        T: Ord + Clone + std::fmt::Debug,
    {
        for op in ops {
            match op {
                Op::Add(item) => {
                    bst.add(item.clone());
                    let pos = model.partition_point(|x| x <= item);
                    model.insert(pos, item.clone());
                }
                Op::Remove(item) => match model.binary_search(item) {
                    Ok(pos) => assert_eq!(bst.remove(item), Ok(model.remove(pos))),
                    Err(_) => assert_eq!(bst.remove(item), Err(TreeError::NotFound)),
                },
                Op::Replace(item) => match model.binary_search(item) {
                    Ok(_) => assert_eq!(bst.replace(item, item.clone()), Some(item.clone())),
                    Err(_) => assert_eq!(bst.replace(item, item.clone()), None),
                },
                Op::Rebalance => {
                    bst.rebalance();
                }
                Op::Iter => assert!(bst.inorder().eq(model.iter())),
            }
            assert_eq!(bst.len(), model.len());
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut model = Vec::new();

            do_ops(&ops, &mut tree, &mut model);
            tree.inorder().eq(model.iter()) && model.iter().all(|item| tree.find(item) == Some(item))
        }
    }

    quickcheck::quickcheck! {
        fn contains(xs: Vec<i8>) -> bool {
            let tree: Tree<_> = xs.iter().copied().collect();

            xs.iter().all(|x| tree.contains(x))
        }
    }

    quickcheck::quickcheck! {
        fn rebalanced_height_is_minimal(xs: Vec<i16>) -> bool {
            let mut xs = xs;
            xs.sort_unstable();
            xs.dedup();

            let mut tree: Tree<_> = xs.iter().copied().collect();
            tree.rebalance();

            let expected = ((xs.len() + 1) as f64).log2().ceil() as isize - 1;
            tree.height() == expected && tree.inorder().eq(xs.iter())
        }
    }
}
