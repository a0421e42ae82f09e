//! Walks over the nodes of a tree. Every walk uses an explicit stack (or queue) instead of
//! recursion so that degenerate, list-shaped trees can be walked no matter how tall they are.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::Node;

/// A snapshot of a tree's items in some traversal order. It is computed fresh on every call and
/// can be walked from either end.
pub type Items<'a, T> = std::vec::IntoIter<&'a T>;

/// Lazy depth-first iterator over the items of a [`Tree`][crate::Tree].
///
/// Each step pops a node off a stack, yields its item and then pushes the right child followed
/// by the left child so the left subtree is visited first. The resulting order is the same as
/// [`Tree::preorder`][crate::Tree::preorder].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }

}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Root, left subtree, right subtree.
pub(crate) fn preorder<T>(root: Option<&Node<T>>) -> Vec<&Node<T>> {
    let mut nodes = Vec::new();
    let mut stack: Vec<_> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        nodes.push(node);
        stack.extend(node.right());
        stack.extend(node.left());
    }

    nodes
}

/// Left subtree, root, right subtree. For a valid tree this is ascending order.
pub(crate) fn inorder<T>(root: Option<&Node<T>>) -> Vec<&Node<T>> {
    let mut nodes = Vec::new();
    let mut stack = Vec::new();
    let mut current = root;

    loop {
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }
        match stack.pop() {
            Some(node) => {
                nodes.push(node);
                current = node.right();
            }
            None => break,
        }
    }

    nodes
}

/// Left subtree, right subtree, root.
pub(crate) fn postorder<T>(root: Option<&Node<T>>) -> Vec<&Node<T>> {
    // Walk root, right, left and flip it around.
    let mut nodes = Vec::new();
    let mut stack: Vec<_> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        nodes.push(node);
        stack.extend(node.children());
    }
    nodes.reverse();

    nodes
}

/// Breadth first: the root, then every level from left to right.
pub(crate) fn levelorder<T>(root: Option<&Node<T>>) -> Vec<&Node<T>> {
    let mut nodes = Vec::new();
    let mut queue: VecDeque<_> = root.into_iter().collect();
    while let Some(node) = queue.pop_front() {
        nodes.push(node);
        queue.extend(node.children());
    }

    nodes
}

/// Turns a node walk into the items it visited.
pub(crate) fn items<T>(nodes: Vec<&Node<T>>) -> Items<'_, T> {
    nodes
        .into_iter()
        .map(|node| &node.item)
        .collect::<Vec<_>>()
        .into_iter()
}
