//! This crate exposes a linked Binary Search Tree (BST) that can be rebalanced on demand,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! add, find, and remove stored items. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one item
//! and will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    item less than its own item.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    item greater than (or, for duplicates, equal to) its own item.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! items in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). The [`Tree`] here never reshapes
//! itself while items are added, so adding items in sorted order gives a tree as
//! tall as it is long. [`Tree::rebalance`] rebuilds it with a height of `O(lg N)`
//! (where `N` is the number of nodes in the tree). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then the
//! right subtree.
//!
//! ## Features
//!
//! - `demo`: the [`demo`] module and the `demo` binary, which time word lookups in
//!   a plain list against trees built in different ways.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod collection;
#[cfg(feature = "demo")]
pub mod demo;
pub mod error;
mod node;
pub mod traversal;
pub mod tree;

pub use collection::Collection;
pub use error::TreeError;
pub use traversal::{Items, Iter};
pub use tree::Tree;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
