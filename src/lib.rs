//! This crate exposes an unbalanced Binary Search Tree (BST) along with the
//! pieces needed to build one from a file and report on it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! add, find, and remove stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of key (the key that was added, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Together these mean a key is stored at most once. Searching for a key takes
//! `O(height)` (where `height` is the number of `Node`s on the longest path from
//! the root `Node` to a leaf `Node`). The [`tree::Tree`] here does nothing to
//! keep its height down so adding keys in sorted order builds a tree as tall as
//! it is large. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

#[allow(missing_docs)]
pub mod error;
pub mod loader;
pub mod report;
pub mod traversal;
pub mod tree;

#[cfg(test)]
mod test;
