//! This crate exposes a plain, unbalanced Binary Search Tree (BST) of integers
//! along with a handful of the classic recursive tree exercises.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores a value and will sometimes
//! have child `Node`s. The invariants kept here are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    value less than or equal to its own value.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)` where `height` is the longest
//! path from the root `Node` to a leaf `Node`. Nothing here rebalances the
//! tree, so inserting sorted values produces a tree whose height is the
//! number of values.
//!
//! Beyond insert and lookup, [`Tree`] answers structural questions (size,
//! depth, minimum), checks path sums, lists root-to-leaf paths, walks its
//! values in postorder and can mirror itself in place.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod tree;

pub use error::TreeError;
pub use tree::Tree;
