//! An unbalanced BST of `i32`s with exclusively owned nodes. Every node owns its children
//! through a `Box` so there is no sharing and no back reference to a parent.
//!
//! # Examples
//!
//! ```
//! use int_bst::Tree;
//!
//! let mut tree = Tree::from_values(&[4, 2, 5, 1, 3]);
//!
//! assert_eq!(tree.min_value(), Ok(1));
//! assert_eq!(tree.size(), 5);
//! assert!(tree.lookup(5));
//! assert!(!tree.lookup(9));
//!
//! // Inserting never replaces, equal values pile up on the left.
//! tree.insert(4);
//! assert_eq!(tree.size(), 6);
//!
//! // Mirroring twice gets us back where we started.
//! let original = tree.clone();
//! tree.mirror();
//! tree.mirror();
//! assert_eq!(tree, original);
//! ```

use std::iter::FromIterator;
use std::mem;

use tracing::{debug, trace};

use crate::error::TreeError;

/// An owned, possibly absent, subtree.
type Link = Option<Box<Node>>;

/// A Binary Search Tree of `i32`s. Values less than or equal to a node go into its left
/// subtree and greater values go into its right subtree. The tree is never rebalanced so its
/// shape depends entirely on insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tree {
    root: Link,
}

impl Drop for Tree {
    // The default drop recurses once per level, which a list-shaped tree can turn into a stack
    // overflow.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a tree by inserting each of `values` in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::Tree;
    ///
    /// let tree = Tree::from_values(&[2, 1, 3]);
    /// assert_eq!(tree.postorder().collect::<Vec<_>>(), vec![1, 3, 2]);
    /// ```
    pub fn from_values(values: &[i32]) -> Self {
        values.iter().copied().collect()
    }

    /// Whether the tree has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Adds a new leaf holding `value`. Duplicates are kept: a value equal to a node's value
    /// descends to its left.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert!(tree.lookup(1));
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn insert(&mut self, value: i32) {
        trace!(value, "inserting value");
        self.root = Some(insert(self.root.take(), value));
    }

    /// Returns true if some node in the tree holds `target`.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::Tree;
    ///
    /// let tree = Tree::from_values(&[1, 2]);
    ///
    /// assert!(tree.lookup(2));
    /// assert!(!tree.lookup(42));
    /// ```
    pub fn lookup(&self, target: i32) -> bool {
        lookup(&self.root, target)
    }

    /// The number of nodes in the tree.
    pub fn size(&self) -> usize {
        size(&self.root)
    }

    /// The number of nodes on the longest root-to-leaf path. An empty tree has a depth of 0
    /// and a lone root has a depth of 1.
    pub fn max_depth(&self) -> usize {
        max_depth(&self.root)
    }

    /// Returns the smallest value in the tree, found by following left children from the root.
    ///
    /// # Errors
    ///
    /// [`TreeError::Empty`] if the tree has no nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::{Tree, TreeError};
    ///
    /// assert_eq!(Tree::new().min_value(), Err(TreeError::Empty));
    /// assert_eq!(Tree::from_values(&[3, 8, -2]).min_value(), Ok(-2));
    /// ```
    pub fn min_value(&self) -> Result<i32, TreeError> {
        let mut node = match &self.root {
            Some(root) => root,
            None => {
                debug!("min_value called on an empty tree");
                return Err(TreeError::Empty);
            }
        };
        while let Some(left) = &node.left {
            node = left;
        }
        Ok(node.value)
    }

    /// Returns true if the values on a path going down from the root add up to `target`.
    ///
    /// The running total is checked at every node, not just at leaves, so a path that reaches
    /// `target` part way down also counts.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::Tree;
    ///
    /// let tree = Tree::from_values(&[2, 1, 3]);
    ///
    /// assert!(tree.has_path_sum(3));
    /// assert!(tree.has_path_sum(5));
    /// // The root alone reaches 2.
    /// assert!(tree.has_path_sum(2));
    /// assert!(!tree.has_path_sum(4));
    /// ```
    pub fn has_path_sum(&self, target: i64) -> bool {
        has_path_sum(&self.root, i128::from(target))
    }

    /// Every root-to-leaf path, left paths before right paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::Tree;
    ///
    /// let tree = Tree::from_values(&[2, 1, 3]);
    /// assert_eq!(tree.paths(), vec![vec![2, 1], vec![2, 3]]);
    /// ```
    pub fn paths(&self) -> Vec<Vec<i32>> {
        let mut paths = Vec::new();
        collect_paths(&self.root, &mut Vec::new(), &mut paths);
        paths
    }

    /// Iterates over the values in postorder: left subtree, right subtree, then the node.
    pub fn postorder(&self) -> Postorder<'_> {
        Postorder {
            stack: self.root.as_deref().map(|root| (root, false)).into_iter().collect(),
        }
    }

    /// Swaps the children of every node, reflecting the tree left to right.
    ///
    /// **Note** The result no longer satisfies the BST ordering until it is mirrored back.
    pub fn mirror(&mut self) {
        trace!("mirroring tree");
        mirror(&mut self.root);
    }
}

impl FromIterator<i32> for Tree {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<i32> for Tree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl From<&[i32]> for Tree {
    fn from(values: &[i32]) -> Self {
        Self::from_values(values)
    }
}

impl From<Vec<i32>> for Tree {
    fn from(values: Vec<i32>) -> Self {
        values.into_iter().collect()
    }
}

/// A single value and its two optional subtrees. A `Node` with neither child is a leaf.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Node {
    value: i32,
    left: Link,
    right: Link,
}

impl Node {
    fn new(value: i32) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Returns the subtree `link` with `value` added, creating the leaf when `link` is empty.
fn insert(link: Link, value: i32) -> Box<Node> {
    match link {
        None => Box::new(Node::new(value)),
        Some(mut node) => {
            if value <= node.value {
                node.left = Some(insert(node.left.take(), value));
            } else {
                node.right = Some(insert(node.right.take(), value));
            }
            node
        }
    }
}

fn lookup(link: &Link, target: i32) -> bool {
    match link {
        None => false,
        Some(node) if target == node.value => true,
        Some(node) if target < node.value => lookup(&node.left, target),
        Some(node) => lookup(&node.right, target),
    }
}

fn size(link: &Link) -> usize {
    link.as_ref()
        .map_or(0, |node| 1 + size(&node.left) + size(&node.right))
}

fn max_depth(link: &Link) -> usize {
    link.as_ref().map_or(0, |node| {
        1 + max_depth(&node.left).max(max_depth(&node.right))
    })
}

fn has_path_sum(link: &Link, remaining: i128) -> bool {
    match link {
        None => false,
        Some(node) => {
            let remaining = remaining - i128::from(node.value);
            remaining == 0
                || has_path_sum(&node.left, remaining)
                || has_path_sum(&node.right, remaining)
        }
    }
}

/// Pushes every root-to-leaf path below `link` onto `paths`. `path` holds the values from the
/// root down to, but not including, `link`, and is restored before returning.
fn collect_paths(link: &Link, path: &mut Vec<i32>, paths: &mut Vec<Vec<i32>>) {
    let node = match link {
        Some(node) => node,
        None => return,
    };

    path.push(node.value);
    if node.is_leaf() {
        paths.push(path.clone());
    } else {
        collect_paths(&node.left, path, paths);
        collect_paths(&node.right, path, paths);
    }
    path.pop();
}

fn mirror(link: &mut Link) {
    if let Some(node) = link {
        mirror(&mut node.left);
        mirror(&mut node.right);
        mem::swap(&mut node.left, &mut node.right);
    }
}

/// A postorder iterator over a [`Tree`]'s values, created by [`Tree::postorder`].
#[derive(Debug)]
pub struct Postorder<'a> {
    /// Nodes still to visit, flagged once their children have been pushed above them.
    stack: Vec<(&'a Node, bool)>,
}

impl<'a> Iterator for Postorder<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node.value);
            }

            self.stack.push((node, true));
            if let Some(right) = node.right.as_deref() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left.as_deref() {
                self.stack.push((left, false));
            }
        }
    }
}
